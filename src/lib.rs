//! Raid composition solver.
//!
//! Assigns one job to each slot of a raid from per-slot allowed-job sets
//! and keeps the assignments that satisfy role quotas and the duplicate
//! policy. The viable set supports indexed and uniform-random lookup.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Job`, `Role`, `RaidConfig`, `Candidate`
//! - **`generator`**: Deterministic Cartesian-product enumeration
//! - **`validation`**: Viability predicate and configuration diagnostics
//! - **`solver`**: `ResultSet` and the `RaidSolver` query interface
//! - **`error`**: `SolverError`
//!
//! # Architecture
//!
//! The crate knows nothing about presentation. A front end rebuilds a
//! `RaidConfig` on every edit, calls `RaidSolver::recompute`, and reads
//! counts and candidates back, styling each job via its `Role`.

pub mod error;
pub mod generator;
pub mod models;
pub mod solver;
pub mod validation;

pub use error::{SolverError, SolverResult};
