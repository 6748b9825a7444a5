//! Result set and query interface.
//!
//! [`RaidSolver`] owns the result set of the latest recomputation and
//! answers indexed ("raid N of M") and uniform-random queries over it.
//!
//! # Algorithm
//!
//! Full rebuild on every configuration change: enumerate the Cartesian
//! product, keep candidates passing the viability rules in generation
//! order. O(possible) time, O(viable) space.

mod raid_solver;
mod result_set;

pub use raid_solver::{RaidSolver, RecomputeSummary};
pub use result_set::ResultSet;
