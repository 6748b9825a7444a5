//! Raid domain models.
//!
//! Provides the job catalog with its role partition, the constraint
//! configuration consumed by the solver, and the candidate type it
//! produces.
//!
//! # Domain Mappings
//!
//! | u-raid | Meaning |
//! |--------|---------|
//! | Job | Selectable class/specialization |
//! | Role | Tank, Healer or Damage partition |
//! | Slot | One player position with its allowed jobs |
//! | Candidate | One job per slot |

mod candidate;
mod config;
mod job;

pub use candidate::{Candidate, RoleCounts};
pub use config::{defaults, RaidConfig, SolverConfig};
pub use job::{all_jobs, jobs_with_role, role_of, DamageKind, Job, JobSet, Role};
