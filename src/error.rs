//! Error types for the raid solver.

/// Result alias used across the crate.
pub type SolverResult<T> = Result<T, SolverError>;

/// Errors reported by configuration parsing, recomputation and queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolverError {
    /// The configuration has an inconsistent shape (e.g. slot count
    /// disagrees with the number of allowed-job sets).
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// A 1-based index outside `[1, size]`.
    #[error("raid index {index} out of range (1..={size})")]
    OutOfRange { index: usize, size: usize },

    /// A query against an empty result set.
    #[error("no viable raid composition available")]
    EmptyResultSet,

    /// The candidate space exceeds the configured cap. `possible` is `None`
    /// when the product overflows `u64`.
    #[error("candidate space too large: {possible:?} combinations, limit {limit}")]
    TooManyCombinations { possible: Option<u64>, limit: u64 },

    /// A job abbreviation that is not in the catalog.
    #[error("unknown job: {name}")]
    UnknownJob { name: String },
}
