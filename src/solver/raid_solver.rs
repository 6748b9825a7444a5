//! Query interface over the latest result set.

use rand::Rng;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info, warn};

use crate::error::{SolverError, SolverResult};
use crate::generator::CandidateGenerator;
use crate::models::{Candidate, RaidConfig, SolverConfig};
use crate::validation::QuotaRules;

use super::ResultSet;

/// Counts reported by a recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecomputeSummary {
    /// Size of the Cartesian product of the allowed-job sets.
    pub possible_count: u64,
    /// Candidates that passed every viability rule.
    pub viable_count: usize,
}

/// Raid composition solver.
///
/// Starts empty; every successful [`recompute`](Self::recompute) replaces
/// the result set wholesale. The new set is built outside the lock and
/// swapped in, so concurrent readers see either the old or the new set,
/// never a partial one. Queries hand out clones.
///
/// # Example
/// ```
/// use u_raid::models::{Job, JobSet, RaidConfig};
/// use u_raid::solver::RaidSolver;
///
/// let slot: JobSet = [Job::Paladin, Job::WhiteMage].into_iter().collect();
/// let config = RaidConfig::new(vec![slot.clone(), slot]).with_tanks(1).with_healers(1);
///
/// let solver = RaidSolver::new();
/// let summary = solver.recompute(&config).unwrap();
/// assert_eq!(summary.possible_count, 4);
/// assert_eq!(summary.viable_count, 2);
/// assert_eq!(solver.at(1).unwrap().jobs(), &[Job::Paladin, Job::WhiteMage]);
/// ```
#[derive(Debug, Default)]
pub struct RaidSolver {
    config: SolverConfig,
    current: RwLock<Option<Arc<ResultSet>>>,
}

impl RaidSolver {
    /// Creates an empty solver with the default enumeration cap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty solver with the given limits.
    pub fn with_config(config: SolverConfig) -> Self {
        Self {
            config,
            current: RwLock::new(None),
        }
    }

    /// Solver limits.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Re-enumerates and filters every candidate of `config`.
    ///
    /// Quota problems never fail here; they yield zero viable candidates.
    ///
    /// # Errors
    /// - `InvalidConfiguration` if `slot_count` differs from the number of
    ///   allowed-job sets
    /// - `TooManyCombinations` if the candidate space exceeds the cap or
    ///   overflows `u64`
    ///
    /// On error the previous result set stays in place.
    pub fn recompute(&self, config: &RaidConfig) -> SolverResult<RecomputeSummary> {
        if config.slot_count != config.allowed_jobs.len() {
            warn!(
                slot_count = config.slot_count,
                sets = config.allowed_jobs.len(),
                "refusing recompute: slot count mismatch"
            );
            return Err(SolverError::InvalidConfiguration {
                reason: format!(
                    "slot_count is {} but {} allowed-job sets were given",
                    config.slot_count,
                    config.allowed_jobs.len()
                ),
            });
        }

        let generator = CandidateGenerator::new(&config.allowed_jobs);
        let possible = generator.possible_count();
        let limit = self.config.max_combinations.unwrap_or(u64::MAX);
        if possible.map_or(true, |p| p > limit) {
            warn!(?possible, limit, "refusing recompute: candidate space too large");
            return Err(SolverError::TooManyCombinations { possible, limit });
        }

        let rules = QuotaRules::from_config(config);
        debug!(
            slots = config.slot_count,
            tanks = rules.required_tanks,
            healers = rules.required_healers,
            duplicates = rules.allow_duplicate_jobs,
            ?possible,
            "recomputing raid compositions"
        );

        let set = ResultSet::build(&generator, &rules);
        let summary = RecomputeSummary {
            possible_count: set.possible_count(),
            viable_count: set.len(),
        };

        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(set));

        info!(
            possible = summary.possible_count,
            viable = summary.viable_count,
            "raid compositions recomputed"
        );
        Ok(summary)
    }

    /// The current result set, if a recompute has happened.
    pub fn snapshot(&self) -> Option<Arc<ResultSet>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether at least one recompute has succeeded.
    pub fn is_ready(&self) -> bool {
        self.snapshot().is_some()
    }

    /// Number of viable candidates (0 before the first recompute).
    pub fn viable_count(&self) -> usize {
        self.snapshot().map_or(0, |s| s.len())
    }

    /// Number of candidates considered (0 before the first recompute).
    pub fn possible_count(&self) -> u64 {
        self.snapshot().map_or(0, |s| s.possible_count())
    }

    /// Candidate at a 1-based index ("raid N of M").
    ///
    /// # Errors
    /// `EmptyResultSet` before any recompute or when nothing is viable;
    /// `OutOfRange` for an index outside `[1, viable_count]`.
    pub fn at(&self, index: usize) -> SolverResult<Candidate> {
        let set = self.snapshot().ok_or(SolverError::EmptyResultSet)?;
        set.get(index).cloned()
    }

    /// A uniformly random viable candidate.
    pub fn random_pick(&self) -> SolverResult<Candidate> {
        self.random_pick_with(&mut rand::rng())
    }

    /// A uniformly random viable candidate drawn from `rng`.
    pub fn random_pick_with<R: Rng>(&self, rng: &mut R) -> SolverResult<Candidate> {
        self.random_index_with(rng).map(|(_, candidate)| candidate)
    }

    /// Like [`random_pick_with`](Self::random_pick_with), also returning
    /// the 1-based index that was picked.
    pub fn random_index_with<R: Rng>(&self, rng: &mut R) -> SolverResult<(usize, Candidate)> {
        let set = self.snapshot().ok_or(SolverError::EmptyResultSet)?;
        if set.is_empty() {
            return Err(SolverError::EmptyResultSet);
        }
        let index = rng.random_range(1..=set.len());
        Ok((index, set.get(index)?.clone()))
    }
}
