//! Result set of one recomputation.

use serde::Serialize;

use crate::error::{SolverError, SolverResult};
use crate::generator::CandidateGenerator;
use crate::models::Candidate;
use crate::validation::{check_viability, QuotaRules};

/// Viable candidates in generation order, with the size of the space
/// they were drawn from.
///
/// Indices are stable for the lifetime of the set. A new recomputation
/// builds a new set; an existing one is never patched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResultSet {
    possible_count: u64,
    candidates: Vec<Candidate>,
}

impl ResultSet {
    /// Enumerates every candidate of `generator` and keeps the viable ones.
    ///
    /// Callers must have checked that `possible_count()` does not overflow.
    pub(crate) fn build(generator: &CandidateGenerator, rules: &QuotaRules) -> Self {
        let candidates = generator
            .iter()
            .filter(|c| check_viability(c.jobs(), rules).is_ok())
            .collect();

        Self {
            possible_count: generator.possible_count().unwrap_or(u64::MAX),
            candidates,
        }
    }

    /// Number of candidates considered.
    pub fn possible_count(&self) -> u64 {
        self.possible_count
    }

    /// Number of viable candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether no candidate was viable.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidate at a 1-based index.
    ///
    /// # Errors
    /// `EmptyResultSet` if the set is empty, `OutOfRange` if `index` is
    /// outside `[1, len()]`.
    pub fn get(&self, index: usize) -> SolverResult<&Candidate> {
        if self.candidates.is_empty() {
            return Err(SolverError::EmptyResultSet);
        }
        index
            .checked_sub(1)
            .and_then(|i| self.candidates.get(i))
            .ok_or(SolverError::OutOfRange {
                index,
                size: self.candidates.len(),
            })
    }

    /// Viable candidates in order.
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Job, JobSet};

    fn tank_healer_slots() -> Vec<JobSet> {
        let set: JobSet = [Job::Paladin, Job::WhiteMage].into_iter().collect();
        vec![set.clone(), set]
    }

    #[test]
    fn test_build_keeps_generation_order() {
        let generator = CandidateGenerator::new(&tank_healer_slots());
        let rules = QuotaRules {
            required_tanks: 1,
            required_healers: 1,
            allow_duplicate_jobs: false,
        };
        let set = ResultSet::build(&generator, &rules);

        assert_eq!(set.possible_count(), 4);
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(1).unwrap().jobs(), &[Job::Paladin, Job::WhiteMage]);
        assert_eq!(set.get(2).unwrap().jobs(), &[Job::WhiteMage, Job::Paladin]);
    }

    #[test]
    fn test_get_bounds() {
        let generator = CandidateGenerator::new(&tank_healer_slots());
        let rules = QuotaRules {
            required_tanks: 1,
            required_healers: 1,
            allow_duplicate_jobs: false,
        };
        let set = ResultSet::build(&generator, &rules);

        assert_eq!(
            set.get(0).unwrap_err(),
            SolverError::OutOfRange { index: 0, size: 2 }
        );
        assert_eq!(
            set.get(3).unwrap_err(),
            SolverError::OutOfRange { index: 3, size: 2 }
        );
    }

    #[test]
    fn test_empty_set() {
        let set = ResultSet::default();
        assert!(set.is_empty());
        assert_eq!(set.get(1).unwrap_err(), SolverError::EmptyResultSet);
    }
}
