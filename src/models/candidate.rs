//! Candidate (raid composition) model.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::{Job, Role};

/// One full assignment of jobs to slots; position `i` is slot `i`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Candidate {
    jobs: Vec<Job>,
}

/// Per-role slot counts of a candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCounts {
    pub tanks: usize,
    pub healers: usize,
    pub damage: usize,
}

impl Candidate {
    /// Creates a candidate from jobs in slot order.
    pub fn new(jobs: Vec<Job>) -> Self {
        Self { jobs }
    }

    /// Jobs in slot order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether the candidate has no slots.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Job at a zero-based slot.
    pub fn job(&self, slot: usize) -> Option<Job> {
        self.jobs.get(slot).copied()
    }

    /// Counts slots per role.
    pub fn role_counts(&self) -> RoleCounts {
        let mut counts = RoleCounts::default();
        for job in &self.jobs {
            match job.role() {
                Role::Tank => counts.tanks += 1,
                Role::Healer => counts.healers += 1,
                Role::Damage => counts.damage += 1,
            }
        }
        counts
    }

    /// Whether any job appears on more than one slot.
    pub fn has_duplicates(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.jobs.len());
        !self.jobs.iter().all(|j| seen.insert(*j))
    }

    /// Display labels in slot order.
    pub fn labels(&self) -> Vec<&'static str> {
        self.jobs.iter().map(|j| j.abbreviation()).collect()
    }

    /// Consumes the candidate, returning its jobs.
    pub fn into_jobs(self) -> Vec<Job> {
        self.jobs
    }
}

impl From<Vec<Job>> for Candidate {
    fn from(jobs: Vec<Job>) -> Self {
        Self::new(jobs)
    }
}

impl AsRef<[Job]> for Candidate {
    fn as_ref(&self) -> &[Job] {
        &self.jobs
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.labels().join(" / "))
    }
}
