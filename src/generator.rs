//! Candidate enumeration.
//!
//! Produces the Cartesian product of the per-slot allowed-job sets in
//! lexicographic order over slot position: the last slot varies fastest
//! and each slot walks its jobs in canonical catalog order.
//!
//! # Algorithm
//! Odometer over per-slot choice indices. Position `k` of the sequence is
//! the mixed-radix number whose digit `i` has radix `|allowed_jobs[i]|`,
//! so [`CandidateGenerator::candidate_at`] can decode any position without
//! walking the ones before it.

use crate::models::{Candidate, Job, JobSet};

/// Enumerates every candidate for a sequence of allowed-job sets.
#[derive(Debug, Clone)]
pub struct CandidateGenerator {
    choices: Vec<Vec<Job>>,
}

impl CandidateGenerator {
    /// Snapshots the allowed-job sets in canonical order.
    pub fn new(allowed_jobs: &[JobSet]) -> Self {
        Self {
            choices: allowed_jobs
                .iter()
                .map(|set| set.iter().copied().collect())
                .collect(),
        }
    }

    /// Number of slots.
    pub fn slot_count(&self) -> usize {
        self.choices.len()
    }

    /// Size of the product; `None` if it overflows `u64`.
    ///
    /// Zero when any slot allows nothing. An empty slot sequence has one
    /// (empty) candidate.
    pub fn possible_count(&self) -> Option<u64> {
        self.choices
            .iter()
            .try_fold(1u64, |acc, c| acc.checked_mul(c.len() as u64))
    }

    /// A fresh iterator from the first candidate.
    pub fn iter(&self) -> Candidates<'_> {
        let exhausted = self.choices.iter().any(|c| c.is_empty());
        Candidates {
            choices: &self.choices,
            cursor: vec![0; self.choices.len()],
            exhausted,
            remaining: if exhausted { Some(0) } else { self.possible_count() },
        }
    }

    /// Decodes the candidate at a zero-based position of the enumeration.
    pub fn candidate_at(&self, index: u64) -> Option<Candidate> {
        if index >= self.possible_count()? {
            return None;
        }

        let mut rest = index;
        let mut jobs = vec![Job::Paladin; self.choices.len()];
        for (slot, options) in self.choices.iter().enumerate().rev() {
            let radix = options.len() as u64;
            jobs[slot] = options[(rest % radix) as usize];
            rest /= radix;
        }
        Some(Candidate::new(jobs))
    }
}

impl<'a> IntoIterator for &'a CandidateGenerator {
    type Item = Candidate;
    type IntoIter = Candidates<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy iterator over the candidates of a [`CandidateGenerator`].
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    choices: &'a [Vec<Job>],
    cursor: Vec<usize>,
    exhausted: bool,
    remaining: Option<u64>,
}

impl Iterator for Candidates<'_> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        if self.exhausted {
            return None;
        }

        let jobs = self
            .cursor
            .iter()
            .zip(self.choices)
            .map(|(&i, options)| options[i])
            .collect();

        // Advance the odometer; the last slot turns fastest.
        self.exhausted = true;
        for slot in (0..self.cursor.len()).rev() {
            self.cursor[slot] += 1;
            if self.cursor[slot] < self.choices[slot].len() {
                self.exhausted = false;
                break;
            }
            self.cursor[slot] = 0;
        }

        if let Some(r) = self.remaining.as_mut() {
            *r = r.saturating_sub(1);
        }
        Some(Candidate::new(jobs))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining.and_then(|r| usize::try_from(r).ok()) {
            Some(r) => (r, Some(r)),
            None => (usize::MAX, None),
        }
    }
}
