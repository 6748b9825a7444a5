//! Constraint configuration.
//!
//! A [`RaidConfig`] is the complete input of one recomputation: the
//! per-slot allowed-job sets plus the role quotas and duplicate policy.
//! The solver keeps no reference to it after `recompute` returns.

use serde::{Deserialize, Serialize};

use super::{Job, JobSet};

/// Default values mirroring a fresh raid builder.
pub mod defaults {
    /// Slots in a full raid.
    pub const DEFAULT_SLOT_COUNT: usize = 8;
    /// Tanks in a full raid.
    pub const DEFAULT_REQUIRED_TANKS: usize = 2;
    /// Healers in a full raid.
    pub const DEFAULT_REQUIRED_HEALERS: usize = 2;
    /// Default enumeration cap: 15^6, every job on every slot of a
    /// six-slot raid. A full eight-slot raid with every job allowed (15^8)
    /// needs `SolverConfig::unbounded` or a raised cap.
    pub const DEFAULT_MAX_COMBINATIONS: u64 = 11_390_625;
}

/// Slot, quota and duplicate settings for one recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaidConfig {
    /// Number of slots (players).
    pub slot_count: usize,
    /// Allowed jobs per slot; expected length is `slot_count`.
    pub allowed_jobs: Vec<JobSet>,
    /// Exact number of tank-role slots.
    pub required_tanks: usize,
    /// Exact number of healer-role slots.
    pub required_healers: usize,
    /// Whether the same job may appear on several slots.
    pub allow_duplicate_jobs: bool,
}

impl Default for RaidConfig {
    fn default() -> Self {
        Self {
            slot_count: defaults::DEFAULT_SLOT_COUNT,
            allowed_jobs: vec![JobSet::new(); defaults::DEFAULT_SLOT_COUNT],
            required_tanks: defaults::DEFAULT_REQUIRED_TANKS,
            required_healers: defaults::DEFAULT_REQUIRED_HEALERS,
            allow_duplicate_jobs: false,
        }
    }
}

impl RaidConfig {
    /// Creates a configuration from per-slot allowed sets.
    ///
    /// `slot_count` is taken from the sequence length; quotas start at zero.
    pub fn new(allowed_jobs: Vec<JobSet>) -> Self {
        Self {
            slot_count: allowed_jobs.len(),
            allowed_jobs,
            required_tanks: 0,
            required_healers: 0,
            allow_duplicate_jobs: false,
        }
    }

    /// Creates a configuration where every slot allows the same jobs.
    pub fn uniform(slot_count: usize, jobs: &JobSet) -> Self {
        Self::new(vec![jobs.clone(); slot_count])
    }

    /// Sets the required tank count.
    pub fn with_tanks(mut self, required_tanks: usize) -> Self {
        self.required_tanks = required_tanks;
        self
    }

    /// Sets the required healer count.
    pub fn with_healers(mut self, required_healers: usize) -> Self {
        self.required_healers = required_healers;
        self
    }

    /// Sets the duplicate policy.
    pub fn with_duplicates(mut self, allow: bool) -> Self {
        self.allow_duplicate_jobs = allow;
        self
    }

    /// Allows an extra job on one slot. Out-of-range slots are ignored.
    pub fn with_allowed(mut self, slot: usize, job: Job) -> Self {
        if let Some(set) = self.allowed_jobs.get_mut(slot) {
            set.insert(job);
        }
        self
    }

    /// Damage-role slots left after tank and healer quotas.
    pub fn required_damage(&self) -> usize {
        self.slot_count
            .saturating_sub(self.required_tanks)
            .saturating_sub(self.required_healers)
    }

    /// Returns a copy with slot count and quotas pulled into range.
    ///
    /// Slot count goes to `[1, max_slots]`, tanks to `[0, slots]` and
    /// healers to `[0, slots - tanks]`. `allowed_jobs` is resized to the
    /// slot count; added slots allow nothing.
    pub fn clamped(&self, max_slots: usize) -> Self {
        let slot_count = self.slot_count.clamp(1, max_slots.max(1));
        let required_tanks = self.required_tanks.min(slot_count);
        let required_healers = self.required_healers.min(slot_count - required_tanks);

        let mut allowed_jobs = self.allowed_jobs.clone();
        allowed_jobs.resize(slot_count, JobSet::new());

        Self {
            slot_count,
            allowed_jobs,
            required_tanks,
            required_healers,
            allow_duplicate_jobs: self.allow_duplicate_jobs,
        }
    }
}

/// Solver-level limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Largest candidate space `recompute` will enumerate. `None` = no cap.
    pub max_combinations: Option<u64>,
}

/// Caps a recompute at [`defaults::DEFAULT_MAX_COMBINATIONS`] candidates.
///
/// Recompute time grows with the candidate space and memory with the
/// viable count: at the cap one blocking call walks about 11.4 million
/// candidates.
impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_combinations: Some(defaults::DEFAULT_MAX_COMBINATIONS),
        }
    }
}

impl SolverConfig {
    /// A configuration with no enumeration cap.
    pub fn unbounded() -> Self {
        Self {
            max_combinations: None,
        }
    }

    /// Sets the enumeration cap.
    pub fn with_max_combinations(mut self, limit: u64) -> Self {
        self.max_combinations = Some(limit);
        self
    }
}
