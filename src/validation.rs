//! Viability rules and configuration diagnostics.
//!
//! [`check_viability`] is the predicate applied to every enumerated
//! candidate. Rules are checked in order and the first failure wins:
//! 1. Tank and healer quotas fit in the candidate
//! 2. No repeated job (unless duplicates are allowed)
//! 3. Exactly `required_tanks` tank-role slots
//! 4. Exactly `required_healers` healer-role slots
//!
//! Damage-role slots are never counted: whatever remains after the tank
//! and healer quotas is accepted.
//!
//! [`validate_config`] inspects a configuration up front and lists every
//! issue it finds. Apart from a slot count mismatch none of these block a
//! recompute; they simply explain an empty result.

use crate::models::{Job, RaidConfig, Role};
use std::collections::HashSet;

/// Quota and duplicate policy applied to each candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaRules {
    pub required_tanks: usize,
    pub required_healers: usize,
    pub allow_duplicate_jobs: bool,
}

impl QuotaRules {
    /// Extracts the rules from a configuration.
    pub fn from_config(config: &RaidConfig) -> Self {
        Self {
            required_tanks: config.required_tanks,
            required_healers: config.required_healers,
            allow_duplicate_jobs: config.allow_duplicate_jobs,
        }
    }
}

/// Why a candidate was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Tank plus healer quota exceeds the number of slots.
    NotEnoughSlots { required: usize, slots: usize },
    /// A job appears on more than one slot.
    DuplicateJob(Job),
    /// Wrong number of tank-role slots.
    TankCount { expected: usize, found: usize },
    /// Wrong number of healer-role slots.
    HealerCount { expected: usize, found: usize },
}

/// Checks one candidate against the rules.
pub fn check_viability(candidate: &[Job], rules: &QuotaRules) -> Result<(), Rejection> {
    match rules.required_tanks.checked_add(rules.required_healers) {
        Some(required) if required <= candidate.len() => {}
        required => {
            return Err(Rejection::NotEnoughSlots {
                required: required.unwrap_or(usize::MAX),
                slots: candidate.len(),
            });
        }
    }

    if !rules.allow_duplicate_jobs {
        let mut seen = HashSet::with_capacity(candidate.len());
        if let Some(&dup) = candidate.iter().find(|j| !seen.insert(**j)) {
            return Err(Rejection::DuplicateJob(dup));
        }
    }

    let tanks = count_role(candidate, Role::Tank);
    if tanks != rules.required_tanks {
        return Err(Rejection::TankCount {
            expected: rules.required_tanks,
            found: tanks,
        });
    }

    let healers = count_role(candidate, Role::Healer);
    if healers != rules.required_healers {
        return Err(Rejection::HealerCount {
            expected: rules.required_healers,
            found: healers,
        });
    }

    Ok(())
}

/// Whether a candidate satisfies every viability rule.
pub fn is_viable(
    candidate: &[Job],
    required_tanks: usize,
    required_healers: usize,
    allow_duplicate_jobs: bool,
) -> bool {
    let rules = QuotaRules {
        required_tanks,
        required_healers,
        allow_duplicate_jobs,
    };
    check_viability(candidate, &rules).is_ok()
}

fn count_role(candidate: &[Job], role: Role) -> usize {
    candidate.iter().filter(|j| j.role() == role).count()
}

/// Diagnostic result for a configuration.
pub type ValidationResult = Result<(), Vec<ConfigIssue>>;

/// A configuration issue.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    /// Issue category.
    pub kind: ConfigIssueKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of configuration issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueKind {
    /// `slot_count` disagrees with the number of allowed-job sets.
    SlotCountMismatch,
    /// Tank plus healer quota exceeds the slot count.
    QuotaExceedsSlots,
    /// A slot allows no job, so nothing can be enumerated.
    EmptySlot,
    /// Fewer slots can play a role than the quota demands.
    RoleUnfillable,
}

impl ConfigIssue {
    fn new(kind: ConfigIssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Whether this issue prevents a recompute.
    pub fn is_blocking(&self) -> bool {
        self.kind == ConfigIssueKind::SlotCountMismatch
    }
}

/// Lists every issue found in a configuration.
///
/// Checks:
/// 1. `slot_count` equals the number of allowed-job sets
/// 2. Tank plus healer quota fits in the slot count
/// 3. Every slot allows at least one job
/// 4. Enough slots can play a tank (resp. healer) to meet the quota
pub fn validate_config(config: &RaidConfig) -> ValidationResult {
    let mut issues = Vec::new();

    if config.slot_count != config.allowed_jobs.len() {
        issues.push(ConfigIssue::new(
            ConfigIssueKind::SlotCountMismatch,
            format!(
                "slot_count is {} but {} allowed-job sets were given",
                config.slot_count,
                config.allowed_jobs.len()
            ),
        ));
    }

    let fits = config
        .required_tanks
        .checked_add(config.required_healers)
        .is_some_and(|required| required <= config.slot_count);
    if !fits {
        issues.push(ConfigIssue::new(
            ConfigIssueKind::QuotaExceedsSlots,
            format!(
                "{} tanks + {} healers exceed {} slots",
                config.required_tanks, config.required_healers, config.slot_count
            ),
        ));
    }

    for (slot, set) in config.allowed_jobs.iter().enumerate() {
        if set.is_empty() {
            issues.push(ConfigIssue::new(
                ConfigIssueKind::EmptySlot,
                format!("Slot {} allows no job", slot + 1),
            ));
        }
    }

    for (role, needed) in [
        (Role::Tank, config.required_tanks),
        (Role::Healer, config.required_healers),
    ] {
        let capable = config
            .allowed_jobs
            .iter()
            .filter(|set| set.iter().any(|j| j.role() == role))
            .count();
        if capable < needed {
            issues.push(ConfigIssue::new(
                ConfigIssueKind::RoleUnfillable,
                format!(
                    "{} {} slots required but only {} can play one",
                    needed,
                    role.label(),
                    capable
                ),
            ));
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{all_jobs, jobs_with_role, JobSet};

    fn rules(tanks: usize, healers: usize, dup: bool) -> QuotaRules {
        QuotaRules {
            required_tanks: tanks,
            required_healers: healers,
            allow_duplicate_jobs: dup,
        }
    }

    #[test]
    fn test_viable_light_party() {
        let party = [Job::Paladin, Job::WhiteMage, Job::Monk, Job::BlackMage];
        assert!(is_viable(&party, 1, 1, false));
        assert_eq!(check_viability(&party, &rules(1, 1, false)), Ok(()));
    }

    #[test]
    fn test_not_enough_slots_checked_first() {
        // Duplicates would also fail, but the quota check comes first.
        let party = [Job::Paladin, Job::Paladin];
        assert_eq!(
            check_viability(&party, &rules(2, 1, false)),
            Err(Rejection::NotEnoughSlots {
                required: 3,
                slots: 2
            })
        );
    }

    #[test]
    fn test_duplicates() {
        let party = [Job::Paladin, Job::Paladin];
        assert_eq!(
            check_viability(&party, &rules(2, 0, false)),
            Err(Rejection::DuplicateJob(Job::Paladin))
        );
        assert!(is_viable(&party, 2, 0, true));
    }

    #[test]
    fn test_tank_and_healer_counts() {
        let party = [Job::Paladin, Job::Warrior, Job::Scholar];
        assert_eq!(
            check_viability(&party, &rules(1, 1, false)),
            Err(Rejection::TankCount {
                expected: 1,
                found: 2
            })
        );
        assert_eq!(
            check_viability(&party, &rules(2, 0, false)),
            Err(Rejection::HealerCount {
                expected: 0,
                found: 1
            })
        );
    }

    #[test]
    fn test_damage_count_not_enforced() {
        // Two tanks, two healers, no damage: accepted.
        let party = [Job::Paladin, Job::Warrior, Job::WhiteMage, Job::Scholar];
        assert!(is_viable(&party, 2, 2, false));
    }

    #[test]
    fn test_huge_quota_rejected_without_overflow() {
        let party = [Job::Paladin];
        assert_eq!(
            check_viability(&party, &rules(usize::MAX, 1, false)),
            Err(Rejection::NotEnoughSlots {
                required: usize::MAX,
                slots: 1
            })
        );
        assert!(!is_viable(&party, 1, usize::MAX, true));
    }

    #[test]
    fn test_huge_quota_reported_as_exceeding_slots() {
        let config = RaidConfig::uniform(1, &all_jobs())
            .with_tanks(usize::MAX)
            .with_healers(1);
        let issues = validate_config(&config).unwrap_err();
        assert!(issues
            .iter()
            .any(|i| i.kind == ConfigIssueKind::QuotaExceedsSlots));
    }

    #[test]
    fn test_empty_candidate() {
        assert!(is_viable(&[], 0, 0, false));
        assert!(!is_viable(&[], 1, 0, false));
    }

    #[test]
    fn test_valid_config() {
        let config = RaidConfig::uniform(8, &all_jobs()).with_tanks(2).with_healers(2);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_slot_count_mismatch_is_blocking() {
        let mut config = RaidConfig::uniform(2, &all_jobs());
        config.slot_count = 3;
        let issues = validate_config(&config).unwrap_err();
        assert!(issues
            .iter()
            .any(|i| i.kind == ConfigIssueKind::SlotCountMismatch && i.is_blocking()));
    }

    #[test]
    fn test_quota_and_empty_slot_issues() {
        let config = RaidConfig::new(vec![all_jobs(), JobSet::new(), all_jobs()]).with_tanks(5);
        let issues = validate_config(&config).unwrap_err();
        assert!(issues
            .iter()
            .any(|i| i.kind == ConfigIssueKind::QuotaExceedsSlots));
        assert!(issues
            .iter()
            .any(|i| i.kind == ConfigIssueKind::EmptySlot && i.message.contains("Slot 2")));
        assert!(issues.iter().all(|i| !i.is_blocking()));
    }

    #[test]
    fn test_role_unfillable() {
        let config = RaidConfig::new(vec![
            jobs_with_role(Role::Damage),
            jobs_with_role(Role::Damage),
            jobs_with_role(Role::Tank),
        ])
        .with_tanks(1)
        .with_healers(1);
        let issues = validate_config(&config).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, ConfigIssueKind::RoleUnfillable);
        assert!(issues[0].message.contains("Healer"));
    }
}
