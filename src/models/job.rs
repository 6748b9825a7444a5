//! Job catalog and role classification.
//!
//! The catalog is closed and static: every [`Job`] belongs to exactly one
//! [`Role`]. The enum declaration order is the canonical order used for
//! enumeration, so `Ord` on `Job` is meaningful.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::SolverError;

/// Role category used for quota checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    Tank,
    Healer,
    Damage,
}

/// Sub-classification of damage dealers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageKind {
    Melee,
    Ranged,
}

/// A selectable job.
///
/// Serialized by its abbreviation (`"PLD"`, `"WHM"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Job {
    #[serde(rename = "PLD")]
    Paladin,
    #[serde(rename = "WAR")]
    Warrior,
    #[serde(rename = "DRK")]
    DarkKnight,
    #[serde(rename = "WHM")]
    WhiteMage,
    #[serde(rename = "SCH")]
    Scholar,
    #[serde(rename = "AST")]
    Astrologian,
    #[serde(rename = "MNK")]
    Monk,
    #[serde(rename = "DRG")]
    Dragoon,
    #[serde(rename = "NIN")]
    Ninja,
    #[serde(rename = "SAM")]
    Samurai,
    #[serde(rename = "BRD")]
    Bard,
    #[serde(rename = "MCH")]
    Machinist,
    #[serde(rename = "BLM")]
    BlackMage,
    #[serde(rename = "SMN")]
    Summoner,
    #[serde(rename = "RDM")]
    RedMage,
}

/// An allowed-job set, iterated in canonical catalog order.
pub type JobSet = BTreeSet<Job>;

impl Job {
    /// The whole catalog in canonical order.
    pub const ALL: [Job; 15] = [
        Job::Paladin,
        Job::Warrior,
        Job::DarkKnight,
        Job::WhiteMage,
        Job::Scholar,
        Job::Astrologian,
        Job::Monk,
        Job::Dragoon,
        Job::Ninja,
        Job::Samurai,
        Job::Bard,
        Job::Machinist,
        Job::BlackMage,
        Job::Summoner,
        Job::RedMage,
    ];

    /// Role category of this job.
    pub fn role(self) -> Role {
        match self {
            Job::Paladin | Job::Warrior | Job::DarkKnight => Role::Tank,
            Job::WhiteMage | Job::Scholar | Job::Astrologian => Role::Healer,
            _ => Role::Damage,
        }
    }

    /// Melee/ranged split for damage jobs; `None` for tanks and healers.
    pub fn damage_kind(self) -> Option<DamageKind> {
        match self {
            Job::Monk | Job::Dragoon | Job::Ninja | Job::Samurai => Some(DamageKind::Melee),
            Job::Bard | Job::Machinist | Job::BlackMage | Job::Summoner | Job::RedMage => {
                Some(DamageKind::Ranged)
            }
            _ => None,
        }
    }

    /// Three-letter display label.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Job::Paladin => "PLD",
            Job::Warrior => "WAR",
            Job::DarkKnight => "DRK",
            Job::WhiteMage => "WHM",
            Job::Scholar => "SCH",
            Job::Astrologian => "AST",
            Job::Monk => "MNK",
            Job::Dragoon => "DRG",
            Job::Ninja => "NIN",
            Job::Samurai => "SAM",
            Job::Bard => "BRD",
            Job::Machinist => "MCH",
            Job::BlackMage => "BLM",
            Job::Summoner => "SMN",
            Job::RedMage => "RDM",
        }
    }

    /// Full job name.
    pub fn name(self) -> &'static str {
        match self {
            Job::Paladin => "Paladin",
            Job::Warrior => "Warrior",
            Job::DarkKnight => "Dark Knight",
            Job::WhiteMage => "White Mage",
            Job::Scholar => "Scholar",
            Job::Astrologian => "Astrologian",
            Job::Monk => "Monk",
            Job::Dragoon => "Dragoon",
            Job::Ninja => "Ninja",
            Job::Samurai => "Samurai",
            Job::Bard => "Bard",
            Job::Machinist => "Machinist",
            Job::BlackMage => "Black Mage",
            Job::Summoner => "Summoner",
            Job::RedMage => "Red Mage",
        }
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for Job {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Job::ALL
            .iter()
            .copied()
            .find(|job| job.abbreviation().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SolverError::UnknownJob {
                name: trimmed.to_string(),
            })
    }
}

impl Role {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Role::Tank => "Tank",
            Role::Healer => "Healer",
            Role::Damage => "DPS",
        }
    }

    /// Background colour a front end uses for this role.
    pub fn color(self) -> &'static str {
        match self {
            Role::Tank => "#2d3a80",
            Role::Healer => "#346624",
            Role::Damage => "#732828",
        }
    }
}

/// Role category of `job`. Total over the catalog.
#[inline]
pub fn role_of(job: Job) -> Role {
    job.role()
}

/// Every catalog job with the given role.
pub fn jobs_with_role(role: Role) -> JobSet {
    Job::ALL.iter().copied().filter(|j| j.role() == role).collect()
}

/// The full catalog as a set.
pub fn all_jobs() -> JobSet {
    Job::ALL.iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_partition_catalog() {
        let tanks = jobs_with_role(Role::Tank);
        let healers = jobs_with_role(Role::Healer);
        let damage = jobs_with_role(Role::Damage);

        assert_eq!(tanks.len(), 3);
        assert_eq!(healers.len(), 3);
        assert_eq!(damage.len(), 9);
        assert!(tanks.is_disjoint(&healers));
        assert!(tanks.is_disjoint(&damage));
        assert!(healers.is_disjoint(&damage));
        assert_eq!(tanks.len() + healers.len() + damage.len(), Job::ALL.len());
    }

    #[test]
    fn test_canonical_order_matches_declaration() {
        let mut sorted = Job::ALL.to_vec();
        sorted.sort();
        assert_eq!(sorted, Job::ALL.to_vec());
        assert_eq!(all_jobs().into_iter().next(), Some(Job::Paladin));
    }

    #[test]
    fn test_damage_kind_only_for_damage() {
        for job in Job::ALL {
            assert_eq!(job.damage_kind().is_some(), role_of(job) == Role::Damage);
        }
        assert_eq!(Job::Ninja.damage_kind(), Some(DamageKind::Melee));
        assert_eq!(Job::RedMage.damage_kind(), Some(DamageKind::Ranged));
    }

    #[test]
    fn test_parse_abbreviation() {
        assert_eq!("whm".parse::<Job>().unwrap(), Job::WhiteMage);
        assert_eq!(" DRK ".parse::<Job>().unwrap(), Job::DarkKnight);
        assert!(matches!(
            "GNB".parse::<Job>(),
            Err(SolverError::UnknownJob { .. })
        ));
    }

    #[test]
    fn test_serde_uses_abbreviation() {
        let json = serde_json::to_string(&Job::Scholar).unwrap();
        assert_eq!(json, "\"SCH\"");
        let back: Job = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Job::Scholar);
    }

    #[test]
    fn test_role_style() {
        assert_eq!(Role::Tank.color(), "#2d3a80");
        assert_eq!(Role::Damage.label(), "DPS");
        assert_eq!(Job::Bard.to_string(), "BRD");
    }
}
