//! Health recovery milestones and the recovery phase message.
//!
//! Catalog text is French, like the level titles. Only notifications and
//! coach replies follow the user's language.

use serde::Serialize;

/// A days-based recovery claim, used for display and scoring only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    /// Fractional days are allowed (0.04 days is roughly one hour).
    pub days_required: f64,
}

impl Milestone {
    /// True once `days` clean reaches this milestone.
    pub fn is_reached(&self, days: u32) -> bool {
        f64::from(days) >= self.days_required
    }
}

/// Milestone table, sorted ascending by `days_required`.
pub const MILESTONES: [Milestone; 7] = [
    Milestone {
        id: "m1",
        label: "Cœur & Tension",
        description: "Le pouls redevient normal.",
        days_required: 0.04,
    },
    Milestone {
        id: "m2",
        label: "Oxygénation",
        description: "Le CO sanguin diminue de moitié.",
        days_required: 0.33,
    },
    Milestone {
        id: "m3",
        label: "Désintox CO",
        description: "Le CO est totalement éliminé.",
        days_required: 1.0,
    },
    Milestone {
        id: "m4",
        label: "Goût & Odorat",
        description: "Les sens s'affinent.",
        days_required: 2.0,
    },
    Milestone {
        id: "m5",
        label: "Respiration",
        description: "Les bronches se relâchent.",
        days_required: 3.0,
    },
    Milestone {
        id: "m6",
        label: "Circulation",
        description: "Marcher devient plus facile.",
        days_required: 14.0,
    },
    Milestone {
        id: "m7",
        label: "Capacité Pulmonaire",
        description: "Régénération structurelle.",
        days_required: 30.0,
    },
];

/// Milestones reached after `days`, in catalog order.
pub fn milestones_reached(days: u32) -> Vec<&'static Milestone> {
    MILESTONES.iter().filter(|m| m.is_reached(days)).collect()
}

/// The next milestone still ahead, if any.
pub fn next_milestone(days: u32) -> Option<&'static Milestone> {
    MILESTONES.iter().find(|m| !m.is_reached(days))
}

/// Coarse recovery stage shown under the progress ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthPhase {
    Priming,
    NerveRestoration,
    BioResilience,
    MetabolicExcellence,
}

impl HealthPhase {
    pub fn for_days(days: u32) -> Self {
        match days {
            0 => HealthPhase::Priming,
            1..=2 => HealthPhase::NerveRestoration,
            3..=13 => HealthPhase::BioResilience,
            _ => HealthPhase::MetabolicExcellence,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            HealthPhase::Priming => "Amorçage : Préparation à la détoxification profonde.",
            HealthPhase::NerveRestoration => {
                "Restauration nerveuse : Les terminaisons commencent à repousser."
            }
            HealthPhase::BioResilience => "Bio-résilience : Circulation sanguine optimisée.",
            HealthPhase::MetabolicExcellence => {
                "Excellence métabolique : Vos poumons se régénèrent."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_sorted_by_days_required() {
        for pair in MILESTONES.windows(2) {
            assert!(pair[0].days_required < pair[1].days_required);
        }
    }

    #[test]
    fn nothing_reached_on_day_zero() {
        assert!(milestones_reached(0).is_empty());
        assert_eq!(next_milestone(0).map(|m| m.id), Some("m1"));
    }

    #[test]
    fn day_one_reaches_fractional_milestones() {
        let ids: Vec<_> = milestones_reached(1).iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["m1", "m2", "m3"]);
    }

    #[test]
    fn day_thirty_reaches_everything() {
        assert_eq!(milestones_reached(30).len(), MILESTONES.len());
        assert!(next_milestone(30).is_none());
    }

    #[test]
    fn reached_set_is_monotonic() {
        let mut previous = 0;
        for days in 0..60 {
            let count = milestones_reached(days).len();
            assert!(count >= previous);
            previous = count;
        }
    }

    #[test]
    fn health_phase_boundaries() {
        assert_eq!(HealthPhase::for_days(0), HealthPhase::Priming);
        assert_eq!(HealthPhase::for_days(1), HealthPhase::NerveRestoration);
        assert_eq!(HealthPhase::for_days(2), HealthPhase::NerveRestoration);
        assert_eq!(HealthPhase::for_days(3), HealthPhase::BioResilience);
        assert_eq!(HealthPhase::for_days(13), HealthPhase::BioResilience);
        assert_eq!(HealthPhase::for_days(14), HealthPhase::MetabolicExcellence);
    }

    #[test]
    fn catalog_text_matches_level_title_language() {
        use crate::domain::catalog::LevelTitle;

        assert_eq!(MILESTONES[0].label, "Cœur & Tension");
        assert_eq!(MILESTONES[6].label, "Capacité Pulmonaire");
        assert!(HealthPhase::Priming.message().starts_with("Amorçage"));
        assert_eq!(LevelTitle::Legend.as_str(), "LÉGENDE");
    }

    #[test]
    fn every_phase_has_a_message() {
        assert!(HealthPhase::BioResilience.message().starts_with("Bio-résilience"));
        assert!(!HealthPhase::Priming.message().is_empty());
    }
}
