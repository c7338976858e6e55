//! Progress domain events.
//!
//! Emitted by ledger transitions and dispatched by the application layer
//! after the new snapshot has been written. Named in past tense.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CravingIntensity, MoodValue};
use crate::domain::catalog::LevelTitle;
use crate::domain::foundation::Timestamp;

/// Events produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProgressEvent {
    /// A check-in was accepted.
    CheckedIn {
        date: NaiveDate,
        days: u32,
        streak: u32,
        occurred_at: Timestamp,
    },

    /// The user reached a higher level.
    ///
    /// Emitted at most once per transition, carrying the new level only.
    LeveledUp {
        level: u8,
        title: LevelTitle,
        occurred_at: Timestamp,
    },

    /// The current mission was completed and its reward paid.
    MissionCompleted {
        mission_id: String,
        xp_reward: u32,
        occurred_at: Timestamp,
    },

    MoodLogged {
        value: MoodValue,
        occurred_at: Timestamp,
    },

    CravingLogged {
        trigger: String,
        intensity: CravingIntensity,
        occurred_at: Timestamp,
    },
}

impl ProgressEvent {
    /// Routing key, versioned like `progress.checked_in.v1`.
    pub fn event_type(&self) -> &'static str {
        match self {
            ProgressEvent::CheckedIn { .. } => "progress.checked_in.v1",
            ProgressEvent::LeveledUp { .. } => "progress.leveled_up.v1",
            ProgressEvent::MissionCompleted { .. } => "progress.mission_completed.v1",
            ProgressEvent::MoodLogged { .. } => "progress.mood_logged.v1",
            ProgressEvent::CravingLogged { .. } => "progress.craving_logged.v1",
        }
    }

    pub fn occurred_at(&self) -> Timestamp {
        match self {
            ProgressEvent::CheckedIn { occurred_at, .. }
            | ProgressEvent::LeveledUp { occurred_at, .. }
            | ProgressEvent::MissionCompleted { occurred_at, .. }
            | ProgressEvent::MoodLogged { occurred_at, .. }
            | ProgressEvent::CravingLogged { occurred_at, .. } => *occurred_at,
        }
    }
}
