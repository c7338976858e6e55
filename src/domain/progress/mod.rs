//! Progress module - the ledger of smoke-free days, XP and journal entries.
//!
//! # Module Organization
//!
//! - `state` - The persisted `ProgressState` snapshot
//! - `ledger` - Pure transitions (check-in, missions, journal, profile)
//! - `metrics` - Derived read-side values (savings, percentages)
//! - `logs` - Mood and craving journal entries
//! - `events` - Events emitted by transitions

mod errors;
mod events;
mod ledger;
mod logs;
mod metrics;
mod mission;
mod state;

pub use errors::ProgressError;
pub use events::ProgressEvent;
pub use ledger::{
    log_craving, log_mood, recompute_level, set_wish_image, update_profile, CheckInOutcome,
    MissionOutcome, ProgressLedger, StreakPolicy, Transition, CHECK_IN_XP,
};
pub use logs::{craving_trigger, CravingIntensity, CravingLog, MoodLog, MoodValue, SOS_TRIGGERS};
pub use metrics::{
    already_checked_in, compute_days_remaining, compute_progress_percent,
    compute_regeneration_score, compute_savings, compute_wish_progress, CIGARETTES_PER_PACK,
};
pub use mission::DailyMission;
pub use state::ProgressState;
