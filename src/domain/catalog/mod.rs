//! Catalog module - static lookup tables consulted by the ledger.
//!
//! All queries are pure, total functions over immutable tables.

mod levels;
mod milestones;

pub use levels::{level_entry, level_for_xp, LevelEntry, LevelTitle, LEVELS, MIN_LEVEL};
pub use milestones::{milestones_reached, next_milestone, HealthPhase, Milestone, MILESTONES};
