//! Application layer - services that orchestrate the domain and its ports.
//!
//! - `ProgressService` owns the live snapshot, runs ledger transitions,
//!   writes through to the store and dispatches notifications.
//! - `CoachService` wraps the AI provider with timeouts and fallbacks.

pub mod coach;
mod progress_service;

pub use coach::{AnatomyVariant, CoachReply, CoachService, ReplySource};
pub use progress_service::ProgressService;
