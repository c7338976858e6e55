//! AI coach: craving advice, daily wisdom, free-form answers and images.

mod personas;
mod service;

pub use personas::persona;
pub use service::{
    AnatomyVariant, CoachReply, CoachService, ReplySource, COACH_FALLBACK, CRAVING_FALLBACK,
    DEFAULT_TIMEOUT, WISDOM_FALLBACK,
};
