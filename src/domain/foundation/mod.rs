//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! of the progress domain.

mod errors;
mod percentage;
mod timestamp;

pub use errors::ValidationError;
pub use percentage::Percentage;
pub use timestamp::Timestamp;
