//! Settings domain module.
//!
//! User-adjustable parameters embedded in the progress snapshot.
//!
//! # Module Structure
//!
//! - `language` - Supported interaction languages
//! - `user_config` - Quit plan parameters and their validation

mod language;
mod user_config;

pub use language::Language;
pub use user_config::UserConfig;
