//! Domain layer containing the progress model and its rules.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (timestamps, percentages, validation errors)
//! - `catalog` - Static level and health milestone tables
//! - `settings` - User configuration and language
//! - `progress` - The progress snapshot, its transitions and derived metrics
//! - `overview` - Dashboard read model

pub mod catalog;
pub mod foundation;
pub mod overview;
pub mod progress;
pub mod settings;
