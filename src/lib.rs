//! Bila Dkhane - smoke-free progress tracking core
//!
//! Keeps a per-device ledger of smoke-free days, XP, levels and streaks,
//! derives savings and health milestones from it, and wraps a generative
//! AI coach with static fallbacks.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
