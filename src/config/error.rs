//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid AI request timeout")]
    InvalidTimeout,

    #[error("AI max_retries {0} exceeds the limit of 5")]
    TooManyRetries(u32),

    #[error("Invalid AI base URL")]
    InvalidBaseUrl,

    #[error("Model name for {0} cannot be empty")]
    EmptyModel(&'static str),

    #[error("Invalid log level directive: {0}")]
    InvalidLogLevel(String),
}
