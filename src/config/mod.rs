//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `BILA_DKHANE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use bila_dkhane::config::AppConfig;
//!
//! let config = AppConfig::load()?;
//! config.validate()?;
//!
//! println!("Snapshot directory: {}", config.storage.data_dir.display());
//! # Ok::<(), bila_dkhane::config::ConfigError>(())
//! ```

mod ai;
mod error;
mod ledger;
mod storage;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use ledger::{LedgerConfig, NotificationConfig};
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment is a valid setup
/// (file storage under `./data`, offline coach).
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    /// Gemini provider configuration
    #[serde(default)]
    pub ai: AiConfig,

    #[serde(default)]
    pub ledger: LedgerConfig,

    #[serde(default)]
    pub notifications: NotificationConfig,

    /// Default `tracing` filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[serde(default)]
    pub log_json: bool,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `BILA_DKHANE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `BILA_DKHANE__STORAGE__DATA_DIR=/var/lib/bila` -> `storage.data_dir`
    /// - `BILA_DKHANE__AI__GEMINI_API_KEY=...` -> `ai.gemini_api_key`
    /// - `BILA_DKHANE__LEDGER__STREAK_POLICY=continuous` -> `ledger.streak_policy`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("BILA_DKHANE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.ai.validate()?;
        tracing_subscriber::EnvFilter::try_new(&self.log_level)
            .map_err(|_| ValidationError::InvalidLogLevel(self.log_level.clone()))?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            ai: AiConfig::default(),
            ledger: LedgerConfig::default(),
            notifications: NotificationConfig::default(),
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
