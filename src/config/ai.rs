//! AI provider configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Highest accepted `max_retries`.
pub const MAX_RETRIES: u32 = 5;

/// Gemini provider configuration
///
/// The coach runs offline (fallback texts only) when no key is set.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Gemini API key
    pub gemini_api_key: Option<Secret<String>>,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model for craving advice and daily wisdom
    #[serde(default = "default_standard_model")]
    pub standard_model: String,

    /// Model for free-form coaching
    #[serde(default = "default_advanced_model")]
    pub advanced_model: String,

    #[serde(default = "default_image_model")]
    pub image_model: String,

    /// Upper bound for one coach call, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum retries on transient failures
    #[serde(default = "default_retries")]
    pub max_retries: u32,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if a Gemini key is configured
    pub fn has_gemini(&self) -> bool {
        self.gemini_api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty())
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.max_retries > MAX_RETRIES {
            return Err(ValidationError::TooManyRetries(self.max_retries));
        }
        if !self.base_url.starts_with("https://") && !self.base_url.starts_with("http://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        for (name, model) in [
            ("standard_model", &self.standard_model),
            ("advanced_model", &self.advanced_model),
            ("image_model", &self.image_model),
        ] {
            if model.trim().is_empty() {
                return Err(ValidationError::EmptyModel(name));
            }
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            base_url: default_base_url(),
            standard_model: default_standard_model(),
            advanced_model: default_advanced_model(),
            image_model: default_image_model(),
            timeout_secs: default_timeout(),
            max_retries: default_retries(),
        }
    }
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_standard_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_advanced_model() -> String {
    "gemini-3-pro-preview".to_string()
}

fn default_image_model() -> String {
    "gemini-3-pro-image-preview".to_string()
}

fn default_timeout() -> u64 {
    20
}

fn default_retries() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert!(!config.has_gemini());
        assert_eq!(config.timeout_secs, 20);
        assert_eq!(config.max_retries, 1);
        assert_eq!(config.standard_model, "gemini-3-flash-preview");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_timeout_duration() {
        let config = AiConfig {
            timeout_secs: 8,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(8));
    }

    #[test]
    fn test_blank_key_is_not_configured() {
        let config = AiConfig {
            gemini_api_key: Some(Secret::new("  ".to_string())),
            ..Default::default()
        };
        assert!(!config.has_gemini());
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let config = AiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));
    }

    #[test]
    fn test_validation_caps_retries() {
        let config = AiConfig {
            max_retries: MAX_RETRIES,
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        let config = AiConfig {
            max_retries: 64,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::TooManyRetries(64)));
    }

    #[test]
    fn test_validation_rejects_bad_url_and_empty_model() {
        let config = AiConfig {
            base_url: "ftp://nope".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidBaseUrl));

        let config = AiConfig {
            image_model: String::new(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyModel("image_model")));
    }

    #[test]
    fn test_debug_hides_key() {
        let config = AiConfig {
            gemini_api_key: Some(Secret::new("AIza-secret".to_string())),
            ..Default::default()
        };
        assert!(!format!("{:?}", config).contains("AIza-secret"));
    }
}
