//! Display and coaching language.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Language the user interacts in.
///
/// Drives the coach persona and the language AI replies are requested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    Ar,
    En,
    Es,
}

impl Language {
    /// All supported languages, in settings-menu order.
    pub const ALL: [Language; 4] = [Language::Fr, Language::Ar, Language::En, Language::Es];

    /// Returns the two-letter code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::Ar => "ar",
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// Returns the language's own name, used in prompts.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Fr => "Français",
            Language::Ar => "العربية",
            Language::En => "English",
            Language::Es => "Español",
        }
    }

    /// True for right-to-left scripts.
    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Ar)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fr" => Ok(Language::Fr),
            "ar" => Ok(Language::Ar),
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            other => Err(ValidationError::invalid_format(
                "language",
                format!("expected one of fr, ar, en, es, got '{}'", other),
            )),
        }
    }
}
