//! User-adjustable quit plan parameters.

use serde::{Deserialize, Serialize};

use super::Language;
use crate::domain::foundation::ValidationError;

/// Parameters the user edits from the settings screen.
///
/// # Invariants (enforced by [`UserConfig::validate`])
///
/// - `cigarettes_per_day`, `pack_price`, `wish_price` are finite and `> 0`
/// - `target_days >= 1`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserConfig {
    /// Cigarettes smoked per day before quitting.
    #[serde(alias = "cigPerDay")]
    pub cigarettes_per_day: f64,

    /// Price of one pack of 20.
    pub pack_price: f64,

    /// Reward the user is saving towards.
    pub wish_name: String,

    /// Price of the reward.
    pub wish_price: f64,

    pub language: Language,

    /// Length of the quit programme in days.
    pub target_days: u32,
}

impl UserConfig {
    pub const DEFAULT_CIGARETTES_PER_DAY: f64 = 10.0;
    pub const DEFAULT_PACK_PRICE: f64 = 35.0;
    pub const DEFAULT_WISH_PRICE: f64 = 5000.0;
    pub const DEFAULT_TARGET_DAYS: u32 = 30;

    /// Validates every field, returning the first violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_positive("cigarettesPerDay", self.cigarettes_per_day)?;
        require_positive("packPrice", self.pack_price)?;
        require_positive("wishPrice", self.wish_price)?;
        if self.target_days < 1 {
            return Err(ValidationError::out_of_range(
                "targetDays",
                1,
                i64::from(u32::MAX),
                i64::from(self.target_days),
            ));
        }
        Ok(())
    }

    /// Repairs a config read from storage instead of rejecting it.
    ///
    /// Non-positive or non-finite numbers fall back to their defaults and
    /// `target_days` is raised to 1.
    pub fn sanitized(mut self) -> Self {
        if !is_positive(self.cigarettes_per_day) {
            self.cigarettes_per_day = Self::DEFAULT_CIGARETTES_PER_DAY;
        }
        if !is_positive(self.pack_price) {
            self.pack_price = Self::DEFAULT_PACK_PRICE;
        }
        if !is_positive(self.wish_price) {
            self.wish_price = Self::DEFAULT_WISH_PRICE;
        }
        self.target_days = self.target_days.max(1);
        self
    }

    /// Price of a single cigarette.
    pub fn price_per_cigarette(&self) -> f64 {
        self.pack_price / crate::domain::progress::CIGARETTES_PER_PACK
    }
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            cigarettes_per_day: Self::DEFAULT_CIGARETTES_PER_DAY,
            pack_price: Self::DEFAULT_PACK_PRICE,
            wish_name: "Elite Goal".to_string(),
            wish_price: Self::DEFAULT_WISH_PRICE,
            language: Language::default(),
            target_days: Self::DEFAULT_TARGET_DAYS,
        }
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn require_positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if is_positive(value) {
        Ok(())
    } else {
        Err(ValidationError::not_positive(field, value))
    }
}
