//! Mood and craving journal entries.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Timestamp, ValidationError};

/// Self-reported mood on a 1 (worst) to 5 (best) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MoodValue(u8);

impl MoodValue {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Creates a mood value, rejecting anything outside 1..=5.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "mood",
                i64::from(Self::MIN),
                i64::from(Self::MAX),
                i64::from(value),
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for MoodValue {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<MoodValue> for u8 {
    fn from(mood: MoodValue) -> Self {
        mood.0
    }
}

impl fmt::Display for MoodValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// How strong a craving felt, 1 (mild) to 5 (overwhelming).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CravingIntensity(u8);

impl CravingIntensity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Intensity used by the SOS panel.
    pub const SOS: Self = Self(5);

    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "intensity",
                i64::from(Self::MIN),
                i64::from(Self::MAX),
                i64::from(value),
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for CravingIntensity {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<CravingIntensity> for u8 {
    fn from(intensity: CravingIntensity) -> Self {
        intensity.0
    }
}

impl fmt::Display for CravingIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Triggers offered by the SOS panel. Free-form labels are accepted too.
pub const SOS_TRIGGERS: [&str; 4] = ["Stress", "Pressure", "Habit", "Fatigue"];

/// Trims a craving trigger and rejects a blank one.
///
/// A label matching one of [`SOS_TRIGGERS`] in any case is returned in the
/// panel's spelling so journal entries group together.
pub fn craving_trigger(raw: &str) -> Result<&str, ValidationError> {
    let trigger = raw.trim();
    if trigger.is_empty() {
        return Err(ValidationError::empty_field("trigger"));
    }
    Ok(SOS_TRIGGERS
        .iter()
        .find(|known| known.eq_ignore_ascii_case(trigger))
        .copied()
        .unwrap_or(trigger))
}

/// A mood check recorded from the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodLog {
    pub timestamp: Timestamp,
    pub value: MoodValue,
}

/// A craving episode and the advice given for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CravingLog {
    pub timestamp: Timestamp,
    pub trigger: String,
    pub intensity: CravingIntensity,
    pub advice: String,
}
