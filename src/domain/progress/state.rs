//! ProgressState aggregate - the single persisted snapshot per device.
//!
//! # Design Decisions
//!
//! - **Whole-snapshot persistence**: the aggregate is saved and loaded as one
//!   JSON document; there are no partial updates.
//! - **Transitions live in the ledger**: this type only holds data and
//!   read-side helpers. Every state change goes through `ledger`.
//! - **Tolerant reads**: missing fields take their defaults and unknown
//!   fields are ignored, so older snapshots still load.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CravingLog, DailyMission, MoodLog};
use crate::domain::catalog::{level_for_xp, MIN_LEVEL, LEVELS};
use crate::domain::foundation::Timestamp;
use crate::domain::settings::UserConfig;

/// Everything the app remembers about one user.
///
/// # Invariants
///
/// - `level` is at least the level `xp` maps to and never decreases
/// - `longest_streak >= streak`
/// - at most one accepted check-in per `last_check_in` date
/// - `check_in_history` is oldest first; mood and craving logs newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressState {
    pub first_name: String,
    pub last_name: String,

    /// Distinct calendar days with an accepted check-in.
    pub days: u32,

    pub xp: u32,
    pub level: u8,

    /// Device-local date of the most recent check-in.
    #[serde(with = "check_in_date")]
    pub last_check_in: Option<NaiveDate>,

    pub check_in_history: Vec<Timestamp>,

    pub streak: u32,
    pub longest_streak: u32,

    pub craving_logs: Vec<CravingLog>,
    pub mood_logs: Vec<MoodLog>,

    pub current_mission: DailyMission,

    pub config: UserConfig,

    /// Last generated reward image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wish_image_url: Option<String>,
}

impl ProgressState {
    /// Display name, falling back to `fallback` when both parts are blank.
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> std::borrow::Cow<'a, str> {
        let first = self.first_name.trim();
        let last = self.last_name.trim();
        match (first.is_empty(), last.is_empty()) {
            (true, true) => fallback.into(),
            (false, true) => first.into(),
            (true, false) => last.into(),
            (false, false) => format!("{} {}", first, last).into(),
        }
    }

    /// True if a check-in was already accepted for `today`.
    pub fn has_checked_in_on(&self, today: NaiveDate) -> bool {
        self.last_check_in == Some(today)
    }

    /// Most recent mood entry, if any.
    pub fn latest_mood(&self) -> Option<&MoodLog> {
        self.mood_logs.first()
    }

    /// Restores invariants on a snapshot read from storage.
    ///
    /// Repairs the embedded config, lifts `level` to what `xp` warrants
    /// (never lowering it) and keeps `longest_streak >= streak`.
    pub fn normalized(mut self) -> Self {
        self.config = self.config.sanitized();
        let max_level = LEVELS[LEVELS.len() - 1].level;
        self.level = self
            .level
            .max(level_for_xp(self.xp).level)
            .clamp(MIN_LEVEL, max_level);
        self.longest_streak = self.longest_streak.max(self.streak);
        self
    }
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            days: 0,
            xp: 0,
            level: MIN_LEVEL,
            last_check_in: None,
            check_in_history: Vec::new(),
            streak: 0,
            longest_streak: 0,
            craving_logs: Vec::new(),
            mood_logs: Vec::new(),
            current_mission: DailyMission::default(),
            config: UserConfig::default(),
            wish_image_url: None,
        }
    }
}

/// Serde for `lastCheckIn`.
///
/// Writes ISO `YYYY-MM-DD`. Reads ISO as well as the `Fri Oct 16 2026`
/// form produced by JavaScript's `Date.toDateString`.
mod check_in_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const ISO: &str = "%Y-%m-%d";
    const JS_DATE_STRING: &str = "%a %b %d %Y";

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => s.serialize_str(&d.format(ISO).to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        match raw {
            None => Ok(None),
            Some(s) => NaiveDate::parse_from_str(&s, ISO)
                .or_else(|_| NaiveDate::parse_from_str(&s, JS_DATE_STRING))
                .map(Some)
                .map_err(|e| serde::de::Error::custom(format!("invalid check-in date '{}': {}", s, e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::progress::MoodValue;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_state_matches_first_launch() {
        let state = ProgressState::default();
        assert_eq!(state.days, 0);
        assert_eq!(state.xp, 0);
        assert_eq!(state.level, 1);
        assert!(state.last_check_in.is_none());
        assert!(state.check_in_history.is_empty());
        assert!(!state.current_mission.completed);
        assert!(state.wish_image_url.is_none());
    }

    #[test]
    fn serializes_camel_case_field_names() {
        let state = ProgressState {
            last_check_in: Some(date(2026, 10, 16)),
            ..Default::default()
        };
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["lastCheckIn"], "2026-10-16");
        assert_eq!(json["longestStreak"], 0);
        assert!(json["checkInHistory"].is_array());
        assert!(json["currentMission"].is_object());
        assert!(json.get("wishImageUrl").is_none());
    }

    #[test]
    fn null_last_check_in_roundtrips() {
        let json = serde_json::to_string(&ProgressState::default()).unwrap();
        assert!(json.contains("\"lastCheckIn\":null"));
        let back: ProgressState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ProgressState::default());
    }

    #[test]
    fn full_state_roundtrips_losslessly() {
        let state = ProgressState {
            first_name: "Amina".to_string(),
            days: 4,
            xp: 230,
            level: 2,
            last_check_in: Some(date(2026, 10, 15)),
            check_in_history: vec![Timestamp::now()],
            streak: 4,
            longest_streak: 4,
            mood_logs: vec![MoodLog {
                timestamp: Timestamp::now(),
                value: MoodValue::try_new(4).unwrap(),
            }],
            wish_image_url: Some("data:image/png;base64,AAAA".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&state).unwrap();
        let back: ProgressState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn reads_browser_snapshot() {
        let json = r#"{
            "firstName": "Youssef",
            "lastName": "",
            "days": 2,
            "xp": 100,
            "level": 2,
            "config": {"cigPerDay": 12, "packPrice": 38, "wishName": "Bike",
                       "wishPrice": 3000, "language": "ar", "targetDays": 60},
            "lastCheckIn": "Fri Oct 16 2026",
            "checkInHistory": [1760572800000, 1760659200000],
            "lifeMinutesGained": 0,
            "streak": 2,
            "longestStreak": 2,
            "cravingLogs": [],
            "moodLogs": [{"timestamp": 1760659200000, "value": 3}],
            "currentMission": {"id": "m1", "task": "Remplir votre profil",
                               "completed": false, "xpReward": 30}
        }"#;

        let state: ProgressState = serde_json::from_str(json).unwrap();
        assert_eq!(state.last_check_in, Some(date(2026, 10, 16)));
        assert_eq!(state.check_in_history.len(), 2);
        assert_eq!(state.config.cigarettes_per_day, 12.0);
        assert_eq!(state.latest_mood().map(|m| m.value.value()), Some(3));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let state: ProgressState = serde_json::from_str(r#"{"days": 3}"#).unwrap();
        assert_eq!(state.days, 3);
        assert_eq!(state.level, 1);
        assert_eq!(state.config, UserConfig::default());
    }

    #[test]
    fn rejects_garbage_check_in_date() {
        let result = serde_json::from_str::<ProgressState>(r#"{"lastCheckIn": "yesterday"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn normalized_repairs_level_and_streak() {
        let state = ProgressState {
            xp: 450,
            level: 1,
            streak: 6,
            longest_streak: 2,
            ..Default::default()
        }
        .normalized();

        assert_eq!(state.level, 3);
        assert_eq!(state.longest_streak, 6);
    }

    #[test]
    fn normalized_never_lowers_level() {
        let state = ProgressState {
            xp: 0,
            level: 3,
            ..Default::default()
        }
        .normalized();
        assert_eq!(state.level, 3);
    }

    #[test]
    fn display_name_combines_parts() {
        let mut state = ProgressState::default();
        assert_eq!(state.display_name("Elite"), "Elite");
        state.first_name = "Sara".to_string();
        assert_eq!(state.display_name("Elite"), "Sara");
        state.last_name = "B.".to_string();
        assert_eq!(state.display_name("Elite"), "Sara B.");
    }

    #[test]
    fn has_checked_in_on_compares_dates() {
        let state = ProgressState {
            last_check_in: Some(date(2026, 10, 16)),
            ..Default::default()
        };
        assert!(state.has_checked_in_on(date(2026, 10, 16)));
        assert!(!state.has_checked_in_on(date(2026, 10, 17)));
    }
}
