//! Ledger and notification settings

use serde::Deserialize;

use crate::domain::progress::StreakPolicy;

/// Ledger behaviour
#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct LedgerConfig {
    /// `reset_on_missed_day` (default) or `continuous`
    #[serde(default)]
    pub streak_policy: StreakPolicy,
}

/// Notification delivery
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_enabled() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streak_policy_deserialization() {
        let config: LedgerConfig =
            serde_json::from_str(r#"{"streak_policy": "continuous"}"#).unwrap();
        assert_eq!(config.streak_policy, StreakPolicy::Continuous);

        let config: LedgerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.streak_policy, StreakPolicy::ResetOnMissedDay);
    }

    #[test]
    fn test_notifications_enabled_by_default() {
        let config: NotificationConfig = serde_json::from_str("{}").unwrap();
        assert!(config.enabled);
        assert!(NotificationConfig::default().enabled);
    }
}
