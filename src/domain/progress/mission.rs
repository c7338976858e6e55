//! Daily mission - a one-off task that pays out XP.

use serde::{Deserialize, Serialize};

/// A single task with a completion flag and an XP reward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMission {
    pub id: String,
    pub task: String,
    pub completed: bool,
    pub xp_reward: u32,
}

impl DailyMission {
    /// Creates an open mission.
    pub fn new(id: impl Into<String>, task: impl Into<String>, xp_reward: u32) -> Self {
        Self {
            id: id.into(),
            task: task.into(),
            completed: false,
            xp_reward,
        }
    }
}

impl Default for DailyMission {
    /// The onboarding mission every new user starts with.
    fn default() -> Self {
        Self::new("m1", "Complete your profile", 30)
    }
}
