//! Level table - maps accumulated XP to a rank.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Percentage;

/// Rank titles, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LevelTitle {
    #[serde(rename = "NOVICE")]
    Novice,
    #[serde(rename = "INITIÉ")]
    Initiated,
    #[serde(rename = "GARDIEN")]
    Guardian,
    #[serde(rename = "LÉGENDE")]
    Legend,
}

impl LevelTitle {
    /// Title as shown in notifications and the header badge.
    pub fn as_str(&self) -> &'static str {
        match self {
            LevelTitle::Novice => "NOVICE",
            LevelTitle::Initiated => "INITIÉ",
            LevelTitle::Guardian => "GARDIEN",
            LevelTitle::Legend => "LÉGENDE",
        }
    }
}

impl fmt::Display for LevelTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the level table. `min_xp` is inclusive, `max_xp` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelEntry {
    pub level: u8,
    pub title: LevelTitle,
    pub min_xp: u32,
    pub max_xp: u32,
}

impl LevelEntry {
    /// True if `xp` falls inside `[min_xp, max_xp)`.
    pub fn contains(&self, xp: u32) -> bool {
        self.min_xp <= xp && xp < self.max_xp
    }

    /// How far `xp` has moved through this band, capped at 100%.
    pub fn progress(&self, xp: u32) -> Percentage {
        let span = f64::from(self.max_xp.saturating_sub(self.min_xp));
        Percentage::of(f64::from(xp.saturating_sub(self.min_xp)), span)
    }
}

/// The level table. Rows are contiguous and sorted by `min_xp`; the top
/// row's `max_xp` is a display sentinel, XP beyond it stays at that level.
pub const LEVELS: [LevelEntry; 4] = [
    LevelEntry {
        level: 1,
        title: LevelTitle::Novice,
        min_xp: 0,
        max_xp: 100,
    },
    LevelEntry {
        level: 2,
        title: LevelTitle::Initiated,
        min_xp: 100,
        max_xp: 300,
    },
    LevelEntry {
        level: 3,
        title: LevelTitle::Guardian,
        min_xp: 300,
        max_xp: 1000,
    },
    LevelEntry {
        level: 4,
        title: LevelTitle::Legend,
        min_xp: 1000,
        max_xp: 10000,
    },
];

/// Lowest level a user can hold.
pub const MIN_LEVEL: u8 = 1;

/// Returns the level row containing `xp`, or the top row past the table.
pub fn level_for_xp(xp: u32) -> &'static LevelEntry {
    LEVELS
        .iter()
        .find(|entry| entry.contains(xp))
        .unwrap_or(&LEVELS[LEVELS.len() - 1])
}

/// Looks up a row by level number.
pub fn level_entry(level: u8) -> Option<&'static LevelEntry> {
    LEVELS.iter().find(|entry| entry.level == level)
}
