use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::catalog::{
    level_entry, level_for_xp, milestones_reached, next_milestone, HealthPhase, LevelTitle,
    Milestone,
};
use crate::domain::foundation::Percentage;
use crate::domain::progress::{
    already_checked_in, compute_days_remaining, compute_progress_percent,
    compute_regeneration_score, compute_savings, compute_wish_progress, DailyMission,
    ProgressState,
};
use crate::domain::settings::Language;

/// Name shown when the user has not filled in a profile yet.
pub const ANONYMOUS_NAME: &str = "Agent";

/// Everything the dashboard shows, derived from one snapshot
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressOverview {
    pub display_name: String,
    pub language: Language,

    /// Counters
    pub days: u32,
    pub target_days: u32,
    pub days_remaining: u32,
    pub progress: Percentage,
    pub streak: u32,
    pub longest_streak: u32,
    pub checked_in_today: bool,

    /// Level badge
    pub level: LevelSummary,

    /// Money
    pub savings: f64,
    pub wish_name: String,
    pub wish_progress: Percentage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wish_image_url: Option<String>,

    /// Health
    pub regeneration_score: Percentage,
    pub health_phase: HealthPhase,
    pub health_message: &'static str,
    pub milestones_reached: Vec<&'static str>,
    pub next_milestone: Option<Milestone>,

    /// Journal
    pub latest_mood: Option<u8>,
    pub craving_count: usize,

    pub mission: DailyMission,

    pub visualization: VisualizationInput,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelSummary {
    pub level: u8,
    pub title: LevelTitle,
    pub xp: u32,
    /// Position of `xp` inside the band of the held level
    pub progress: Percentage,
}

/// The only data a 3D or animated renderer receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationInput {
    pub days_clean: u32,
    pub language: Language,
}

impl ProgressOverview {
    pub fn build(state: &ProgressState, today: NaiveDate) -> Self {
        let config = &state.config;
        let phase = HealthPhase::for_days(state.days);

        Self {
            display_name: state.display_name(ANONYMOUS_NAME).into_owned(),
            language: config.language,
            days: state.days,
            target_days: config.target_days,
            days_remaining: compute_days_remaining(state),
            progress: compute_progress_percent(state),
            streak: state.streak,
            longest_streak: state.longest_streak,
            checked_in_today: already_checked_in(state, today),
            level: LevelSummary::for_state(state),
            savings: compute_savings(state),
            wish_name: config.wish_name.clone(),
            wish_progress: compute_wish_progress(state),
            wish_image_url: state.wish_image_url.clone(),
            regeneration_score: compute_regeneration_score(state),
            health_phase: phase,
            health_message: phase.message(),
            milestones_reached: milestones_reached(state.days)
                .into_iter()
                .map(|m| m.id)
                .collect(),
            next_milestone: next_milestone(state.days).copied(),
            latest_mood: state.latest_mood().map(|m| m.value.value()),
            craving_count: state.craving_logs.len(),
            mission: state.current_mission.clone(),
            visualization: VisualizationInput::from_state(state),
        }
    }
}

impl LevelSummary {
    fn for_state(state: &ProgressState) -> Self {
        let entry = level_entry(state.level).unwrap_or_else(|| level_for_xp(state.xp));
        Self {
            level: entry.level,
            title: entry.title,
            xp: state.xp,
            progress: entry.progress(state.xp),
        }
    }
}

impl VisualizationInput {
    pub fn from_state(state: &ProgressState) -> Self {
        Self {
            days_clean: state.days,
            language: state.config.language,
        }
    }
}

#[cfg(test)]
#[path = "progress_overview_test.rs"]
mod progress_overview_test;
