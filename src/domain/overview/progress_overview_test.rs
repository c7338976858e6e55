use chrono::NaiveDate;

use crate::domain::catalog::{HealthPhase, LevelTitle};
use crate::domain::overview::{ProgressOverview, VisualizationInput};
use crate::domain::progress::{MoodLog, MoodValue, ProgressState};
use crate::domain::foundation::Timestamp;
use crate::domain::settings::{Language, UserConfig};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

#[test]
fn fresh_state_overview() {
    let overview = ProgressOverview::build(&ProgressState::default(), today());

    assert_eq!(overview.display_name, "Agent");
    assert_eq!(overview.days, 0);
    assert_eq!(overview.days_remaining, 30);
    assert_eq!(overview.level.level, 1);
    assert_eq!(overview.level.title, LevelTitle::Novice);
    assert_eq!(overview.savings, 0.0);
    assert_eq!(overview.health_phase, HealthPhase::Priming);
    assert!(overview.milestones_reached.is_empty());
    assert_eq!(overview.next_milestone.map(|m| m.id), Some("m1"));
    assert!(!overview.checked_in_today);
    assert!(overview.latest_mood.is_none());
}

#[test]
fn overview_aggregates_derived_metrics() {
    let state = ProgressState {
        first_name: "Karim".to_string(),
        days: 14,
        xp: 200,
        level: 2,
        streak: 14,
        longest_streak: 14,
        last_check_in: Some(today()),
        mood_logs: vec![MoodLog {
            timestamp: Timestamp::now(),
            value: MoodValue::try_new(4).unwrap(),
        }],
        config: UserConfig {
            language: Language::Ar,
            ..Default::default()
        },
        ..Default::default()
    };

    let overview = ProgressOverview::build(&state, today());

    assert_eq!(overview.display_name, "Karim");
    assert!(overview.checked_in_today);
    assert_eq!(overview.days_remaining, 16);
    assert!((overview.savings - 245.0).abs() < 1e-9);
    assert_eq!(overview.level.progress.value(), 50.0);
    assert_eq!(overview.health_phase, HealthPhase::MetabolicExcellence);
    assert_eq!(overview.milestones_reached.len(), 6);
    assert_eq!(overview.latest_mood, Some(4));
    assert_eq!(
        overview.visualization,
        VisualizationInput {
            days_clean: 14,
            language: Language::Ar
        }
    );
}

#[test]
fn level_badge_follows_held_level() {
    let state = ProgressState {
        xp: 50,
        level: 3,
        ..Default::default()
    };
    let overview = ProgressOverview::build(&state, today());
    assert_eq!(overview.level.title, LevelTitle::Guardian);
    assert_eq!(overview.level.progress.value(), 0.0);
}

#[test]
fn overview_serializes_camel_case() {
    let json = serde_json::to_value(ProgressOverview::build(&ProgressState::default(), today())).unwrap();
    assert!(json.get("daysRemaining").is_some());
    assert!(json.get("regenerationScore").is_some());
    assert_eq!(json["visualization"]["daysClean"], 0);
    assert_eq!(json["healthPhase"], "priming");
    assert!(json.get("wishImageUrl").is_none());
}
