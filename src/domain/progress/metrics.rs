//! Derived metrics - pure read-side computations over `ProgressState`.

use chrono::NaiveDate;

use super::ProgressState;
use crate::domain::catalog::{milestones_reached, MILESTONES};
use crate::domain::foundation::Percentage;

/// Cigarettes in one pack, used to price a single cigarette.
pub const CIGARETTES_PER_PACK: f64 = 20.0;

/// Money not spent since quitting: `days * cigarettesPerDay * packPrice / 20`.
pub fn compute_savings(state: &ProgressState) -> f64 {
    f64::from(state.days) * state.config.cigarettes_per_day * state.config.price_per_cigarette()
}

/// Share of the target streak already done, capped at 100.
pub fn compute_progress_percent(state: &ProgressState) -> Percentage {
    Percentage::of(f64::from(state.days), f64::from(state.config.target_days))
}

/// Share of health milestones reached.
pub fn compute_regeneration_score(state: &ProgressState) -> Percentage {
    let reached = milestones_reached(state.days).len();
    Percentage::of(reached as f64, MILESTONES.len() as f64)
}

/// How much of the reward price the savings already cover.
pub fn compute_wish_progress(state: &ProgressState) -> Percentage {
    Percentage::of(compute_savings(state), state.config.wish_price)
}

pub fn compute_days_remaining(state: &ProgressState) -> u32 {
    state.config.target_days.saturating_sub(state.days)
}

pub fn already_checked_in(state: &ProgressState, today: NaiveDate) -> bool {
    state.has_checked_in_on(today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::settings::UserConfig;

    fn state_with(days: u32, config: UserConfig) -> ProgressState {
        ProgressState {
            days,
            config,
            ..Default::default()
        }
    }

    #[test]
    fn savings_for_one_day_with_defaults() {
        let state = state_with(1, UserConfig::default());
        assert!((compute_savings(&state) - 17.5).abs() < 1e-9);
    }

    #[test]
    fn savings_are_zero_before_first_check_in() {
        assert_eq!(compute_savings(&ProgressState::default()), 0.0);
    }

    #[test]
    fn progress_percent_caps_at_hundred() {
        let config = UserConfig {
            target_days: 30,
            ..Default::default()
        };
        assert_eq!(compute_progress_percent(&state_with(15, config.clone())).value(), 50.0);
        assert_eq!(compute_progress_percent(&state_with(45, config)).value(), 100.0);
    }

    #[test]
    fn regeneration_score_counts_milestones() {
        let default = UserConfig::default();
        assert_eq!(compute_regeneration_score(&state_with(0, default.clone())).value(), 0.0);
        assert_eq!(compute_regeneration_score(&state_with(30, default.clone())).value(), 100.0);

        let two_days = compute_regeneration_score(&state_with(2, default)).value();
        assert!((two_days - 100.0 * 4.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn wish_progress_uses_savings() {
        let config = UserConfig {
            wish_price: 175.0,
            ..Default::default()
        };
        // 5 days * 10 * 1.75 = 87.5 of 175
        assert_eq!(compute_wish_progress(&state_with(5, config.clone())).value(), 50.0);
        assert_eq!(compute_wish_progress(&state_with(50, config)).value(), 100.0);
    }

    #[test]
    fn days_remaining_never_negative() {
        let config = UserConfig::default();
        assert_eq!(compute_days_remaining(&state_with(10, config.clone())), 20);
        assert_eq!(compute_days_remaining(&state_with(40, config)), 0);
    }

    #[test]
    fn already_checked_in_reads_last_date() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let state = ProgressState {
            last_check_in: Some(today),
            ..Default::default()
        };
        assert!(already_checked_in(&state, today));
        assert!(!already_checked_in(&ProgressState::default(), today));
    }
}
