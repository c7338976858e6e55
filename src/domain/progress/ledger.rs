//! Progress Ledger - pure state transitions on `ProgressState`.
//!
//! Every function here takes the current snapshot by reference plus explicit
//! inputs (the local date, the current instant) and returns a new snapshot
//! with the events the transition produced. Nothing here performs I/O, reads
//! the clock, or persists; the application layer owns those concerns.

use chrono::NaiveDate;
use serde::Deserialize;

use super::{
    craving_trigger, CravingIntensity, CravingLog, MoodLog, MoodValue, ProgressError,
    ProgressEvent, ProgressState,
};
use crate::domain::catalog::{level_entry, level_for_xp};
use crate::domain::foundation::Timestamp;
use crate::domain::settings::UserConfig;

/// XP paid for every accepted check-in.
pub const CHECK_IN_XP: u32 = 50;

/// How the consecutive-day counter behaves when a calendar day is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakPolicy {
    /// A gap of one or more days restarts the run at 1.
    #[default]
    ResetOnMissedDay,
    /// Every accepted check-in extends the run, gaps are ignored.
    Continuous,
}

/// New snapshot plus the events describing what changed.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: ProgressState,
    pub events: Vec<ProgressEvent>,
}

impl Transition {
    fn new(state: ProgressState) -> Self {
        Self {
            state,
            events: Vec::new(),
        }
    }

    fn with_event(mut self, event: ProgressEvent) -> Self {
        self.events.push(event);
        self
    }
}

/// Result of a check-in attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckInOutcome {
    Accepted(Transition),
    /// A check-in already exists for this date; nothing changed.
    AlreadyCheckedIn,
    /// `today` is earlier than the last accepted check-in (clock or time
    /// zone moved backwards); nothing changed.
    OutOfOrder { last_check_in: NaiveDate },
}

impl CheckInOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, CheckInOutcome::Accepted(_))
    }

    /// Resulting snapshot, or a copy of `previous` when nothing changed.
    pub fn resulting_state(&self, previous: &ProgressState) -> ProgressState {
        match self {
            CheckInOutcome::Accepted(t) => t.state.clone(),
            CheckInOutcome::AlreadyCheckedIn | CheckInOutcome::OutOfOrder { .. } => {
                previous.clone()
            }
        }
    }
}

/// Result of completing the current mission.
#[derive(Debug, Clone, PartialEq)]
pub enum MissionOutcome {
    Completed(Transition),
    AlreadyCompleted,
}

/// Stateful only in its streak policy; all methods are pure.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressLedger {
    streak_policy: StreakPolicy,
}

impl ProgressLedger {
    pub fn new(streak_policy: StreakPolicy) -> Self {
        Self { streak_policy }
    }

    /// Records one smoke-free day.
    ///
    /// A second call with the same `today` is a silent no-op, and so is a
    /// call with a `today` before the last check-in. Otherwise
    /// `days` and `xp` grow, the level is recomputed, `at` is appended to
    /// the history and the streak advances according to the policy.
    pub fn check_in(&self, state: &ProgressState, today: NaiveDate, at: Timestamp) -> CheckInOutcome {
        match state.last_check_in {
            Some(last) if last == today => return CheckInOutcome::AlreadyCheckedIn,
            Some(last) if last > today => {
                return CheckInOutcome::OutOfOrder {
                    last_check_in: last,
                }
            }
            _ => {}
        }

        let mut next = state.clone();
        next.days = state.days.saturating_add(1);
        next.xp = state.xp.saturating_add(CHECK_IN_XP);
        next.level = advance_level(state.level, next.xp);
        next.streak = self.next_streak(state, today);
        next.longest_streak = state.longest_streak.max(next.streak);
        next.last_check_in = Some(today);
        next.check_in_history.push(at);

        let event = ProgressEvent::CheckedIn {
            date: today,
            days: next.days,
            streak: next.streak,
            occurred_at: at,
        };
        let transition = with_level_up(Transition::new(next).with_event(event), state.level, at);
        CheckInOutcome::Accepted(transition)
    }

    fn next_streak(&self, state: &ProgressState, today: NaiveDate) -> u32 {
        let consecutive = match state.last_check_in {
            None => true,
            Some(previous) => previous.succ_opt() == Some(today),
        };
        match self.streak_policy {
            StreakPolicy::ResetOnMissedDay if !consecutive => 1,
            _ => state.streak.saturating_add(1),
        }
    }

    /// Marks the current mission done and pays its reward once.
    pub fn complete_mission(&self, state: &ProgressState, at: Timestamp) -> MissionOutcome {
        if state.current_mission.completed {
            return MissionOutcome::AlreadyCompleted;
        }

        let mut next = state.clone();
        let reward = state.current_mission.xp_reward;
        next.current_mission.completed = true;
        next.xp = state.xp.saturating_add(reward);
        next.level = advance_level(state.level, next.xp);

        let event = ProgressEvent::MissionCompleted {
            mission_id: state.current_mission.id.clone(),
            xp_reward: reward,
            occurred_at: at,
        };
        let transition = with_level_up(Transition::new(next).with_event(event), state.level, at);
        MissionOutcome::Completed(transition)
    }
}

/// Level for an XP total, straight from the level table.
pub fn recompute_level(xp: u32) -> u8 {
    level_for_xp(xp).level
}

/// Levels only go up, even if the table would place `xp` lower.
fn advance_level(current: u8, xp: u32) -> u8 {
    current.max(recompute_level(xp))
}

fn with_level_up(transition: Transition, previous_level: u8, at: Timestamp) -> Transition {
    let level = transition.state.level;
    if level <= previous_level {
        return transition;
    }
    match level_entry(level) {
        Some(entry) => transition.with_event(ProgressEvent::LeveledUp {
            level,
            title: entry.title,
            occurred_at: at,
        }),
        None => transition,
    }
}

/// Prepends a mood entry. No other field changes.
pub fn log_mood(state: &ProgressState, value: MoodValue, at: Timestamp) -> Transition {
    let mut next = state.clone();
    next.mood_logs.insert(0, MoodLog { timestamp: at, value });
    Transition::new(next).with_event(ProgressEvent::MoodLogged {
        value,
        occurred_at: at,
    })
}

/// Prepends a craving entry with the advice that was shown for it.
pub fn log_craving(
    state: &ProgressState,
    trigger: &str,
    intensity: CravingIntensity,
    advice: impl Into<String>,
    at: Timestamp,
) -> Result<Transition, ProgressError> {
    let trigger = craving_trigger(trigger)?;

    let mut next = state.clone();
    next.craving_logs.insert(
        0,
        CravingLog {
            timestamp: at,
            trigger: trigger.to_string(),
            intensity,
            advice: advice.into(),
        },
    );
    Ok(Transition::new(next).with_event(ProgressEvent::CravingLogged {
        trigger: trigger.to_string(),
        intensity,
        occurred_at: at,
    }))
}

/// Replaces identity and config after validating the config.
pub fn update_profile(
    state: &ProgressState,
    first_name: &str,
    last_name: &str,
    config: UserConfig,
) -> Result<ProgressState, ProgressError> {
    config.validate()?;
    let mut next = state.clone();
    next.first_name = first_name.trim().to_string();
    next.last_name = last_name.trim().to_string();
    next.config = config;
    Ok(next)
}

/// Caches the reward image.
pub fn set_wish_image(state: &ProgressState, url: impl Into<String>) -> ProgressState {
    let mut next = state.clone();
    next.wish_image_url = Some(url.into());
    next
}
