//! ProgressService - owns the live snapshot and wires the ledger to its ports.
//!
//! Every operation follows the same sequence:
//!
//! 1. lock the snapshot
//! 2. run the pure ledger transition
//! 3. write the new snapshot through to the store
//! 4. hand the emitted events to a background notification task
//!
//! Notifications run after the snapshot lock is released, so a slow notifier
//! never delays the next operation. Call [`ProgressService::flush_notifications`]
//! before shutdown to wait for the ones still in flight.
//!
//! Save and notification failures are logged and never fail the operation.
//! The in-memory snapshot stays authoritative for the rest of the process.

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::Mutex;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::domain::foundation::Timestamp;
use crate::domain::overview::ProgressOverview;
use crate::domain::progress::{
    self, CheckInOutcome, CravingIntensity, MissionOutcome, MoodValue, ProgressError,
    ProgressEvent, ProgressLedger, ProgressState,
};
use crate::domain::settings::{Language, UserConfig};
use crate::ports::{Notifier, ProgressStore};

pub struct ProgressService {
    state: Mutex<ProgressState>,
    ledger: ProgressLedger,
    store: Arc<dyn ProgressStore>,
    notifier: Arc<dyn Notifier>,
    pending: std::sync::Mutex<JoinSet<()>>,
}

impl ProgressService {
    /// Creates a service around an already loaded snapshot.
    pub fn new(
        state: ProgressState,
        ledger: ProgressLedger,
        store: Arc<dyn ProgressStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            state: Mutex::new(state),
            ledger,
            store,
            notifier,
            pending: std::sync::Mutex::new(JoinSet::new()),
        }
    }

    /// Loads the stored snapshot and builds the service.
    ///
    /// A missing, unreadable or corrupt snapshot yields the default state.
    pub async fn open(
        ledger: ProgressLedger,
        store: Arc<dyn ProgressStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let state = match store.load().await {
            Ok(Some(state)) => {
                debug!(days = state.days, xp = state.xp, "loaded progress snapshot");
                state.normalized()
            }
            Ok(None) => {
                info!("no stored progress, starting fresh");
                ProgressState::default()
            }
            Err(e) => {
                warn!(error = %e, "failed to load progress, starting fresh");
                ProgressState::default()
            }
        };
        Self::new(state, ledger, store, notifier)
    }

    /// Copy of the current snapshot.
    pub async fn snapshot(&self) -> ProgressState {
        self.state.lock().await.clone()
    }

    pub async fn overview(&self, today: NaiveDate) -> ProgressOverview {
        ProgressOverview::build(&*self.state.lock().await, today)
    }

    pub async fn check_in(&self, today: NaiveDate, at: Timestamp) -> CheckInOutcome {
        let mut state = self.state.lock().await;
        let outcome = self.ledger.check_in(&state, today, at);

        match &outcome {
            CheckInOutcome::Accepted(transition) => {
                *state = transition.state.clone();
                self.persist(&state).await;
                self.dispatch(transition.events.clone(), state.config.language);
            }
            CheckInOutcome::AlreadyCheckedIn => {
                debug!(%today, "check-in already recorded for today");
            }
            CheckInOutcome::OutOfOrder { last_check_in } => {
                warn!(%today, %last_check_in, "check-in date is before the last check-in, ignored");
            }
        }
        outcome
    }

    pub async fn complete_mission(&self, at: Timestamp) -> MissionOutcome {
        let mut state = self.state.lock().await;
        let outcome = self.ledger.complete_mission(&state, at);

        if let MissionOutcome::Completed(transition) = &outcome {
            *state = transition.state.clone();
            self.persist(&state).await;
            self.dispatch(transition.events.clone(), state.config.language);
        }
        outcome
    }

    pub async fn log_mood(&self, value: MoodValue, at: Timestamp) -> ProgressState {
        let mut state = self.state.lock().await;
        let transition = progress::log_mood(&state, value, at);
        *state = transition.state;
        self.persist(&state).await;
        self.dispatch(transition.events, state.config.language);
        state.clone()
    }

    /// Records a craving together with the advice shown for it.
    pub async fn log_craving(
        &self,
        trigger: &str,
        intensity: CravingIntensity,
        advice: impl Into<String>,
        at: Timestamp,
    ) -> Result<ProgressState, ProgressError> {
        let mut state = self.state.lock().await;
        let transition = progress::log_craving(&state, trigger, intensity, advice, at)?;
        *state = transition.state;
        self.persist(&state).await;
        self.dispatch(transition.events, state.config.language);
        Ok(state.clone())
    }

    pub async fn update_profile(
        &self,
        first_name: &str,
        last_name: &str,
        config: UserConfig,
    ) -> Result<ProgressState, ProgressError> {
        let mut state = self.state.lock().await;
        *state = progress::update_profile(&state, first_name, last_name, config)?;
        self.persist(&state).await;
        Ok(state.clone())
    }

    pub async fn set_wish_image(&self, url: impl Into<String>) -> ProgressState {
        let mut state = self.state.lock().await;
        *state = progress::set_wish_image(&state, url);
        self.persist(&state).await;
        state.clone()
    }

    /// Wipes stored progress and starts over from the default snapshot.
    pub async fn reset(&self) -> ProgressState {
        let mut state = self.state.lock().await;
        if let Err(e) = self.store.clear().await {
            warn!(error = %e, "failed to clear stored progress");
        }
        *state = ProgressState::default();
        info!("progress reset");
        state.clone()
    }

    async fn persist(&self, state: &ProgressState) {
        if let Err(e) = self.store.save(state).await {
            warn!(error = %e, "failed to save progress, keeping in-memory state");
        }
    }

    /// Waits for every notification task spawned so far.
    pub async fn flush_notifications(&self) {
        let mut tasks = match self.pending.lock() {
            Ok(mut pending) => std::mem::take(&mut *pending),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        };
        while let Some(result) = tasks.join_next().await {
            if let Err(e) = result {
                warn!(error = %e, "notification task failed");
            }
        }
    }

    /// Spawns delivery of `events`; the caller does not wait for the notifier.
    fn dispatch(&self, events: Vec<ProgressEvent>, language: Language) {
        if events.is_empty() {
            return;
        }
        let notifier = Arc::clone(&self.notifier);
        let mut pending = match self.pending.lock() {
            Ok(pending) => pending,
            Err(poisoned) => poisoned.into_inner(),
        };
        while pending.try_join_next().is_some() {}
        pending.spawn(deliver(notifier, events, language));
    }
}

async fn deliver(notifier: Arc<dyn Notifier>, events: Vec<ProgressEvent>, language: Language) {
    for event in &events {
        info!(event_type = event.event_type(), "progress event");

        let result = match event {
            ProgressEvent::CheckedIn { days, .. } => {
                notifier.notify_check_in_success(*days, language).await
            }
            ProgressEvent::LeveledUp { level, title, .. } => {
                notifier.notify_level_up(*level, *title, language).await
            }
            _ => Ok(()),
        };

        if let Err(e) = result {
            warn!(event_type = event.event_type(), error = %e, "notification not delivered");
        }
    }
}
