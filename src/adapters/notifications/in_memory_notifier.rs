//! In-memory notifier for testing.
//!
//! Records every notification it is asked to send so tests can assert on
//! them, and can be told to fail to exercise best-effort delivery.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::catalog::LevelTitle;
use crate::domain::settings::Language;
use crate::ports::{NotifyError, Notifier};

/// A notification captured by `InMemoryNotifier`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentNotification {
    LevelUp {
        level: u8,
        title: LevelTitle,
        language: Language,
    },
    CheckInSuccess {
        days: u32,
        language: Language,
    },
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryNotifier {
    sent: Arc<Mutex<Vec<SentNotification>>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent send fail with `PermissionDenied`.
    pub fn fail_with_permission_denied(&self, fail: bool) {
        self.failing.store(fail, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<SentNotification> {
        self.lock().clone()
    }

    pub fn level_ups(&self) -> Vec<u8> {
        self.lock()
            .iter()
            .filter_map(|n| match n {
                SentNotification::LevelUp { level, .. } => Some(*level),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<SentNotification>> {
        self.sent.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, notification: SentNotification) -> Result<(), NotifyError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(NotifyError::PermissionDenied);
        }
        self.lock().push(notification);
        Ok(())
    }
}

#[async_trait]
impl Notifier for InMemoryNotifier {
    async fn notify_level_up(
        &self,
        level: u8,
        title: LevelTitle,
        language: Language,
    ) -> Result<(), NotifyError> {
        self.record(SentNotification::LevelUp {
            level,
            title,
            language,
        })
    }

    async fn notify_check_in_success(
        &self,
        days: u32,
        language: Language,
    ) -> Result<(), NotifyError> {
        self.record(SentNotification::CheckInSuccess { days, language })
    }
}
