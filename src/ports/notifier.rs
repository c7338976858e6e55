//! Notifier port - Interface for user-facing progress notifications.
//!
//! Delivery is best-effort: callers log failures and carry on.

use async_trait::async_trait;

use crate::domain::catalog::LevelTitle;
use crate::domain::settings::Language;

/// Port for announcing milestones to the user.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// The user reached `level` with the given title.
    async fn notify_level_up(
        &self,
        level: u8,
        title: LevelTitle,
        language: Language,
    ) -> Result<(), NotifyError>;

    /// A check-in was accepted; `days` is the new day count.
    async fn notify_check_in_success(&self, days: u32, language: Language)
        -> Result<(), NotifyError>;
}

/// Notification delivery errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotifyError {
    /// The user has not granted notification permission.
    #[error("notification permission denied")]
    PermissionDenied,

    /// Notifications are not available on this platform.
    #[error("notifications unsupported: {0}")]
    Unsupported(String),

    #[error("delivery failed: {0}")]
    DeliveryFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn Notifier) {}

    #[test]
    fn notify_error_display() {
        assert_eq!(
            NotifyError::PermissionDenied.to_string(),
            "notification permission denied"
        );
        assert_eq!(
            NotifyError::DeliveryFailed("socket closed".into()).to_string(),
            "delivery failed: socket closed"
        );
    }
}
