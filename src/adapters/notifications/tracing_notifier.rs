//! Notifier that renders notifications into the structured log.

use async_trait::async_trait;

use super::NotificationMessage;
use crate::domain::catalog::LevelTitle;
use crate::domain::settings::Language;
use crate::ports::{NotifyError, Notifier};

/// Logs each notification at `info` under the `notification` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }

    fn emit(&self, kind: &'static str, message: NotificationMessage) {
        tracing::info!(
            target: "notification",
            kind,
            title = %message.title,
            body = %message.body,
            "notification sent"
        );
    }
}

#[async_trait]
impl Notifier for TracingNotifier {
    async fn notify_level_up(
        &self,
        level: u8,
        title: LevelTitle,
        language: Language,
    ) -> Result<(), NotifyError> {
        self.emit("level_up", NotificationMessage::level_up(level, title, language));
        Ok(())
    }

    async fn notify_check_in_success(
        &self,
        days: u32,
        language: Language,
    ) -> Result<(), NotifyError> {
        self.emit("check_in", NotificationMessage::check_in_success(days, language));
        Ok(())
    }
}

/// Discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpNotifier;

#[async_trait]
impl Notifier for NoOpNotifier {
    async fn notify_level_up(&self, _: u8, _: LevelTitle, _: Language) -> Result<(), NotifyError> {
        Ok(())
    }

    async fn notify_check_in_success(&self, _: u32, _: Language) -> Result<(), NotifyError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn tracing_notifier_always_succeeds() {
        let notifier = TracingNotifier::new();
        assert!(notifier
            .notify_level_up(2, LevelTitle::Initiated, Language::Fr)
            .await
            .is_ok());
        assert!(notifier
            .notify_check_in_success(1, Language::En)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn noop_notifier_succeeds() {
        assert!(NoOpNotifier.notify_check_in_success(3, Language::Es).await.is_ok());
    }
}
