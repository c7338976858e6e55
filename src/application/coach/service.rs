//! CoachService - AI-backed advice with static fallbacks.
//!
//! Every call is bounded by a timeout. Any provider error, timeout or
//! missing provider yields the fixed fallback for that request, so callers
//! always get something to show.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::time::timeout;
use tracing::{debug, warn};

use super::personas;
use crate::domain::progress::CravingIntensity;
use crate::domain::settings::Language;
use crate::ports::{AIError, AIProvider, CompletionRequest, ImageRequest, MessageRole, ModelTier};

pub const CRAVING_FALLBACK: &str =
    "Protocol Delta: Focus on breath. Your neuro-resistance is at 100%.";
pub const WISDOM_FALLBACK: &str = "Every clean cell is a victory in your quantum architecture.";
pub const COACH_FALLBACK: &str = "Signal disruption. Maintain focus, Agent Elite.";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

const CRAVING_TEMPERATURE: f32 = 0.1;
const WISDOM_TEMPERATURE: f32 = 0.7;
const COACH_TEMPERATURE: f32 = 0.5;

// Craving advice and wisdom are one or two sentences.
const CRAVING_MAX_TOKENS: u32 = 120;
const WISDOM_MAX_TOKENS: u32 = 80;

/// Where a reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    Generated,
    Fallback,
}

/// Text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoachReply {
    pub text: String,
    pub source: ReplySource,
}

impl CoachReply {
    pub fn generated(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: ReplySource::Generated,
        }
    }

    pub fn fallback(text: &str) -> Self {
        Self {
            text: text.to_string(),
            source: ReplySource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == ReplySource::Fallback
    }
}

/// Which torso rendering to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnatomyVariant {
    Smoker,
    Recovered,
}

pub struct CoachService {
    provider: Option<Arc<dyn AIProvider>>,
    timeout: Duration,
}

impl CoachService {
    pub fn new(provider: Arc<dyn AIProvider>, timeout: Duration) -> Self {
        Self {
            provider: Some(provider),
            timeout,
        }
    }

    /// A coach with no provider; every call returns its fallback.
    pub fn offline() -> Self {
        Self {
            provider: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn is_online(&self) -> bool {
        self.provider.is_some()
    }

    /// Short calming command for an active craving.
    pub async fn craving_advice(
        &self,
        trigger: &str,
        intensity: CravingIntensity,
        language: Language,
    ) -> CoachReply {
        let request = CompletionRequest::new()
            .with_system_prompt(personas::craving_system_prompt(language))
            .with_message(MessageRole::User, personas::craving_prompt(trigger, intensity))
            .with_temperature(CRAVING_TEMPERATURE)
            .with_max_tokens(CRAVING_MAX_TOKENS);
        self.reply("craving_advice", request, CRAVING_FALLBACK).await
    }

    /// One-sentence affirmation for the current day.
    pub async fn daily_wisdom(&self, days: u32, target_days: u32, language: Language) -> CoachReply {
        let request = CompletionRequest::new()
            .with_system_prompt(personas::wisdom_system_prompt(language))
            .with_message(MessageRole::User, personas::wisdom_prompt(days, target_days))
            .with_temperature(WISDOM_TEMPERATURE)
            .with_max_tokens(WISDOM_MAX_TOKENS);
        self.reply("daily_wisdom", request, WISDOM_FALLBACK).await
    }

    /// Free-form question to the coach.
    pub async fn coach_reply(&self, inquiry: &str, days: u32, language: Language) -> CoachReply {
        if inquiry.trim().is_empty() {
            debug!("empty coach inquiry, using fallback");
            return CoachReply::fallback(COACH_FALLBACK);
        }
        let request = CompletionRequest::new()
            .with_system_prompt(personas::coach_system_prompt(language))
            .with_message(MessageRole::User, personas::coach_prompt(inquiry.trim(), days))
            .with_temperature(COACH_TEMPERATURE)
            .with_tier(ModelTier::Advanced);
        self.reply("coach_reply", request, COACH_FALLBACK).await
    }

    /// Reward image as a data URL, or `None` if nothing could be generated.
    pub async fn wish_image(&self, subject: &str) -> Option<String> {
        let request = ImageRequest::new(personas::wish_image_prompt(subject)).with_aspect_ratio("16:9");
        self.image("wish_image", request).await
    }

    /// Before/after torso rendering as a data URL.
    pub async fn anatomy_image(&self, variant: AnatomyVariant) -> Option<String> {
        let prompt = match variant {
            AnatomyVariant::Smoker => personas::SMOKER_ANATOMY_PROMPT,
            AnatomyVariant::Recovered => personas::RECOVERED_ANATOMY_PROMPT,
        };
        self.image("anatomy_image", ImageRequest::new(prompt).with_aspect_ratio("1:1"))
            .await
    }

    async fn reply(
        &self,
        operation: &'static str,
        request: CompletionRequest,
        fallback: &'static str,
    ) -> CoachReply {
        let provider = match &self.provider {
            Some(provider) => provider,
            None => return CoachReply::fallback(fallback),
        };

        let result = match timeout(self.timeout, provider.complete(request)).await {
            Ok(result) => result,
            Err(_) => Err(AIError::timeout(self.timeout.as_secs())),
        };

        match result {
            Ok(response) if !response.content.trim().is_empty() => {
                debug!(operation, model = %response.model, "coach reply generated");
                CoachReply::generated(response.content.trim())
            }
            Ok(_) => {
                warn!(operation, "coach reply was empty, using fallback");
                CoachReply::fallback(fallback)
            }
            Err(e) => {
                warn!(operation, error = %e, "coach request failed, using fallback");
                CoachReply::fallback(fallback)
            }
        }
    }

    async fn image(&self, operation: &'static str, request: ImageRequest) -> Option<String> {
        let provider = self.provider.as_ref()?;

        match timeout(self.timeout, provider.generate_image(request)).await {
            Ok(Ok(image)) => Some(image.to_data_url()),
            Ok(Err(e)) => {
                warn!(operation, error = %e, "image generation failed");
                None
            }
            Err(_) => {
                warn!(operation, timeout_secs = self.timeout.as_secs(), "image generation timed out");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};

    fn coach(provider: &MockAIProvider) -> CoachService {
        CoachService::new(Arc::new(provider.clone()), Duration::from_secs(5))
    }

    #[tokio::test]
    async fn craving_advice_uses_low_temperature_and_persona() {
        let provider = MockAIProvider::new().with_response("  Inhale four, hold four, exhale six.  ");

        let reply = coach(&provider)
            .craving_advice("Stress", CravingIntensity::SOS, Language::En)
            .await;

        assert_eq!(reply, CoachReply::generated("Inhale four, hold four, exhale six."));
        let call = &provider.get_calls()[0];
        assert_eq!(call.temperature, Some(0.1));
        assert_eq!(call.max_tokens, Some(CRAVING_MAX_TOKENS));
        assert_eq!(call.tier, ModelTier::Standard);
        assert!(call.system_prompt.as_deref().unwrap().contains("Always respond in English"));
        assert!(call.messages[0].content.contains("[Stress]"));
    }

    #[tokio::test]
    async fn craving_advice_falls_back_on_error() {
        let provider = MockAIProvider::new().with_error(MockError::Unavailable {
            message: "down".to_string(),
        });

        let reply = coach(&provider)
            .craving_advice("Habit", CravingIntensity::SOS, Language::Fr)
            .await;

        assert!(reply.is_fallback());
        assert_eq!(reply.text, CRAVING_FALLBACK);
    }

    #[tokio::test]
    async fn daily_wisdom_uses_day_counter() {
        let provider = MockAIProvider::new().with_response("Your breath is your anchor.");

        let reply = coach(&provider).daily_wisdom(3, 30, Language::Fr).await;

        assert_eq!(reply.source, ReplySource::Generated);
        let call = &provider.get_calls()[0];
        assert_eq!(call.temperature, Some(0.7));
        assert_eq!(call.max_tokens, Some(WISDOM_MAX_TOKENS));
        assert!(call.messages[0].content.starts_with("Mission Day: 3/30."));
    }

    #[tokio::test]
    async fn coach_reply_uses_advanced_tier() {
        let provider = MockAIProvider::new().with_response("Sleep comes back within a week.");

        let reply = coach(&provider)
            .coach_reply("When will I sleep well?", 2, Language::Es)
            .await;

        assert!(!reply.is_fallback());
        let call = &provider.get_calls()[0];
        assert_eq!(call.tier, ModelTier::Advanced);
        assert_eq!(call.temperature, Some(0.5));
    }

    #[tokio::test]
    async fn blank_inquiry_skips_provider() {
        let provider = MockAIProvider::new();

        let reply = coach(&provider).coach_reply("   ", 2, Language::En).await;

        assert_eq!(reply.text, COACH_FALLBACK);
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn empty_generation_falls_back() {
        let provider = MockAIProvider::new().with_response("   ");

        let reply = coach(&provider).daily_wisdom(1, 30, Language::En).await;

        assert_eq!(reply, CoachReply::fallback(WISDOM_FALLBACK));
    }

    #[tokio::test]
    async fn slow_provider_times_out_to_fallback() {
        let provider = MockAIProvider::new()
            .with_response("too late")
            .with_delay(Duration::from_millis(500));
        let coach = CoachService::new(Arc::new(provider), Duration::from_millis(20));

        let reply = coach.coach_reply("Hello?", 1, Language::En).await;

        assert_eq!(reply, CoachReply::fallback(COACH_FALLBACK));
    }

    #[tokio::test]
    async fn offline_coach_always_falls_back() {
        let coach = CoachService::offline();

        assert!(!coach.is_online());
        assert!(coach
            .craving_advice("Fatigue", CravingIntensity::SOS, Language::Ar)
            .await
            .is_fallback());
        assert!(coach.wish_image("a bicycle").await.is_none());
    }

    #[tokio::test]
    async fn wish_image_returns_data_url() {
        let provider = MockAIProvider::new().with_image("image/png", "AAAA");

        let url = coach(&provider).wish_image("a red bicycle").await;

        assert_eq!(url.as_deref(), Some("data:image/png;base64,AAAA"));
        let call = &provider.get_image_calls()[0];
        assert!(call.prompt.contains("a red bicycle"));
        assert_eq!(call.aspect_ratio.as_deref(), Some("16:9"));
    }

    #[tokio::test]
    async fn image_failure_yields_none() {
        let provider = MockAIProvider::new().with_image_error(MockError::AuthenticationFailed);

        assert!(coach(&provider).wish_image("anything").await.is_none());
    }

    #[tokio::test]
    async fn anatomy_image_is_square() {
        let provider = MockAIProvider::new().with_image("image/png", "BBBB");

        let url = coach(&provider).anatomy_image(AnatomyVariant::Recovered).await;

        assert!(url.is_some());
        let call = &provider.get_image_calls()[0];
        assert_eq!(call.aspect_ratio.as_deref(), Some("1:1"));
        assert!(call.prompt.contains("perfectly healthy"));
    }
}
