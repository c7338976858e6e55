//! Gemini Provider - Implementation of AIProvider for Google's Generative Language API.
//!
//! Text and image generation both go through the `generateContent` endpoint;
//! images come back as `inlineData` parts carrying base64 payloads.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(api_key)
//!     .with_standard_model("gemini-3-flash-preview")
//!     .with_base_url("https://generativelanguage.googleapis.com/v1beta");
//!
//! let provider = GeminiProvider::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, GeneratedImage,
    ImageRequest, MessageRole, ModelTier, ProviderInfo,
};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_STANDARD_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_ADVANCED_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-3-pro-image-preview";

/// Longest wait between two retries.
const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// Exponential backoff: 1s, 2s, 4s, ... capped at [`MAX_BACKOFF`].
fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_secs(2u64.saturating_pow(attempt)).min(MAX_BACKOFF)
}

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    pub standard_model: String,
    pub advanced_model: String,
    pub image_model: String,
    pub base_url: String,
    /// Per-request HTTP timeout.
    pub timeout: Duration,
    /// Maximum retries on transient failures.
    pub max_retries: u32,
}

impl GeminiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            standard_model: DEFAULT_STANDARD_MODEL.to_string(),
            advanced_model: DEFAULT_ADVANCED_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 1,
        }
    }

    pub fn with_standard_model(mut self, model: impl Into<String>) -> Self {
        self.standard_model = model.into();
        self
    }

    pub fn with_advanced_model(mut self, model: impl Into<String>) -> Self {
        self.advanced_model = model.into();
        self
    }

    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the maximum retry count.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    fn model_for(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Standard => &self.standard_model,
            ModelTier::Advanced => &self.advanced_model,
        }
    }
}

/// Gemini API provider implementation.
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    /// Creates a new Gemini provider with the given configuration.
    ///
    /// Fails if the key is blank or the HTTP client cannot be built.
    pub fn new(config: GeminiConfig) -> Result<Self, AIError> {
        if config.api_key().trim().is_empty() {
            return Err(AIError::NotConfigured("Gemini API key is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::NotConfigured(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the generateContent endpoint URL for a model.
    fn generate_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }

    /// Sends a request body to `model`, retrying transient failures.
    async fn generate(&self, model: &str, body: &GeminiRequest) -> Result<GeminiResponse, AIError> {
        let mut attempt = 0;

        loop {
            let result = match self.send_request(model, body).await {
                Ok(response) => self.parse_response(response).await,
                Err(err) => Err(err),
            };

            match result {
                Ok(parsed) => return Ok(parsed),
                Err(err) if err.is_retryable() && attempt < self.config.max_retries => {
                    tracing::warn!(model, attempt, error = %err, "Gemini request failed, retrying");
                    sleep(backoff_delay(attempt)).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn send_request(&self, model: &str, body: &GeminiRequest) -> Result<Response, AIError> {
        self.client
            .post(self.generate_url(model))
            .header("x-goog-api-key", self.config.api_key())
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AIError::timeout(self.config.timeout.as_secs())
                } else if e.is_connect() {
                    AIError::network(format!("Connection failed: {}", e))
                } else {
                    AIError::network(e.to_string())
                }
            })
    }

    async fn parse_response(&self, response: Response) -> Result<GeminiResponse, AIError> {
        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(map_error_status(status.as_u16(), error_body));
        }

        response
            .json()
            .await
            .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl AIProvider for GeminiProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let model = self.config.model_for(request.tier).to_string();
        let body = GeminiRequest::from_completion(&request);

        let response = self.generate(&model, &body).await?;
        let (content, finish_reason) = extract_text(response)?;

        Ok(CompletionResponse {
            content,
            model,
            finish_reason,
        })
    }

    async fn generate_image(&self, request: ImageRequest) -> Result<GeneratedImage, AIError> {
        let body = GeminiRequest::from_image(&request);
        let response = self.generate(&self.config.image_model, &body).await?;
        extract_image(response)
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("gemini", &self.config.standard_model)
            .with_advanced_model(&self.config.advanced_model)
            .with_image_model(&self.config.image_model)
    }
}

fn map_error_status(status: u16, error_body: String) -> AIError {
    match status {
        401 | 403 => AIError::AuthenticationFailed,
        429 => AIError::rate_limited(30),
        400 => AIError::InvalidRequest(error_body),
        500..=599 => AIError::unavailable(format!("Server error {}: {}", status, error_body)),
        _ => AIError::network(format!("Unexpected status {}: {}", status, error_body)),
    }
}

fn map_finish_reason(reason: Option<&str>) -> FinishReason {
    match reason {
        None | Some("STOP") => FinishReason::Stop,
        Some("MAX_TOKENS") => FinishReason::Length,
        Some("SAFETY") | Some("PROHIBITED_CONTENT") | Some("BLOCKLIST") => {
            FinishReason::ContentFilter
        }
        Some(_) => FinishReason::Other,
    }
}

/// Returns the first candidate, or the reason the prompt was blocked.
fn first_candidate(response: GeminiResponse) -> Result<GeminiCandidate, AIError> {
    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(AIError::content_filtered(reason));
    }
    response
        .candidates
        .into_iter()
        .next()
        .ok_or(AIError::EmptyResponse)
}

fn extract_text(response: GeminiResponse) -> Result<(String, FinishReason), AIError> {
    let candidate = first_candidate(response)?;
    let finish_reason = map_finish_reason(candidate.finish_reason.as_deref());

    let text: String = candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|p| p.text)
        .collect();

    if text.trim().is_empty() {
        return match finish_reason {
            FinishReason::ContentFilter => Err(AIError::content_filtered("response blocked")),
            _ => Err(AIError::EmptyResponse),
        };
    }
    Ok((text.trim().to_string(), finish_reason))
}

fn extract_image(response: GeminiResponse) -> Result<GeneratedImage, AIError> {
    let candidate = first_candidate(response)?;
    candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .find_map(|p| p.inline_data)
        .map(|data| GeneratedImage::new(data.mime_type, data.data))
        .ok_or(AIError::EmptyResponse)
}

// ----- Gemini API Types -----

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl GeminiRequest {
    fn from_completion(request: &CompletionRequest) -> Self {
        let contents = request
            .messages
            .iter()
            .map(|msg| GeminiContent {
                role: Some(
                    match msg.role {
                        MessageRole::User => "user",
                        MessageRole::Assistant => "model",
                    }
                    .to_string(),
                ),
                parts: vec![GeminiPart::text(&msg.content)],
            })
            .collect();

        Self {
            contents,
            system_instruction: request.system_prompt.as_ref().map(|prompt| GeminiContent {
                role: None,
                parts: vec![GeminiPart::text(prompt)],
            }),
            generation_config: Some(GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_tokens,
                image_config: None,
            }),
        }
    }

    fn from_image(request: &ImageRequest) -> Self {
        Self {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart::text(&request.prompt)],
            }],
            system_instruction: None,
            generation_config: request.aspect_ratio.as_ref().map(|ratio| GenerationConfig {
                temperature: None,
                max_output_tokens: None,
                image_config: Some(ImageConfig {
                    aspect_ratio: ratio.clone(),
                }),
            }),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

impl GeminiPart {
    fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            inline_data: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_config: Option<ImageConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageConfig {
    aspect_ratio: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> GeminiResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn backoff_doubles_then_caps() {
        assert_eq!(backoff_delay(0), Duration::from_secs(1));
        assert_eq!(backoff_delay(3), Duration::from_secs(8));
        assert_eq!(backoff_delay(5), MAX_BACKOFF);
        assert_eq!(backoff_delay(64), MAX_BACKOFF);
        assert_eq!(backoff_delay(u32::MAX), MAX_BACKOFF);
    }

    #[test]
    fn config_builder_works() {
        let config = GeminiConfig::new("test-key")
            .with_standard_model("flash")
            .with_advanced_model("pro")
            .with_image_model("pro-image")
            .with_base_url("https://custom.api.com")
            .with_timeout(Duration::from_secs(5))
            .with_max_retries(3);

        assert_eq!(config.model_for(ModelTier::Standard), "flash");
        assert_eq!(config.model_for(ModelTier::Advanced), "pro");
        assert_eq!(config.image_model, "pro-image");
        assert_eq!(config.base_url, "https://custom.api.com");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.api_key(), "test-key");
    }

    #[test]
    fn debug_output_hides_api_key() {
        let config = GeminiConfig::new("super-secret");
        assert!(!format!("{:?}", config).contains("super-secret"));
    }

    #[test]
    fn blank_api_key_is_rejected() {
        let result = GeminiProvider::new(GeminiConfig::new("  "));
        assert!(matches!(result, Err(AIError::NotConfigured(_))));
    }

    #[test]
    fn generate_url_targets_model() {
        let provider =
            GeminiProvider::new(GeminiConfig::new("k").with_base_url("https://host/v1beta/")).unwrap();
        assert_eq!(
            provider.generate_url("gemini-3-flash-preview"),
            "https://host/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn provider_info_lists_models() {
        let provider = GeminiProvider::new(GeminiConfig::new("k")).unwrap();
        let info = provider.provider_info();
        assert_eq!(info.name, "gemini");
        assert_eq!(info.standard_model, DEFAULT_STANDARD_MODEL);
        assert_eq!(info.advanced_model, DEFAULT_ADVANCED_MODEL);
        assert_eq!(info.image_model, DEFAULT_IMAGE_MODEL);
    }

    #[test]
    fn completion_request_serializes_to_gemini_shape() {
        let request = CompletionRequest::new()
            .with_system_prompt("Be calm")
            .with_message(MessageRole::User, "Craving")
            .with_temperature(0.1);

        let body = serde_json::to_value(GeminiRequest::from_completion(&request)).unwrap();

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Craving");
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "Be calm");
        assert!(body["systemInstruction"].get("role").is_none());
        assert!((body["generationConfig"]["temperature"].as_f64().unwrap() - 0.1).abs() < 1e-6);
        assert!(body["generationConfig"].get("maxOutputTokens").is_none());
    }

    #[test]
    fn image_request_carries_aspect_ratio() {
        let request = ImageRequest::new("a bicycle").with_aspect_ratio("16:9");
        let body = serde_json::to_value(GeminiRequest::from_image(&request)).unwrap();

        assert_eq!(body["contents"][0]["parts"][0]["text"], "a bicycle");
        assert_eq!(body["generationConfig"]["imageConfig"]["aspectRatio"], "16:9");
    }

    #[test]
    fn extracts_and_joins_text_parts() {
        let response = parse(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Breathe "}, {"text": "slowly."}]},
                "finishReason": "STOP"
            }]
        }));

        let (text, reason) = extract_text(response).unwrap();
        assert_eq!(text, "Breathe slowly.");
        assert_eq!(reason, FinishReason::Stop);
    }

    #[test]
    fn blocked_prompt_is_content_filtered() {
        let response = parse(json!({"promptFeedback": {"blockReason": "SAFETY"}}));
        assert!(matches!(
            extract_text(response),
            Err(AIError::ContentFiltered { .. })
        ));
    }

    #[test]
    fn empty_candidates_is_empty_response() {
        let response = parse(json!({"candidates": []}));
        assert_eq!(extract_text(response).unwrap_err(), AIError::EmptyResponse);
    }

    #[test]
    fn extracts_inline_image_data() {
        let response = parse(json!({
            "candidates": [{
                "content": {"parts": [
                    {"text": "Here is your image"},
                    {"inlineData": {"mimeType": "image/png", "data": "iVBORw0"}}
                ]}
            }]
        }));

        let image = extract_image(response).unwrap();
        assert_eq!(image.to_data_url(), "data:image/png;base64,iVBORw0");
    }

    #[test]
    fn image_response_without_inline_data_is_empty() {
        let response = parse(json!({
            "candidates": [{"content": {"parts": [{"text": "no image"}]}}]
        }));
        assert_eq!(extract_image(response).unwrap_err(), AIError::EmptyResponse);
    }

    #[test]
    fn error_statuses_map_to_ai_errors() {
        assert_eq!(map_error_status(403, String::new()), AIError::AuthenticationFailed);
        assert!(matches!(map_error_status(429, String::new()), AIError::RateLimited { .. }));
        assert!(map_error_status(503, "down".into()).is_retryable());
        assert!(matches!(
            map_error_status(400, "bad".into()),
            AIError::InvalidRequest(ref body) if body == "bad"
        ));
    }

    #[test]
    fn finish_reasons_map() {
        assert_eq!(map_finish_reason(Some("MAX_TOKENS")), FinishReason::Length);
        assert_eq!(map_finish_reason(Some("SAFETY")), FinishReason::ContentFilter);
        assert_eq!(map_finish_reason(Some("RECITATION")), FinishReason::Other);
        assert_eq!(map_finish_reason(None), FinishReason::Stop);
    }
}
