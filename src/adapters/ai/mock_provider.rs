//! Mock AI Provider for testing.
//!
//! Provides a configurable mock implementation of the AIProvider port,
//! allowing tests to run without calling real AI APIs.
//!
//! # Features
//!
//! - Pre-configured text and image responses
//! - Simulated delays for timeout testing
//! - Error injection for fallback testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAIProvider::new()
//!     .with_response("Breathe in for four seconds.")
//!     .with_delay(Duration::from_millis(100));
//!
//! let response = provider.complete(request).await?;
//! assert_eq!(response.content, "Breathe in for four seconds.");
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, GeneratedImage,
    ImageRequest, ProviderInfo,
};

/// Mock AI provider for testing.
///
/// Configurable to return specific responses, simulate delays, or inject errors.
#[derive(Debug, Clone)]
pub struct MockAIProvider {
    /// Pre-configured text responses (consumed in order).
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Pre-configured image responses (consumed in order).
    images: Arc<Mutex<VecDeque<Result<GeneratedImage, MockError>>>>,
    info: ProviderInfo,
    /// Simulated latency per request.
    delay: Duration,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
    image_calls: Arc<Mutex<Vec<ImageRequest>>>,
}

/// A configured mock text response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success {
        content: String,
        finish_reason: FinishReason,
    },
    Error(MockError),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    RateLimited { retry_after_secs: u32 },
    ContentFiltered { reason: String },
    Unavailable { message: String },
    AuthenticationFailed,
    Network { message: String },
    EmptyResponse,
}

impl From<MockError> for AIError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited { retry_after_secs } => AIError::rate_limited(retry_after_secs),
            MockError::ContentFiltered { reason } => AIError::content_filtered(reason),
            MockError::Unavailable { message } => AIError::unavailable(message),
            MockError::AuthenticationFailed => AIError::AuthenticationFailed,
            MockError::Network { message } => AIError::network(message),
            MockError::EmptyResponse => AIError::EmptyResponse,
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Default for MockAIProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAIProvider {
    /// Creates a new mock provider with default settings.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            images: Arc::new(Mutex::new(VecDeque::new())),
            info: ProviderInfo::new("mock", "mock-model-1")
                .with_advanced_model("mock-model-pro")
                .with_image_model("mock-image-1"),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
            image_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a successful text response to the queue.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.with_response_full(content, FinishReason::Stop)
    }

    pub fn with_response_full(self, content: impl Into<String>, finish_reason: FinishReason) -> Self {
        lock(&self.responses).push_back(MockResponse::Success {
            content: content.into(),
            finish_reason,
        });
        self
    }

    /// Adds an error to the text response queue.
    pub fn with_error(self, error: MockError) -> Self {
        lock(&self.responses).push_back(MockResponse::Error(error));
        self
    }

    /// Adds a generated image to the image queue.
    pub fn with_image(self, mime_type: impl Into<String>, data_base64: impl Into<String>) -> Self {
        lock(&self.images).push_back(Ok(GeneratedImage::new(mime_type, data_base64)));
        self
    }

    /// Adds an error to the image queue.
    pub fn with_image_error(self, error: MockError) -> Self {
        lock(&self.images).push_back(Err(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_provider_info(mut self, info: ProviderInfo) -> Self {
        self.info = info;
        self
    }

    /// Returns the number of text calls made to this provider.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Returns all recorded text calls.
    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        lock(&self.calls).clone()
    }

    /// Returns all recorded image calls.
    pub fn get_image_calls(&self) -> Vec<ImageRequest> {
        lock(&self.image_calls).clone()
    }

    pub fn clear_calls(&self) {
        lock(&self.calls).clear();
        lock(&self.image_calls).clear();
    }

    /// Gets the next response or a default.
    fn next_response(&self) -> MockResponse {
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| MockResponse::Success {
                content: "Mock response".to_string(),
                finish_reason: FinishReason::Stop,
            })
    }

    /// Gets the next image; an empty queue means the model produced nothing.
    fn next_image(&self) -> Result<GeneratedImage, MockError> {
        lock(&self.images)
            .pop_front()
            .unwrap_or(Err(MockError::EmptyResponse))
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let model = self.info.model_for(request.tier).to_string();
        lock(&self.calls).push(request);

        self.simulate_latency().await;

        match self.next_response() {
            MockResponse::Success {
                content,
                finish_reason,
            } => Ok(CompletionResponse {
                content,
                model,
                finish_reason,
            }),
            MockResponse::Error(err) => Err(err.into()),
        }
    }

    async fn generate_image(&self, request: ImageRequest) -> Result<GeneratedImage, AIError> {
        lock(&self.image_calls).push(request);

        self.simulate_latency().await;

        self.next_image().map_err(AIError::from)
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}
