//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port.
//!
//! ## Available Adapters
//!
//! - `MockAIProvider` - Configurable mock for testing
//! - `GeminiProvider` - Google Gemini text and image models

mod gemini_provider;
mod mock_provider;

pub use gemini_provider::{
    GeminiConfig, GeminiProvider, DEFAULT_ADVANCED_MODEL, DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL,
    DEFAULT_STANDARD_MODEL,
};
pub use mock_provider::{MockAIProvider, MockError, MockResponse};
