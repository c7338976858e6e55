//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence
//!
//! - `ProgressStore` - Loads and saves the single progress snapshot
//!
//! ## Collaborators
//!
//! - `Notifier` - Best-effort level-up and check-in notifications
//! - `AIProvider` - Text and image generation for the coach

mod ai_provider;
mod notifier;
mod progress_store;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, GeneratedImage,
    ImageRequest, Message, MessageRole, ModelTier, ProviderInfo,
};
pub use notifier::{NotifyError, Notifier};
pub use progress_store::{ProgressStore, StoreError};
