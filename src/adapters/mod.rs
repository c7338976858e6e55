//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Progress snapshot persistence (JSON file, in-memory)
//! - `notifications` - Notifier implementations (log, in-memory, no-op)
//! - `ai` - Generative AI providers (Gemini, mock)

pub mod ai;
pub mod notifications;
pub mod storage;

pub use ai::{GeminiConfig, GeminiProvider, MockAIProvider};
pub use notifications::{InMemoryNotifier, NoOpNotifier, TracingNotifier};
pub use storage::{InMemoryProgressStore, JsonFileProgressStore};
