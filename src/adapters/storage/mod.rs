//! Storage Adapters
//!
//! Implementations of the ProgressStore port.
//!
//! ## Available Adapters
//!
//! - **JsonFileProgressStore** - Stores the snapshot as a JSON file on disk
//! - **InMemoryProgressStore** - Stores the snapshot in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{InMemoryProgressStore, JsonFileProgressStore};
//!
//! // Production: file-based storage
//! let store = JsonFileProgressStore::new("./data");
//!
//! // Testing: in-memory storage
//! let store = InMemoryProgressStore::new();
//! ```

mod in_memory_progress_store;
mod json_file_progress_store;

pub use in_memory_progress_store::InMemoryProgressStore;
pub use json_file_progress_store::{JsonFileProgressStore, STORAGE_KEY};
