//! Progress Store Port - Interface for persisting the progress snapshot.
//!
//! There is exactly one snapshot per device. It is written whole after
//! every transition and read once at startup.

use async_trait::async_trait;

use crate::domain::progress::ProgressState;

/// Errors that can occur during snapshot storage operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to serialize state: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize state: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::IoError(err.to_string())
    }
}

/// Port for loading and saving the progress snapshot
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Load the stored snapshot
    ///
    /// # Returns
    /// `Ok(None)` when nothing has been stored yet
    ///
    /// # Errors
    /// Returns `StoreError` if the stored data cannot be read or parsed
    async fn load(&self) -> Result<Option<ProgressState>, StoreError>;

    /// Replace the stored snapshot
    async fn save(&self, state: &ProgressState) -> Result<(), StoreError>;

    /// Remove the stored snapshot. Clearing an empty store is not an error.
    async fn clear(&self) -> Result<(), StoreError>;
}
