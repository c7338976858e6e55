//! JSON File Progress Store Adapter
//!
//! Stores the progress snapshot as a single JSON document on disk, named
//! after the storage key. Writes go to a sibling temp file which is then
//! renamed over the target, so a crash never leaves a half-written snapshot.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::progress::ProgressState;
use crate::ports::{ProgressStore, StoreError};

/// Storage key the snapshot file is named after.
pub const STORAGE_KEY: &str = "bila_elite_v2_final";

/// File-based storage for the progress snapshot
#[derive(Debug, Clone)]
pub struct JsonFileProgressStore {
    base_path: PathBuf,
}

impl JsonFileProgressStore {
    /// Create a store rooted at `base_path`
    ///
    /// # Example
    /// ```ignore
    /// let store = JsonFileProgressStore::new("./data");
    /// // snapshot lives at ./data/bila_elite_v2_final.json
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Path of the snapshot file
    pub fn file_path(&self) -> PathBuf {
        self.base_path.join(format!("{}.json", STORAGE_KEY))
    }

    fn temp_path(&self) -> PathBuf {
        self.base_path.join(format!("{}.json.tmp", STORAGE_KEY))
    }
}

#[async_trait]
impl ProgressStore for JsonFileProgressStore {
    async fn load(&self) -> Result<Option<ProgressState>, StoreError> {
        let file_path = self.file_path();

        let json = match fs::read_to_string(&file_path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let state = serde_json::from_str(&json)
            .map_err(|e| StoreError::DeserializationFailed(e.to_string()))?;

        Ok(Some(state))
    }

    async fn save(&self, state: &ProgressState) -> Result<(), StoreError> {
        fs::create_dir_all(&self.base_path).await?;

        let json = serde_json::to_string_pretty(state)
            .map_err(|e| StoreError::SerializationFailed(e.to_string()))?;

        let temp = self.temp_path();
        fs::write(&temp, json).await?;
        fs::rename(&temp, self.file_path()).await?;

        tracing::debug!(path = %self.file_path().display(), "progress snapshot written");
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(self.file_path()).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample_state() -> ProgressState {
        ProgressState {
            first_name: "Layla".to_string(),
            days: 3,
            xp: 150,
            level: 2,
            streak: 3,
            longest_streak: 3,
            last_check_in: NaiveDate::from_ymd_opt(2026, 10, 16),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_load_from_empty_directory_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileProgressStore::new(temp_dir.path());

        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_then_load_roundtrips() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileProgressStore::new(temp_dir.path());
        let state = sample_state();

        store.save(&state).await.unwrap();
        let loaded = store.load().await.unwrap();

        assert_eq!(loaded, Some(state));
    }

    #[tokio::test]
    async fn test_file_is_named_after_storage_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileProgressStore::new(temp_dir.path());
        store.save(&sample_state()).await.unwrap();

        let expected = temp_dir.path().join("bila_elite_v2_final.json");
        assert!(expected.exists());
        assert!(!temp_dir.path().join("bila_elite_v2_final.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_save_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileProgressStore::new(temp_dir.path().join("nested").join("data"));

        store.save(&sample_state()).await.unwrap();
        assert!(store.file_path().exists());
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileProgressStore::new(temp_dir.path());

        store.save(&sample_state()).await.unwrap();
        let updated = ProgressState {
            days: 4,
            ..sample_state()
        };
        store.save(&updated).await.unwrap();

        assert_eq!(store.load().await.unwrap().map(|s| s.days), Some(4));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_a_deserialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileProgressStore::new(temp_dir.path());
        tokio::fs::write(store.file_path(), "{not json").await.unwrap();

        let result = store.load().await;
        assert!(matches!(result, Err(StoreError::DeserializationFailed(_))));
    }

    #[tokio::test]
    async fn test_clear_removes_snapshot_and_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileProgressStore::new(temp_dir.path());
        store.save(&sample_state()).await.unwrap();

        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());

        store.clear().await.unwrap();
    }
}
