//! In-Memory Progress Store Adapter
//!
//! Keeps the snapshot in memory. Useful for testing and development.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::progress::ProgressState;
use crate::ports::{ProgressStore, StoreError};

/// In-memory storage for the progress snapshot
#[derive(Debug, Clone, Default)]
pub struct InMemoryProgressStore {
    state: Arc<RwLock<Option<ProgressState>>>,
    save_count: Arc<AtomicUsize>,
    fail_loads: Arc<AtomicBool>,
    fail_saves: Arc<AtomicBool>,
}

impl InMemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `state`
    pub fn with_state(state: ProgressState) -> Self {
        Self {
            state: Arc::new(RwLock::new(Some(state))),
            ..Self::default()
        }
    }

    /// Make subsequent loads fail (useful for tests)
    pub fn fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent saves fail (useful for tests)
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Snapshot currently held, if any
    pub async fn current(&self) -> Option<ProgressState> {
        self.state.read().await.clone()
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.save_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProgressStore for InMemoryProgressStore {
    async fn load(&self) -> Result<Option<ProgressState>, StoreError> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(StoreError::IoError("simulated load failure".to_string()));
        }
        Ok(self.state.read().await.clone())
    }

    async fn save(&self, state: &ProgressState) -> Result<(), StoreError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::IoError("simulated save failure".to_string()));
        }
        *self.state.write().await = Some(state.clone());
        self.save_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        *self.state.write().await = None;
        Ok(())
    }
}
