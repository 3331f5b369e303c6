//! In-memory storage backend.
//!
//! Backs unit tests and tooling that needs the store without touching the
//! filesystem. The deployed product always persists durably.

use async_trait::async_trait;
use pathforge_core::Progress;

use super::{ProgressStorage, Result};

/// Storage slot held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Option<Progress>,
}

impl MemoryStorage {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot pre-populated with `progress`, as if a previous run had
    /// saved it.
    pub fn with_progress(progress: Progress) -> Self {
        Self {
            slot: Some(progress),
        }
    }

    /// What the slot currently holds.
    pub fn saved(&self) -> Option<&Progress> {
        self.slot.as_ref()
    }
}

#[async_trait]
impl ProgressStorage for MemoryStorage {
    async fn load(&self) -> Result<Option<Progress>> {
        Ok(self.slot.clone())
    }

    async fn save(&mut self, progress: &Progress) -> Result<()> {
        self.slot = Some(progress.clone());
        Ok(())
    }

    async fn clear(&mut self) -> Result<()> {
        self.slot = None;
        Ok(())
    }
}
