//! Storage trait abstraction.

use async_trait::async_trait;
use pathforge_core::Progress;

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The persisted blob declares a schema version this build cannot read
    #[error("unsupported schema version {0}")]
    UnsupportedVersion(u32),
}

/// One durable key-value slot holding the entire progress map.
///
/// `load` returning `Ok(None)` means the slot is empty (nothing was ever
/// saved), which is distinct from malformed content, which is an `Err`. The
/// store treats both absence and errors as "start empty"; only `save` makes
/// the slot non-empty again.
#[async_trait]
pub trait ProgressStorage: Send + Sync {
    /// Load the persisted progress map, or `None` when the slot is empty.
    async fn load(&self) -> Result<Option<Progress>>;

    /// Overwrite the slot with a full serialization of `progress`.
    async fn save(&mut self, progress: &Progress) -> Result<()>;

    /// Empty the slot.
    async fn clear(&mut self) -> Result<()>;
}
