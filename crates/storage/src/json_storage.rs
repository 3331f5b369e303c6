//! JSON file storage implementation.
//!
//! Persists the entire progress map as one JSON file under a caller-supplied
//! directory, wrapped in a versioned envelope so future schema changes have a
//! migration hook. Blobs written before the envelope existed (a bare
//! roadmap -> topic map) still load.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use pathforge_core::Progress;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

use super::{ProgressStorage, Result, StorageError};

/// File name of the single storage slot.
pub const STORAGE_FILE: &str = "pathforge-progress.json";

/// Schema version written by this build.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Deserialize)]
struct Envelope {
    version: u32,
    #[serde(default)]
    progress: Progress,
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    progress: &'a Progress,
}

/// File-based JSON storage backend.
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Create storage rooted at `dir`, creating the directory if needed.
    pub async fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).await?;
        Ok(Self {
            path: dir.join(STORAGE_FILE),
        })
    }

    /// Path of the underlying storage file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(raw: &str) -> Result<Progress> {
        match serde_json::from_str::<Envelope>(raw) {
            Ok(blob) if blob.version <= SCHEMA_VERSION => Ok(blob.progress),
            Ok(blob) => Err(StorageError::UnsupportedVersion(blob.version)),
            // Pre-envelope blobs are a bare two-level map (version 0).
            Err(envelope_err) => {
                serde_json::from_str(raw).map_err(|_| StorageError::Json(envelope_err))
            }
        }
    }
}

#[async_trait]
impl ProgressStorage for JsonStorage {
    async fn load(&self) -> Result<Option<Progress>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Self::parse(&raw).map(Some)
    }

    async fn save(&mut self, progress: &Progress) -> Result<()> {
        let blob = EnvelopeRef {
            version: SCHEMA_VERSION,
            progress,
        };
        fs::write(&self.path, serde_json::to_string_pretty(&blob)?).await?;
        debug!(path = %self.path.display(), "progress saved");
        Ok(())
    }

    async fn clear(&mut self) -> Result<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pathforge_core::{RoadmapId, TopicId};

    #[tokio::test]
    async fn empty_slot_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path()).await.unwrap();
        assert!(storage.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path()).await.unwrap();

        let mut progress = Progress::new();
        let record = progress.topic_entry(
            &RoadmapId::new("devops"),
            &TopicId::new("linux-basics"),
            Utc::now(),
        );
        record.is_completed = true;
        record.study_time = 90;

        storage.save(&progress).await.unwrap();
        let loaded = storage.load().await.unwrap().unwrap();
        assert_eq!(loaded, progress);
    }

    #[tokio::test]
    async fn legacy_bare_map_still_loads() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path()).await.unwrap();
        tokio::fs::write(
            storage.path(),
            r#"{"devops":{"ci-cd":{"isCompleted":true,"lastUpdated":"2024-03-01T10:00:00Z","studyTime":30}}}"#,
        )
        .await
        .unwrap();

        let progress = storage.load().await.unwrap().unwrap();
        let record = progress
            .topic(&RoadmapId::new("devops"), &TopicId::new("ci-cd"))
            .unwrap();
        assert!(record.is_completed);
        assert_eq!(record.study_time, 30);
    }

    #[tokio::test]
    async fn future_schema_version_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path()).await.unwrap();
        tokio::fs::write(storage.path(), r#"{"version":99,"progress":{}}"#)
            .await
            .unwrap();

        match storage.load().await {
            Err(StorageError::UnsupportedVersion(99)) => {}
            other => panic!("expected UnsupportedVersion, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn corrupt_blob_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path()).await.unwrap();
        tokio::fs::write(storage.path(), "not json at all").await.unwrap();
        assert!(matches!(storage.load().await, Err(StorageError::Json(_))));
    }

    #[tokio::test]
    async fn clear_empties_the_slot() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path()).await.unwrap();
        storage.save(&Progress::new()).await.unwrap();
        assert!(storage.load().await.unwrap().is_some());

        storage.clear().await.unwrap();
        assert!(storage.load().await.unwrap().is_none());
        // Clearing an already-empty slot is fine.
        storage.clear().await.unwrap();
    }
}
