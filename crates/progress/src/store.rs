//! The progress store: hydration, mutation, query, and aggregation.

use chrono::Utc;
use pathforge_core::{
    Analytics, Challenge, Progress, QuizResult, ResourceProgress, RoadmapId, TopicId,
    TopicProgress,
};
use pathforge_storage::ProgressStorage;
use tracing::{debug, warn};

use crate::analytics;

/// Errors a store operation can return.
///
/// These are the only two failure conditions; every other operation is total
/// over its input domain. A failed operation mutates nothing and persists
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgressError {
    /// Resource index outside the topic's seeded resource list
    #[error("resource index {index} out of range for {roadmap_id}/{topic_id} ({len} resources)")]
    InvalidIndex {
        /// Addressed roadmap
        roadmap_id: RoadmapId,
        /// Addressed topic
        topic_id: TopicId,
        /// Index the caller passed
        index: usize,
        /// Length of the topic's resource list (0 when the topic is absent)
        len: usize,
    },

    /// Input outside the operation's documented domain
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Single source of truth for all learner progress.
///
/// Constructed once at application start via [`ProgressStore::open`] and
/// passed to every consumer; there is no implicit global instance. All
/// mutation goes through the store so `last_updated` stamps and persistence
/// stay consistent; views only hold read snapshots.
///
/// Every mutation re-persists the whole map. Per the single-writer model the
/// write is best-effort: a failing backend is logged, never surfaced through
/// operations the contract declares infallible.
pub struct ProgressStore<S> {
    storage: S,
    progress: Progress,
}

impl<S: ProgressStorage> ProgressStore<S> {
    /// Open the store, hydrating from `storage`.
    ///
    /// An empty slot starts an empty map. Malformed or unreadable content is
    /// recovered locally: logged and treated as empty, never fatal.
    pub async fn open(storage: S) -> Self {
        let progress = match storage.load().await {
            Ok(Some(progress)) => progress,
            Ok(None) => Progress::new(),
            Err(e) => {
                warn!(error = %e, "could not load persisted progress, starting empty");
                Progress::new()
            }
        };
        debug!(empty = progress.is_empty(), "progress store opened");
        Self { storage, progress }
    }

    /// Read snapshot of the full progress map.
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// The underlying storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    async fn persist(&mut self) {
        if let Err(e) = self.storage.save(&self.progress).await {
            warn!(error = %e, "could not persist progress");
        }
    }

    /// Mark a topic complete or incomplete, creating its record if absent.
    pub async fn set_topic_completed(
        &mut self,
        roadmap_id: &RoadmapId,
        topic_id: &TopicId,
        completed: bool,
    ) {
        let now = Utc::now();
        let record = self.progress.topic_entry(roadmap_id, topic_id, now);
        record.is_completed = completed;
        record.last_updated = now;
        self.persist().await;
    }

    /// Replace a topic's notes wholesale, creating its record if absent.
    pub async fn set_topic_notes(
        &mut self,
        roadmap_id: &RoadmapId,
        topic_id: &TopicId,
        notes: impl Into<String>,
    ) {
        let now = Utc::now();
        let record = self.progress.topic_entry(roadmap_id, topic_id, now);
        record.notes = Some(notes.into());
        record.last_updated = now;
        self.persist().await;
    }

    /// Replace a topic's resource list, creating its record if absent.
    ///
    /// Views seed this from the catalog's link list, in display order, so
    /// that per-resource completion has something to index into.
    pub async fn set_topic_resources(
        &mut self,
        roadmap_id: &RoadmapId,
        topic_id: &TopicId,
        resources: Vec<ResourceProgress>,
    ) {
        let now = Utc::now();
        let record = self.progress.topic_entry(roadmap_id, topic_id, now);
        record.resources = resources;
        record.last_updated = now;
        self.persist().await;
    }

    /// Set the completion flag of one seeded resource.
    ///
    /// An index outside the topic's resource list (including a topic that was
    /// never seeded) is an [`ProgressError::InvalidIndex`] and leaves the
    /// record untouched.
    pub async fn set_resource_completed(
        &mut self,
        roadmap_id: &RoadmapId,
        topic_id: &TopicId,
        resource_index: usize,
        completed: bool,
    ) -> Result<(), ProgressError> {
        match self.progress.topic_mut(roadmap_id, topic_id) {
            Some(record) if resource_index < record.resources.len() => {
                record.resources[resource_index].completed = completed;
                record.last_updated = Utc::now();
            }
            record => {
                let len = record.map_or(0, |r| r.resources.len());
                return Err(ProgressError::InvalidIndex {
                    roadmap_id: roadmap_id.clone(),
                    topic_id: topic_id.clone(),
                    index: resource_index,
                    len,
                });
            }
        }
        self.persist().await;
        Ok(())
    }

    /// Append a quiz attempt to the topic the result addresses.
    ///
    /// Never rejects a result; a duplicate quiz id is a retake and both
    /// attempts are kept.
    pub async fn record_quiz_result(&mut self, result: QuizResult) {
        let now = Utc::now();
        let record = self
            .progress
            .topic_entry(&result.roadmap_id, &result.topic_id, now);
        record.quiz_results.push(result);
        record.last_updated = now;
        self.persist().await;
    }

    /// Insert or replace a challenge by id, creating the topic if absent.
    ///
    /// A matching id is replaced in place, keeping its position; a new id
    /// appends.
    pub async fn upsert_challenge(
        &mut self,
        roadmap_id: &RoadmapId,
        topic_id: &TopicId,
        challenge: Challenge,
    ) {
        let now = Utc::now();
        let record = self.progress.topic_entry(roadmap_id, topic_id, now);
        if let Some(existing) = record.challenges.iter_mut().find(|c| c.id == challenge.id) {
            *existing = challenge;
        } else {
            record.challenges.push(challenge);
        }
        record.last_updated = now;
        self.persist().await;
    }

    /// Add `minutes` of study time, creating the topic if absent.
    ///
    /// Negative input is rejected with [`ProgressError::InvalidArgument`]
    /// without touching any state; study time only grows.
    pub async fn add_study_time(
        &mut self,
        roadmap_id: &RoadmapId,
        topic_id: &TopicId,
        minutes: i64,
    ) -> Result<(), ProgressError> {
        if minutes < 0 {
            return Err(ProgressError::InvalidArgument(format!(
                "study time increment must be non-negative, got {minutes}"
            )));
        }
        let now = Utc::now();
        let record = self.progress.topic_entry(roadmap_id, topic_id, now);
        record.study_time += minutes as u64;
        record.last_updated = now;
        self.persist().await;
        Ok(())
    }

    /// Drop every record, in memory and in durable storage.
    pub async fn clear(&mut self) {
        self.progress.clear();
        if let Err(e) = self.storage.clear().await {
            warn!(error = %e, "could not clear durable storage");
        }
    }

    /// Look up a topic record.
    ///
    /// `None` means "never started", which callers must distinguish from a
    /// record with `is_completed == false`; no default record is fabricated.
    pub fn get_topic_progress(
        &self,
        roadmap_id: &RoadmapId,
        topic_id: &TopicId,
    ) -> Option<&TopicProgress> {
        self.progress.topic(roadmap_id, topic_id)
    }

    /// Percentage of a roadmap's existing topic records marked complete.
    ///
    /// A roadmap with no records is 0, not a division by zero. Only records
    /// that exist count toward the denominator; the store knows nothing about
    /// catalog topics that were never touched.
    pub fn get_roadmap_completion(&self, roadmap_id: &RoadmapId) -> f64 {
        let Some(topics) = self.progress.roadmap(roadmap_id) else {
            return 0.0;
        };
        if topics.is_empty() {
            return 0.0;
        }
        let completed = topics.values().filter(|t| t.is_completed).count();
        completed as f64 / topics.len() as f64 * 100.0
    }

    /// Aggregate statistics over one roadmap, or all of them when
    /// `roadmap_id` is `None`.
    pub fn get_analytics(&self, roadmap_id: Option<&RoadmapId>) -> Analytics {
        match roadmap_id {
            Some(id) => match self.progress.roadmap(id) {
                Some(topics) => analytics::aggregate(topics.iter()),
                None => Analytics::default(),
            },
            None => analytics::aggregate(
                self.progress
                    .roadmaps()
                    .flat_map(|(_, topics)| topics.iter()),
            ),
        }
    }
}
