//! PathForge core data models.
//!
//! This crate defines the learner-progress data structures shared by the
//! storage, progress, quiz, and catalog crates.

#![warn(missing_docs)]

// Identities
mod id;

// Per-topic progress
mod topic;
mod quiz;
mod challenge;

// The full progress map and derived statistics
mod progress;
mod analytics;

// Re-exports
pub use id::{ChallengeId, QuizId, RoadmapId, TopicId};

pub use topic::{ResourceProgress, TopicProgress};
pub use quiz::QuizResult;
pub use challenge::Challenge;

pub use progress::{Progress, RoadmapTopics};
pub use analytics::Analytics;

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
