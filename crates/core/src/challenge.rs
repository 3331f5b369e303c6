//! Practical exercises tied to a topic.

use serde::{Deserialize, Serialize};

use crate::id::ChallengeId;
use crate::Time;

/// A discrete practical exercise with a binary completion state.
///
/// Challenge ids are unique within a topic; writing a challenge with an
/// existing id replaces that entry in place, keeping its position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    /// Challenge id, unique within the topic
    pub id: ChallengeId,

    /// Challenge title
    pub title: String,

    /// Whether the learner completed it
    pub completed: bool,

    /// When completion state last changed, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Time>,
}
