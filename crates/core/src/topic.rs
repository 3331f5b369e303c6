//! Per-topic progress record.

use serde::{Deserialize, Serialize};

use crate::challenge::Challenge;
use crate::quiz::QuizResult;
use crate::Time;

/// Progress against one linked learning resource.
///
/// Resources mirror the catalog's link list for the topic; order is
/// significant and matches display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceProgress {
    /// Resource title
    pub title: String,

    /// Resource URL
    pub url: String,

    /// Whether the learner marked this resource done
    pub completed: bool,
}

impl ResourceProgress {
    /// Create an unchecked resource entry for a catalog link.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            completed: false,
        }
    }
}

/// Everything tracked for one (roadmap, topic) pair.
///
/// A record exists only once some mutation has touched the pair; a missing
/// record means "not started", which is distinct from a record with
/// `is_completed == false`.
///
/// Field names serialize in camelCase so blobs written by earlier releases
/// under the `pathforge-progress` key load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicProgress {
    /// Whether the topic is marked complete
    pub is_completed: bool,

    /// Timestamp of the most recent mutation of this record
    pub last_updated: Time,

    /// Free-form learner notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Per-resource completion, in catalog display order
    #[serde(default)]
    pub resources: Vec<ResourceProgress>,

    /// Quiz attempts, append-only in chronological order
    #[serde(default)]
    pub quiz_results: Vec<QuizResult>,

    /// Challenges, unique by id within the topic
    #[serde(default)]
    pub challenges: Vec<Challenge>,

    /// Accumulated study time in minutes; only ever grows
    #[serde(default)]
    pub study_time: u64,
}

impl TopicProgress {
    /// Create a fresh record with all collections empty.
    pub fn new(now: Time) -> Self {
        Self {
            is_completed: false,
            last_updated: now,
            notes: None,
            resources: Vec::new(),
            quiz_results: Vec::new(),
            challenges: Vec::new(),
            study_time: 0,
        }
    }

    /// Mean `score / total_questions` ratio across this topic's quiz
    /// attempts, or `None` when no quiz has been taken.
    pub fn mean_quiz_ratio(&self) -> Option<f64> {
        if self.quiz_results.is_empty() {
            return None;
        }
        let sum: f64 = self.quiz_results.iter().map(QuizResult::ratio).sum();
        Some(sum / self.quiz_results.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{QuizId, QuizResult, RoadmapId, TopicId};
    use chrono::Utc;

    fn result(score: u32, total: u32) -> QuizResult {
        QuizResult {
            quiz_id: QuizId::new("quiz"),
            roadmap_id: RoadmapId::new("devops"),
            topic_id: TopicId::new("linux-basics"),
            score,
            total_questions: total,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn mean_quiz_ratio_averages_attempts() {
        let mut topic = TopicProgress::new(Utc::now());
        assert_eq!(topic.mean_quiz_ratio(), None);

        topic.quiz_results.push(result(8, 10));
        topic.quiz_results.push(result(4, 10));
        let mean = topic.mean_quiz_ratio().unwrap();
        assert!((mean - 0.6).abs() < 1e-9, "mean was {mean}");
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let topic = TopicProgress::new(Utc::now());
        let json = serde_json::to_value(&topic).unwrap();
        assert!(json.get("isCompleted").is_some());
        assert!(json.get("lastUpdated").is_some());
        assert!(json.get("studyTime").is_some());
        // Empty notes are omitted entirely, matching legacy blobs.
        assert!(json.get("notes").is_none());
    }

    #[test]
    fn sparse_legacy_record_deserializes() {
        // A record written before resources/quizzes/challenges existed.
        let json = r#"{"isCompleted":true,"lastUpdated":"2024-03-01T10:00:00Z"}"#;
        let topic: TopicProgress = serde_json::from_str(json).unwrap();
        assert!(topic.is_completed);
        assert!(topic.resources.is_empty());
        assert!(topic.quiz_results.is_empty());
        assert!(topic.challenges.is_empty());
        assert_eq!(topic.study_time, 0);
    }
}
