//! Quiz attempt outcomes.

use serde::{Deserialize, Serialize};

use crate::id::{QuizId, RoadmapId, TopicId};
use crate::Time;

/// The recorded outcome of one quiz attempt.
///
/// Results are immutable once recorded and append to the addressed topic in
/// chronological order. Retakes keep every attempt, including ones with a
/// duplicate `quiz_id`.
///
/// Invariant: `total_questions > 0` and `score <= total_questions`. The quiz
/// runner upholds this by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    /// Which quiz was taken
    pub quiz_id: QuizId,

    /// Roadmap the quiz belongs to
    pub roadmap_id: RoadmapId,

    /// Topic the quiz belongs to
    pub topic_id: TopicId,

    /// Number of correctly answered questions
    pub score: u32,

    /// Number of questions in the quiz
    pub total_questions: u32,

    /// When the attempt finished
    pub timestamp: Time,
}

impl QuizResult {
    /// Score as a fraction of the total, in `0.0..=1.0`.
    pub fn ratio(&self) -> f64 {
        f64::from(self.score) / f64::from(self.total_questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn wire_format_round_trips() {
        let result = QuizResult {
            quiz_id: QuizId::new("python-basics-quiz"),
            roadmap_id: RoadmapId::new("data-science"),
            topic_id: TopicId::new("python-fundamentals"),
            score: 7,
            total_questions: 10,
            timestamp: Utc::now(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["quizId"], "python-basics-quiz");
        assert_eq!(json["totalQuestions"], 10);

        let back: QuizResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
        assert_eq!(back.ratio(), 0.7);
    }
}
