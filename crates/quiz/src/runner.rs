//! The quiz state machine.

use chrono::Utc;
use pathforge_core::{QuizId, QuizResult, RoadmapId, TopicId};
use pathforge_progress::ProgressStore;
use pathforge_storage::ProgressStorage;

/// One multiple-choice question with a single correct option.
#[derive(Debug, Clone)]
pub struct Question {
    /// Question id within the quiz
    pub id: String,

    /// Question text
    pub text: String,

    /// Answer options, in display order
    pub options: Vec<String>,

    /// Index of the correct option
    pub correct_answer: usize,

    /// Explanation revealed after answering
    pub explanation: String,
}

/// Where the runner currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    /// Taking the quiz: zero-based question index and score so far
    InProgress {
        /// Current question index
        index: usize,
        /// Correct answers so far
        score: u32,
    },
    /// Terminal state; the result has been recorded
    Completed {
        /// Final score
        score: u32,
        /// Number of questions
        total: u32,
    },
}

/// What answering a question revealed.
#[derive(Debug, PartialEq, Eq)]
pub struct AnswerOutcome<'a> {
    /// Whether the selected option was the correct one
    pub correct: bool,

    /// The question's explanation
    pub explanation: &'a str,
}

/// Errors from driving the runner outside its allowed transitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    /// A quiz needs at least one question
    #[error("a quiz needs at least one question")]
    NoQuestions,

    /// The selected option index does not exist for the current question
    #[error("option {0} does not exist for the current question")]
    InvalidOption(usize),

    /// The current question was already answered
    #[error("the current question was already answered")]
    AlreadyAnswered,

    /// The current question has not been answered yet
    #[error("the current question has not been answered yet")]
    NotAnswered,

    /// The quiz reached its terminal state
    #[error("the quiz is already completed")]
    AlreadyCompleted,
}

/// Linear walk over a fixed question list.
///
/// Each question is answered exactly once, there is no backward navigation,
/// and advancing past the last question records one [`QuizResult`] in the
/// store. The completed state is immutable.
#[derive(Debug)]
pub struct QuizRunner {
    quiz_id: QuizId,
    roadmap_id: RoadmapId,
    topic_id: TopicId,
    questions: Vec<Question>,
    current: usize,
    score: u32,
    selected: Option<usize>,
    completed: bool,
}

impl QuizRunner {
    /// Start a quiz addressed at a (roadmap, topic) pair.
    ///
    /// Rejects an empty question list, which keeps every recorded result's
    /// `total_questions` positive.
    pub fn new(
        quiz_id: QuizId,
        roadmap_id: RoadmapId,
        topic_id: TopicId,
        questions: Vec<Question>,
    ) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }
        Ok(Self {
            quiz_id,
            roadmap_id,
            topic_id,
            questions,
            current: 0,
            score: 0,
            selected: None,
            completed: false,
        })
    }

    /// Current state of the runner.
    pub fn state(&self) -> QuizState {
        if self.completed {
            QuizState::Completed {
                score: self.score,
                total: self.questions.len() as u32,
            }
        } else {
            QuizState::InProgress {
                index: self.current,
                score: self.score,
            }
        }
    }

    /// The question awaiting an answer, or `None` once completed.
    pub fn current_question(&self) -> Option<&Question> {
        if self.completed {
            None
        } else {
            self.questions.get(self.current)
        }
    }

    /// Answer the current question.
    ///
    /// Scores an exact match against the correct option and reveals the
    /// explanation. A question cannot be answered twice.
    pub fn select_answer(&mut self, option: usize) -> Result<AnswerOutcome<'_>, QuizError> {
        if self.completed {
            return Err(QuizError::AlreadyCompleted);
        }
        if self.selected.is_some() {
            return Err(QuizError::AlreadyAnswered);
        }
        if option >= self.questions[self.current].options.len() {
            return Err(QuizError::InvalidOption(option));
        }

        self.selected = Some(option);
        let correct = option == self.questions[self.current].correct_answer;
        if correct {
            self.score += 1;
        }
        Ok(AnswerOutcome {
            correct,
            explanation: &self.questions[self.current].explanation,
        })
    }

    /// Move past the current (answered) question.
    ///
    /// On the last question this transitions to [`QuizState::Completed`] and
    /// records the result in `store`, exactly once.
    pub async fn advance<S: ProgressStorage>(
        &mut self,
        store: &mut ProgressStore<S>,
    ) -> Result<QuizState, QuizError> {
        if self.completed {
            return Err(QuizError::AlreadyCompleted);
        }
        if self.selected.is_none() {
            return Err(QuizError::NotAnswered);
        }

        if self.current + 1 == self.questions.len() {
            self.completed = true;
            store
                .record_quiz_result(QuizResult {
                    quiz_id: self.quiz_id.clone(),
                    roadmap_id: self.roadmap_id.clone(),
                    topic_id: self.topic_id.clone(),
                    score: self.score,
                    total_questions: self.questions.len() as u32,
                    timestamp: Utc::now(),
                })
                .await;
        } else {
            self.current += 1;
            self.selected = None;
        }
        Ok(self.state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathforge_storage::MemoryStorage;

    fn question(id: &str, correct: usize) -> Question {
        Question {
            id: id.into(),
            text: format!("question {id}"),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_answer: correct,
            explanation: format!("because {id}"),
        }
    }

    fn runner(questions: Vec<Question>) -> QuizRunner {
        QuizRunner::new(
            QuizId::new("python-basics-quiz"),
            RoadmapId::new("data-science"),
            TopicId::new("python-fundamentals"),
            questions,
        )
        .unwrap()
    }

    async fn store() -> ProgressStore<MemoryStorage> {
        ProgressStore::open(MemoryStorage::new()).await
    }

    #[test]
    fn empty_question_list_is_rejected() {
        let err = QuizRunner::new(
            QuizId::new("q"),
            RoadmapId::new("r"),
            TopicId::new("t"),
            vec![],
        )
        .unwrap_err();
        assert_eq!(err, QuizError::NoQuestions);
    }

    #[test]
    fn answering_scores_and_reveals_explanation() {
        let mut quiz = runner(vec![question("q1", 2)]);
        let outcome = quiz.select_answer(2).unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.explanation, "because q1");
        assert_eq!(quiz.state(), QuizState::InProgress { index: 0, score: 1 });
    }

    #[test]
    fn a_question_cannot_be_answered_twice() {
        let mut quiz = runner(vec![question("q1", 2)]);
        quiz.select_answer(0).unwrap();
        assert_eq!(quiz.select_answer(2).unwrap_err(), QuizError::AlreadyAnswered);
        // The wrong first answer stands.
        assert_eq!(quiz.state(), QuizState::InProgress { index: 0, score: 0 });
    }

    #[test]
    fn out_of_range_option_is_rejected() {
        let mut quiz = runner(vec![question("q1", 2)]);
        assert_eq!(quiz.select_answer(9).unwrap_err(), QuizError::InvalidOption(9));
        // Still unanswered afterwards.
        assert!(quiz.select_answer(1).is_ok());
    }

    #[tokio::test]
    async fn cannot_advance_an_unanswered_question() {
        let mut quiz = runner(vec![question("q1", 0)]);
        let mut store = store().await;
        assert_eq!(
            quiz.advance(&mut store).await.unwrap_err(),
            QuizError::NotAnswered
        );
    }

    #[tokio::test]
    async fn completing_records_exactly_one_result() {
        let mut quiz = runner(vec![question("q1", 0), question("q2", 3)]);
        let mut store = store().await;

        quiz.select_answer(0).unwrap();
        let state = quiz.advance(&mut store).await.unwrap();
        assert_eq!(state, QuizState::InProgress { index: 1, score: 1 });

        quiz.select_answer(1).unwrap();
        let state = quiz.advance(&mut store).await.unwrap();
        assert_eq!(state, QuizState::Completed { score: 1, total: 2 });

        let record = store
            .get_topic_progress(
                &RoadmapId::new("data-science"),
                &TopicId::new("python-fundamentals"),
            )
            .unwrap();
        assert_eq!(record.quiz_results.len(), 1);
        assert_eq!(record.quiz_results[0].score, 1);
        assert_eq!(record.quiz_results[0].total_questions, 2);

        // Terminal state is immutable and records nothing further.
        assert_eq!(
            quiz.select_answer(0).unwrap_err(),
            QuizError::AlreadyCompleted
        );
        assert_eq!(
            quiz.advance(&mut store).await.unwrap_err(),
            QuizError::AlreadyCompleted
        );
        assert!(quiz.current_question().is_none());
        let record = store
            .get_topic_progress(
                &RoadmapId::new("data-science"),
                &TopicId::new("python-fundamentals"),
            )
            .unwrap();
        assert_eq!(record.quiz_results.len(), 1);
    }
}
