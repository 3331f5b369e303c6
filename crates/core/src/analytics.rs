//! Derived progress statistics.

use crate::id::TopicId;
use crate::Time;

/// Aggregate statistics over one roadmap or the whole progress map.
///
/// Computed on demand from the progress records; never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Analytics {
    /// Total quiz attempts recorded
    pub quizzes_taken: usize,

    /// Mean per-quiz score ratio as a percentage; 0 when no quizzes exist
    pub average_score: f64,

    /// Challenges with `completed == true`
    pub challenges_completed: usize,

    /// Sum of study time across included topics, in minutes
    pub total_study_time: u64,

    /// Most recent `last_updated` among included topics
    pub last_study_session: Option<Time>,

    /// Topics whose mean quiz score ratio is at least 0.8
    pub strength_areas: Vec<TopicId>,

    /// Topics whose mean quiz score ratio is at most 0.6
    pub improvement_areas: Vec<TopicId>,
}
