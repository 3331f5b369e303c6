//! Aggregation over topic records.

use pathforge_core::{Analytics, QuizResult, TopicId, TopicProgress};

/// Mean per-topic quiz ratio at or above this marks a strength area.
pub(crate) const STRENGTH_THRESHOLD: f64 = 0.8;

/// Mean per-topic quiz ratio at or below this marks an improvement area.
pub(crate) const IMPROVEMENT_THRESHOLD: f64 = 0.6;

// Summing score ratios accumulates f64 error (8/10 + 4/10 averages to just
// above 0.6), so threshold comparisons get a hair of slack to keep boundary
// means classified.
const EPS: f64 = 1e-9;

/// Fold a set of topic records into aggregate statistics.
///
/// Topics without any quiz result are counted for study time, challenges,
/// and the last-session timestamp, but are classified into neither strength
/// nor improvement areas.
pub(crate) fn aggregate<'a, I>(topics: I) -> Analytics
where
    I: Iterator<Item = (&'a TopicId, &'a TopicProgress)>,
{
    let mut analytics = Analytics::default();
    let mut ratio_sum = 0.0;

    for (topic_id, record) in topics {
        analytics.quizzes_taken += record.quiz_results.len();
        ratio_sum += record.quiz_results.iter().map(QuizResult::ratio).sum::<f64>();

        if let Some(mean) = record.mean_quiz_ratio() {
            if mean >= STRENGTH_THRESHOLD - EPS {
                analytics.strength_areas.push(topic_id.clone());
            } else if mean <= IMPROVEMENT_THRESHOLD + EPS {
                analytics.improvement_areas.push(topic_id.clone());
            }
        }

        analytics.challenges_completed +=
            record.challenges.iter().filter(|c| c.completed).count();
        analytics.total_study_time += record.study_time;

        if analytics
            .last_study_session
            .map_or(true, |latest| record.last_updated > latest)
        {
            analytics.last_study_session = Some(record.last_updated);
        }
    }

    if analytics.quizzes_taken > 0 {
        analytics.average_score = ratio_sum / analytics.quizzes_taken as f64 * 100.0;
    }

    analytics
}
