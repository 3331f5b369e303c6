//! The full learner-progress map.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::id::{RoadmapId, TopicId};
use crate::topic::TopicProgress;
use crate::Time;

/// All topic records for one roadmap.
pub type RoadmapTopics = HashMap<TopicId, TopicProgress>;

/// Everything the learner has recorded, keyed by roadmap then topic.
///
/// Serializes transparently as a two-level JSON object, which is the persisted
/// blob format. No entry exists until the first mutation touching that
/// (roadmap, topic) pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progress {
    roadmaps: HashMap<RoadmapId, RoadmapTopics>,
}

impl Progress {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a topic record.
    pub fn topic(&self, roadmap_id: &RoadmapId, topic_id: &TopicId) -> Option<&TopicProgress> {
        self.roadmaps.get(roadmap_id)?.get(topic_id)
    }

    /// Look up a topic record mutably without creating it.
    pub fn topic_mut(
        &mut self,
        roadmap_id: &RoadmapId,
        topic_id: &TopicId,
    ) -> Option<&mut TopicProgress> {
        self.roadmaps.get_mut(roadmap_id)?.get_mut(topic_id)
    }

    /// Look up a topic record, creating a fresh one stamped `now` if absent.
    pub fn topic_entry(
        &mut self,
        roadmap_id: &RoadmapId,
        topic_id: &TopicId,
        now: Time,
    ) -> &mut TopicProgress {
        self.roadmaps
            .entry(roadmap_id.clone())
            .or_default()
            .entry(topic_id.clone())
            .or_insert_with(|| TopicProgress::new(now))
    }

    /// All topic records for one roadmap, if any exist.
    pub fn roadmap(&self, roadmap_id: &RoadmapId) -> Option<&RoadmapTopics> {
        self.roadmaps.get(roadmap_id)
    }

    /// Iterate over every roadmap and its topic records.
    pub fn roadmaps(&self) -> impl Iterator<Item = (&RoadmapId, &RoadmapTopics)> {
        self.roadmaps.iter()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.roadmaps.is_empty()
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.roadmaps.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn entry_creates_then_reuses_record() {
        let mut progress = Progress::new();
        let roadmap = RoadmapId::new("devops");
        let topic = TopicId::new("linux-basics");
        assert!(progress.topic(&roadmap, &topic).is_none());

        let now = Utc::now();
        progress.topic_entry(&roadmap, &topic, now).is_completed = true;
        progress.topic_entry(&roadmap, &topic, Utc::now()).study_time = 30;

        let record = progress.topic(&roadmap, &topic).unwrap();
        assert!(record.is_completed);
        assert_eq!(record.study_time, 30);
        // The second entry call must not have reset the record.
        assert_eq!(record.last_updated, now);
    }

    #[test]
    fn round_trips_as_bare_two_level_map() {
        let mut progress = Progress::new();
        progress
            .topic_entry(&RoadmapId::new("devops"), &TopicId::new("ci-cd"), Utc::now())
            .study_time = 45;

        let json = serde_json::to_value(&progress).unwrap();
        assert_eq!(json["devops"]["ci-cd"]["studyTime"], 45);

        let back: Progress = serde_json::from_value(json).unwrap();
        assert_eq!(back, progress);
    }
}
