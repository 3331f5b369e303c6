//! Roadmap catalogs.
//!
//! Fixed topic definitions for each curriculum track: titles, difficulty,
//! estimated time, prerequisite graph, resource links, and bundled quizzes.
//! The progress store never validates against these and accepts any id pair,
//! but views resolve everything they display from here.

#![warn(missing_docs)]

mod model;

mod cloud_computing;
mod data_science;
mod devops;
mod fullstack;

pub use model::{CatalogQuiz, Level, ResourceLink, Roadmap, Topic};

use pathforge_core::RoadmapId;

/// Every shipped roadmap.
pub fn all() -> Vec<Roadmap> {
    vec![
        devops::roadmap(),
        fullstack::roadmap(),
        data_science::roadmap(),
        cloud_computing::roadmap(),
    ]
}

/// Look up one roadmap by id.
pub fn find(roadmap_id: &RoadmapId) -> Option<Roadmap> {
    all().into_iter().find(|r| &r.id == roadmap_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathforge_core::TopicId;

    #[test]
    fn registry_resolves_shipped_roadmaps() {
        assert_eq!(all().len(), 4);
        let devops = find(&RoadmapId::new("devops")).unwrap();
        assert_eq!(devops.topics.len(), 8);
        assert_eq!(find(&RoadmapId::new("fullstack")).unwrap().topics.len(), 5);
        assert_eq!(
            find(&RoadmapId::new("cloud-computing")).unwrap().topics.len(),
            7
        );
        assert!(find(&RoadmapId::new("underwater-basket-weaving")).is_none());
    }

    #[test]
    fn prerequisite_graph_is_closed() {
        // Every prerequisite id must name a topic in the same roadmap.
        for roadmap in all() {
            for topic in &roadmap.topics {
                for prereq in &topic.prerequisites {
                    assert!(
                        roadmap.topic(prereq).is_some(),
                        "{}/{} names unknown prerequisite {}",
                        roadmap.id,
                        topic.id,
                        prereq
                    );
                }
            }
        }
    }

    #[test]
    fn topic_ids_are_unique_per_roadmap() {
        for roadmap in all() {
            let mut seen = std::collections::HashSet::new();
            for topic in &roadmap.topics {
                assert!(seen.insert(topic.id.clone()), "duplicate topic {}", topic.id);
            }
        }
    }

    #[test]
    fn bundled_quizzes_have_answerable_questions() {
        for roadmap in all() {
            for topic in &roadmap.topics {
                if let Some(quiz) = &topic.quiz {
                    assert!(!quiz.questions.is_empty());
                    for q in &quiz.questions {
                        assert!(q.correct_answer < q.options.len());
                    }
                }
            }
        }
    }

    #[test]
    fn data_science_bundles_the_python_quiz() {
        let ds = find(&RoadmapId::new("data-science")).unwrap();
        let topic = ds.topic(&TopicId::new("python-fundamentals")).unwrap();
        let quiz = topic.quiz.as_ref().unwrap();
        assert_eq!(quiz.id.as_str(), "python-basics-quiz");
    }
}
