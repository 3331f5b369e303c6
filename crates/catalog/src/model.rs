//! Catalog data model.

use pathforge_core::{QuizId, ResourceProgress, RoadmapId, TopicId};
use pathforge_progress::ProgressStore;
use pathforge_quiz::{Question, QuizError, QuizRunner};
use pathforge_storage::ProgressStorage;

/// Topic difficulty band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Entry-level material
    Beginner,
    /// Requires the basics
    Intermediate,
    /// Deep-end material
    Advanced,
}

/// An external learning resource linked from a topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLink {
    /// Link title
    pub title: String,

    /// Link URL
    pub url: String,
}

/// A quiz bundled with a catalog topic.
#[derive(Debug, Clone)]
pub struct CatalogQuiz {
    /// Quiz id
    pub id: QuizId,

    /// Quiz title
    pub title: String,

    /// Question list, in presentation order
    pub questions: Vec<Question>,
}

/// One unit of study within a roadmap.
#[derive(Debug, Clone)]
pub struct Topic {
    /// Topic id, referenced by progress records
    pub id: TopicId,

    /// Topic title
    pub title: String,

    /// What the topic covers
    pub description: String,

    /// Difficulty band
    pub level: Level,

    /// Rough time investment, e.g. `4-6 weeks`
    pub estimated_time: String,

    /// Topics that should be completed first, within the same roadmap
    pub prerequisites: Vec<TopicId>,

    /// Linked learning resources, in display order
    pub resources: Vec<ResourceLink>,

    /// Bundled quiz, if the topic has one
    pub quiz: Option<CatalogQuiz>,
}

impl Topic {
    pub(crate) fn new(
        id: &str,
        title: &str,
        description: &str,
        level: Level,
        estimated_time: &str,
    ) -> Self {
        Self {
            id: TopicId::new(id),
            title: title.to_owned(),
            description: description.to_owned(),
            level,
            estimated_time: estimated_time.to_owned(),
            prerequisites: Vec::new(),
            resources: Vec::new(),
            quiz: None,
        }
    }

    pub(crate) fn prereq(mut self, id: &str) -> Self {
        self.prerequisites.push(TopicId::new(id));
        self
    }

    pub(crate) fn link(mut self, title: &str, url: &str) -> Self {
        self.resources.push(ResourceLink {
            title: title.to_owned(),
            url: url.to_owned(),
        });
        self
    }

    pub(crate) fn with_quiz(mut self, quiz: CatalogQuiz) -> Self {
        self.quiz = Some(quiz);
        self
    }

    /// Whether every prerequisite topic is marked complete in the store.
    ///
    /// Topics with no prerequisites are always accessible. A prerequisite
    /// that was never started counts as incomplete.
    pub fn prerequisites_met<S: ProgressStorage>(
        &self,
        roadmap_id: &RoadmapId,
        store: &ProgressStore<S>,
    ) -> bool {
        self.prerequisites.iter().all(|prereq| {
            store
                .get_topic_progress(roadmap_id, prereq)
                .is_some_and(|record| record.is_completed)
        })
    }

    /// The catalog's links as unchecked resource records, in display order.
    ///
    /// Views pass this to `ProgressStore::set_topic_resources` before
    /// tracking per-resource completion.
    pub fn initial_resources(&self) -> Vec<ResourceProgress> {
        self.resources
            .iter()
            .map(|link| ResourceProgress::new(link.title.clone(), link.url.clone()))
            .collect()
    }

    /// Start a runner for the bundled quiz, if the topic has one.
    pub fn quiz_runner(&self, roadmap_id: &RoadmapId) -> Option<Result<QuizRunner, QuizError>> {
        let quiz = self.quiz.as_ref()?;
        Some(QuizRunner::new(
            quiz.id.clone(),
            roadmap_id.clone(),
            self.id.clone(),
            quiz.questions.clone(),
        ))
    }
}

/// A curriculum track composed of topics.
#[derive(Debug, Clone)]
pub struct Roadmap {
    /// Roadmap id, referenced by progress records
    pub id: RoadmapId,

    /// Display title
    pub title: String,

    /// One-line pitch
    pub description: String,

    /// Topics in recommended study order
    pub topics: Vec<Topic>,
}

impl Roadmap {
    /// Look up one topic by id.
    pub fn topic(&self, topic_id: &TopicId) -> Option<&Topic> {
        self.topics.iter().find(|t| &t.id == topic_id)
    }
}
