//! Identifiers for PathForge entities.
//!
//! All ids are opaque strings defined by the external roadmap/topic catalogs;
//! the progress store accepts any string pair without validation.

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an id from a catalog-supplied string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// The id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id! {
    /// Identifier for a roadmap (a curriculum track such as `devops`).
    RoadmapId
}

string_id! {
    /// Identifier for a topic within a roadmap.
    TopicId
}

string_id! {
    /// Identifier for a quiz.
    QuizId
}

string_id! {
    /// Identifier for a challenge, unique within its topic.
    ChallengeId
}
