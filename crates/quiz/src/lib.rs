//! Quiz runner.
//!
//! A linear state machine over a fixed question list. Completing the last
//! question records exactly one [`pathforge_core::QuizResult`] in the
//! progress store.

#![warn(missing_docs)]

pub mod runner;

pub use runner::{AnswerOutcome, Question, QuizError, QuizRunner, QuizState};
