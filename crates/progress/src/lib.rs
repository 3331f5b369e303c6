//! Learner progress store.
//!
//! The single source of truth for per-topic completion, quiz results,
//! challenges, and study time, with on-demand aggregate analytics. Backed by
//! a pluggable [`pathforge_storage::ProgressStorage`] slot.

#![warn(missing_docs)]

pub mod store;

mod analytics;

pub use store::{ProgressError, ProgressStore};
