//! Storage abstraction and implementations for PathForge progress data.
//!
//! This crate provides a trait-based persistence port with a JSON-file
//! reference implementation and an in-memory backend for tests and tooling.

#![warn(missing_docs)]

pub mod trait_;
pub mod json_storage;
pub mod memory;

pub use trait_::{ProgressStorage, Result, StorageError};
pub use json_storage::JsonStorage;
pub use memory::MemoryStorage;
