//! Adapters layer
//!
//! Implementations of port traits for concrete storage.

pub mod memory;

pub use memory::{InMemoryExamRepository, InMemoryQuestionRepository, SeedData};
