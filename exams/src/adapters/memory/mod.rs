//! In-memory adapters
//!
//! Implementations of the repository traits over process memory,
//! with an optional artificial delay on reads.

pub mod exam_repo;
pub mod question_repo;
pub mod seed;

pub use exam_repo::InMemoryExamRepository;
pub use question_repo::InMemoryQuestionRepository;
pub use seed::SeedData;
