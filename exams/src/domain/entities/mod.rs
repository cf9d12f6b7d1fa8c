//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod exam;

pub use exam::{Exam, ExamId};
