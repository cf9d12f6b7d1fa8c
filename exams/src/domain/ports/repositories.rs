//! Repository port traits
//!
//! These traits define the interface for exam and question persistence.
//! Implementations are provided by adapters (e.g., in-memory storage).

use async_trait::async_trait;

use crate::domain::entities::{Exam, ExamId};
use crate::error::DomainError;

/// Repository for Exam entities
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExamRepository: Send + Sync {
    /// Fetch every known exam, in storage order
    ///
    /// May be slow; callers must tolerate the delay.
    async fn fetch_all(&self) -> Result<Vec<Exam>, DomainError>;

    /// Persist an exam and return its stored form
    ///
    /// Assigns an identifier when the exam does not carry one yet.
    async fn save(&self, exam: Exam) -> Result<Exam, DomainError>;
}

/// Repository for question labels attached to exams
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Find the question labels of an exam
    ///
    /// `None` is a valid key: it addresses exams that were never saved.
    async fn find_by_exam_id(&self, exam_id: Option<ExamId>) -> Result<Vec<String>, DomainError>;

    /// Persist a batch of question labels
    async fn save_all(&self, questions: Vec<String>) -> Result<(), DomainError>;
}
