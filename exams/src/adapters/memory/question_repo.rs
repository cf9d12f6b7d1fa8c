//! In-memory adapter for QuestionRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::domain::entities::ExamId;
use crate::domain::ports::QuestionRepository;
use crate::error::DomainError;

/// In-memory implementation of QuestionRepository
///
/// Lookups are keyed by `Option<ExamId>`; the `None` key holds the questions
/// of exams that were never saved. Saved batches carry no exam key and are
/// kept apart from the lookup table.
#[derive(Default)]
pub struct InMemoryQuestionRepository {
    by_exam: Arc<RwLock<HashMap<Option<ExamId>, Vec<String>>>>,
    batches: Arc<RwLock<Vec<Vec<String>>>>,
    latency: Duration,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the questions of one exam
    pub fn with_questions<I, S>(self, exam_id: Option<ExamId>, questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.by_exam
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(exam_id, questions.into_iter().map(Into::into).collect());
        self
    }

    /// Delay applied to every `find_by_exam_id`
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Batches received by `save_all`, oldest first
    #[cfg(test)]
    pub fn saved_batches(&self) -> Vec<Vec<String>> {
        self.batches
            .read()
            .map(|batches| batches.clone())
            .unwrap_or_default()
    }

    fn lock_error<T>(_: T) -> DomainError {
        DomainError::Storage("question store lock poisoned".to_string())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn find_by_exam_id(&self, exam_id: Option<ExamId>) -> Result<Vec<String>, DomainError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let by_exam = self.by_exam.read().map_err(Self::lock_error)?;
        Ok(by_exam.get(&exam_id).cloned().unwrap_or_default())
    }

    async fn save_all(&self, questions: Vec<String>) -> Result<(), DomainError> {
        if let Some(pos) = questions.iter().position(|q| q.trim().is_empty()) {
            return Err(DomainError::InvalidArgument(format!(
                "Question label at position {} is blank",
                pos
            )));
        }

        tracing::info!(count = questions.len(), "Stored question batch");
        self.batches
            .write()
            .map_err(Self::lock_error)?
            .push(questions);
        Ok(())
    }
}
