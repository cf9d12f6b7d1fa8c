//! In-memory adapter for ExamRepository

use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::domain::entities::{Exam, ExamId};
use crate::domain::ports::ExamRepository;
use crate::error::DomainError;

/// In-memory implementation of ExamRepository
///
/// `fetch_all` waits for the configured latency before answering, to stand
/// in for a slow data source.
#[derive(Default)]
pub struct InMemoryExamRepository {
    exams: Arc<RwLock<Vec<Exam>>>,
    latency: Duration,
}

impl InMemoryExamRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an exam
    pub fn with_exam(self, exam: Exam) -> Self {
        self.exams
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(exam);
        self
    }

    /// Pre-populate with several exams, keeping their order
    pub fn with_exams(self, exams: impl IntoIterator<Item = Exam>) -> Self {
        exams.into_iter().fold(self, Self::with_exam)
    }

    /// Delay applied to every `fetch_all`
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    fn lock_error<T>(_: T) -> DomainError {
        DomainError::Storage("exam store lock poisoned".to_string())
    }
}

/// Next identifier after the highest one in use
fn next_id(exams: &[Exam]) -> Result<ExamId, DomainError> {
    match exams.iter().filter_map(|exam| exam.id).max() {
        None => Ok(ExamId(1)),
        Some(ExamId(max)) => max
            .checked_add(1)
            .map(ExamId)
            .ok_or_else(|| DomainError::Storage("exam id space exhausted".to_string())),
    }
}

#[async_trait]
impl ExamRepository for InMemoryExamRepository {
    async fn fetch_all(&self) -> Result<Vec<Exam>, DomainError> {
        if !self.latency.is_zero() {
            tracing::debug!(latency_ms = self.latency.as_millis() as u64, "Fetching exams");
            tokio::time::sleep(self.latency).await;
        }

        let exams = self.exams.read().map_err(Self::lock_error)?;
        Ok(exams.clone())
    }

    async fn save(&self, mut exam: Exam) -> Result<Exam, DomainError> {
        if exam.name.trim().is_empty() {
            return Err(DomainError::InvalidArgument(
                "Exam name must not be blank".to_string(),
            ));
        }

        let mut exams = self.exams.write().map_err(Self::lock_error)?;

        match exam.id {
            None => {
                exam.id = Some(next_id(&exams)?);
                exams.push(exam.clone());
            }
            Some(id) => match exams.iter_mut().find(|stored| stored.id == Some(id)) {
                Some(stored) => *stored = exam.clone(),
                None => exams.push(exam.clone()),
            },
        }

        tracing::info!(exam_id = ?exam.id, name = %exam.name, "Stored exam");
        Ok(exam)
    }
}
