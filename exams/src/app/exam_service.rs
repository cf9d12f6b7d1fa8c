//! Exam service
//!
//! Name-based exam lookup, question enrichment and saving.
//! Every operation is a straight chain of awaited repository calls:
//! no retries, no local recovery. Repository errors reach the caller as-is.

use std::sync::Arc;

use crate::domain::entities::Exam;
use crate::domain::ports::{ExamRepository, QuestionRepository};
use crate::error::DomainError;

/// Service for looking up and saving exams
pub struct ExamService<ER, QR>
where
    ER: ExamRepository,
    QR: QuestionRepository,
{
    exams: Arc<ER>,
    questions: Arc<QR>,
}

impl<ER, QR> ExamService<ER, QR>
where
    ER: ExamRepository,
    QR: QuestionRepository,
{
    pub fn new(exams: Arc<ER>, questions: Arc<QR>) -> Self {
        Self { exams, questions }
    }

    /// Find the first exam whose name matches exactly
    ///
    /// An empty collection is not an error: it yields `None`.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Exam>, DomainError> {
        let exams = self.exams.fetch_all().await?;
        tracing::debug!(name, total = exams.len(), "Looking up exam by name");

        Ok(exams.into_iter().find(|exam| exam.name == name))
    }

    /// Find an exam by name and attach its question labels
    ///
    /// The question lookup is keyed by the exam's identifier, even when the
    /// exam has none. Fails with `NotFound` when no exam has that name, in
    /// which case the question repository is never called.
    pub async fn find_by_name_with_questions(&self, name: &str) -> Result<Exam, DomainError> {
        let mut exam = match self.find_by_name(name).await? {
            Some(exam) => exam,
            None => {
                tracing::warn!(name, "No exam to enrich");
                return Err(DomainError::NotFound(format!("Exam '{}'", name)));
            }
        };

        exam.questions = self.questions.find_by_exam_id(exam.id).await?;
        tracing::debug!(
            exam_id = ?exam.id,
            questions = exam.questions.len(),
            "Attached questions to exam"
        );

        Ok(exam)
    }

    /// Save an exam, then its question labels
    ///
    /// Returns the exam as stored by the exam repository, carrying the
    /// identifier it assigned. There is no rollback: if saving the questions
    /// fails, the exam itself stays saved.
    pub async fn save(&self, exam: Exam) -> Result<Exam, DomainError> {
        let questions = exam.questions.clone();

        let saved = self.exams.save(exam).await?;
        tracing::debug!(exam_id = ?saved.id, name = %saved.name, "Saved exam");

        self.questions.save_all(questions).await?;

        Ok(saved)
    }
}
