//! Recording stub implementations of the repository ports
//!
//! Stubs return canned data, can be told to fail, and append every call
//! they receive to a `CallLog`.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Exam, ExamId};
use crate::domain::ports::{ExamRepository, QuestionRepository};
use crate::error::DomainError;

// ============================================================================
// Call log
// ============================================================================

/// A call received by one of the stubs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    FetchAll,
    /// Exam save, by exam name
    SaveExam(String),
    FindQuestions(Option<ExamId>),
    SaveQuestions(Vec<String>),
}

/// Ordered record of calls, shareable between stubs
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<RwLock<Vec<Call>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, call: Call) {
        self.calls.write().unwrap().push(call);
    }

    /// Every call so far, in order
    pub fn calls(&self) -> Vec<Call> {
        self.calls.read().unwrap().clone()
    }

    /// Number of calls equal to `call`
    pub fn count(&self, call: &Call) -> usize {
        self.calls.read().unwrap().iter().filter(|c| *c == call).count()
    }

    /// Keys passed to question lookups, in order
    pub fn question_lookups(&self) -> Vec<Option<ExamId>> {
        self.calls
            .read()
            .unwrap()
            .iter()
            .filter_map(|c| match c {
                Call::FindQuestions(id) => Some(*id),
                _ => None,
            })
            .collect()
    }
}

// ============================================================================
// Stub Exam Repository
// ============================================================================

/// Exam repository returning a fixed collection
#[derive(Default)]
pub struct StubExamRepository {
    exams: Vec<Exam>,
    /// Next identifier handed out by `save`; `None` leaves saved exams untouched
    next_id: Option<Arc<RwLock<i64>>>,
    fetch_error: Option<DomainError>,
    save_error: Option<DomainError>,
    log: CallLog,
}

impl StubExamRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collection returned by `fetch_all`
    pub fn with_exams(mut self, exams: Vec<Exam>) -> Self {
        self.exams = exams;
        self
    }

    /// Assign sequential identifiers on save, starting at `start`
    pub fn with_id_sequence(mut self, start: i64) -> Self {
        self.next_id = Some(Arc::new(RwLock::new(start)));
        self
    }

    pub fn failing_fetch(mut self, error: DomainError) -> Self {
        self.fetch_error = Some(error);
        self
    }

    pub fn failing_save(mut self, error: DomainError) -> Self {
        self.save_error = Some(error);
        self
    }

    pub fn with_log(mut self, log: CallLog) -> Self {
        self.log = log;
        self
    }
}

#[async_trait]
impl ExamRepository for StubExamRepository {
    async fn fetch_all(&self) -> Result<Vec<Exam>, DomainError> {
        self.log.record(Call::FetchAll);

        if let Some(ref error) = self.fetch_error {
            return Err(error.clone());
        }
        Ok(self.exams.clone())
    }

    async fn save(&self, mut exam: Exam) -> Result<Exam, DomainError> {
        self.log.record(Call::SaveExam(exam.name.clone()));

        if let Some(ref error) = self.save_error {
            return Err(error.clone());
        }
        if let Some(ref next_id) = self.next_id {
            let mut next_id = next_id.write().unwrap();
            exam.id = Some(ExamId(*next_id));
            *next_id += 1;
        }
        Ok(exam)
    }
}

// ============================================================================
// Stub Question Repository
// ============================================================================

type QuestionAnswer =
    Box<dyn Fn(Option<ExamId>) -> Result<Vec<String>, DomainError> + Send + Sync>;

/// Question repository computing its answer from the requested key
pub struct StubQuestionRepository {
    answer: QuestionAnswer,
    save_error: Option<DomainError>,
    log: CallLog,
}

impl Default for StubQuestionRepository {
    fn default() -> Self {
        Self {
            answer: Box::new(|_| Ok(Vec::new())),
            save_error: None,
            log: CallLog::default(),
        }
    }
}

impl StubQuestionRepository {
    /// Answers every lookup with no questions
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every lookup with the same labels
    pub fn returning(self, questions: Vec<String>) -> Self {
        self.answering(move |_| Ok(questions.clone()))
    }

    /// Compute the answer from the requested key
    pub fn answering<F>(mut self, answer: F) -> Self
    where
        F: Fn(Option<ExamId>) -> Result<Vec<String>, DomainError> + Send + Sync + 'static,
    {
        self.answer = Box::new(answer);
        self
    }

    /// Fail lookups for `key`; other keys keep the current answer
    pub fn failing_for(mut self, key: Option<ExamId>, error: DomainError) -> Self {
        let fallback = self.answer;
        self.answer = Box::new(move |id| {
            if id == key {
                Err(error.clone())
            } else {
                fallback(id)
            }
        });
        self
    }

    pub fn failing_save(mut self, error: DomainError) -> Self {
        self.save_error = Some(error);
        self
    }

    pub fn with_log(mut self, log: CallLog) -> Self {
        self.log = log;
        self
    }
}

#[async_trait]
impl QuestionRepository for StubQuestionRepository {
    async fn find_by_exam_id(&self, exam_id: Option<ExamId>) -> Result<Vec<String>, DomainError> {
        self.log.record(Call::FindQuestions(exam_id));
        (self.answer)(exam_id)
    }

    async fn save_all(&self, questions: Vec<String>) -> Result<(), DomainError> {
        self.log.record(Call::SaveQuestions(questions));

        if let Some(ref error) = self.save_error {
            return Err(error.clone());
        }
        Ok(())
    }
}
