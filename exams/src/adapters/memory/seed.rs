//! Seed data for the in-memory adapters
//!
//! Either the built-in reference data set or a JSON document of the form
//! `{ "exams": [...], "questions": { "<exam id>": ["label", ...] }, "unsaved_questions": [...] }`.
//!
//! JSON object keys cannot be null, so the questions of exams without an id
//! live in `unsaved_questions` rather than in `questions`.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{InMemoryExamRepository, InMemoryQuestionRepository};
use crate::domain::entities::{Exam, ExamId};
use crate::error::AppError;

/// Initial contents of both in-memory repositories
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    pub exams: Vec<Exam>,
    #[serde(default)]
    pub questions: BTreeMap<ExamId, Vec<String>>,
    /// Questions answered for exams that carry no id
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unsaved_questions: Vec<String>,
}

impl SeedData {
    /// The built-in data set
    pub fn reference() -> Self {
        let exams = vec![
            Exam::with_id(5, "Matematicas"),
            Exam::with_id(6, "Lenguaje"),
            Exam::with_id(7, "Historia"),
        ];

        let questions: BTreeMap<ExamId, Vec<String>> = [
            (
                5,
                &["aritmética", "integrales", "derivadas", "trigonometría", "geometría"][..],
            ),
            (6, &["ortografía", "gramática", "literatura"][..]),
            (7, &["edad media", "revolución francesa", "guerras mundiales"][..]),
        ]
        .into_iter()
        .map(|(id, labels)| {
            (
                ExamId(id),
                labels.iter().map(|label| label.to_string()).collect(),
            )
        })
        .collect();

        Self {
            exams,
            questions,
            unsaved_questions: Vec::new(),
        }
    }

    /// Parse and validate a JSON seed document
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let seed: SeedData = serde_json::from_str(json)?;
        seed.validate()?;
        Ok(seed)
    }

    /// Load a JSON seed file
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| AppError::Seed(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    fn validate(&self) -> Result<(), AppError> {
        let mut seen = HashSet::new();
        for exam in &self.exams {
            if exam.name.trim().is_empty() {
                return Err(AppError::Seed("Exam with blank name".to_string()));
            }
            if let Some(id) = exam.id {
                if !seen.insert(id) {
                    return Err(AppError::Seed(format!("Duplicate exam id {}", id)));
                }
            }
        }
        Ok(())
    }

    /// Build both repositories from this data
    pub fn into_repositories(
        self,
        exam_latency: Duration,
        question_latency: Duration,
    ) -> (InMemoryExamRepository, InMemoryQuestionRepository) {
        tracing::debug!(
            exams = self.exams.len(),
            question_sets = self.questions.len(),
            unsaved_questions = self.unsaved_questions.len(),
            "Seeding in-memory repositories"
        );

        let exams = InMemoryExamRepository::new()
            .with_exams(self.exams)
            .with_latency(exam_latency);

        let mut questions = self
            .questions
            .into_iter()
            .fold(InMemoryQuestionRepository::new(), |repo, (id, labels)| {
                repo.with_questions(Some(id), labels)
            })
            .with_latency(question_latency);
        if !self.unsaved_questions.is_empty() {
            questions = questions.with_questions(None, self.unsaved_questions);
        }

        (exams, questions)
    }
}
