//! Exam domain entity
//!
//! An exam is a named record carrying the labels of the questions it covers.

use serde::{Deserialize, Serialize};

/// Identifier of a stored exam, assigned by the exam repository on save
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExamId(pub i64);

impl From<i64> for ExamId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ExamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Exam entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    /// Absent until the exam has been saved
    pub id: Option<ExamId>,
    pub name: String,
    /// Question labels, in the order they were attached
    #[serde(default)]
    pub questions: Vec<String>,
}

impl Exam {
    /// A new, unsaved exam without questions
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            questions: Vec::new(),
        }
    }

    /// An exam that already carries an identifier
    pub fn with_id(id: impl Into<ExamId>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::new(name)
        }
    }

    /// Replace the question labels
    pub fn with_questions<I, S>(mut self, questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.questions = questions.into_iter().map(Into::into).collect();
        self
    }
}
