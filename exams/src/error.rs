//! Unified error types for the exams service
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic and repository errors
//! - `AppError`: Binary layer errors (wraps domain errors for the CLI)

use thiserror::Error;

/// Domain layer errors - raised by the service and by repository adapters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    /// Check if this error means the requested entity does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound(_))
    }
}

/// Application layer errors - used by the CLI binary
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Seed data error: {0}")]
    Seed(String),
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Seed(e.to_string())
    }
}
