//! Command-line interface
//!
//! Subcommands map one-to-one onto `ExamService` operations.

use clap::{Parser, Subcommand};

use crate::app::ExamService;
use crate::domain::entities::Exam;
use crate::domain::ports::{ExamRepository, QuestionRepository};
use crate::error::AppError;

#[derive(Debug, Parser)]
#[command(name = "exams", version, about = "Look up and save exams")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Find an exam by its exact name
    Find { name: String },
    /// Find an exam by its exact name and list its questions
    Questions { name: String },
    /// Save a new exam with its questions
    Save {
        name: String,
        /// Question label (repeatable)
        #[arg(short, long = "question")]
        questions: Vec<String>,
    },
}

/// Run one command against the service
///
/// `Ok(None)` means a plain lookup found nothing; enrichment of a missing exam
/// is an error instead.
pub async fn run<ER, QR>(
    service: &ExamService<ER, QR>,
    command: Command,
) -> Result<Option<Exam>, AppError>
where
    ER: ExamRepository,
    QR: QuestionRepository,
{
    tracing::debug!(?command, "Running command");

    let exam = match command {
        Command::Find { name } => service.find_by_name(&name).await?,
        Command::Questions { name } => Some(service.find_by_name_with_questions(&name).await?),
        Command::Save { name, questions } => {
            Some(service.save(Exam::new(name).with_questions(questions)).await?)
        }
    };

    Ok(exam)
}
