//! Exams CLI
//!
//! Looks up exams by name, attaches their questions, and saves new exams.
//! Uses hexagonal (ports & adapters) architecture: the service only sees the
//! repository traits, and this binary wires in the in-memory adapters.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod commands;
mod config;
mod domain;
mod error;



use adapters::SeedData;
use app::ExamService;
use commands::Cli;
use config::Config;
use error::AppError;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr, stdout carries the JSON output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,exams=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let seed = match &config.seed_file {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading seed data");
            SeedData::from_file(path)?
        }
        None => SeedData::reference(),
    };
    let (exam_repo, question_repo) =
        seed.into_repositories(config.exam_fetch_latency, config.question_fetch_latency);

    let service = ExamService::new(Arc::new(exam_repo), Arc::new(question_repo));

    match commands::run(&service, cli.command).await {
        Ok(Some(exam)) => {
            println!("{}", serde_json::to_string_pretty(&exam)?);
            Ok(ExitCode::SUCCESS)
        }
        Ok(None) => {
            println!("not found");
            Ok(ExitCode::FAILURE)
        }
        Err(AppError::Domain(e)) if e.is_not_found() => {
            println!("not found");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
