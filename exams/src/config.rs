use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::AppError;

/// Default delay of a full exam fetch, matching the slow reference data source
const DEFAULT_EXAM_LATENCY_MS: u64 = 5000;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Simulated latency of `fetch_all` on the exam repository
    pub exam_fetch_latency: Duration,
    /// Simulated latency of question lookups
    pub question_fetch_latency: Duration,
    /// JSON file replacing the built-in seed data
    pub seed_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exam_fetch_latency: Duration::from_millis(DEFAULT_EXAM_LATENCY_MS),
            question_fetch_latency: Duration::ZERO,
            seed_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup (the process environment in `from_env`)
    fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            exam_fetch_latency: parse_millis(&lookup, "EXAMS_FETCH_LATENCY_MS")?
                .unwrap_or(defaults.exam_fetch_latency),
            question_fetch_latency: parse_millis(&lookup, "QUESTIONS_FETCH_LATENCY_MS")?
                .unwrap_or(defaults.question_fetch_latency),
            seed_file: lookup("EXAMS_SEED_FILE")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

fn parse_millis<F>(lookup: &F, key: &str) -> Result<Option<Duration>, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|e| AppError::Config(format!("{} must be milliseconds: {}", key, e)))
        })
        .transpose()
}
