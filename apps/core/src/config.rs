//! Counselor configuration.
//!
//! Defaults work out of the box; every value can be overridden from the
//! environment (a `.env` file is honoured).

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;
use validator::Validate;

use crate::error::{AppError, Result};

pub const ENV_ASSESSMENT_THRESHOLD: &str = "MINDCARE_ASSESSMENT_THRESHOLD";
pub const ENV_COPING_COUNT: &str = "MINDCARE_COPING_COUNT";
pub const ENV_SEED: &str = "MINDCARE_SEED";
pub const ENV_LOG_FORMAT: &str = "MINDCARE_LOG_FORMAT";

/// Upper bound on coping strategies per response.
pub const MAX_COPING_STRATEGIES: usize = 3;

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" | "bunyan" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!("Unknown log format: {}", other))),
        }
    }
}

/// Runtime settings for the responder.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct CounselorConfig {
    /// PHQ-9 / GAD-7 score a context must exceed to add the supportive sentence.
    #[validate(range(min = 0, max = 27))]
    pub assessment_threshold: u32,
    /// Number of coping strategies returned per response, at most
    /// [`MAX_COPING_STRATEGIES`].
    #[validate(range(min = 1, max = 3))]
    pub coping_strategy_count: usize,
    /// Fixed seed for reproducible template/strategy selection.
    pub rng_seed: Option<u64>,
    pub log_format: LogFormat,
}

impl Default for CounselorConfig {
    fn default() -> Self {
        Self {
            assessment_threshold: 10,
            coping_strategy_count: 3,
            rng_seed: None,
            log_format: LogFormat::Pretty,
        }
    }
}

impl CounselorConfig {
    /// Load `.env` (if any), then read overrides from the environment.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenv::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }
        Self::from_current_env()
    }

    /// Load a specific env file, then read overrides from the environment.
    pub fn from_env_file(path: &Path) -> Result<Self> {
        dotenv::from_path(path)
            .map_err(|e| AppError::Config(format!("Failed to load {}: {}", path.display(), e)))?;
        Self::from_current_env()
    }

    fn from_current_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(value) = read_var(ENV_ASSESSMENT_THRESHOLD)? {
            config.assessment_threshold = value;
        }
        if let Some(value) = read_var(ENV_COPING_COUNT)? {
            config.coping_strategy_count = value;
        }
        if let Some(value) = read_var(ENV_SEED)? {
            config.rng_seed = Some(value);
        }
        if let Some(value) = read_var(ENV_LOG_FORMAT)? {
            config.log_format = value;
        }

        config.validate()?;
        Ok(config)
    }
}

fn read_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| AppError::Config(format!("{}={:?}: {}", name, raw, e))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(AppError::Config(format!("{}: {}", name, e))),
    }
}
