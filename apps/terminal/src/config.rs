//! Configuration from the command line and environment.

use std::path::PathBuf;

use review_core::{ReviewSettings, SettingsOverrides};
use thiserror::Error;

const DEFAULT_RESULTS: &str = "review-results.jsonl";
const DEFAULT_LOG: &str = "wordnest-review.log";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("usage: wordnest-review <queue.json>")]
    MissingQueue,

    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub queue_path: PathBuf,
    pub results_path: PathBuf,
    pub log_path: PathBuf,
    pub settings: ReviewSettings,
}

impl Config {
    /// Load `.env`, then read arguments and `WORDNEST_*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_parts(std::env::args().skip(1), |var| std::env::var(var).ok())
    }

    pub fn from_parts(
        mut args: impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let queue_path = args.next().map(PathBuf::from).ok_or(ConfigError::MissingQueue)?;

        let overrides = SettingsOverrides {
            error_threshold: parse(&env, "WORDNEST_ERROR_THRESHOLD")?,
            recall_max_attempts: parse(&env, "WORDNEST_RECALL_ATTEMPTS")?,
            recall_reset_delay_ms: parse(&env, "WORDNEST_RECALL_RESET_MS")?,
            forgiving_hints: parse_flag(&env, "WORDNEST_FORGIVING_HINTS")?,
            queue_limit: parse(&env, "WORDNEST_QUEUE_LIMIT")?,
        };

        Ok(Self {
            queue_path,
            results_path: env("WORDNEST_RESULTS")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RESULTS)),
            log_path: env("WORDNEST_LOG")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG)),
            settings: ReviewSettings::merge(&ReviewSettings::default(), Some(&overrides)),
        })
    }
}

fn parse<T: std::str::FromStr>(
    env: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    match env(var) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { var, value }),
        None => Ok(None),
    }
}

fn parse_flag(
    env: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<bool>, ConfigError> {
    match env(var) {
        Some(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(Some(true)),
            "0" | "false" | "no" | "off" => Ok(Some(false)),
            _ => Err(ConfigError::Invalid { var, value }),
        },
        None => Ok(None),
    }
}
