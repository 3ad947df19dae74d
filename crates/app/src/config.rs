//! Process configuration read from the environment.
//!
//! An optional JSON file (`MAILBOARD_CONFIG_FILE`) is applied first; the
//! individual variables override whatever it set.

use std::path::{Path, PathBuf};

use mailboard_observability::{LogConfig, LogFormat};
use serde::Deserialize;
use thiserror::Error;

pub const ENV_CONFIG_FILE: &str = "MAILBOARD_CONFIG_FILE";
pub const ENV_SEED: &str = "MAILBOARD_SEED";
pub const ENV_SEED_FILE: &str = "MAILBOARD_SEED_FILE";
pub const ENV_LOG_FORMAT: &str = "MAILBOARD_LOG_FORMAT";
pub const ENV_CHART_SERIES: &str = "MAILBOARD_CHART_SERIES";

pub const DEFAULT_SEED: [&str; 3] = [
    "daniele@marcopoloni.com",
    "dg2@marcopoloni.com",
    "dg22@marcopoloni.com",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not {expected}: {source}", .path.display())]
    ParseFile {
        path: PathBuf,
        expected: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("MAILBOARD_LOG_FORMAT must be `json` or `text`, got `{0}`")]
    LogFormat(String),

    #[error("MAILBOARD_CHART_SERIES must be `true` or `false`, got `{0}`")]
    ChartSeries(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Records the store starts with, top first.
    pub seed: Vec<String>,
    pub log: LogConfig,
    /// Whether the terminal chart prints the synthetic mention series.
    pub chart_series: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED.iter().map(|s| s.to_string()).collect(),
            log: LogConfig::default(),
            chart_series: true,
        }
    }
}

/// Shape of `MAILBOARD_CONFIG_FILE`; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    seed: Option<Vec<String>>,
    log: Option<LogConfig>,
    chart_series: Option<bool>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_CONFIG_FILE) {
            let file: FileConfig = read_json(Path::new(&path), "a mailboard config object")?;
            if let Some(seed) = file.seed {
                config.seed = drop_blank(seed);
            }
            if let Some(log) = file.log {
                config.log = log;
            }
            if let Some(chart_series) = file.chart_series {
                config.chart_series = chart_series;
            }
        }

        if let Some(path) = lookup(ENV_SEED_FILE) {
            let seed: Vec<String> = read_json(Path::new(&path), "a JSON array of strings")?;
            config.seed = drop_blank(seed);
        } else if let Some(raw) = lookup(ENV_SEED) {
            config.seed = parse_seed_list(&raw);
        }

        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            config.log.format = LogFormat::parse(&raw).ok_or(ConfigError::LogFormat(raw))?;
        }

        if let Some(raw) = lookup(ENV_CHART_SERIES) {
            config.chart_series = raw
                .trim()
                .parse::<bool>()
                .map_err(|_| ConfigError::ChartSeries(raw))?;
        }

        Ok(config)
    }
}

/// Split a comma-separated list, dropping blank items.
pub fn parse_seed_list(raw: &str) -> Vec<String> {
    drop_blank(raw.split(',').map(|item| item.trim().to_string()))
}

fn drop_blank(records: impl IntoIterator<Item = String>) -> Vec<String> {
    records
        .into_iter()
        .filter(|r| !r.trim().is_empty())
        .collect()
}

fn read_json<T>(path: &Path, expected: &'static str) -> Result<T, ConfigError>
where
    T: serde::de::DeserializeOwned,
{
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ConfigError::ParseFile {
        path: path.to_path_buf(),
        expected,
        source,
    })
}
