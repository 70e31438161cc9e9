//! Simulator configuration, read from the environment.
//!
//! | variable                 | default   | meaning                              |
//! |--------------------------|-----------|--------------------------------------|
//! | `GILDEDROSE_DAYS`        | `2`       | days to simulate                     |
//! | `GILDEDROSE_INVENTORY`   | (fixture) | path to a JSON array of items        |
//! | `GILDEDROSE_OUTPUT`      | `text`    | `text` or `json`                     |
//! | `GILDEDROSE_LOG_FORMAT`  | `json`    | `json` or `pretty`                   |
//!
//! A first positional argument overrides `GILDEDROSE_DAYS`.

use std::path::PathBuf;

use thiserror::Error;

use gildedrose_observability::LogFormat;

pub const DAYS_VAR: &str = "GILDEDROSE_DAYS";
pub const INVENTORY_VAR: &str = "GILDEDROSE_INVENTORY";
pub const OUTPUT_VAR: &str = "GILDEDROSE_OUTPUT";
pub const LOG_FORMAT_VAR: &str = "GILDEDROSE_LOG_FORMAT";

pub const DEFAULT_DAYS: u32 = 2;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid day count {value:?}: expected a non-negative integer")]
    InvalidDays { value: String },

    #[error("unknown output format {0:?} (expected `text` or `json`)")]
    UnknownOutput(String),

    #[error("unknown log format {0:?} (expected `json` or `pretty`)")]
    UnknownLogFormat(String),
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `name, sellIn, quality` table per day.
    #[default]
    Text,
    /// One JSON snapshot per line per day.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub days: u32,
    pub inventory_path: Option<PathBuf>,
    pub output: OutputFormat,
    pub log_format: LogFormat,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            inventory_path: None,
            output: OutputFormat::default(),
            log_format: LogFormat::default(),
        }
    }
}

impl SimConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source. Unset and blank
    /// variables fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(days) = get(DAYS_VAR) {
            config.days = parse_days(&days)?;
        }
        if let Some(path) = get(INVENTORY_VAR) {
            config.inventory_path = Some(PathBuf::from(path));
        }
        if let Some(output) = get(OUTPUT_VAR) {
            let normalized = output.trim().to_ascii_lowercase();
            config.output = match normalized.as_str() {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                _ => return Err(ConfigError::UnknownOutput(output)),
            };
        }
        if let Some(log_format) = get(LOG_FORMAT_VAR) {
            config.log_format = match LogFormat::parse(&log_format) {
                Some(parsed) => parsed,
                None => return Err(ConfigError::UnknownLogFormat(log_format)),
            };
        }

        Ok(config)
    }

    /// Apply the positional day-count argument, if one was given.
    pub fn with_days_arg(mut self, arg: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(days) = arg {
            self.days = parse_days(days)?;
        }
        Ok(self)
    }
}

fn parse_days(value: &str) -> Result<u32, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidDays {
        value: value.to_string(),
    })
}
