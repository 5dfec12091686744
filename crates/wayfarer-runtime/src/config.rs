//! Runtime configuration

use std::str::FromStr;
use std::time::Duration;

use wayfarer_core::{WayfarerError, WayfarerResult};
use wayfarer_time::RefresherConfig;

use crate::CatalogSource;

/// Log output format
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = WayfarerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "plain" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(WayfarerError::InvalidConfig(format!(
                "unknown log format: {other}"
            ))),
        }
    }
}

/// Wayfarer runtime configuration
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Catalogue location
    pub source: CatalogSource,
    /// Live clock update interval
    pub refresh_interval: Duration,
    pub log_format: LogFormat,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        RuntimeConfig {
            source: CatalogSource::default(),
            refresh_interval: Duration::from_secs(1),
            log_format: LogFormat::Text,
            log_filter: "info".to_string(),
        }
    }
}

impl RuntimeConfig {
    pub const SOURCE_VAR: &'static str = "WAYFARER_SOURCE";
    pub const REFRESH_VAR: &'static str = "WAYFARER_REFRESH";
    pub const LOG_FORMAT_VAR: &'static str = "WAYFARER_LOG_FORMAT";
    pub const LOG_FILTER_VAR: &'static str = "WAYFARER_LOG";

    /// Defaults overridden by `WAYFARER_*` environment variables
    pub fn from_env() -> WayfarerResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns per variable name
    pub fn from_lookup<F>(lookup: F) -> WayfarerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = RuntimeConfig::default();

        if let Some(source) = lookup(Self::SOURCE_VAR) {
            config.source = CatalogSource::parse(&source);
        }

        if let Some(raw) = lookup(Self::REFRESH_VAR) {
            let interval = humantime::parse_duration(raw.trim()).map_err(|e| {
                WayfarerError::InvalidConfig(format!("{}: {e}", Self::REFRESH_VAR))
            })?;
            if interval.is_zero() {
                return Err(WayfarerError::InvalidConfig(format!(
                    "{} must be greater than zero",
                    Self::REFRESH_VAR
                )));
            }
            config.refresh_interval = interval;
        }

        if let Some(raw) = lookup(Self::LOG_FORMAT_VAR) {
            config.log_format = raw.parse()?;
        }

        if let Some(filter) = lookup(Self::LOG_FILTER_VAR) {
            config.log_filter = filter;
        }

        Ok(config)
    }

    pub fn refresher_config(&self) -> RefresherConfig {
        RefresherConfig {
            interval: self.refresh_interval,
        }
    }
}
