//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

use wayfarer_core::{WayfarerError, WayfarerResult};

use crate::{LogFormat, RuntimeConfig};

/// Install the global subscriber. Logs go to stderr so rendered results
/// on stdout stay clean.
pub fn init_tracing(config: &RuntimeConfig) -> WayfarerResult<()> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .map_err(|e| WayfarerError::InvalidConfig(format!("log filter: {e}")))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match config.log_format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| WayfarerError::InvalidConfig(format!("tracing: {e}")))
}
