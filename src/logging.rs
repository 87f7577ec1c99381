//! Logging Setup
//!
//! Installs the global tracing subscriber from [`LoggingConfig`].
//! `RUST_LOG` takes precedence over the configured level.

use std::fs::OpenOptions;
use std::sync::Arc;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use crate::config::LoggingConfig;

/// Filter used when `RUST_LOG` is not set
pub fn default_filter(config: &LoggingConfig) -> String {
    format!("imposc={},tower_http={}", config.level, config.level)
}

/// Install the global subscriber. Fails if the log file cannot be opened or a
/// subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(config)));

    let file = match &config.file {
        Some(path) => Some(Arc::new(
            OpenOptions::new().create(true).append(true).open(path)?,
        )),
        None => None,
    };

    let layer: Box<dyn Layer<Registry> + Send + Sync> = match (file, config.is_json()) {
        (Some(file), true) => fmt::layer().json().with_writer(file).boxed(),
        (Some(file), false) => fmt::layer().with_ansi(false).with_writer(file).boxed(),
        (None, true) => fmt::layer().json().boxed(),
        (None, false) => fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .try_init()?;

    Ok(())
}
