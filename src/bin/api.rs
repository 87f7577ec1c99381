//! imposc API Server
//!
//! Run with: cargo run --bin imposc-api
//!
//! # Configuration
//!
//! Reads `config.toml` from the usual locations (see [`Config::load_default`]),
//! or the file named by `IMPOSC_CONFIG`. An unreadable or malformed config file,
//! or an invalid override, stops startup with an error. Environment variables:
//! - `IMPOSC_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `IMPOSC_API_PORT`: Port to listen on (default: 8082)
//! - `IMPOSC_MESSAGE_CAPACITY`: Retained notification messages (default: 1000)
//! - `IMPOSC_LOG_LEVEL`, `IMPOSC_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Log filter (overrides the configured level)

use imposc::api::{serve, AppState};
use imposc::catalog::{Catalog, ChartService};
use imposc::config::Config;
use imposc::logging::init_logging;
use imposc::messages::{FanoutSink, MessageLog, MessageSink, TracingSink};
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // No subscriber yet: config errors abort startup
    let config = match std::env::var("IMPOSC_CONFIG") {
        Ok(path) => Config::load_with_env(&PathBuf::from(path))?,
        Err(_) => Config::load_default()?,
    };

    init_logging(&config.logging)?;

    tracing::info!("Starting imposc API server v{}", env!("CARGO_PKG_VERSION"));

    // The catalog is fixed for the life of the process
    let catalog = Arc::new(Catalog::seeded());
    tracing::info!("Loaded {} charts", catalog.len());

    let messages = Arc::new(MessageLog::new(config.messages.capacity));
    let mut sink = FanoutSink::new().with(messages.clone());
    if config.messages.echo_to_log {
        sink = sink.with(Arc::new(TracingSink));
    }
    let sink: Arc<dyn MessageSink> = Arc::new(sink);

    let charts = Arc::new(ChartService::new(catalog, sink));
    let state = AppState::new(charts, messages, config.api.clone());

    serve(state, &config.api).await?;

    tracing::info!("imposc API server stopped");
    Ok(())
}
