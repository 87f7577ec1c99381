//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::catalog::ChartSource;
use crate::config::ApiConfig;
use crate::messages::MessageLog;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Chart queries
    pub charts: Arc<dyn ChartSource>,
    /// Notification log the chart source writes to
    pub messages: Arc<MessageLog>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(charts: Arc<dyn ChartSource>, messages: Arc<MessageLog>, config: ApiConfig) -> Self {
        Self {
            charts,
            messages,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
