//! # imposc
//!
//! Chart catalog service for the imposc dashboard: the fixed list of chart
//! types the impact oscillator plotter can produce, served to a list view, a
//! detail view and a summary dashboard.
//!
//! ## Modules
//!
//! - [`catalog`]: Chart descriptors, the read-only catalog and its async query facade
//! - [`messages`]: Fire-and-forget notification sinks
//! - [`views`]: Dashboard view models and navigation
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML configuration with environment overrides
//! - [`logging`]: Tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use imposc::catalog::{Catalog, ChartService, ChartSource};
//! use imposc::messages::TracingSink;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let service = ChartService::new(Arc::new(Catalog::seeded()), Arc::new(TracingSink));
//!
//!     for chart in service.list_all().await {
//!         println!("{:<12} {}", chart.name, chart.description);
//!     }
//!
//!     match service.find_by_name("ellipse").await {
//!         Some(chart) => println!("Selected {}", chart.name),
//!         None => println!("Nothing to display"),
//!     }
//! }
//! ```

pub mod api;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod messages;
pub mod views;

// Re-export top-level types for convenience
pub use catalog::{Catalog, ChartDescriptor, ChartService, ChartSource};

pub use messages::{FanoutSink, Message, MessageLog, MessageSink, NullSink, TracingSink};

pub use views::{ChartDetailView, ChartsView, DashboardView, Navigator, Route, View};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Config, ConfigError, LoggingConfig, MessagesConfig};
