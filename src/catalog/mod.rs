//! Chart Catalog
//!
//! The fixed set of chart types the dashboard can offer, and the query
//! facade the views and the API read it through.
//!
//! - **types**: `ChartDescriptor` and the ordered, read-only `Catalog`
//! - **service**: the `ChartSource` trait and its in-memory `ChartService`
//!
//! # Example
//!
//! ```rust,no_run
//! use imposc::catalog::{Catalog, ChartService, ChartSource};
//! use imposc::messages::MessageLog;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let log = Arc::new(MessageLog::default());
//!     let service = ChartService::new(Arc::new(Catalog::seeded()), log.clone());
//!
//!     let charts = service.list_all().await;
//!     assert_eq!(charts.len(), 4);
//!
//!     if let Some(chart) = service.find_by_name("scatter").await {
//!         println!("{}: {}", chart.name, chart.description);
//!     }
//!
//!     assert_eq!(log.len(), 2);
//! }
//! ```

pub mod service;
pub mod types;

pub use service::{ChartService, ChartSource};
pub use types::{Catalog, ChartDescriptor};
