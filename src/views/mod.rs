//! Dashboard Views
//!
//! Presentation state for the three dashboard screens and the navigation
//! between them. Rendering is left to whichever front end consumes these
//! types; everything here is plain data loaded through a [`ChartSource`].
//!
//! ## Routes
//!
//! - `/` - redirects to `/dashboard`
//! - `/dashboard` - summary of every chart
//! - `/charts` - chart list with a selectable entry
//! - `/detail/{name}` - a single chart, or nothing when the name is unknown
//!
//! [`ChartSource`]: crate::catalog::ChartSource

mod models;
mod navigator;
mod route;

pub use models::{ChartDetailView, ChartsView, DashboardView, View};
pub use navigator::Navigator;
pub use route::Route;
