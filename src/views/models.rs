//! View models for the dashboard screens

use std::sync::Arc;

use super::route::Route;
use crate::catalog::{ChartDescriptor, ChartSource};

/// Summary screen listing every chart
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardView {
    pub charts: Vec<Arc<ChartDescriptor>>,
}

impl DashboardView {
    pub async fn load(source: &dyn ChartSource) -> Self {
        Self {
            charts: source.list_all().await,
        }
    }
}

/// Chart list with at most one selected entry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartsView {
    pub charts: Vec<Arc<ChartDescriptor>>,
    pub selected: Option<Arc<ChartDescriptor>>,
}

impl ChartsView {
    pub async fn load(source: &dyn ChartSource) -> Self {
        Self {
            charts: source.list_all().await,
            selected: None,
        }
    }

    /// Select the loaded chart named `name`. An unknown name clears the selection.
    pub fn select(&mut self, name: &str) -> Option<&Arc<ChartDescriptor>> {
        self.selected = self.charts.iter().find(|c| c.name == name).cloned();
        self.selected.as_ref()
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

/// Detail screen for one chart.
///
/// `chart` is `None` when the requested name is not in the catalog; the
/// screen then has nothing to display.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDetailView {
    pub name: String,
    pub chart: Option<Arc<ChartDescriptor>>,
}

impl ChartDetailView {
    pub async fn load(source: &dyn ChartSource, name: &str) -> Self {
        Self {
            name: name.to_string(),
            chart: source.find_by_name(name).await,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.chart.is_none()
    }
}

/// The loaded view for a route
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Dashboard(DashboardView),
    Charts(ChartsView),
    Detail(ChartDetailView),
}

impl View {
    /// Load the view a route points at
    pub async fn load(route: &Route, source: &dyn ChartSource) -> Self {
        match route {
            Route::Dashboard => View::Dashboard(DashboardView::load(source).await),
            Route::Charts => View::Charts(ChartsView::load(source).await),
            Route::Detail { name } => View::Detail(ChartDetailView::load(source, name).await),
        }
    }

    /// The route that shows this view
    pub fn route(&self) -> Route {
        match self {
            View::Dashboard(_) => Route::Dashboard,
            View::Charts(_) => Route::Charts,
            View::Detail(detail) => Route::detail(detail.name.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, ChartService};
    use crate::messages::MessageLog;

    fn service() -> (ChartService, Arc<MessageLog>) {
        let log = Arc::new(MessageLog::default());
        (ChartService::new(Arc::new(Catalog::seeded()), log.clone()), log)
    }

    #[tokio::test]
    async fn test_dashboard_lists_all() {
        let (service, _) = service();
        let view = DashboardView::load(&service).await;
        assert_eq!(view.charts.len(), 4);
        assert_eq!(view.charts[0].name, "ellipse");
    }

    #[tokio::test]
    async fn test_charts_select() {
        let (service, _) = service();
        let mut view = ChartsView::load(&service).await;
        assert!(view.selected.is_none());

        let selected = view.select("multiplot").cloned().unwrap();
        assert!(Arc::ptr_eq(&selected, &view.charts[1]));

        assert!(view.select("bogus").is_none());
        assert!(view.selected.is_none());

        view.select("scatter");
        view.clear_selection();
        assert!(view.selected.is_none());
    }

    #[tokio::test]
    async fn test_detail_found_and_missing() {
        let (service, _) = service();

        let found = ChartDetailView::load(&service, "timeseries").await;
        assert!(!found.is_empty());
        assert_eq!(
            found.chart.unwrap().description,
            "Generates a time-series plot"
        );

        let missing = ChartDetailView::load(&service, "bogus").await;
        assert!(missing.is_empty());
        assert_eq!(missing.name, "bogus");
    }

    #[tokio::test]
    async fn test_view_load_dispatches_route() {
        let (service, log) = service();

        for route in [Route::Dashboard, Route::Charts, Route::detail("scatter")] {
            let view = View::load(&route, &service).await;
            assert_eq!(view.route(), route);
        }

        assert_eq!(log.len(), 3);
        assert_eq!(
            log.messages()[2].text,
            "ChartService: fetched chart name=scatter"
        );
    }
}
