//! Navigation history

use super::route::Route;

/// History of visited routes, starting at the dashboard.
///
/// Navigation only changes which route is current; it never touches chart
/// data.
#[derive(Debug, Clone)]
pub struct Navigator {
    history: Vec<Route>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            history: vec![Route::Dashboard],
        }
    }

    pub fn current(&self) -> &Route {
        // history is never empty
        &self.history[self.history.len() - 1]
    }

    /// Push a route onto the history
    pub fn navigate(&mut self, route: Route) -> &Route {
        tracing::debug!(route = %route, "Navigate");
        self.history.push(route);
        self.current()
    }

    /// Parse `path` and navigate to it. Unknown addresses leave history untouched.
    pub fn navigate_to(&mut self, path: &str) -> Option<&Route> {
        let route = Route::parse(path)?;
        Some(self.navigate(route))
    }

    /// Return to the previous route. The initial route is never popped.
    pub fn go_back(&mut self) -> &Route {
        if self.can_go_back() {
            self.history.pop();
        }
        self.current()
    }

    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    pub fn history(&self) -> &[Route] {
        &self.history
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
