//! Navigable addresses

use std::fmt;

/// A parsed dashboard address
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Dashboard,
    Charts,
    Detail { name: String },
}

impl Route {
    /// Parse an address such as `/detail/scatter`.
    ///
    /// The leading slash is optional and the empty address redirects to the
    /// dashboard. The chart name is percent-decoded and may be empty, so
    /// `parse(route.path())` gives back every detail route.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.strip_prefix('/').unwrap_or(path);

        match path {
            "" | "dashboard" => return Some(Route::Dashboard),
            "charts" => return Some(Route::Charts),
            _ => {}
        }

        let raw = path.strip_prefix("detail/")?;
        if raw.contains('/') {
            return None;
        }

        let name = urlencoding::decode(raw).ok()?.into_owned();
        Some(Route::Detail { name })
    }

    pub fn detail(name: impl Into<String>) -> Self {
        Route::Detail { name: name.into() }
    }

    /// Canonical address for this route
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/dashboard".to_string(),
            Route::Charts => "/charts".to_string(),
            Route::Detail { name } => format!("/detail/{}", urlencoding::encode(name)),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
