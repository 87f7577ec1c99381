//! Catalog data types

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A named chart type the dashboard can display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartDescriptor {
    /// Identifier used in addresses and lookups
    pub name: String,
    /// Human-readable description
    pub description: String,
}

impl ChartDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Ordered, read-only collection of chart descriptors.
///
/// Built once at startup and shared behind an `Arc`. There is no way to add,
/// update or remove an entry after construction. Entries are stored as
/// `Arc<ChartDescriptor>` so a selected chart is an alias into the catalog
/// rather than a copy.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<Arc<ChartDescriptor>>,
}

impl Catalog {
    /// Build a catalog from descriptors, keeping their order.
    ///
    /// Names are not checked for uniqueness; lookups return the first match.
    pub fn new(entries: impl IntoIterator<Item = ChartDescriptor>) -> Self {
        Self {
            entries: entries.into_iter().map(Arc::new).collect(),
        }
    }

    /// The charts the imposc plotting backend knows how to produce
    pub fn seeded() -> Self {
        Self::new([
            ChartDescriptor::new("ellipse", "Generates a (1, n) orbit sigma response plot"),
            ChartDescriptor::new("multiplot", "Generates multiple plots on a single image"),
            ChartDescriptor::new("scatter", "Generates a scatter plot"),
            ChartDescriptor::new("timeseries", "Generates a time-series plot"),
        ])
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[Arc<ChartDescriptor>] {
        &self.entries
    }

    /// First entry whose name matches exactly
    pub fn get(&self, name: &str) -> Option<&Arc<ChartDescriptor>> {
        self.entries.iter().find(|chart| chart.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}
