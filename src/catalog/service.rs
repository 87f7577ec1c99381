//! Chart Service
//!
//! Query facade over the catalog. Both queries are async so a remote data
//! source can replace the in-memory one without touching callers.

use async_trait::async_trait;
use std::sync::Arc;

use super::types::{Catalog, ChartDescriptor};
use crate::messages::{MessageSink, NullSink};

/// Anything that can answer chart queries
#[async_trait]
pub trait ChartSource: Send + Sync {
    /// Every chart, in catalog order
    async fn list_all(&self) -> Vec<Arc<ChartDescriptor>>;

    /// The first chart named exactly `name`, or `None` when there is no such chart
    async fn find_by_name(&self, name: &str) -> Option<Arc<ChartDescriptor>>;
}

/// In-memory chart source backed by a fixed catalog.
///
/// Every query posts one audit line to the injected message sink. The sink is
/// never awaited and cannot influence the result.
#[derive(Clone)]
pub struct ChartService {
    catalog: Arc<Catalog>,
    messages: Arc<dyn MessageSink>,
}

impl ChartService {
    pub fn new(catalog: Arc<Catalog>, messages: Arc<dyn MessageSink>) -> Self {
        Self { catalog, messages }
    }

    /// Service that drops its audit messages
    pub fn without_messages(catalog: Arc<Catalog>) -> Self {
        Self::new(catalog, Arc::new(NullSink))
    }
}

#[async_trait]
impl ChartSource for ChartService {
    async fn list_all(&self) -> Vec<Arc<ChartDescriptor>> {
        let charts = self.catalog.entries().to_vec();
        tracing::debug!(count = charts.len(), "Listed charts");
        self.messages.add("ChartService: fetched charts");
        charts
    }

    async fn find_by_name(&self, name: &str) -> Option<Arc<ChartDescriptor>> {
        let chart = self.catalog.get(name).cloned();
        tracing::debug!(chart = %name, found = chart.is_some(), "Looked up chart");
        self.messages
            .add(&format!("ChartService: fetched chart name={}", name));
        chart
    }
}
