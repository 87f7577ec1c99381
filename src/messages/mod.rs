//! Notification Side-Channel
//!
//! Fire-and-forget audit messages posted by the chart service on every query.
//! Sinks accept a line of text and return nothing; a sink can never fail a
//! query or delay its result.
//!
//! - [`MessageLog`]: in-memory log the dashboard reads back, with live subscription
//! - [`TracingSink`]: forwards each message to the `tracing` log
//! - [`NullSink`]: drops everything
//! - [`FanoutSink`]: forwards to several sinks

mod history;

pub use history::{Message, MessageLog};

use std::sync::Arc;

/// Receiver of audit messages
pub trait MessageSink: Send + Sync {
    fn add(&self, message: &str);
}

/// Discards every message
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl MessageSink for NullSink {
    fn add(&self, _message: &str) {}
}

/// Writes each message to the tracing log at INFO
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl MessageSink for TracingSink {
    fn add(&self, message: &str) {
        tracing::info!(target: "imposc::messages", "{}", message);
    }
}

/// Forwards every message to each inner sink, in order
#[derive(Clone, Default)]
pub struct FanoutSink {
    sinks: Vec<Arc<dyn MessageSink>>,
}

impl FanoutSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sink to the end of the chain
    pub fn with(mut self, sink: Arc<dyn MessageSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl MessageSink for FanoutSink {
    fn add(&self, message: &str) {
        for sink in &self.sinks {
            sink.add(message);
        }
    }
}
