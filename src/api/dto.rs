//! Data Transfer Objects
//!
//! Response types for the API endpoints, serialized to JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::ChartDescriptor;
use crate::messages::Message;

// ============================================
// CHART DTOs
// ============================================

/// A single chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartResponse {
    pub name: String,
    pub description: String,
}

impl From<&ChartDescriptor> for ChartResponse {
    fn from(chart: &ChartDescriptor) -> Self {
        Self {
            name: chart.name.clone(),
            description: chart.description.clone(),
        }
    }
}

/// Every chart, in catalog order
#[derive(Debug, Serialize, Deserialize)]
pub struct ChartListResponse {
    pub charts: Vec<ChartResponse>,
    pub total: usize,
}

// ============================================
// MESSAGE DTOs
// ============================================

/// One notification message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub text: String,
    pub at: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            text: message.text,
            at: message.at,
        }
    }
}

/// Retained notification messages, oldest first
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageListResponse {
    pub messages: Vec<MessageResponse>,
    pub total: usize,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: "healthy"
    pub status: String,
    /// Chart source status: "ok"
    pub charts: String,
    /// Number of retained notification messages
    pub messages: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Crate version
    pub version: String,
}
