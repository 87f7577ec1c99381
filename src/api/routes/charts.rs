//! Chart Routes
//!
//! Read-only endpoints over the chart catalog.
//!
//! - GET /api/v1/charts - List all charts
//! - GET /api/v1/charts/:name - Get a chart by name

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{ChartListResponse, ChartResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// GET /api/v1/charts
///
/// List every chart in catalog order.
pub async fn list_charts(State(state): State<Arc<AppState>>) -> Json<ChartListResponse> {
    let charts: Vec<ChartResponse> = state
        .charts
        .list_all()
        .await
        .iter()
        .map(|chart| ChartResponse::from(chart.as_ref()))
        .collect();

    Json(ChartListResponse {
        total: charts.len(),
        charts,
    })
}

/// GET /api/v1/charts/:name
///
/// Get a chart by exact name.
pub async fn get_chart(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<Json<ChartResponse>> {
    let chart = state
        .charts
        .find_by_name(&name)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Chart '{}' not found", name)))?;

    Ok(Json(ChartResponse::from(chart.as_ref())))
}
