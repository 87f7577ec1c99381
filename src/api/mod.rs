//! imposc REST API
//!
//! HTTP API layer for the chart catalog, built with Axum.
//!
//! # Endpoints
//!
//! ## Charts
//! - `GET /api/v1/charts` - List all charts
//! - `GET /api/v1/charts/:name` - Get a chart by name
//!
//! ## Messages
//! - `GET /api/v1/messages` - List notification messages
//! - `DELETE /api/v1/messages` - Clear notification messages
//! - `GET /api/v1/messages/stream` - Live notification messages (server-sent events)
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,no_run
//! use imposc::api::{serve, AppState};
//! use imposc::catalog::{Catalog, ChartService};
//! use imposc::config::ApiConfig;
//! use imposc::messages::MessageLog;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let messages = Arc::new(MessageLog::default());
//!     let charts = Arc::new(ChartService::new(Arc::new(Catalog::seeded()), messages.clone()));
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(charts, messages, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{http::HeaderValue, routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Chart routes
        .route("/charts", get(routes::charts::list_charts))
        .route("/charts/:name", get(routes::charts::get_chart))
        // Message routes
        .route(
            "/messages",
            get(routes::messages::list_messages).delete(routes::messages::clear_messages),
        )
        .route("/messages/stream", get(routes::messages::stream_messages));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config);
    let timeout = Duration::from_secs(state.config.request_timeout_secs);

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// CORS for the dashboard front end. No configured origins allows any origin.
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new().allow_origin(AllowOrigin::list(origins))
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("imposc API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("imposc API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dto::{ChartListResponse, ChartResponse, HealthResponse, MessageListResponse};
    use crate::catalog::{Catalog, ChartService};
    use crate::messages::MessageLog;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use futures_util::StreamExt;
    use serde::de::DeserializeOwned;
    use tower::util::ServiceExt;

    fn create_test_app() -> (Router, Arc<MessageLog>) {
        let messages = Arc::new(MessageLog::default());
        let charts = Arc::new(ChartService::new(
            Arc::new(Catalog::seeded()),
            messages.clone(),
        ));
        let state = AppState::new(charts, messages.clone(), ApiConfig::default());
        (build_router(state), messages)
    }

    async fn send_get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn json_body<T: DeserializeOwned>(response: Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _) = create_test_app();
        let response = send_get(app, "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let (app, _) = create_test_app();
        let response = send_get(app, "/health/ready").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, messages) = create_test_app();
        let response = send_get(app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let health: HealthResponse = json_body(response).await;
        assert_eq!(health.status, "healthy");
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
        assert!(messages.is_empty());
    }

    #[tokio::test]
    async fn test_list_charts() {
        let (app, _) = create_test_app();
        let response = send_get(app, "/api/v1/charts").await;
        assert_eq!(response.status(), StatusCode::OK);

        let list: ChartListResponse = json_body(response).await;
        assert_eq!(list.total, 4);
        let names: Vec<&str> = list.charts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["ellipse", "multiplot", "scatter", "timeseries"]);
    }

    #[tokio::test]
    async fn test_get_chart() {
        let (app, _) = create_test_app();
        let response = send_get(app, "/api/v1/charts/scatter").await;
        assert_eq!(response.status(), StatusCode::OK);

        let chart: ChartResponse = json_body(response).await;
        assert_eq!(
            chart,
            ChartResponse {
                name: "scatter".to_string(),
                description: "Generates a scatter plot".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_get_unknown_chart() {
        let (app, messages) = create_test_app();
        let response = send_get(app, "/api/v1/charts/bogus").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = json_body(response).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert!(body["request_id"].is_string());

        assert_eq!(
            messages.messages()[0].text,
            "ChartService: fetched chart name=bogus"
        );
    }

    #[tokio::test]
    async fn test_messages_list_and_clear() {
        let (app, messages) = create_test_app();

        send_get(app.clone(), "/api/v1/charts").await;
        send_get(app.clone(), "/api/v1/charts/ellipse").await;

        let response = send_get(app.clone(), "/api/v1/messages").await;
        let list: MessageListResponse = json_body(response).await;
        assert_eq!(list.total, 2);
        assert_eq!(list.messages[0].text, "ChartService: fetched charts");
        assert_eq!(
            list.messages[1].text,
            "ChartService: fetched chart name=ellipse"
        );

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/v1/messages")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(messages.is_empty());
    }

    async fn send_get_from(app: Router, uri: &str, origin: &str) -> Response {
        app.oneshot(
            Request::builder()
                .uri(uri)
                .header(header::ORIGIN, origin)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_restricted_cors_origins() {
        let messages = Arc::new(MessageLog::default());
        let charts = Arc::new(ChartService::without_messages(Arc::new(Catalog::seeded())));
        let config = ApiConfig {
            cors_origins: vec!["http://localhost:4200".to_string(), "\n".to_string()],
            ..Default::default()
        };
        let app = build_router(AppState::new(charts, messages, config));

        let response =
            send_get_from(app.clone(), "/api/v1/charts", "http://localhost:4200").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("http://localhost:4200"))
        );

        let response = send_get_from(app, "/api/v1/charts", "http://evil.example").await;
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn test_permissive_cors_by_default() {
        let (app, _) = create_test_app();
        let response = send_get_from(app, "/api/v1/charts", "http://anywhere.example").await;
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("*"))
        );
    }

    #[tokio::test]
    async fn test_message_stream_receives_chart_query() {
        let (app, _) = create_test_app();

        let response = send_get(app.clone(), "/api/v1/messages/stream").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE),
            Some(&HeaderValue::from_static("text/event-stream"))
        );

        let response_after = send_get(app, "/api/v1/charts/scatter").await;
        assert_eq!(response_after.status(), StatusCode::OK);

        let mut body = response.into_body().into_data_stream();
        let chunk = tokio::time::timeout(Duration::from_secs(5), body.next())
            .await
            .expect("no event within timeout")
            .unwrap()
            .unwrap();
        let text = String::from_utf8(chunk.to_vec()).unwrap();

        assert!(text.contains("event: message"));
        assert!(text.contains("ChartService: fetched chart name=scatter"));
    }
}
