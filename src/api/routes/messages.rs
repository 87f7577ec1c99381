//! Message Routes
//!
//! Read and clear the notification log.
//!
//! - GET /api/v1/messages - List retained messages
//! - DELETE /api/v1/messages - Clear the log
//! - GET /api/v1/messages/stream - Server-sent events, one per new message

use axum::{
    extract::State,
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
    Json,
};
use futures_util::stream::{self, Stream};
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;

use crate::api::dto::{MessageListResponse, MessageResponse};
use crate::api::state::AppState;

/// GET /api/v1/messages
pub async fn list_messages(State(state): State<Arc<AppState>>) -> Json<MessageListResponse> {
    let messages: Vec<MessageResponse> = state
        .messages
        .messages()
        .into_iter()
        .map(MessageResponse::from)
        .collect();

    Json(MessageListResponse {
        total: messages.len(),
        messages,
    })
}

/// DELETE /api/v1/messages
pub async fn clear_messages(State(state): State<Arc<AppState>>) -> StatusCode {
    state.messages.clear();
    tracing::info!("Cleared message log");
    StatusCode::NO_CONTENT
}

/// GET /api/v1/messages/stream
///
/// Streams each message added after the client connects as a `message`
/// event with a JSON body. Messages missed because the client fell behind
/// are skipped; the retained log still has them.
pub async fn stream_messages(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let rx = state.messages.subscribe();
    tracing::debug!("Message stream opened");

    let events = stream::unfold(rx, |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(message) => {
                    let event = Event::default()
                        .event("message")
                        .json_data(MessageResponse::from(message));
                    return Some((event, rx));
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Message stream lagged");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}
