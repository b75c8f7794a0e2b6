//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use tracing::warn;

use crate::ingest::{Outcome, SinkError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/extract", post(extract))
        .route("/messages", post(ingest_message))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Extract a sighting from text without storing it.
async fn extract(
    State(state): State<AppState>,
    Json(req): Json<ExtractRequest>,
) -> Json<ExtractResponse> {
    let report = state.extractor.extract(&req.text).into_report();
    Json(ExtractResponse {
        found: report.is_some(),
        report,
    })
}

/// Extract and store a sighting from an inbound message.
async fn ingest_message(
    State(state): State<AppState>,
    Json(req): Json<MessageRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let timestamp = match req.timestamp {
        Some(secs) => DateTime::<Utc>::from_timestamp(secs, 0).ok_or_else(|| {
            AppError::BadRequest {
                message: format!("Invalid timestamp: {secs}"),
            }
        })?,
        None => Utc::now(),
    };

    // Sinks may block on I/O; keep that off the async workers.
    let handler = state.handler.clone();
    let outcome = tokio::task::spawn_blocking(move || handler.handle(timestamp, &req.text))
        .await
        .map_err(|e| AppError::Internal {
            message: format!("message handler failed: {e}"),
        })??;

    let response = match outcome {
        Outcome::Stored { report, .. } => MessageResponse {
            stored: true,
            found: report
                .found_fields()
                .into_iter()
                .map(str::to_string)
                .collect(),
        },
        Outcome::Discarded => MessageResponse {
            stored: false,
            found: Vec::new(),
        },
    };

    Ok(Json(response))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<SinkError> for AppError {
    fn from(e: SinkError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
