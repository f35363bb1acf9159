//! HTTP Handlers - Update Ingestion and Metrics Exposition
//!
//! `/update` takes the raw body instead of axum's `Json` extractor so
//! that every decode failure becomes a 400 carrying the decoder's own
//! message, rather than axum's 415/422 rejections.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::error;

use super::AppState;
use crate::adapters::metrics::EXPOSITION_CONTENT_TYPE;
use crate::domain::UpdateError;

/// Body returned for an applied update.
pub const UPDATE_OK_BODY: &str = "Metric updated";

/// POST /update: apply one gauge update.
pub async fn update(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, &'static str), UpdateError> {
    state.ingestion.ingest(&body)?;
    Ok((StatusCode::OK, UPDATE_OK_BODY))
}

/// GET /metrics: text exposition of every registered gauge.
pub async fn metrics(State(state): State<AppState>) -> Response {
    match state.store.render() {
        Ok(text) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)],
            text,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to render metrics");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to render metrics").into_response()
        }
    }
}
