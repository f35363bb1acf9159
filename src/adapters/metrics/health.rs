//! Health Check Handlers - Liveness and Readiness Probes
//!
//! Both probes are stateless and never consult the gauge store, so
//! they answer 200 from the moment the listener is bound, before any
//! update has been received.

use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Liveness probe body.
pub const LIVENESS_BODY: &str = "ok";

/// Readiness probe body.
pub const READINESS_BODY: &str = "ready";

/// Liveness probe: always returns 200 if the process is running.
pub async fn liveness() -> impl IntoResponse {
    (StatusCode::OK, LIVENESS_BODY)
}

/// Readiness probe: equivalent to liveness.
///
/// There are no downstream dependencies to check yet; any future check
/// belongs here and keeps the same 200/503 response shape.
pub async fn readiness() -> impl IntoResponse {
    (StatusCode::OK, READINESS_BODY)
}
