//! Error Types - Update Rejections and Store Faults
//!
//! `UpdateError` covers everything a caller can get wrong on
//! `/update` and always maps to `400 Bad Request`. `StoreError`
//! covers startup registration and export faults, which are
//! never caused by request input.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Fixed body for requests missing a required string field.
pub const MISSING_FIELD_MESSAGE: &str =
    "Missing 'organization', 'repository', or 'metric' field";

/// Fixed body for requests naming an unregistered metric.
pub const UNKNOWN_METRIC_MESSAGE: &str = "Invalid 'metric' field value";

/// Rejection reasons for a single update request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateError {
    /// Body is not JSON or does not match the update shape.
    /// Carries the decoder's message verbatim.
    #[error("{0}")]
    MalformedRequest(String),
    /// One or more of organization/repository/metric is empty.
    #[error("{}", MISSING_FIELD_MESSAGE)]
    MissingField,
    /// The metric name is not in the registered set.
    #[error("{}", UNKNOWN_METRIC_MESSAGE)]
    UnknownMetric(String),
}

impl UpdateError {
    /// HTTP status for this rejection.
    pub const fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    /// Short machine-friendly reason, used as a log field.
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::MalformedRequest(_) => "malformed_request",
            Self::MissingField => "missing_field",
            Self::UnknownMetric(_) => "unknown_metric",
        }
    }
}

impl IntoResponse for UpdateError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

/// Faults raised by the metric store itself.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The same accepted metric name was registered twice.
    #[error("metric {0:?} is already registered")]
    DuplicateMetric(String),
    /// A metric spec carried an empty name.
    #[error("invalid metric definition: {0}")]
    InvalidMetric(String),
    /// The Prometheus registry rejected a collector.
    #[error("prometheus registry error: {0}")]
    Registry(#[from] prometheus::Error),
    /// Exposition output could not be produced.
    #[error("failed to encode metrics: {0}")]
    Encode(String),
}
