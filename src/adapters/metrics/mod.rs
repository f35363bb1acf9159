//! Metrics and Monitoring Adapters
//!
//! Provides the Prometheus-backed gauge store rendered on `/metrics`
//! and the health probes (`/healthz`, `/readyz`).

pub mod health;
pub mod prometheus;

pub use prometheus::{PrometheusGaugeStore, EXPOSITION_CONTENT_TYPE};
