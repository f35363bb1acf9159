//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! external dependencies. Each sub-module groups adapters by
//! infrastructure concern.
//!
//! Adapter categories:
//! - `http`: axum router, handlers and server lifecycle
//! - `metrics`: Prometheus gauge store and health probes

pub mod http;
pub mod metrics;
