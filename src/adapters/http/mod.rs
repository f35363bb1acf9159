//! HTTP Adapter - axum Router and Server
//!
//! Routes:
//! - `POST /update`  — set one gauge value
//! - `GET /metrics`  — Prometheus text exposition
//! - `GET /healthz`  — liveness probe
//! - `GET /readyz`   — readiness probe
//!
//! Each request runs on its own task; the gauge store is the only
//! state shared between them.

pub mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tracing::{info, instrument};

use crate::adapters::metrics::health;
use crate::ports::GaugeStore;
use crate::usecases::IngestionService;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Gauge store read by `/metrics`.
    pub store: Arc<dyn GaugeStore>,
    /// Update pipeline used by `/update`.
    pub ingestion: IngestionService<dyn GaugeStore>,
}

impl AppState {
    /// Wire handler state around one store instance.
    pub fn new(store: Arc<dyn GaugeStore>) -> Self {
        Self {
            ingestion: IngestionService::new(Arc::clone(&store)),
            store,
        }
    }
}

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/update", post(handlers::update))
        .route("/metrics", get(handlers::metrics))
        .route("/healthz", get(health::liveness))
        .route("/readyz", get(health::readiness))
        .with_state(state)
}

/// Bound HTTP server, ready to serve.
pub struct HttpServer {
    /// Listening socket.
    listener: TcpListener,
    /// Routed application.
    app: Router,
}

impl HttpServer {
    /// Bind the listener. Failure here is fatal to the process.
    ///
    /// # Errors
    /// Returns an error if the address cannot be bound.
    pub async fn bind(bind_address: &str, state: AppState) -> Result<Self> {
        let listener = TcpListener::bind(bind_address)
            .await
            .with_context(|| format!("Failed to bind {bind_address}"))?;

        Ok(Self {
            listener,
            app: router(state),
        })
    }

    /// Address actually bound (useful with port 0).
    ///
    /// # Errors
    /// Returns an error if the socket address cannot be read.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve until a shutdown signal is received.
    ///
    /// # Errors
    /// Returns an error if the server stops abnormally.
    #[instrument(skip_all)]
    pub async fn run(self, mut shutdown_rx: broadcast::Receiver<()>) -> Result<()> {
        let address = self.local_addr()?;
        info!(address = %address, "HTTP server started");

        axum::serve(self.listener, self.app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.recv().await;
            })
            .await?;

        info!("HTTP server stopped");
        Ok(())
    }
}
