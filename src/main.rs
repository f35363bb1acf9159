//! Gauge Relay — Entry Point
//!
//! Accepts numeric observations on `POST /update` and republishes them
//! as labeled gauges on `GET /metrics`. Runs until SIGINT.
//!
//! Wiring sequence:
//! 1. Load config (optional path argument, else config.toml, else defaults)
//! 2. Init tracing (JSON structured logging)
//! 3. Register the fixed metric set (duplicates are fatal)
//! 4. Bind the HTTP listener (bind failure is fatal)
//! 5. Serve until SIGINT, then shut down gracefully

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tokio::sync::broadcast;
use tokio::task::JoinError;
use tracing::{error, info};

use gauge_relay::adapters::http::{AppState, HttpServer};
use gauge_relay::adapters::metrics::PrometheusGaugeStore;
use gauge_relay::config;
use gauge_relay::ports::GaugeStore;

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Load configuration ───────────────────────────────
    let config_path = std::env::args().nth(1);
    let config = config::loader::load_or_default(config_path.as_deref())
        .context("Failed to load configuration")?;

    // ── 2. Initialize structured JSON logging ───────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(&config.server.log_level)
                }),
        )
        .json()
        .init();

    // ── 3. Register gauges ──────────────────────────────────
    let store = PrometheusGaugeStore::from_specs(&config.metrics)
        .context("Failed to register metrics")?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.server.bind_address,
        metrics = ?store.metric_names(),
        "Starting Gauge Relay"
    );

    // ── 4. Bind HTTP listener ───────────────────────────────
    let state = AppState::new(Arc::new(store));
    let server = HttpServer::bind(&config.server.bind_address, state).await?;

    // ── 5. Serve until SIGINT ───────────────────────────────
    let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);
    let mut server_handle = tokio::spawn(server.run(shutdown_rx));

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("SIGINT received, initiating graceful shutdown");
        }
        result = &mut server_handle => {
            return join_server(result);
        }
    }

    let _ = shutdown_tx.send(());
    join_server(server_handle.await)?;

    info!("Shutdown complete");
    Ok(())
}

/// Flatten the server task's outcome, logging any failure.
fn join_server(result: Result<Result<()>, JoinError>) -> Result<()> {
    match result {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => {
            error!(error = %e, "HTTP server failed");
            Err(e)
        }
        Err(e) => {
            error!(error = %e, "HTTP server task panicked");
            Err(e.into())
        }
    }
}
