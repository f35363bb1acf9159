//! Ingestion Service - One POST Body, One Gauge Update
//!
//! Runs the validation pipeline in a fixed order and touches the
//! store only once every check has passed:
//! 1. Decode JSON body (`MalformedRequest`)
//! 2. Required string fields (`MissingField`)
//! 3. Registered metric name (`UnknownMetric`)
//! 4. `GaugeStore::set`

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::domain::{GaugeUpdate, UpdateError, UpdateRequest};
use crate::ports::GaugeStore;

/// Applies decoded update requests to a gauge store.
pub struct IngestionService<S: GaugeStore + ?Sized> {
    /// Store port.
    store: Arc<S>,
}

impl<S: GaugeStore + ?Sized> Clone for IngestionService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: GaugeStore + ?Sized> IngestionService<S> {
    /// Create a new ingestion service over a shared store.
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Decode, validate and apply one update request body.
    ///
    /// Returns the applied update on success. No store mutation happens
    /// for any rejected body.
    ///
    /// # Errors
    /// The first `UpdateError` hit by the pipeline.
    #[instrument(skip_all, fields(bytes = body.len()))]
    pub fn ingest(&self, body: &[u8]) -> Result<GaugeUpdate, UpdateError> {
        self.try_ingest(body).inspect_err(|e| {
            warn!(reason = e.reason(), error = %e, "Rejected update request");
        })
    }

    fn try_ingest(&self, body: &[u8]) -> Result<GaugeUpdate, UpdateError> {
        let request = UpdateRequest::from_json(body)?;
        debug!(request = ?request, "Received update request");

        let update = request.validate()?;
        if !self.store.is_registered(&update.metric) {
            return Err(UpdateError::UnknownMetric(update.metric));
        }

        self.store.set(&update)?;

        info!(
            metric = %update.metric,
            organization = %update.labels.organization,
            repository = %update.labels.repository,
            number = update.value,
            "Updated metric"
        );

        Ok(update)
    }
}
