//! Prometheus Gauge Store - Label-Keyed Gauges on a Private Registry
//!
//! Each accepted metric name maps to one `GaugeVec` labeled by
//! `organization` and `repository`. The name → gauge map is built
//! with `&mut self` during startup and is read-only once the store is
//! shared, so request-time work only touches `GaugeVec`'s own
//! synchronization (an `RwLock` over the label map plus an atomic
//! value per series). That lookup is the hot path under load.

use std::collections::HashMap;

use prometheus::{Encoder, GaugeVec, Opts, Registry, TextEncoder};
use tracing::{debug, info};

use crate::config::MetricSpec;
use crate::domain::{GaugeUpdate, StoreError, UpdateError, LABEL_NAMES};
use crate::ports::GaugeStore;

/// Content type of the text exposition served on `/metrics`.
pub const EXPOSITION_CONTENT_TYPE: &str = prometheus::TEXT_FORMAT;

/// Gauge store backed by a dedicated Prometheus registry.
///
/// Never touches the process-global default registry, so every
/// instance (and every test) starts empty.
pub struct PrometheusGaugeStore {
    /// Registry owning every relayed gauge.
    registry: Registry,
    /// Accepted metric name → gauge handle.
    gauges: HashMap<String, GaugeVec>,
}

impl PrometheusGaugeStore {
    /// Create an empty store with no registered metrics.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            gauges: HashMap::new(),
        }
    }

    /// Build a store and register every spec in order.
    ///
    /// # Errors
    /// Fails on the first spec `register` rejects.
    pub fn from_specs(specs: &[MetricSpec]) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for spec in specs {
            store.register(spec)?;
        }
        info!(metrics = store.gauges.len(), "Gauge store initialized");
        Ok(store)
    }

    /// Register one accepted metric.
    ///
    /// # Errors
    /// - `DuplicateMetric` if the accepted name is already registered
    /// - `InvalidMetric` if the name is empty
    /// - `Registry` if Prometheus rejects the gauge (invalid or
    ///   already-exposed gauge name)
    pub fn register(&mut self, spec: &MetricSpec) -> Result<GaugeVec, StoreError> {
        if spec.name.is_empty() {
            return Err(StoreError::InvalidMetric("empty metric name".to_string()));
        }
        if self.gauges.contains_key(&spec.name) {
            return Err(StoreError::DuplicateMetric(spec.name.clone()));
        }

        let gauge = GaugeVec::new(
            Opts::new(spec.gauge_name(), spec.help_text()),
            &LABEL_NAMES,
        )?;
        self.registry.register(Box::new(gauge.clone()))?;

        debug!(
            metric = %spec.name,
            gauge = %spec.gauge_name(),
            "Registered gauge"
        );

        self.gauges.insert(spec.name.clone(), gauge.clone());
        Ok(gauge)
    }
}

impl Default for PrometheusGaugeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GaugeStore for PrometheusGaugeStore {
    fn is_registered(&self, metric: &str) -> bool {
        self.gauges.contains_key(metric)
    }

    fn set(&self, update: &GaugeUpdate) -> Result<(), UpdateError> {
        let gauge = self
            .gauges
            .get(&update.metric)
            .ok_or_else(|| UpdateError::UnknownMetric(update.metric.clone()))?;

        // Label arity is fixed by LABEL_NAMES, so the lookup cannot mismatch.
        gauge
            .with_label_values(&update.labels.as_values())
            .set(update.value);
        Ok(())
    }

    fn render(&self) -> Result<String, StoreError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder
            .encode(&metric_families, &mut buffer)
            .map_err(|e| StoreError::Encode(e.to_string()))?;
        String::from_utf8(buffer).map_err(|e| StoreError::Encode(e.to_string()))
    }

    fn metric_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.gauges.keys().cloned().collect();
        names.sort();
        names
    }
}
