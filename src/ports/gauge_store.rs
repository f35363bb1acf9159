//! Gauge Store Port - Label-Keyed Gauge Storage Interface
//!
//! The only stateful component of the service. Implementations must be
//! safe to call from many in-flight requests at once: concurrent `set`
//! calls on the same key resolve last-write-wins, and `render` never
//! observes a partially written value.

use crate::domain::{GaugeUpdate, StoreError, UpdateError};

/// Storage and export of the registered gauges.
pub trait GaugeStore: Send + Sync {
    /// Whether `metric` is one of the accepted names fixed at startup.
    fn is_registered(&self, metric: &str) -> bool;

    /// Create or overwrite the value for one label tuple.
    ///
    /// # Errors
    /// `UpdateError::UnknownMetric` if the metric was never registered.
    fn set(&self, update: &GaugeUpdate) -> Result<(), UpdateError>;

    /// Snapshot every registered gauge in text exposition format.
    ///
    /// # Errors
    /// `StoreError::Encode` if the exposition could not be produced.
    fn render(&self) -> Result<String, StoreError>;

    /// Accepted metric names, sorted.
    fn metric_names(&self) -> Vec<String>;
}
