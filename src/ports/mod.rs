//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the use-case layer requires
//! from the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `GaugeStore`: in-memory gauge storage and exposition rendering

pub mod gauge_store;

pub use gauge_store::GaugeStore;
