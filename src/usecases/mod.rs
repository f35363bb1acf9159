//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates domain logic with port interfaces to implement the
//! service's workflows.
//!
//! Use cases:
//! - `IngestionService`: decode, validate and apply one gauge update

pub mod ingestion;

pub use ingestion::IngestionService;
