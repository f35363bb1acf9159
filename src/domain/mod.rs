//! Domain Layer - Update Requests and Error Taxonomy
//!
//! Pure types with no I/O: the decoded update request, the validated
//! gauge update it becomes, and the errors either step can raise.

pub mod error;
pub mod update;

pub use error::{StoreError, UpdateError};
pub use update::{GaugeUpdate, Labels, UpdateRequest, LABEL_NAMES};
