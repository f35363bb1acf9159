//! Update Request - Decoding and Field Validation
//!
//! An update arrives as one JSON object and is consumed exactly once.
//! Decoding and the required-field check happen here; resolving the
//! metric name against the registered set is the store's job.

use serde::{Deserialize, Deserializer};

use super::error::UpdateError;

/// Label names attached to every relayed gauge, in registration order.
pub const LABEL_NAMES: [&str; 2] = ["organization", "repository"];

/// Raw update request as posted to `/update`.
///
/// Absent or `null` fields decode to their zero value so that a body
/// without `metric` is reported as a missing field rather than a decode
/// error.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UpdateRequest {
    /// Value to set.
    #[serde(deserialize_with = "null_as_default")]
    pub number: f64,
    /// Owning organization label.
    #[serde(deserialize_with = "null_as_default")]
    pub organization: String,
    /// Repository label.
    #[serde(deserialize_with = "null_as_default")]
    pub repository: String,
    /// Accepted metric name selecting the target gauge.
    #[serde(deserialize_with = "null_as_default")]
    pub metric: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl UpdateRequest {
    /// Decode a request body.
    ///
    /// # Errors
    /// `UpdateError::MalformedRequest` with the decoder's message when the
    /// body is not JSON or has the wrong shape (e.g. `number` as a string).
    pub fn from_json(body: &[u8]) -> Result<Self, UpdateError> {
        serde_json::from_slice(body).map_err(|e| UpdateError::MalformedRequest(e.to_string()))
    }

    /// Check required fields and turn the request into an applicable update.
    ///
    /// # Errors
    /// `UpdateError::MissingField` if organization, repository or metric is empty.
    pub fn validate(self) -> Result<GaugeUpdate, UpdateError> {
        if self.organization.is_empty() || self.repository.is_empty() || self.metric.is_empty() {
            return Err(UpdateError::MissingField);
        }

        Ok(GaugeUpdate {
            metric: self.metric,
            labels: Labels {
                organization: self.organization,
                repository: self.repository,
            },
            value: self.number,
        })
    }
}

/// Label tuple keying one series inside a gauge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub organization: String,
    pub repository: String,
}

impl Labels {
    /// Build a label tuple from organization and repository.
    pub fn new(organization: impl Into<String>, repository: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            repository: repository.into(),
        }
    }

    /// Label values in `LABEL_NAMES` order.
    pub fn as_values(&self) -> [&str; 2] {
        [self.organization.as_str(), self.repository.as_str()]
    }
}

/// A validated update: one gauge, one label tuple, one value.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeUpdate {
    pub metric: String,
    pub labels: Labels,
    pub value: f64,
}

impl GaugeUpdate {
    /// Build an update directly, bypassing request validation.
    pub fn new(
        metric: impl Into<String>,
        organization: impl Into<String>,
        repository: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            metric: metric.into(),
            labels: Labels::new(organization, repository),
            value,
        }
    }
}
