//! Configuration Module - TOML-based Service Configuration
//!
//! Loads the listen address, log level and the fixed set of accepted
//! metrics from `config.toml`. When no file is present the built-in
//! defaults below are used, so the service runs with zero setup.

pub mod loader;

use serde::Deserialize;

/// Top-level service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
  /// HTTP listener and logging.
  #[serde(default)]
  pub server: ServerConfig,
  /// Accepted metrics, registered once at startup.
  #[serde(default = "default_metrics")]
  pub metrics: Vec<MetricSpec>,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      server: ServerConfig::default(),
      metrics: default_metrics(),
    }
  }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  /// Listener bind address.
  #[serde(default = "default_bind_address")]
  pub bind_address: String,
  /// Log level (trace, debug, info, warn, error).
  #[serde(default = "default_log_level")]
  pub log_level: String,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      bind_address: default_bind_address(),
      log_level: default_log_level(),
    }
  }
}

/// One accepted metric.
///
/// `name` is the value callers put in the `metric` field; `gauge` is
/// the name the gauge is exposed under and defaults to `name`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MetricSpec {
  /// Accepted `metric` field value.
  pub name: String,
  /// Exposed gauge name, if different from `name`.
  #[serde(default)]
  pub gauge: Option<String>,
  /// HELP text for the exposition.
  #[serde(default)]
  pub help: Option<String>,
}

impl MetricSpec {
  pub fn new(name: impl Into<String>, help: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      gauge: None,
      help: Some(help.into()),
    }
  }

  /// Name the gauge is registered and scraped under.
  pub fn gauge_name(&self) -> &str {
    self.gauge.as_deref().unwrap_or(&self.name)
  }

  /// HELP text, falling back to a generic description.
  pub fn help_text(&self) -> String {
    self
      .help
      .clone()
      .unwrap_or_else(|| format!("Current value of {}.", self.name))
  }
}

// Default value functions for serde

fn default_bind_address() -> String {
  "0.0.0.0:8080".to_string()
}

fn default_log_level() -> String {
  "info".to_string()
}

fn default_metrics() -> Vec<MetricSpec> {
  vec![
    MetricSpec::new(
      "terraform_resources_count",
      "Current number of Terraform resources.",
    ),
    MetricSpec::new("cnrm_resources_count", "Current number of CNRM resources."),
  ]
}
