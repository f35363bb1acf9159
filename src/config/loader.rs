//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating the metric set, and
//! falling back to built-in defaults when no file is present.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config: AppConfig = toml::from_str(&content)
    .with_context(|| format!("Failed to parse {}", path.display()))?;

  validate_config(&config)?;

  info!(
    path = %path.display(),
    metrics = config.metrics.len(),
    bind_address = %config.server.bind_address,
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Resolve configuration for the binary.
///
/// An explicit path must exist. Without one, `config.toml` is used if
/// present, otherwise the built-in defaults.
///
/// # Errors
/// Propagates any `load_config` failure.
pub fn load_or_default(path: Option<&str>) -> Result<AppConfig> {
  match path {
    Some(path) => load_config(path),
    None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config(DEFAULT_CONFIG_PATH),
    None => {
      let config = AppConfig::default();
      validate_config(&config)?;
      Ok(config)
    }
  }
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - Non-empty bind address
/// - At least one metric
/// - Non-empty, unique accepted metric names
fn validate_config(config: &AppConfig) -> Result<()> {
  anyhow::ensure!(
    !config.server.bind_address.is_empty(),
    "server.bind_address must not be empty"
  );

  anyhow::ensure!(
    !config.metrics.is_empty(),
    "At least one metric must be configured"
  );

  let mut seen = HashSet::new();
  for (i, metric) in config.metrics.iter().enumerate() {
    anyhow::ensure!(!metric.name.is_empty(), "Metric {} has empty name", i);
    anyhow::ensure!(
      !metric.gauge_name().is_empty(),
      "Metric {} ({}) has empty gauge name",
      i,
      metric.name
    );
    anyhow::ensure!(
      seen.insert(metric.name.as_str()),
      "Metric {} ({}) is configured more than once",
      i,
      metric.name
    );
  }

  Ok(())
}
