//! Configuration loading and management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable naming an optional YAML config file
pub const CONFIG_ENV: &str = "PROPMAP_CONFIG";
/// Environment override for [`AppConfig::bind_addr`]
pub const BIND_ENV: &str = "PROPMAP_BIND";
/// Environment override for [`AppConfig::data_path`]
pub const DATA_ENV: &str = "PROPMAP_DATA";
/// Environment override for [`AppConfig::io_timeout_ms`]
pub const IO_TIMEOUT_ENV: &str = "PROPMAP_IO_TIMEOUT_MS";

/// Service configuration
///
/// Every field has a default, so an empty YAML document is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub bind_addr: String,

    /// Path of the JSON file holding the property collection
    pub data_path: PathBuf,

    /// Deadline for a single storage read or write, in milliseconds
    pub io_timeout_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            data_path: PathBuf::from("data/properties.json"),
            io_timeout_ms: 5_000,
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path))?;
        Self::from_yaml_str(&content).with_context(|| format!("parsing config file {}", path))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // serde_yaml reads an empty document as unit, not as an empty map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load from `PROPMAP_CONFIG` (if set) and apply environment overrides
    pub fn from_env() -> Result<Self> {
        let base = match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_yaml_file(&path)?,
            Err(_) => Self::default(),
        };
        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up by environment variable name
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(bind) = lookup(BIND_ENV) {
            self.bind_addr = bind;
        }
        if let Some(data) = lookup(DATA_ENV) {
            self.data_path = PathBuf::from(data);
        }
        if let Some(timeout) = lookup(IO_TIMEOUT_ENV) {
            self.io_timeout_ms = timeout
                .parse()
                .with_context(|| format!("{} must be a number of milliseconds", IO_TIMEOUT_ENV))?;
        }
        Ok(self)
    }

    pub fn io_timeout(&self) -> Duration {
        Duration::from_millis(self.io_timeout_ms)
    }
}
