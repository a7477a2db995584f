//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use finds_domain::{CaptionOption, FigureSize};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("source host cannot be empty")]
    EmptyHost,

    #[error("unsupported source scheme: {0} (expected http or https)")]
    InvalidScheme(String),
}

/// Where artefact records are fetched from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSourceConfig {
    /// URL scheme of the records API
    pub scheme: String,
    /// Host (optionally with port) of the records API
    pub host: String,
    /// Timeout in seconds for one record request
    pub timeout_seconds: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl FileSourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for FileSourceConfig {
    fn default() -> Self {
        Self {
            scheme: "https".to_string(),
            host: "finds.org.uk".to_string(),
            timeout_seconds: 15,
            user_agent: format!("finds-artefact/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Attribute values used when a shortcode leaves them out
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDefaultsConfig {
    pub caption_option: CaptionOption,
    pub figure_size: FigureSize,
}

/// Complete configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub source: FileSourceConfig,
    pub defaults: FileDefaultsConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        // Timeout of 0 seconds doesn't make sense
        if self.source.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.source.host.trim().is_empty() {
            return Err(ConfigValidationError::EmptyHost);
        }

        match self.source.scheme.as_str() {
            "http" | "https" => Ok(()),
            other => Err(ConfigValidationError::InvalidScheme(other.to_string())),
        }
    }
}
