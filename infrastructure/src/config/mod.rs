//! Configuration file loading for finds-artefact
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `FINDS_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./finds.toml` or `./.finds.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/finds-artefact/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileDefaultsConfig, FileSourceConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
