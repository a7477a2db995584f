//! Infrastructure layer for finds-artefact
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod finds;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileDefaultsConfig, FileSourceConfig,
};
pub use finds::{
    endpoint::FindsEndpoint,
    error::{FindsError, Result},
    fixture::FixtureImporter,
    importer::{CONNECTION_FAILED_MESSAGE, FindsJsonImporter, NOT_PUBLIC_MESSAGE},
};
