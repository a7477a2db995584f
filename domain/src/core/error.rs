//! Domain error types

use crate::record::record_id::RecordIdError;
use thiserror::Error;

/// Message shown when a record exists but carries no image
pub const NO_IMAGE_MESSAGE: &str = "No image is available on this record.";

/// Reasons an artefact figure cannot be displayed.
///
/// The `Display` output of every variant is the message shown to the author
/// in place of the figure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DisplayError {
    #[error(transparent)]
    InvalidId(#[from] RecordIdError),

    /// Reported by the importer; shown verbatim
    #[error("{0}")]
    Remote(String),

    #[error("{}", NO_IMAGE_MESSAGE)]
    NoImageAvailable,

    #[error(r#"Unexpected response from the finds.org.uk importer (record type "{0}")."#)]
    UnexpectedResponse(String),
}
