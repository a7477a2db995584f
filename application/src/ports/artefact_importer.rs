//! Artefact importer port
//!
//! Defines the interface for fetching one artefact record by id.
//! Infrastructure adapters implement this (finds.org.uk over HTTP, local
//! fixture files).

use async_trait::async_trait;
use finds_domain::{ArtefactRecord, RecordId};

/// Discriminator value of a successful import
pub const RECORD_ARTEFACT: &str = "artefact";
/// Discriminator value of a failed import
pub const RECORD_ERROR: &str = "error";
/// Key holding the message of a failed import
pub const ERROR_MESSAGE_KEY: &str = "error message";

pub const RECORD_NOT_FOUND_MESSAGE: &str =
    r#"The record could not be found. Please check your "id" attribute and try again."#;
pub const UNREADABLE_RECORD_MESSAGE: &str =
    "The record data returned by finds.org.uk could not be read.";

/// Result of an import, keyed by the `record` discriminator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// `record: "artefact"`
    Artefact(ArtefactRecord),
    /// `record: "error"`; the message is shown to the author as-is
    Error { message: String },
    /// Any other discriminator value
    Unrecognized { record: String },
}

impl ImportOutcome {
    pub fn error(message: impl Into<String>) -> Self {
        ImportOutcome::Error {
            message: message.into(),
        }
    }

    /// Convert a tagged JSON value into an outcome.
    ///
    /// `{"record": "artefact", ...record fields}` becomes `Artefact`,
    /// `{"record": "error", "error message": "..."}` becomes `Error`, and
    /// anything else (including a missing discriminator) is `Unrecognized`.
    pub fn from_tagged(value: &serde_json::Value) -> Self {
        let record = value
            .get("record")
            .and_then(|r| r.as_str())
            .unwrap_or_default();

        match record {
            RECORD_ARTEFACT => match ArtefactRecord::from_json(value) {
                Ok(artefact) => ImportOutcome::Artefact(artefact),
                Err(_) => ImportOutcome::error(UNREADABLE_RECORD_MESSAGE),
            },
            RECORD_ERROR => {
                let message = value
                    .get(ERROR_MESSAGE_KEY)
                    .and_then(|m| m.as_str())
                    .unwrap_or(UNREADABLE_RECORD_MESSAGE);
                ImportOutcome::error(message)
            }
            other => ImportOutcome::Unrecognized {
                record: other.to_string(),
            },
        }
    }
}

/// Port for importing artefact records
///
/// Called at most once per shortcode invocation, and only with an id that
/// passed validation. Failures are reported through [`ImportOutcome::Error`]
/// rather than `Err`, since every one of them ends up as a message to the
/// author.
#[async_trait]
pub trait ArtefactImporter: Send + Sync {
    async fn import(&self, id: &RecordId) -> ImportOutcome;
}
