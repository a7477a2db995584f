//! Local fixture importer
//!
//! Serves records from `<dir>/<id>.json` files holding the tagged import
//! format (`{"record": "artefact", ...}` or
//! `{"record": "error", "error message": "..."}`). Used for offline previews.

use async_trait::async_trait;
use finds_application::{
    ArtefactImporter, ImportOutcome, RECORD_NOT_FOUND_MESSAGE, UNREADABLE_RECORD_MESSAGE,
};
use finds_domain::RecordId;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Imports artefact records from a directory of JSON files
pub struct FixtureImporter {
    dir: PathBuf,
}

impl FixtureImporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn fixture_path(&self, id: &RecordId) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }
}

#[async_trait]
impl ArtefactImporter for FixtureImporter {
    async fn import(&self, id: &RecordId) -> ImportOutcome {
        let path = self.fixture_path(id);
        debug!("Reading fixture {}", path.display());

        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return ImportOutcome::error(RECORD_NOT_FOUND_MESSAGE);
            }
            Err(e) => {
                warn!("Failed to read fixture {}: {}", path.display(), e);
                return ImportOutcome::error(UNREADABLE_RECORD_MESSAGE);
            }
        };

        match serde_json::from_str::<serde_json::Value>(&contents) {
            Ok(json) => ImportOutcome::from_tagged(&json),
            Err(e) => {
                warn!("Invalid JSON in fixture {}: {}", path.display(), e);
                ImportOutcome::error(UNREADABLE_RECORD_MESSAGE)
            }
        }
    }
}
