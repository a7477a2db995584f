//! finds.org.uk JSON importer
//!
//! Fetches `/database/artefacts/record/id/<id>/format/json` and maps the HTTP
//! response onto an [`ImportOutcome`].

use super::endpoint::FindsEndpoint;
use super::error::Result;
use crate::config::FileSourceConfig;
use async_trait::async_trait;
use finds_application::{
    ArtefactImporter, ImportOutcome, RECORD_NOT_FOUND_MESSAGE, UNREADABLE_RECORD_MESSAGE,
};
use finds_domain::core::string::truncate;
use finds_domain::{ArtefactRecord, RecordId};
use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use std::time::Duration;
use tracing::{debug, warn};

pub const CONNECTION_FAILED_MESSAGE: &str =
    "Could not connect to finds.org.uk. Please try again later.";
pub const NOT_PUBLIC_MESSAGE: &str = "This record is not publicly available.";

/// Longest slice of an unreadable body that is written to the log
const BODY_PREVIEW_LEN: usize = 200;

/// Imports artefact records from the finds.org.uk JSON API
pub struct FindsJsonImporter {
    client: reqwest::Client,
    endpoint: FindsEndpoint,
}

impl FindsJsonImporter {
    pub fn new(endpoint: FindsEndpoint, timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client, endpoint })
    }

    /// Build an importer from the `[source]` configuration section
    pub fn from_config(config: &FileSourceConfig) -> Result<Self> {
        let endpoint = FindsEndpoint::new(&config.scheme, &config.host)?;
        Self::new(endpoint, config.timeout(), &config.user_agent)
    }

    fn status_outcome(status: StatusCode) -> ImportOutcome {
        match status {
            StatusCode::NOT_FOUND => ImportOutcome::error(RECORD_NOT_FOUND_MESSAGE),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                ImportOutcome::error(NOT_PUBLIC_MESSAGE)
            }
            other => ImportOutcome::error(format!(
                "finds.org.uk returned an unexpected response (HTTP {}).",
                other.as_u16()
            )),
        }
    }

    /// Pick the first entry of the `record` array out of a response body
    fn parse_body(id: &RecordId, body: &str) -> ImportOutcome {
        let record = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|json| {
                json.get("record")
                    .and_then(|r| r.as_array())
                    .and_then(|records| records.first())
                    .and_then(|first| ArtefactRecord::from_json(first).ok())
            });

        match record {
            Some(record) => ImportOutcome::Artefact(record),
            None => {
                warn!(
                    "Unreadable response for record {}: {}",
                    id,
                    truncate(body, BODY_PREVIEW_LEN)
                );
                ImportOutcome::error(UNREADABLE_RECORD_MESSAGE)
            }
        }
    }
}

#[async_trait]
impl ArtefactImporter for FindsJsonImporter {
    async fn import(&self, id: &RecordId) -> ImportOutcome {
        let url = match self.endpoint.record_json_url(id) {
            Ok(url) => url,
            Err(e) => {
                warn!("{}", e);
                return ImportOutcome::error(CONNECTION_FAILED_MESSAGE);
            }
        };

        debug!("GET {}", url);

        let response = match self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                warn!("Request for record {} failed: {}", id, e);
                return ImportOutcome::error(CONNECTION_FAILED_MESSAGE);
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Record {} returned HTTP {}", id, status);
            return Self::status_outcome(status);
        }

        match response.text().await {
            Ok(body) => Self::parse_body(id, &body),
            Err(e) => {
                warn!("Failed to read response body for record {}: {}", id, e);
                ImportOutcome::error(CONNECTION_FAILED_MESSAGE)
            }
        }
    }
}
