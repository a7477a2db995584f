//! finds.org.uk URL layout

use super::error::{FindsError, Result};
use finds_domain::RecordId;
use url::Url;

/// Base URL of a finds.org.uk deployment and the paths derived from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindsEndpoint {
    base: Url,
}

impl FindsEndpoint {
    /// Build an endpoint from a scheme and a host (which may carry a port)
    pub fn new(scheme: &str, host: &str) -> Result<Self> {
        let raw = format!("{}://{}/", scheme, host.trim().trim_end_matches('/'));
        let base = Url::parse(&raw)
            .map_err(|source| FindsError::InvalidEndpoint { url: raw, source })?;
        Ok(Self { base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// JSON representation of one artefact record
    pub fn record_json_url(&self, id: &RecordId) -> Result<Url> {
        let path = format!("database/artefacts/record/id/{}/format/json", id);
        self.base
            .join(&path)
            .map_err(|source| FindsError::InvalidEndpoint { url: path, source })
    }
}
