//! Error types for the finds.org.uk adapter

use thiserror::Error;

/// Result type alias for finds.org.uk adapter setup
pub type Result<T> = std::result::Result<T, FindsError>;

/// Errors raised while setting up the finds.org.uk adapter
///
/// Failures of an individual record request are not errors at this level;
/// they become an `ImportOutcome::Error` with a message for the author.
#[derive(Error, Debug)]
pub enum FindsError {
    #[error("Invalid finds.org.uk endpoint {url}: {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
