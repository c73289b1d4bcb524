use thiserror::Error;

use crate::quality::Quality;

/// Errors returned by the solar-potential client and artifact writer.
#[derive(Debug, Error)]
pub enum SolarError {
    /// Network or TLS failure from the underlying HTTP client. The request
    /// URL is stripped because it carries the API key.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// HTTP 404: no building data at the requested quality.
    #[error("no {quality} quality data for this location")]
    NotFound { quality: Quality },

    #[error("unexpected HTTP status {status} for {quality} quality request")]
    UnexpectedStatus { status: u16, quality: Quality },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    #[error("failed to write artifact {path}: {source}")]
    ArtifactIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode artifact: {0}")]
    ArtifactEncode(#[source] serde_json::Error),
}

impl From<reqwest::Error> for SolarError {
    fn from(e: reqwest::Error) -> Self {
        SolarError::Http(e.without_url())
    }
}
