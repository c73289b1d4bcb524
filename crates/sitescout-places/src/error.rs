use thiserror::Error;

/// Errors returned by the places-search and geocode client.
///
/// Variants name the endpoint rather than the request URL, and transport
/// errors have their URL stripped, so the API key never ends up in logs.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// The endpoint answered with a non-OK `status` field.
    #[error("{endpoint} returned {status}: {message}")]
    Api {
        endpoint: &'static str,
        status: String,
        message: String,
    },

    /// A continuation token was used before the upstream activated it.
    #[error("continuation token not ready yet")]
    TokenNotReady,

    #[error("unexpected HTTP status {status} from {endpoint}")]
    UnexpectedStatus { status: u16, endpoint: &'static str },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("pagination limit reached for {center}: exceeded {max_pages} pages")]
    PaginationLimit { center: String, max_pages: usize },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl From<reqwest::Error> for PlacesError {
    fn from(e: reqwest::Error) -> Self {
        PlacesError::Http(e.without_url())
    }
}
