//! HTTP client for the solar building-insights endpoint.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

use crate::error::SolarError;
use crate::quality::Quality;

const DEFAULT_BASE_URL: &str = "https://solar.googleapis.com/";
const FIND_CLOSEST_PATH: &str = "v1/buildingInsights:findClosest";

/// Client for the solar `buildingInsights:findClosest` endpoint.
///
/// Responses are returned as raw JSON so callers can persist them verbatim.
pub struct SolarClient {
    client: Client,
    api_key: String,
    find_closest_url: Url,
}

impl SolarClient {
    /// Creates a client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`SolarError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, SolarError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SolarError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`SolarError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, SolarError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let invalid = |reason: String| SolarError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason,
        };
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let find_closest_url = Url::parse(&normalised)
            .and_then(|base| base.join(FIND_CLOSEST_PATH))
            .map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            find_closest_url,
        })
    }

    /// Fetches building insights for the building closest to a point.
    ///
    /// # Errors
    ///
    /// - [`SolarError::NotFound`] on HTTP 404 (no data at this quality).
    /// - [`SolarError::UnexpectedStatus`] for any other non-2xx status.
    /// - [`SolarError::Http`] on network failure.
    /// - [`SolarError::Deserialize`] if the body is not JSON.
    pub async fn find_closest(
        &self,
        latitude: f64,
        longitude: f64,
        quality: Quality,
    ) -> Result<serde_json::Value, SolarError> {
        let url = self.build_url(latitude, longitude, quality);
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(SolarError::NotFound { quality });
        }
        if !status.is_success() {
            return Err(SolarError::UnexpectedStatus {
                status: status.as_u16(),
                quality,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| SolarError::Deserialize {
            context: format!("findClosest({latitude},{longitude},{quality})"),
            source: e,
        })
    }

    fn build_url(&self, latitude: f64, longitude: f64, quality: Quality) -> Url {
        let mut url = self.find_closest_url.clone();
        url.query_pairs_mut()
            .append_pair("location.latitude", &latitude.to_string())
            .append_pair("location.longitude", &longitude.to_string())
            .append_pair("requiredQuality", quality.as_str())
            .append_pair("key", &self.api_key);
        url
    }
}
