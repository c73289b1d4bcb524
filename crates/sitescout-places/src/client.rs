//! HTTP client for the places nearby-search and geocode endpoints.
//!
//! Both endpoints answer HTTP 200 with a `status` field in the body; non-OK
//! statuses surface as [`PlacesError::Api`]. Transient failures are retried
//! via [`crate::retry::retry_with_backoff`].

use std::time::Duration;

use reqwest::{Client, Url};
use sitescout_core::SearchCenter;

use crate::error::PlacesError;
use crate::retry::retry_with_backoff;
use crate::types::{GeocodeResponse, GeocodeResult, NearbySearchResponse, PlaceResult};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/";
const NEARBY_SEARCH_PATH: &str = "place/nearbysearch/json";
const GEOCODE_PATH: &str = "geocode/json";
const NEARBY_ENDPOINT: &str = "nearbysearch";
const GEOCODE_ENDPOINT: &str = "geocode";

/// Upstream serves at most three pages; anything beyond this is a cycling token.
pub(crate) const MAX_PAGES: usize = 10;

/// One page of nearby-search results.
#[derive(Debug, Default)]
pub struct SearchPage {
    pub places: Vec<PlaceResult>,
    /// Token for the following page, absent on the last page.
    pub next_page_token: Option<String>,
}

/// Client for the places nearby-search and geocode APIs.
///
/// Use [`PlacesClient::new`] for production or [`PlacesClient::with_base_url`]
/// to point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    nearby_url: Url,
    geocode_url: Url,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl PlacesClient {
    /// Creates a client pointed at the production API, with retries disabled.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`PlacesError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so `join` appends instead of replacing
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base = Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        let join = |path: &str| {
            base.join(path).map_err(|e| PlacesError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: e.to_string(),
            })
        };

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            nearby_url: join(NEARBY_SEARCH_PATH)?,
            geocode_url: join(GEOCODE_PATH)?,
            max_retries: 0,
            backoff_base_ms: 0,
        })
    }

    /// Enables retries on transient errors.
    ///
    /// `max_retries` is the number of extra attempts after the first failure;
    /// the n-th retry waits about `backoff_base_ms × 2^(n-1)` milliseconds.
    #[must_use]
    pub fn with_retry_policy(mut self, max_retries: u32, backoff_base_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.backoff_base_ms = backoff_base_ms;
        self
    }

    /// Fetches one page of places matching `keyword` within `radius_m` of `center`.
    ///
    /// Entries without a `place_id` are skipped. A response with no `results`
    /// field yields an empty page.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] for a non-OK `status`.
    /// - [`PlacesError::TokenNotReady`] if `page_token` was not active yet
    ///   (after retries).
    /// - [`PlacesError::Http`] / [`PlacesError::UnexpectedStatus`] on
    ///   transport failure or non-2xx status.
    /// - [`PlacesError::Deserialize`] if the body is not the expected shape.
    pub async fn nearby_search_page(
        &self,
        center: SearchCenter,
        radius_m: u32,
        keyword: &str,
        page_token: Option<&str>,
    ) -> Result<SearchPage, PlacesError> {
        let location = center.to_string();
        let radius = radius_m.to_string();
        let mut params = vec![
            ("location", location.as_str()),
            ("radius", radius.as_str()),
            ("keyword", keyword),
        ];
        if let Some(token) = page_token {
            params.push(("pagetoken", token));
        }
        let url = self.build_url(&self.nearby_url, &params);

        let body = self
            .request_json(&url, NEARBY_ENDPOINT, page_token.is_some())
            .await?;
        let envelope: NearbySearchResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("nearbysearch(location={location})"),
                source: e,
            })?;

        let places = envelope
            .results
            .into_iter()
            .filter_map(|raw| match serde_json::from_value::<PlaceResult>(raw) {
                Ok(place) => Some(place),
                Err(e) => {
                    tracing::debug!(center = %center, error = %e, "skipping unparsable place entry");
                    None
                }
            })
            .collect();

        Ok(SearchPage {
            places,
            next_page_token: envelope.next_page_token.filter(|t| !t.is_empty()),
        })
    }

    /// Fetches every page for one search center.
    ///
    /// Follows continuation tokens until none is returned, sleeping
    /// `page_token_delay` before each follow-up request because freshly issued
    /// tokens are not immediately valid upstream.
    ///
    /// A failed continuation page ends pagination and keeps what the earlier
    /// pages returned.
    ///
    /// # Errors
    ///
    /// Propagates an error from [`Self::nearby_search_page`] on the first page.
    /// Returns [`PlacesError::PaginationLimit`] after [`MAX_PAGES`] pages.
    pub async fn search_all_pages(
        &self,
        center: SearchCenter,
        radius_m: u32,
        keyword: &str,
        page_token_delay: Duration,
    ) -> Result<Vec<PlaceResult>, PlacesError> {
        let mut all_places = Vec::new();
        let mut token: Option<String> = None;
        let mut page_count = 0usize;

        loop {
            page_count += 1;
            if page_count > MAX_PAGES {
                return Err(PlacesError::PaginationLimit {
                    center: center.to_string(),
                    max_pages: MAX_PAGES,
                });
            }

            if token.is_some() && !page_token_delay.is_zero() {
                tokio::time::sleep(page_token_delay).await;
            }

            let page = match self
                .nearby_search_page(center, radius_m, keyword, token.as_deref())
                .await
            {
                Ok(page) => page,
                Err(e) if token.is_some() => {
                    tracing::warn!(
                        center = %center,
                        page = page_count,
                        kept = all_places.len(),
                        error = %e,
                        "continuation page failed; keeping earlier pages"
                    );
                    break;
                }
                Err(e) => return Err(e),
            };
            tracing::debug!(
                center = %center,
                page = page_count,
                results = page.places.len(),
                "fetched nearby-search page"
            );
            all_places.extend(page.places);

            token = page.next_page_token;
            if token.is_none() {
                break;
            }
        }

        Ok(all_places)
    }

    /// Looks up address details for a place ID.
    ///
    /// Returns an empty list when the geocoder has no match.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] for any status other than `OK`, `ZERO_RESULTS`
    ///   or `NOT_FOUND`.
    /// - [`PlacesError::Http`] / [`PlacesError::UnexpectedStatus`] on
    ///   transport failure or non-2xx status.
    /// - [`PlacesError::Deserialize`] if the body is not the expected shape.
    pub async fn geocode_place(&self, place_id: &str) -> Result<Vec<GeocodeResult>, PlacesError> {
        let url = self.build_url(&self.geocode_url, &[("place_id", place_id)]);
        let body = self.request_json(&url, GEOCODE_ENDPOINT, false).await?;
        let envelope: GeocodeResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("geocode(place_id={place_id})"),
                source: e,
            })?;
        Ok(envelope.results)
    }

    /// Builds a request URL with `key` first and every parameter
    /// percent-encoded via [`Url::query_pairs_mut`].
    fn build_url(&self, endpoint: &Url, extra: &[(&str, &str)]) -> Url {
        let mut url = endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.api_key);
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// Sends a GET with retries, asserts a 2xx status, parses JSON and checks
    /// the body's `status` field.
    async fn request_json(
        &self,
        url: &Url,
        endpoint: &'static str,
        has_page_token: bool,
    ) -> Result<serde_json::Value, PlacesError> {
        retry_with_backoff(self.max_retries, self.backoff_base_ms, || async move {
            let response = self.client.get(url.clone()).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(PlacesError::UnexpectedStatus {
                    status: status.as_u16(),
                    endpoint,
                });
            }
            let text = response.text().await?;
            let body: serde_json::Value =
                serde_json::from_str(&text).map_err(|e| PlacesError::Deserialize {
                    context: endpoint.to_owned(),
                    source: e,
                })?;
            check_status(&body, endpoint, has_page_token)?;
            Ok(body)
        })
        .await
    }
}

/// Maps the body's `status` field onto an error.
///
/// `OK`, `ZERO_RESULTS` and an absent status pass, as does `NOT_FOUND` from
/// the geocoder (an unknown place ID). `INVALID_REQUEST` on a page-token
/// request means the token is not active yet.
fn check_status(
    body: &serde_json::Value,
    endpoint: &'static str,
    has_page_token: bool,
) -> Result<(), PlacesError> {
    let Some(status) = body.get("status").and_then(serde_json::Value::as_str) else {
        return Ok(());
    };
    match status {
        "OK" | "ZERO_RESULTS" => Ok(()),
        "NOT_FOUND" if endpoint == GEOCODE_ENDPOINT => Ok(()),
        "INVALID_REQUEST" if has_page_token => Err(PlacesError::TokenNotReady),
        other => {
            let message = body
                .get("error_message")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("no error message")
                .to_string();
            Err(PlacesError::Api {
                endpoint,
                status: other.to_string(),
                message,
            })
        }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
