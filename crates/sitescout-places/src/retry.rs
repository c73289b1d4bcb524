//! Retry with exponential back-off and jitter for places and geocode calls.
//!
//! [`retry_with_backoff`] wraps one request and retries it on transient
//! errors. Everything else is returned on the first failure.

use std::future::Future;
use std::time::Duration;

use crate::error::PlacesError;

const MAX_DELAY_MS: u64 = 60_000;

/// Returns `true` for errors that are worth retrying after a back-off delay.
///
/// **Retriable:**
/// - Network-level failures: timeout, connection reset.
/// - HTTP 429 and 5xx responses.
/// - [`PlacesError::TokenNotReady`]: the continuation token needs more time.
///
/// **Not retriable:**
/// - [`PlacesError::Api`]: denied key, exhausted quota, bad request.
/// - [`PlacesError::Deserialize`]: malformed response; retrying won't fix it.
pub(crate) fn is_retriable(err: &PlacesError) -> bool {
    match err {
        PlacesError::Http(e) => {
            e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
        }
        PlacesError::UnexpectedStatus { status, .. } => *status == 429 || *status >= 500,
        PlacesError::TokenNotReady => true,
        PlacesError::Api { .. }
        | PlacesError::Deserialize { .. }
        | PlacesError::PaginationLimit { .. }
        | PlacesError::InvalidBaseUrl { .. } => false,
    }
}

/// Delay before retry number `attempt` (1-based): `base × 2^(attempt-1)`,
/// capped at 60 s, before jitter.
fn backoff_delay_ms(backoff_base_ms: u64, attempt: u32) -> u64 {
    backoff_base_ms
        .saturating_mul(1u64 << (attempt.saturating_sub(1)).min(10))
        .min(MAX_DELAY_MS)
}

/// Runs `operation` with up to `max_retries` additional attempts on transient errors.
///
/// Each delay gets ±25 % jitter.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, PlacesError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, PlacesError>>,
{
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                attempt += 1;
                let capped = backoff_delay_ms(backoff_base_ms, attempt);
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss
                )]
                let delay_ms = (capped as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64;
                tracing::warn!(
                    attempt,
                    max_retries,
                    delay_ms,
                    error = %err,
                    "places API transient error, retrying after back-off"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}
