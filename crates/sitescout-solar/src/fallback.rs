//! HIGH then MEDIUM quality lookup.

use crate::client::SolarClient;
use crate::error::SolarError;
use crate::quality::Quality;

/// Result of a fallback lookup for one location.
#[derive(Debug)]
pub enum SolarLookup {
    Found {
        quality: Quality,
        response: serde_json::Value,
    },
    NoData,
}

/// Query at HIGH quality, retrying at MEDIUM only when HIGH answers 404.
///
/// Any other failure, at either tier, is logged and reported as
/// [`SolarLookup::NoData`]; a location never aborts the batch.
pub async fn lookup_with_fallback(client: &SolarClient, latitude: f64, longitude: f64) -> SolarLookup {
    match client.find_closest(latitude, longitude, Quality::High).await {
        Ok(response) => SolarLookup::Found {
            quality: Quality::High,
            response,
        },
        Err(SolarError::NotFound { .. }) => {
            tracing::info!(latitude, longitude, "no HIGH quality data, trying MEDIUM");
            match client
                .find_closest(latitude, longitude, Quality::Medium)
                .await
            {
                Ok(response) => SolarLookup::Found {
                    quality: Quality::Medium,
                    response,
                },
                Err(e) => {
                    tracing::warn!(latitude, longitude, error = %e, "no solar data at MEDIUM quality");
                    SolarLookup::NoData
                }
            }
        }
        Err(e) => {
            tracing::warn!(latitude, longitude, error = %e, "solar lookup failed");
            SolarLookup::NoData
        }
    }
}
