//! Places-search and geocode response types.
//!
//! Only the fields the pipeline reads are modelled; everything is defaulted
//! so a sparse payload parses instead of failing the whole page.

use serde::{Deserialize, Serialize};
use sitescout_core::SearchCenter;

/// Envelope of a nearby-search response.
///
/// `results` stays as raw JSON here; the client converts entries one by one
/// and skips any that lack a `place_id`.
#[derive(Debug, Deserialize)]
pub(crate) struct NearbySearchResponse {
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Envelope of a geocode response.
#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResponse {
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub location: Option<LatLng>,
}

/// A place as returned by the nearby search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceResult {
    /// Stable upstream identifier; the dedup key.
    pub place_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

impl PlaceResult {
    /// Coordinates of this place as a search center, if the payload had them.
    #[must_use]
    pub fn location(&self) -> Option<SearchCenter> {
        self.geometry
            .as_ref()
            .and_then(|g| g.location)
            .map(|l| SearchCenter::new(l.lat, l.lng))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddressComponent {
    #[serde(default)]
    pub long_name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

impl AddressComponent {
    #[must_use]
    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }
}

/// One geocode match for a place ID.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeocodeResult {
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    #[serde(default)]
    pub formatted_address: String,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}
