//! Detail enrichment: geocode each discovered place into a table row.

use sitescout_core::DiscoveryRecord;

use crate::client::PlacesClient;
use crate::error::PlacesError;
use crate::types::{GeocodeResult, PlaceResult};

const COUNTY_TAG: &str = "administrative_area_level_2";
const CITY_TAG: &str = "locality";
const STATE_TAG: &str = "administrative_area_level_1";
const POSTAL_CODE_TAG: &str = "postal_code";

/// Build a discovery row from a place and its first geocode match.
///
/// County, city and postal code use the component's long name; state uses
/// the short form. When a tag appears more than once the last match wins.
#[must_use]
pub fn record_from_geocode(place: &PlaceResult, geocode: &GeocodeResult) -> DiscoveryRecord {
    let mut county = None;
    let mut city = None;
    let mut state = None;
    let mut zip_code = None;

    for component in &geocode.address_components {
        if component.has_type(COUNTY_TAG) {
            county = Some(component.long_name.clone());
        }
        if component.has_type(CITY_TAG) {
            city = Some(component.long_name.clone());
        }
        if component.has_type(STATE_TAG) {
            state = Some(component.short_name.clone());
        }
        if component.has_type(POSTAL_CODE_TAG) {
            zip_code = Some(component.long_name.clone());
        }
    }

    let location = geocode.geometry.as_ref().and_then(|g| g.location);

    DiscoveryRecord {
        name: place.name.clone(),
        place_type: place.types.join(", "),
        address: geocode.formatted_address.clone(),
        county,
        city,
        state,
        zip_code,
        latitude: location.map(|l| l.lat),
        longitude: location.map(|l| l.lng),
    }
}

/// Geocode one place by its identifier.
///
/// Returns `Ok(None)` when the geocoder has no result for the place; such
/// places are left out of the table.
///
/// # Errors
///
/// Propagates any error from [`PlacesClient::geocode_place`].
pub async fn enrich_place(
    client: &PlacesClient,
    place: &PlaceResult,
) -> Result<Option<DiscoveryRecord>, PlacesError> {
    let results = client.geocode_place(&place.place_id).await?;
    Ok(results
        .first()
        .map(|geocode| record_from_geocode(place, geocode)))
}

#[derive(Debug, Default)]
pub struct EnrichmentOutcome {
    /// Rows in the same order as the input places.
    pub records: Vec<DiscoveryRecord>,
    /// Places the geocoder had no result for.
    pub dropped: usize,
    /// Places whose geocode call failed.
    pub failed: usize,
}

/// Enrich every place in order. Per-place failures are logged and skipped.
pub async fn enrich_places(client: &PlacesClient, places: &[PlaceResult]) -> EnrichmentOutcome {
    let mut outcome = EnrichmentOutcome::default();
    let total = places.len();

    for (i, place) in places.iter().enumerate() {
        match enrich_place(client, place).await {
            Ok(Some(record)) => {
                tracing::debug!(
                    place_id = %place.place_id,
                    progress = i + 1,
                    total,
                    "enriched place"
                );
                outcome.records.push(record);
            }
            Ok(None) => {
                tracing::info!(place_id = %place.place_id, name = %place.name, "no geocode result; dropping place");
                outcome.dropped += 1;
            }
            Err(e) => {
                tracing::warn!(place_id = %place.place_id, error = %e, "geocode failed; skipping place");
                outcome.failed += 1;
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AddressComponent, Geometry, LatLng};

    fn place() -> PlaceResult {
        PlaceResult {
            place_id: "abc123".to_string(),
            name: "Waffle House".to_string(),
            types: vec![
                "restaurant".to_string(),
                "food".to_string(),
                "point_of_interest".to_string(),
            ],
            geometry: None,
        }
    }

    fn component(types: &[&str], long: &str, short: &str) -> AddressComponent {
        AddressComponent {
            long_name: long.to_string(),
            short_name: short.to_string(),
            types: types.iter().map(|t| (*t).to_string()).collect(),
        }
    }

    fn geocode(components: Vec<AddressComponent>) -> GeocodeResult {
        GeocodeResult {
            address_components: components,
            formatted_address: "100 Peachtree St NW, Atlanta, GA 30303, USA".to_string(),
            geometry: Some(Geometry {
                location: Some(LatLng {
                    lat: 33.7573,
                    lng: -84.3963,
                }),
            }),
        }
    }

    #[test]
    fn city_and_state_only() {
        let g = geocode(vec![
            component(&["locality", "political"], "Atlanta", "Atlanta"),
            component(
                &["administrative_area_level_1", "political"],
                "Georgia",
                "GA",
            ),
        ]);
        let r = record_from_geocode(&place(), &g);
        assert_eq!(r.city.as_deref(), Some("Atlanta"));
        assert_eq!(r.state.as_deref(), Some("GA"));
        assert!(r.county.is_none());
        assert!(r.zip_code.is_none());
    }

    #[test]
    fn all_four_components() {
        let g = geocode(vec![
            component(&["street_number"], "100", "100"),
            component(
                &["administrative_area_level_2", "political"],
                "Fulton County",
                "Fulton County",
            ),
            component(&["locality", "political"], "Atlanta", "Atlanta"),
            component(&["administrative_area_level_1"], "Georgia", "GA"),
            component(&["postal_code"], "30303", "30303"),
        ]);
        let r = record_from_geocode(&place(), &g);
        assert_eq!(r.county.as_deref(), Some("Fulton County"));
        assert_eq!(r.city.as_deref(), Some("Atlanta"));
        assert_eq!(r.state.as_deref(), Some("GA"));
        assert_eq!(r.zip_code.as_deref(), Some("30303"));
    }

    #[test]
    fn last_matching_component_wins() {
        let g = geocode(vec![
            component(&["locality"], "Decatur", "Decatur"),
            component(&["locality"], "Atlanta", "Atlanta"),
        ]);
        let r = record_from_geocode(&place(), &g);
        assert_eq!(r.city.as_deref(), Some("Atlanta"));
    }

    #[test]
    fn name_type_address_and_coordinates() {
        let r = record_from_geocode(&place(), &geocode(Vec::new()));
        assert_eq!(r.name, "Waffle House");
        assert_eq!(r.place_type, "restaurant, food, point_of_interest");
        assert_eq!(r.address, "100 Peachtree St NW, Atlanta, GA 30303, USA");
        assert_eq!(r.latitude, Some(33.7573));
        assert_eq!(r.longitude, Some(-84.3963));
    }

    #[test]
    fn missing_geometry_leaves_coordinates_null() {
        let mut g = geocode(Vec::new());
        g.geometry = None;
        let r = record_from_geocode(&place(), &g);
        assert!(r.latitude.is_none());
        assert!(r.longitude.is_none());
    }
}
