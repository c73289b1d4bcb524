//! Row types for the tabular artifacts.
//!
//! Field renames pin the exact CSV headers; `None` is written as an empty cell.

use serde::{Deserialize, Serialize};

/// Header row of the discovery table.
pub const DISCOVERY_COLUMNS: [&str; 9] = [
    "Name",
    "Type",
    "Address",
    "County",
    "City",
    "State",
    "Zip_code",
    "Latitude",
    "Longitude",
];

/// Header row of the solar table: the discovery columns plus three metrics.
pub const SOLAR_COLUMNS: [&str; 12] = [
    "Name",
    "Type",
    "Address",
    "County",
    "City",
    "State",
    "Zip_code",
    "Latitude",
    "Longitude",
    "NumPanels",
    "YearlyEnergy (kWh)",
    "SolarArea (m²)",
];

/// One row of the discovery table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryRecord {
    #[serde(rename = "Name")]
    pub name: String,
    /// Place categories joined with `", "`.
    #[serde(rename = "Type")]
    pub place_type: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "County")]
    pub county: Option<String>,
    #[serde(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "State")]
    pub state: Option<String>,
    #[serde(rename = "Zip_code")]
    pub zip_code: Option<String>,
    #[serde(rename = "Latitude", deserialize_with = "csv::invalid_option")]
    pub latitude: Option<f64>,
    #[serde(rename = "Longitude", deserialize_with = "csv::invalid_option")]
    pub longitude: Option<f64>,
}

impl DiscoveryRecord {
    /// Both coordinates, when present and finite.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => Some((lat, lng)),
            _ => None,
        }
    }
}

/// A discovery row with the solar-potential columns appended.
///
/// Kept flat (no `#[serde(flatten)]`) because the CSV writer cannot emit
/// headers for flattened maps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolarRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub place_type: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "County")]
    pub county: Option<String>,
    #[serde(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "State")]
    pub state: Option<String>,
    #[serde(rename = "Zip_code")]
    pub zip_code: Option<String>,
    #[serde(rename = "Latitude")]
    pub latitude: Option<f64>,
    #[serde(rename = "Longitude")]
    pub longitude: Option<f64>,
    #[serde(rename = "NumPanels")]
    pub num_panels: Option<i64>,
    #[serde(rename = "YearlyEnergy (kWh)")]
    pub yearly_energy_kwh: Option<f64>,
    #[serde(rename = "SolarArea (m²)")]
    pub solar_area_m2: Option<f64>,
}

impl SolarRecord {
    /// Carry a discovery row over with all solar columns null.
    #[must_use]
    pub fn from_discovery(base: DiscoveryRecord) -> Self {
        Self {
            name: base.name,
            place_type: base.place_type,
            address: base.address,
            county: base.county,
            city: base.city,
            state: base.state,
            zip_code: base.zip_code,
            latitude: base.latitude,
            longitude: base.longitude,
            num_panels: None,
            yearly_energy_kwh: None,
            solar_area_m2: None,
        }
    }
}
