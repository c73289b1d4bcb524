//! Search-center coordinates.
//!
//! Centers are written and parsed in the `"lat,lng"` form the places API
//! expects for its `location` parameter.

use std::fmt;
use std::str::FromStr;

/// Origin of one places-search call, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchCenter {
    pub lat: f64,
    pub lng: f64,
}

impl SearchCenter {
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Shift this center by the given deltas on each axis.
    #[must_use]
    pub fn offset(self, d_lat: f64, d_lng: f64) -> Self {
        Self {
            lat: self.lat + d_lat,
            lng: self.lng + d_lng,
        }
    }

    /// `true` when both components fall within valid WGS84 ranges.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl fmt::Display for SearchCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid search center \"{input}\": {reason}")]
pub struct ParseCenterError {
    pub input: String,
    pub reason: String,
}

impl FromStr for SearchCenter {
    type Err = ParseCenterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fail = |reason: &str| ParseCenterError {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| fail("expected \"lat,lng\""))?;
        let lat = lat
            .trim()
            .parse::<f64>()
            .map_err(|e| fail(&format!("latitude: {e}")))?;
        let lng = lng
            .trim()
            .parse::<f64>()
            .map_err(|e| fail(&format!("longitude: {e}")))?;

        let center = Self { lat, lng };
        if !center.is_valid() {
            return Err(fail("coordinates out of range"));
        }
        Ok(center)
    }
}
