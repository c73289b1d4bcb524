//! Deduplication of places by `place_id`.
//!
//! The first occurrence of an identifier wins and discovery order is kept.

use std::collections::HashSet;

use crate::types::PlaceResult;

/// Remove duplicate places by `place_id`, keeping the first of each.
#[must_use]
pub fn dedup_by_place_id(places: Vec<PlaceResult>) -> Vec<PlaceResult> {
    let mut acc = PlaceAccumulator::new();
    acc.extend(places);
    acc.into_places()
}

/// Ordered set of unique places keyed by `place_id`.
#[derive(Debug, Default)]
pub struct PlaceAccumulator {
    seen: HashSet<String>,
    places: Vec<PlaceResult>,
}

impl PlaceAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `place` unless its identifier is already present.
    ///
    /// Returns `true` when the place was new.
    pub fn insert(&mut self, place: PlaceResult) -> bool {
        if self.seen.contains(&place.place_id) {
            return false;
        }
        self.seen.insert(place.place_id.clone());
        self.places.push(place);
        true
    }

    /// Insert every place in order; returns how many were new.
    pub fn extend<I>(&mut self, places: I) -> usize
    where
        I: IntoIterator<Item = PlaceResult>,
    {
        let mut added = 0;
        for place in places {
            if self.insert(place) {
                added += 1;
            }
        }
        added
    }

    #[must_use]
    pub fn contains(&self, place_id: &str) -> bool {
        self.seen.contains(place_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.places.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// All places in first-discovery order.
    #[must_use]
    pub fn into_places(self) -> Vec<PlaceResult> {
        self.places
    }
}
