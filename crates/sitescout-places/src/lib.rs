pub mod client;
pub mod dedup;
pub mod discovery;
pub mod enrich;
pub mod error;
mod retry;
pub mod types;

pub use client::{PlacesClient, SearchPage};
pub use dedup::{dedup_by_place_id, PlaceAccumulator};
pub use discovery::{run_discovery, DiscoveryOptions, DiscoveryOutcome, StopReason};
pub use enrich::{enrich_place, enrich_places, record_from_geocode, EnrichmentOutcome};
pub use error::PlacesError;
pub use types::{AddressComponent, GeocodeResult, Geometry, LatLng, PlaceResult};
