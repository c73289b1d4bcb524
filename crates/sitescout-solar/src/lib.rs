pub mod artifact;
pub mod client;
pub mod error;
pub mod fallback;
pub mod pipeline;
pub mod quality;
pub mod summary;

pub use artifact::{artifact_file_name, run_timestamp, sanitize_name, write_artifact};
pub use client::SolarClient;
pub use error::SolarError;
pub use fallback::{lookup_with_fallback, SolarLookup};
pub use pipeline::{run_solar_enrichment, SolarOptions, SolarReport, SolarRun};
pub use quality::Quality;
pub use summary::{extract_summary, SolarSummary};
