//! Solar enrichment over a table of discovered locations.

use std::path::PathBuf;
use std::time::Duration;

use sitescout_core::{DiscoveryRecord, SolarRecord};

use crate::artifact::write_artifact;
use crate::client::SolarClient;
use crate::error::SolarError;
use crate::fallback::{lookup_with_fallback, SolarLookup};
use crate::quality::Quality;
use crate::summary::{extract_summary, SolarSummary};

#[derive(Debug, Clone)]
pub struct SolarOptions {
    /// Directory receiving one JSON artifact per resolved location.
    pub output_dir: PathBuf,
    pub run_timestamp: String,
    /// Pause after each row, whatever its outcome.
    pub record_delay: Duration,
}

/// Per-run counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolarReport {
    pub processed: usize,
    /// Rows without usable coordinates; no request was made.
    pub skipped: usize,
    pub resolved_high: usize,
    pub resolved_medium: usize,
    pub no_data: usize,
    pub artifacts_written: usize,
    pub extraction_failures: usize,
}

#[derive(Debug)]
pub struct SolarRun {
    /// One row per input row, in input order.
    pub rows: Vec<SolarRecord>,
    pub report: SolarReport,
}

/// Enrich each row with solar summary figures.
///
/// Rows are never dropped: rows without coordinates and rows with no solar
/// data come through with null solar columns.
///
/// # Errors
///
/// Returns [`SolarError::ArtifactIo`] only if the output directory cannot be
/// created. Per-row failures are logged and counted.
pub async fn run_solar_enrichment(
    client: &SolarClient,
    rows: Vec<DiscoveryRecord>,
    options: &SolarOptions,
) -> Result<SolarRun, SolarError> {
    std::fs::create_dir_all(&options.output_dir).map_err(|source| SolarError::ArtifactIo {
        path: options.output_dir.display().to_string(),
        source,
    })?;

    let total = rows.len();
    let mut report = SolarReport::default();
    let mut out = Vec::with_capacity(total);

    for (index, row) in rows.into_iter().enumerate() {
        tracing::info!(
            row = index + 1,
            total,
            name = %row.name,
            address = %row.address,
            "processing location"
        );

        let Some((latitude, longitude)) = row.coordinates() else {
            tracing::info!(name = %row.name, "skipping location with missing coordinates");
            report.skipped += 1;
            out.push(SolarRecord::from_discovery(row));
            pace(options.record_delay).await;
            continue;
        };
        report.processed += 1;

        let summary = match lookup_with_fallback(client, latitude, longitude).await {
            SolarLookup::Found { quality, response } => {
                match quality {
                    Quality::High => report.resolved_high += 1,
                    Quality::Medium => report.resolved_medium += 1,
                }
                match write_artifact(
                    &options.output_dir,
                    &row.name,
                    index,
                    &options.run_timestamp,
                    &response,
                ) {
                    Ok(path) => {
                        report.artifacts_written += 1;
                        tracing::debug!(path = %path.display(), "wrote solar artifact");
                    }
                    Err(e) => tracing::warn!(name = %row.name, error = %e, "could not write solar artifact"),
                }
                match extract_summary(&response) {
                    Ok(summary) => {
                        tracing::info!(
                            name = %row.name,
                            %quality,
                            panels = ?summary.num_panels,
                            yearly_energy_kwh = ?summary.yearly_energy_kwh,
                            "solar data found"
                        );
                        summary
                    }
                    Err(e) => {
                        report.extraction_failures += 1;
                        tracing::warn!(name = %row.name, error = %e, "could not read solar summary");
                        SolarSummary::default()
                    }
                }
            }
            SolarLookup::NoData => {
                report.no_data += 1;
                tracing::info!(name = %row.name, "no solar data for location");
                SolarSummary::default()
            }
        };

        out.push(SolarRecord {
            num_panels: summary.num_panels,
            yearly_energy_kwh: summary.yearly_energy_kwh,
            solar_area_m2: summary.solar_area_m2,
            ..SolarRecord::from_discovery(row)
        });

        pace(options.record_delay).await;
    }

    Ok(SolarRun { rows: out, report })
}

async fn pace(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
