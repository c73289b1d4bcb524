//! `solar` command: read the discovery CSV, enrich, write artifacts and the
//! solar CSV.

use std::path::{Path, PathBuf};
use std::time::Duration;

use sitescout_core::{read_discovery_table, write_table, AppConfig, SOLAR_COLUMNS};
use sitescout_solar::{run_solar_enrichment, run_timestamp, SolarClient, SolarOptions};

pub(crate) async fn run_solar(
    config: &AppConfig,
    input: &Path,
    output: Option<&Path>,
    output_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let rows = read_discovery_table(input)?;
    if rows.is_empty() {
        tracing::warn!(input = %input.display(), "discovery table has no rows");
    }

    let timestamp = run_timestamp();
    let output = output.map_or_else(
        || PathBuf::from(format!("solar_data_{timestamp}.csv")),
        Path::to_path_buf,
    );
    let options = SolarOptions {
        output_dir: output_dir.unwrap_or(config.output_dir.as_path()).to_path_buf(),
        run_timestamp: timestamp,
        record_delay: Duration::from_millis(config.solar_delay_ms),
    };

    let client = SolarClient::new(
        &config.google_api_key,
        config.request_timeout_secs,
        &config.user_agent,
    )?;

    let run = run_solar_enrichment(&client, rows, &options).await?;
    write_table(&output, &SOLAR_COLUMNS, &run.rows)?;

    let r = run.report;
    println!(
        "solar complete: {} locations queried, {} skipped (no coordinates)",
        r.processed, r.skipped
    );
    println!(
        "  resolved: {} HIGH, {} MEDIUM, {} without data; {} unreadable summaries",
        r.resolved_high, r.resolved_medium, r.no_data, r.extraction_failures
    );
    println!(
        "  wrote {} artifacts to {} and {} rows to {}",
        r.artifacts_written,
        options.output_dir.display(),
        run.rows.len(),
        output.display()
    );
    Ok(())
}
