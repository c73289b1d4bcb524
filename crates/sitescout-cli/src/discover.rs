//! `discover` command: frontier search, geocode enrichment, discovery CSV.

use std::path::Path;
use std::time::Duration;

use sitescout_core::{load_search_plan, write_table, AppConfig, DISCOVERY_COLUMNS};
use sitescout_places::{enrich_places, run_discovery, DiscoveryOptions, PlacesClient};

pub(crate) async fn run_discover(
    config: &AppConfig,
    plan_path: Option<&Path>,
    output: &Path,
    target: Option<usize>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let plan_path = plan_path.unwrap_or(config.search_plan_path.as_path());
    let plan = load_search_plan(plan_path)?;

    let mut options =
        DiscoveryOptions::from_plan(&plan, Duration::from_millis(config.page_token_delay_ms))?;
    if let Some(target) = target {
        if target == 0 {
            anyhow::bail!("--target must be at least 1");
        }
        options.target_count = target;
    }

    if dry_run {
        println!(
            "dry-run: would search for \"{}\" within {} m of {} seeds until {} unique places (max {} centers)",
            options.keyword,
            options.radius_m,
            options.seeds.len(),
            options.target_count,
            options.max_iterations
        );
        for seed in &options.seeds {
            println!("  seed {seed}");
        }
        return Ok(());
    }

    let client = PlacesClient::new(
        &config.google_api_key,
        config.request_timeout_secs,
        &config.user_agent,
    )?
    .with_retry_policy(config.max_retries, config.retry_backoff_base_ms);

    let outcome = run_discovery(&client, &options).await;
    tracing::info!(
        places = outcome.places.len(),
        centers = outcome.centers_searched,
        failed_centers = outcome.failed_centers,
        stop = %outcome.stop,
        "discovery finished"
    );

    let enriched = enrich_places(&client, &outcome.places).await;
    write_table(output, &DISCOVERY_COLUMNS, &enriched.records)?;

    println!(
        "discover complete: {} places found ({}), {} centers searched ({} failed)",
        outcome.places.len(),
        outcome.stop,
        outcome.centers_searched,
        outcome.failed_centers
    );
    println!(
        "  wrote {} rows to {} ({} without geocode result, {} geocode failures)",
        enriched.records.len(),
        output.display(),
        enriched.dropped,
        enriched.failed
    );
    Ok(())
}
