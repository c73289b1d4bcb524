mod discover;
mod solar;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "sitescout")]
#[command(about = "Discover business locations and estimate their rooftop solar potential")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for locations around the configured seeds and write the discovery CSV
    Discover {
        /// Search plan YAML (overrides `SITESCOUT_SEARCH_PLAN_PATH`)
        #[arg(long)]
        plan: Option<PathBuf>,

        /// Destination of the discovery table
        #[arg(long, default_value = "discovered_locations.csv")]
        output: PathBuf,

        /// Override the plan's target count
        #[arg(long)]
        target: Option<usize>,

        /// Print the search plan without making any request
        #[arg(long)]
        dry_run: bool,
    },
    /// Enrich a discovery table with solar potential figures
    Solar {
        /// Discovery table to read
        #[arg(long, default_value = "discovered_locations.csv")]
        input: PathBuf,

        /// Destination of the enriched table (defaults to `solar_data_<timestamp>.csv`)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Directory for per-location JSON artifacts (overrides `SITESCOUT_OUTPUT_DIR`)
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = sitescout_core::load_app_config()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Discover {
            plan,
            output,
            target,
            dry_run,
        } => {
            discover::run_discover(&config, plan.as_deref(), &output, target, dry_run).await?;
        }
        Commands::Solar {
            input,
            output,
            output_dir,
        } => {
            solar::run_solar(&config, &input, output.as_deref(), output_dir.as_deref()).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
