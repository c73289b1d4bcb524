pub mod app_config;
pub mod config;
pub mod geo;
pub mod records;
pub mod search_plan;
pub mod table;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use geo::SearchCenter;
pub use records::{DiscoveryRecord, SolarRecord, DISCOVERY_COLUMNS, SOLAR_COLUMNS};
pub use search_plan::{load_search_plan, SearchPlan};
pub use table::{read_discovery_table, write_table, TableError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read search plan {path}: {source}")]
    SearchPlanIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse search plan: {0}")]
    SearchPlanParse(#[from] serde_yaml::Error),

    #[error("search plan validation failed: {0}")]
    Validation(String),
}
