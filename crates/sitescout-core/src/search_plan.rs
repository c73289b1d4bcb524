use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::geo::SearchCenter;
use crate::ConfigError;

/// Upper bound the places nearby-search endpoint accepts for `radius`.
pub const MAX_RADIUS_M: u32 = 50_000;

fn default_max_iterations() -> usize {
    1_000
}

/// Discovery parameters loaded from the search-plan YAML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPlan {
    /// Free-text keyword sent to the places search, e.g. the chain name.
    pub keyword: String,
    pub radius_m: u32,
    pub target_count: usize,
    /// Seed centers as `"lat,lng"` strings, searched first in file order.
    pub seeds: Vec<String>,
    /// Hard cap on searched centers for one run.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

impl SearchPlan {
    /// Parse the seed strings into centers.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for the first seed that does not
    /// parse as an in-range `"lat,lng"` pair.
    pub fn seed_centers(&self) -> Result<Vec<SearchCenter>, ConfigError> {
        self.seeds
            .iter()
            .map(|s| {
                s.parse::<SearchCenter>()
                    .map_err(|e| ConfigError::Validation(e.to_string()))
            })
            .collect()
    }
}

/// Load and validate a search plan from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_search_plan(path: &Path) -> Result<SearchPlan, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SearchPlanIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let plan: SearchPlan = serde_yaml::from_str(&content)?;
    validate_search_plan(&plan)?;

    Ok(plan)
}

fn validate_search_plan(plan: &SearchPlan) -> Result<(), ConfigError> {
    if plan.keyword.trim().is_empty() {
        return Err(ConfigError::Validation(
            "keyword must be non-empty".to_string(),
        ));
    }

    if plan.radius_m == 0 || plan.radius_m > MAX_RADIUS_M {
        return Err(ConfigError::Validation(format!(
            "radius_m {} out of range; must be 1..={MAX_RADIUS_M}",
            plan.radius_m
        )));
    }

    if plan.target_count == 0 {
        return Err(ConfigError::Validation(
            "target_count must be at least 1".to_string(),
        ));
    }

    if plan.max_iterations == 0 {
        return Err(ConfigError::Validation(
            "max_iterations must be at least 1".to_string(),
        ));
    }

    if plan.seeds.is_empty() {
        return Err(ConfigError::Validation(
            "at least one seed center is required".to_string(),
        ));
    }

    plan.seed_centers()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn plan() -> SearchPlan {
        SearchPlan {
            keyword: "Waffle House".to_string(),
            radius_m: 10_000,
            target_count: 200,
            seeds: vec!["33.7490,-84.3880".to_string()],
            max_iterations: 1_000,
        }
    }

    #[test]
    fn validate_accepts_well_formed_plan() {
        assert!(validate_search_plan(&plan()).is_ok());
    }

    #[test]
    fn validate_rejects_blank_keyword() {
        let mut p = plan();
        p.keyword = "  ".to_string();
        let err = validate_search_plan(&p).unwrap_err();
        assert!(err.to_string().contains("keyword"));
    }

    #[test]
    fn validate_rejects_oversized_radius() {
        let mut p = plan();
        p.radius_m = 60_000;
        let err = validate_search_plan(&p).unwrap_err();
        assert!(err.to_string().contains("radius_m 60000"));
    }

    #[test]
    fn validate_rejects_zero_target() {
        let mut p = plan();
        p.target_count = 0;
        assert!(validate_search_plan(&p).is_err());
    }

    #[test]
    fn validate_rejects_empty_seed_list() {
        let mut p = plan();
        p.seeds.clear();
        let err = validate_search_plan(&p).unwrap_err();
        assert!(err.to_string().contains("seed"));
    }

    #[test]
    fn validate_rejects_malformed_seed() {
        let mut p = plan();
        p.seeds.push("north of town".to_string());
        let err = validate_search_plan(&p).unwrap_err();
        assert!(err.to_string().contains("north of town"));
    }

    #[test]
    fn load_reads_yaml_and_defaults_max_iterations() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "keyword: Waffle House\nradius_m: 10000\ntarget_count: 5\nseeds:\n  - \"33.7490,-84.3880\"\n  - \"33.8600,-84.4000\""
        )
        .unwrap();

        let plan = load_search_plan(file.path()).expect("plan should load");
        assert_eq!(plan.keyword, "Waffle House");
        assert_eq!(plan.target_count, 5);
        assert_eq!(plan.max_iterations, 1_000);
        assert_eq!(plan.seed_centers().unwrap().len(), 2);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = load_search_plan(Path::new("/nonexistent/plan.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::SearchPlanIo { .. }));
    }

    #[test]
    fn shipped_plan_is_valid() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../config/search_plan.yaml");
        let plan = load_search_plan(&path).expect("shipped plan should load");
        assert_eq!(plan.keyword, "Waffle House");
        assert_eq!(plan.radius_m, 10_000);
        assert_eq!(plan.target_count, 200);
        assert_eq!(plan.seeds.len(), 17);
    }
}
