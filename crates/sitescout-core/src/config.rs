use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        match lookup(var) {
            Ok(v) if !v.trim().is_empty() => Ok(v),
            _ => Err(ConfigError::MissingEnvVar(var.to_string())),
        }
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let google_api_key = require("GOOGLE_API_KEY")?;

    let log_level = or_default("SITESCOUT_LOG_LEVEL", "info");
    let search_plan_path = PathBuf::from(or_default(
        "SITESCOUT_SEARCH_PLAN_PATH",
        "./config/search_plan.yaml",
    ));
    let output_dir = PathBuf::from(or_default("SITESCOUT_OUTPUT_DIR", "solar_data"));

    let request_timeout_secs = parse_u64("SITESCOUT_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("SITESCOUT_USER_AGENT", "sitescout/0.1 (location-discovery)");
    let page_token_delay_ms = parse_u64("SITESCOUT_PAGE_TOKEN_DELAY_MS", "2000")?;
    let solar_delay_ms = parse_u64("SITESCOUT_SOLAR_DELAY_MS", "2000")?;
    let max_retries = parse_u32("SITESCOUT_MAX_RETRIES", "3")?;
    let retry_backoff_base_ms = parse_u64("SITESCOUT_RETRY_BACKOFF_BASE_MS", "1000")?;

    Ok(AppConfig {
        google_api_key,
        log_level,
        search_plan_path,
        output_dir,
        request_timeout_secs,
        user_agent,
        page_token_delay_ms,
        solar_delay_ms,
        max_retries,
        retry_backoff_base_ms,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("GOOGLE_API_KEY", "test-key");
        m
    }

    #[test]
    fn build_app_config_fails_without_api_key() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "GOOGLE_API_KEY"),
            "expected MissingEnvVar(GOOGLE_API_KEY), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_treats_blank_api_key_as_missing() {
        let mut map = HashMap::new();
        map.insert("GOOGLE_API_KEY", "   ");
        let result = build_app_config(lookup_from_map(&map));
        assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
    }

    #[test]
    fn build_app_config_succeeds_with_defaults() {
        let map = full_env();
        let cfg = build_app_config(lookup_from_map(&map)).expect("config should build");
        assert_eq!(cfg.google_api_key, "test-key");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(
            cfg.search_plan_path.to_str(),
            Some("./config/search_plan.yaml")
        );
        assert_eq!(cfg.output_dir.to_str(), Some("solar_data"));
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.user_agent, "sitescout/0.1 (location-discovery)");
        assert_eq!(cfg.page_token_delay_ms, 2000);
        assert_eq!(cfg.solar_delay_ms, 2000);
        assert_eq!(cfg.max_retries, 3);
        assert_eq!(cfg.retry_backoff_base_ms, 1000);
    }

    #[test]
    fn build_app_config_applies_overrides() {
        let mut map = full_env();
        map.insert("SITESCOUT_PAGE_TOKEN_DELAY_MS", "500");
        map.insert("SITESCOUT_SOLAR_DELAY_MS", "0");
        map.insert("SITESCOUT_MAX_RETRIES", "5");
        map.insert("SITESCOUT_OUTPUT_DIR", "/tmp/solar");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.page_token_delay_ms, 500);
        assert_eq!(cfg.solar_delay_ms, 0);
        assert_eq!(cfg.max_retries, 5);
        assert_eq!(cfg.output_dir.to_str(), Some("/tmp/solar"));
    }

    #[test]
    fn build_app_config_rejects_invalid_timeout() {
        let mut map = full_env();
        map.insert("SITESCOUT_REQUEST_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SITESCOUT_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(SITESCOUT_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_rejects_negative_retries() {
        let mut map = full_env();
        map.insert("SITESCOUT_MAX_RETRIES", "-1");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SITESCOUT_MAX_RETRIES")
        );
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let map = full_env();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("test-key"));
        assert!(rendered.contains("[redacted]"));
    }
}
