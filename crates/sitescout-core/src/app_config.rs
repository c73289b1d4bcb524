use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub google_api_key: String,
    pub log_level: String,
    pub search_plan_path: PathBuf,
    pub output_dir: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Wait before requesting a page with a freshly issued continuation token.
    pub page_token_delay_ms: u64,
    /// Pause after each solar lookup.
    pub solar_delay_ms: u64,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("google_api_key", &"[redacted]")
            .field("log_level", &self.log_level)
            .field("search_plan_path", &self.search_plan_path)
            .field("output_dir", &self.output_dir)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("page_token_delay_ms", &self.page_token_delay_ms)
            .field("solar_delay_ms", &self.solar_delay_ms)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_base_ms", &self.retry_backoff_base_ms)
            .finish()
    }
}
