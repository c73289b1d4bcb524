//! Per-location JSON artifacts holding the raw solar response.

use std::path::{Path, PathBuf};

use crate::error::SolarError;

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Local wall-clock timestamp shared by every artifact of one run.
#[must_use]
pub fn run_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Make a location name safe for use inside a file name.
///
/// Whitespace becomes `_`; anything other than ASCII alphanumerics, `_`, `-`
/// and `.` is dropped.
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .filter_map(|c| {
            if c.is_whitespace() {
                Some('_')
            } else if c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.') {
                Some(c)
            } else {
                None
            }
        })
        .collect();
    let cleaned = cleaned.trim_matches('.');
    if cleaned.is_empty() {
        "unnamed".to_string()
    } else {
        cleaned.to_string()
    }
}

/// `solar_data_{name}_{row_index}_{run_timestamp}.json`
#[must_use]
pub fn artifact_file_name(name: &str, row_index: usize, run_timestamp: &str) -> String {
    format!(
        "solar_data_{}_{row_index}_{run_timestamp}.json",
        sanitize_name(name)
    )
}

/// Write `response` as pretty-printed JSON into `dir`, returning the path.
///
/// # Errors
///
/// Returns [`SolarError::ArtifactEncode`] if the value cannot be encoded, or
/// [`SolarError::ArtifactIo`] if the file cannot be written.
pub fn write_artifact(
    dir: &Path,
    name: &str,
    row_index: usize,
    run_timestamp: &str,
    response: &serde_json::Value,
) -> Result<PathBuf, SolarError> {
    let path = dir.join(artifact_file_name(name, row_index, run_timestamp));
    let body = serde_json::to_string_pretty(response).map_err(SolarError::ArtifactEncode)?;
    std::fs::write(&path, body).map_err(|source| SolarError::ArtifactIo {
        path: path.display().to_string(),
        source,
    })?;
    Ok(path)
}
