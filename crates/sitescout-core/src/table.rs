//! CSV persistence for discovery and solar tables.

use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::records::DiscoveryRecord;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("CSV error for {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Write `rows` to a CSV file at `path`, replacing any existing file.
///
/// The header comes from the row type's serde field names; `header` is only
/// written explicitly when `rows` is empty so the file is never headerless.
///
/// # Errors
///
/// Returns [`TableError`] if the file cannot be created or a row fails to
/// serialize.
pub fn write_table<T: Serialize>(
    path: &Path,
    header: &[&str],
    rows: &[T],
) -> Result<(), TableError> {
    let csv_err = |source: csv::Error| TableError::Csv {
        path: path.display().to_string(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;
    if rows.is_empty() {
        writer.write_record(header).map_err(csv_err)?;
    }
    for row in rows {
        writer.serialize(row).map_err(csv_err)?;
    }
    writer.flush().map_err(|source| TableError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(())
}

/// Read a discovery table written by [`write_table`].
///
/// Row order is preserved. Coordinate cells that are empty or do not parse
/// as numbers come back as `None`.
///
/// # Errors
///
/// Returns [`TableError::Csv`] if the file cannot be opened or a row does not
/// match the discovery columns.
pub fn read_discovery_table(path: &Path) -> Result<Vec<DiscoveryRecord>, TableError> {
    let csv_err = |source: csv::Error| TableError::Csv {
        path: path.display().to_string(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(csv_err)?;
    reader
        .deserialize::<DiscoveryRecord>()
        .map(|row| row.map_err(csv_err))
        .collect()
}
