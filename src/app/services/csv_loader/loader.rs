//! Core CSV load orchestration
//!
//! This module owns the structural checks that abort a load (missing file,
//! empty file, missing header, missing required columns, nothing parsed)
//! and the row loop that rejects bad rows without giving up on the file.

use std::path::Path;
use tracing::{debug, info, warn};

use super::column_map::ColumnMap;
use super::record_parser::parse_training_record;
use super::stats::{LoadResult, LoadStats};
use crate::{Error, Result};

/// Load a training-progress CSV file and return records with statistics
///
/// Structural failures return an error and nothing is partially loaded.
/// Row-level failures are logged, counted in the returned statistics, and
/// do not stop the load. A file whose every row is rejected is a
/// structural failure.
pub fn load_training_data(input_path: &Path) -> Result<LoadResult> {
    info!("Loading training data from: {}", input_path.display());

    if !input_path.exists() {
        return Err(Error::input_not_found(input_path.display().to_string()));
    }

    let metadata = std::fs::metadata(input_path).map_err(|e| {
        Error::io(
            format!("Failed to inspect input file {}", input_path.display()),
            e,
        )
    })?;
    if metadata.len() == 0 {
        return Err(Error::empty_input(input_path.display().to_string()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(input_path)
        .map_err(|e| {
            Error::csv_parsing(
                input_path.display().to_string(),
                "Failed to open CSV reader",
                Some(e),
            )
        })?;

    let headers = reader
        .headers()
        .map_err(|e| {
            Error::csv_parsing(
                input_path.display().to_string(),
                "Failed to read header row",
                Some(e),
            )
        })?
        .clone();

    if headers.iter().all(|field| field.trim().is_empty()) {
        return Err(Error::missing_header(input_path.display().to_string()));
    }

    let columns = ColumnMap::from_headers(&headers)?;
    debug!("Mapped {} header columns", columns.len());

    let mut stats = LoadStats::new();
    let mut records = Vec::new();

    for result in reader.records() {
        stats.rows_read += 1;

        match result {
            Ok(record) => match parse_training_record(&record, &columns) {
                Ok(parsed) => {
                    records.push(parsed);
                    stats.records_loaded += 1;
                }
                Err(e) => {
                    warn!("Skipping row {}: {}", stats.rows_read, e);
                    debug!("Rejected row content: {:?}", record);
                    stats.record_rejection(stats.rows_read, &e.to_string());
                }
            },
            Err(e) => {
                warn!("Skipping row {}: malformed CSV line", stats.rows_read);
                stats.record_rejection(stats.rows_read, &format!("malformed CSV line ({})", e));
            }
        }
    }

    if records.is_empty() {
        return Err(Error::no_valid_records(input_path.display().to_string()));
    }

    info!(
        "Successfully read {} records ({} rows rejected)",
        stats.records_loaded, stats.rows_rejected
    );

    Ok(LoadResult { records, stats })
}
