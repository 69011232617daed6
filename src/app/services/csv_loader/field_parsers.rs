//! Field parsing utilities for training-progress CSV rows
//!
//! This module provides helper functions for parsing the individual fields
//! of a training row with the tolerance rules the pipeline guarantees:
//! identity fields are required, the score is strict when present, and the
//! date and completion flag never fail a row on their own.

use super::column_map::ColumnMap;
use crate::constants::{self, COMPLETED_LITERAL, TRAINING_DATE_FORMAT};
use crate::{Error, Result};
use chrono::NaiveDate;
use csv::StringRecord;

/// Parse a required text field from a CSV row
///
/// Used for the Name and Module columns. A missing cell or a value that is
/// empty after trimming rejects the row.
pub fn parse_required_text(
    record: &StringRecord,
    columns: &ColumnMap,
    field_name: &str,
) -> Result<String> {
    let value = get_field(record, columns, field_name).ok_or_else(|| {
        Error::data_validation(format!("Empty value for required column '{}'", field_name))
    })?;
    Ok(value.to_string())
}

/// Parse the optional Score field from a CSV row
///
/// A blank score is valid and yields `None`. A non-blank score that does
/// not parse as a number rejects the row; silently treating it as missing
/// would hide data-entry mistakes in the averages.
pub fn parse_optional_score(record: &StringRecord, columns: &ColumnMap) -> Result<Option<f64>> {
    match get_field(record, columns, constants::fields::SCORE) {
        None => Ok(None),
        Some(value) => value.parse::<f64>().map(Some).map_err(|e| {
            Error::data_validation(format!(
                "Invalid numeric format for {}: '{}' ({})",
                constants::fields::SCORE,
                value,
                e
            ))
        }),
    }
}

/// Parse the Completed flag from a CSV row
///
/// True exactly when the trimmed, case-folded value equals "yes". Any other
/// value, including a missing cell, means not completed.
pub fn parse_completed_flag(record: &StringRecord, columns: &ColumnMap) -> bool {
    get_field(record, columns, constants::fields::COMPLETED)
        .map(|value| value.to_lowercase() == COMPLETED_LITERAL)
        .unwrap_or(false)
}

/// Parse the optional Date field from a CSV row
///
/// Accepts the `YYYY-MM-DD` export format. Blank or malformed dates yield
/// `None`; the row still counts toward completion statistics, it just
/// drops out of the score trend.
pub fn parse_optional_date(record: &StringRecord, columns: &ColumnMap) -> Option<NaiveDate> {
    get_field(record, columns, constants::fields::DATE)
        .and_then(|value| NaiveDate::parse_from_str(value, TRAINING_DATE_FORMAT).ok())
}

/// Get a trimmed, non-empty field value from a CSV row
///
/// Returns `None` when the column is unmapped, the row is too short, or
/// the cell is empty after trimming.
pub fn get_field<'a>(
    record: &'a StringRecord,
    columns: &ColumnMap,
    field_name: &str,
) -> Option<&'a str> {
    columns
        .index_of(field_name)
        .and_then(|index| record.get(index))
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}
