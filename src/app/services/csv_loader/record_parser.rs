//! Individual row parsing for training-progress CSV files

use super::column_map::ColumnMap;
use super::field_parsers::{
    parse_completed_flag, parse_optional_date, parse_optional_score, parse_required_text,
};
use crate::app::models::TrainingRecord;
use crate::constants::fields;
use crate::Result;
use csv::StringRecord;

/// Parse a single CSV row into a training record
///
/// A row is rejected (returns `Err`) when its name or module is missing or
/// when a present score fails numeric parsing. Date and completion-flag
/// problems never reject a row; they degrade to `None` / `false`.
pub fn parse_training_record(record: &StringRecord, columns: &ColumnMap) -> Result<TrainingRecord> {
    let name = parse_required_text(record, columns, fields::NAME)?;
    let module = parse_required_text(record, columns, fields::MODULE)?;
    let score = parse_optional_score(record, columns)?;
    let completed = parse_completed_flag(record, columns);
    let date = parse_optional_date(record, columns);

    Ok(TrainingRecord {
        name,
        module,
        score,
        completed,
        date,
    })
}
