//! Test utilities for analyzer testing
//!
//! This module provides record-building helpers shared by the analyzer's
//! test modules.

use chrono::NaiveDate;

use crate::app::models::TrainingRecord;


/// Helper to build a training record from literals
pub fn record(
    name: &str,
    module: &str,
    score: Option<f64>,
    date: Option<&str>,
    completed: bool,
) -> TrainingRecord {
    TrainingRecord {
        name: name.to_string(),
        module: module.to_string(),
        score,
        completed,
        date: date.map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap()),
    }
}

/// Helper producing the three-row scenario used across the test modules
///
/// Alice completes Safety with 90, leaves Equipment unfinished at 40, and
/// Bob completes Safety with 70.
pub fn standard_records() -> Vec<TrainingRecord> {
    vec![
        record("Alice", "Safety", Some(90.0), Some("2024-01-01"), true),
        record("Alice", "Equipment", Some(40.0), Some("2024-01-05"), false),
        record("Bob", "Safety", Some(70.0), Some("2024-01-02"), true),
    ]
}
