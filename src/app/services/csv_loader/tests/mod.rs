//! Test utilities for CSV loader testing
//!
//! This module provides common helper functions used across the loader's
//! test modules.

use std::io::Write;
use tempfile::NamedTempFile;

// Test modules
mod field_parser_tests;

/// Helper to create a clean training-progress CSV
pub fn create_training_csv() -> String {
    r#"Name,Module,Score,Date,Completed
Alice,Safety,90,2024-01-01,yes
Alice,Equipment,40,2024-01-05,no
Bob,Safety,70,2024-01-02,yes"#
        .to_string()
}

/// Helper to create a training CSV with the row-level problems the loader
/// is expected to tolerate or reject
pub fn create_messy_training_csv() -> String {
    r#"Name,Module,Score,Date,Completed
Alice,Safety,90,2024-01-01,YES
Bob,Safety,ninety,2024-01-02,yes
Carol,Safety,,not-a-date,  yes
,Safety,55,2024-01-03,no
Dave,Equipment,82.5,2024-01-04,No"#
        .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
