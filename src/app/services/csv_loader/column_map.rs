//! Column mapping for training-progress CSV headers
//!
//! This module resolves the header row into column indices and verifies
//! that every required training column is present before any row parsing
//! starts.

use crate::constants::REQUIRED_FIELDS;
use crate::{Error, Result};
use csv::StringRecord;
use std::collections::HashMap;

/// Header-to-index mapping for a training-progress file
///
/// Column order in the export is not guaranteed, so rows are always read
/// through this map rather than by position.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    name_to_index: HashMap<String, usize>,
}

impl ColumnMap {
    /// Analyze a header row and verify the required columns
    ///
    /// Header names are trimmed before matching. When a name appears more
    /// than once the first occurrence wins. Missing required columns are
    /// reported together, sorted by name, so one failed run surfaces the
    /// whole problem.
    pub fn from_headers(headers: &StringRecord) -> Result<Self> {
        let mut name_to_index = HashMap::new();

        for (index, header) in headers.iter().enumerate() {
            let column_name = header.trim().to_string();
            if column_name.is_empty() {
                continue;
            }
            name_to_index.entry(column_name).or_insert(index);
        }

        let mut missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .filter(|field| !name_to_index.contains_key(**field))
            .map(|field| field.to_string())
            .collect();

        if !missing.is_empty() {
            missing.sort();
            return Err(Error::missing_required_fields(missing));
        }

        Ok(ColumnMap { name_to_index })
    }

    /// Get the index for a given column name
    pub fn index_of(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }

    /// Check if a column exists in the mapping
    pub fn has_column(&self, column_name: &str) -> bool {
        self.name_to_index.contains_key(column_name)
    }

    /// Number of named columns in the header
    pub fn len(&self) -> usize {
        self.name_to_index.len()
    }

    /// Check whether the header had no named columns at all
    pub fn is_empty(&self) -> bool {
        self.name_to_index.is_empty()
    }
}
