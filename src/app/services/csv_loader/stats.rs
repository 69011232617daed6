//! Load statistics and result structures for CSV loading
//!
//! This module provides types for tracking how many rows survived the
//! load, and for carrying the rejection messages to diagnostics output.

use crate::app::models::TrainingRecord;

/// Load result with parsed records and basic statistics
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// Successfully parsed training records, in file order
    pub records: Vec<TrainingRecord>,

    /// Basic load statistics
    pub stats: LoadStats,
}

/// Simple load statistics
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LoadStats {
    /// Total number of data rows encountered (header excluded)
    pub rows_read: usize,

    /// Number of rows successfully parsed into records
    pub records_loaded: usize,

    /// Number of rows rejected
    pub rows_rejected: usize,

    /// One message per rejected row, for diagnostics
    pub rejections: Vec<String>,
}

impl LoadStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            rows_read: 0,
            records_loaded: 0,
            rows_rejected: 0,
            rejections: Vec::new(),
        }
    }

    /// Record one rejected row with its 1-based row number
    pub fn record_rejection(&mut self, row_number: usize, reason: &str) {
        self.rows_rejected += 1;
        self.rejections.push(format!("Row {}: {}", row_number, reason));
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.rows_read == 0 {
            0.0
        } else {
            (self.records_loaded as f64 / self.rows_read as f64) * 100.0
        }
    }

    /// Check if loading was mostly successful (>90% success rate)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }
}

impl Default for LoadStats {
    fn default() -> Self {
        Self::new()
    }
}
