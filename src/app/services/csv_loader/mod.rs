//! CSV loader for training-progress export files
//!
//! This module reads a training-progress CSV export and turns it into a
//! vector of [`TrainingRecord`](crate::app::models::TrainingRecord) values.
//! Structural problems with the file abort the load; problems confined to a
//! single row reject that row and keep going.
//!
//! ## Architecture
//!
//! The loader is organized into logical components:
//! - [`loader`] - Load orchestration and structural validation
//! - [`column_map`] - Header analysis and required-column lookup
//! - [`record_parser`] - Individual CSV row processing
//! - [`field_parsers`] - Utility functions for field parsing and validation
//! - [`stats`] - Load statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use training_report::app::services::csv_loader;
//!
//! # fn example() -> training_report::Result<()> {
//! let result = csv_loader::load_training_data(std::path::Path::new("training_data.csv"))?;
//!
//! println!(
//!     "Loaded {} records from {} rows",
//!     result.stats.records_loaded, result.stats.rows_read
//! );
//! # Ok(())
//! # }
//! ```

pub mod column_map;
pub mod field_parsers;
pub mod loader;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_map::ColumnMap;
pub use loader::load_training_data;
pub use stats::{LoadResult, LoadStats};
