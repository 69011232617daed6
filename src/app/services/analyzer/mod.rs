//! Aggregation of training records into report statistics
//!
//! This module turns the loaded records into everything the report needs:
//! per-module and per-participant statistics, the top-performer ranking,
//! and the chronological score trend. Aggregation is pure computation over
//! already-validated records, so it cannot fail; thin inputs simply produce
//! thin results.
//!
//! ## Architecture
//!
//! The analyzer is organized into logical components:
//! - [`aggregate`] - Grouping and per-group statistics
//! - [`ranking`] - Top-performer qualification and ordering
//! - [`trend`] - Chronological score trend extraction
//!
//! ## Usage
//!
//! ```rust
//! use training_report::app::services::analyzer;
//!
//! let records = vec![];
//! let analysis = analyzer::analyze(&records);
//! assert_eq!(analysis.total_modules(), 0);
//! ```

pub mod aggregate;
pub mod ranking;
pub mod trend;

#[cfg(test)]
pub mod tests;

// Re-export main entry points for easy access
pub use aggregate::analyze;
pub use ranking::rank_top_performers;
pub use trend::score_trend;
