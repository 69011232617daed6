//! Training Report Library
//!
//! A Rust library for turning intern training-progress CSV exports into
//! Markdown progress reports with an optional score-trend chart.
//!
//! This library provides tools for:
//! - Loading training CSV files with per-row fault tolerance
//! - Aggregating completion and score statistics per module and participant
//! - Ranking top performers and deriving a chronological score trend
//! - Rendering the score trend as a PNG chart
//! - Rendering the final Markdown report
//! - Comprehensive error handling and recovery

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod analyzer;
        pub mod chart_renderer;
        pub mod csv_loader;
        pub mod report_renderer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Analysis, TrainingRecord};
pub use config::Config;

/// Result type alias for the training report pipeline
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for training report operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file does not exist
    #[error("Input file not found: {path}")]
    InputNotFound { path: String },

    /// Input file exists but contains no data at all
    #[error("Input file is empty: {path}")]
    EmptyInput { path: String },

    /// Input file has no usable header row
    #[error("No header row found in '{path}'")]
    MissingHeader { path: String },

    /// Header row lacks one or more required columns
    #[error("Missing required columns: {}", fields.join(", "))]
    MissingRequiredFields { fields: Vec<String> },

    /// Every data row was rejected during parsing
    #[error("No valid records found in '{path}'")]
    NoValidRecords { path: String },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Chart rendering error
    #[error("Chart rendering error: {message}")]
    ChartRender { message: String },

    /// Report writing error
    #[error("Report writing error for '{path}'")]
    ReportWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an input-not-found error
    pub fn input_not_found(path: impl Into<String>) -> Self {
        Self::InputNotFound { path: path.into() }
    }

    /// Create an empty-input error
    pub fn empty_input(path: impl Into<String>) -> Self {
        Self::EmptyInput { path: path.into() }
    }

    /// Create a missing-header error
    pub fn missing_header(path: impl Into<String>) -> Self {
        Self::MissingHeader { path: path.into() }
    }

    /// Create a missing-required-fields error
    pub fn missing_required_fields(fields: Vec<String>) -> Self {
        Self::MissingRequiredFields { fields }
    }

    /// Create a no-valid-records error
    pub fn no_valid_records(path: impl Into<String>) -> Self {
        Self::NoValidRecords { path: path.into() }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a chart rendering error
    pub fn chart_render(message: impl Into<String>) -> Self {
        Self::ChartRender {
            message: message.into(),
        }
    }

    /// Create a report writing error
    pub fn report_write(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ReportWrite {
            path: path.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
