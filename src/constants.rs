//! Application constants for the training report pipeline
//!
//! This module contains the column names, parsing conventions, ranking
//! thresholds, chart geometry, and default paths used throughout the
//! training report application.

// =============================================================================
// Column Name Constants
// =============================================================================

/// Standard column names in training-progress CSV exports
pub mod fields {
    pub const NAME: &str = "Name";
    pub const MODULE: &str = "Module";
    pub const SCORE: &str = "Score";
    pub const DATE: &str = "Date";
    pub const COMPLETED: &str = "Completed";
}

/// Columns that must be present in the header row for a file to be processed
pub const REQUIRED_FIELDS: &[&str] = &[
    fields::NAME,
    fields::MODULE,
    fields::SCORE,
    fields::DATE,
    fields::COMPLETED,
];

// =============================================================================
// Field Parsing Conventions
// =============================================================================

/// Date format used in training-progress exports
pub const TRAINING_DATE_FORMAT: &str = "%Y-%m-%d";

/// The only value (after trimming and case-folding) that marks a module
/// as completed
pub const COMPLETED_LITERAL: &str = "yes";

// =============================================================================
// Ranking Thresholds
// =============================================================================

/// Maximum number of performers listed in the report
pub const TOP_PERFORMER_LIMIT: usize = 3;

/// Minimum completion rate (percent) to qualify as a top performer
pub const TOP_PERFORMER_MIN_COMPLETION_RATE: f64 = 50.0;

/// Completion rates and score axes are expressed on a 0-100 scale
pub const PERCENT_SCALE: f64 = 100.0;

// =============================================================================
// Chart Configuration
// =============================================================================

/// Default chart dimensions in pixels
pub const CHART_WIDTH_PX: u32 = 1000;
pub const CHART_HEIGHT_PX: u32 = 500;

/// Chart title drawn above the trend line
pub const CHART_TITLE: &str = "Training Score Trend Over Time";

/// Date label format on the chart x-axis (month-day)
pub const CHART_DATE_LABEL_FORMAT: &str = "%m-%d";

/// Upper bound of the score axis
pub const SCORE_AXIS_MAX: f64 = 100.0;

/// Trend line color (matplotlib tab10 blue, kept for continuity with the
/// reports interns already know)
pub const TREND_LINE_RGB: (u8, u8, u8) = (31, 119, 180);

/// Radius of the per-observation markers on the trend line
pub const TREND_MARKER_SIZE: u32 = 4;

// =============================================================================
// File and Directory Constants
// =============================================================================

/// Default input filename when none is given on the command line
pub const DEFAULT_INPUT_FILENAME: &str = "training_data.csv";

/// Default report output filename
pub const DEFAULT_REPORT_FILENAME: &str = "training_report.md";

/// Default chart output filename
pub const DEFAULT_CHART_FILENAME: &str = "progress_chart.png";

/// Default title printed at the top of the report
pub const DEFAULT_REPORT_TITLE: &str = "Intern Training Progress Report";

// =============================================================================
// Helper Functions
// =============================================================================

/// Check whether a header name is one of the required training columns
pub fn is_required_field(name: &str) -> bool {
    REQUIRED_FIELDS.contains(&name)
}

/// Check whether a participant's aggregate stats qualify them for the
/// top-performer list
pub fn qualifies_as_top_performer(completion_rate: f64, modules_completed: usize) -> bool {
    completion_rate >= TOP_PERFORMER_MIN_COMPLETION_RATE && modules_completed > 0
}
