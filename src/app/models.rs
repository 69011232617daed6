//! Data models for training-progress processing
//!
//! This module contains the core data structures for representing parsed
//! training records and the aggregate statistics derived from them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Training Record Structure
// =============================================================================

/// A single parsed row from a training-progress CSV export
///
/// Rows survive parsing with partial data: a record may lack a score or a
/// date and still contribute to completion statistics. Only rows whose
/// score field is present but malformed are rejected before reaching this
/// structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingRecord {
    /// Participant name, trimmed and non-empty
    pub name: String,

    /// Training module identifier, trimmed and non-empty
    pub module: String,

    /// Assessment score on a 0-100 scale, absent when the field was blank
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Whether the participant completed the module
    pub completed: bool,

    /// Date the row was recorded, absent when blank or malformed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl TrainingRecord {
    /// Check whether this record carries a usable score
    pub fn has_score(&self) -> bool {
        self.score.is_some()
    }

    /// Get the (date, score) pair when both are present
    ///
    /// Records missing either half do not participate in the score trend.
    pub fn dated_score(&self) -> Option<(NaiveDate, f64)> {
        match (self.date, self.score) {
            (Some(date), Some(score)) => Some((date, score)),
            _ => None,
        }
    }
}

// =============================================================================
// Aggregate Statistics Structures
// =============================================================================

/// Per-module aggregate statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleStats {
    /// Percentage of rows for this module marked completed (0-100)
    pub completion_rate: f64,

    /// Mean score over this module's completed rows that carry a score,
    /// 0.0 when there are none
    pub average_score: f64,

    /// Number of distinct participants with at least one row in this module
    pub participants: usize,
}

/// Per-participant aggregate statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantStats {
    /// Percentage of this participant's rows marked completed (0-100)
    pub completion_rate: f64,

    /// Mean score over this participant's completed rows that carry a
    /// score, 0.0 when there are none
    pub average_score: f64,

    /// Number of this participant's rows marked completed
    ///
    /// Counts completed rows, not distinct modules: a module completed
    /// twice counts twice. Reported numbers depend on this, so downstream
    /// consumers must not deduplicate.
    pub modules_completed: usize,
}

/// A participant entry in the top-performers ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPerformer {
    /// Participant name
    pub name: String,

    /// The participant's aggregate statistics at ranking time
    pub stats: ParticipantStats,
}

// =============================================================================
// Score Trend Structure
// =============================================================================

/// Chronological score observations for the trend chart
///
/// Dates and scores are parallel vectors of equal length, ordered by date
/// ascending. Built only from records that carry both a date and a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreTrend {
    dates: Vec<NaiveDate>,
    scores: Vec<f64>,
}

impl ScoreTrend {
    /// Build a trend from (date, score) pairs, sorting by date ascending
    ///
    /// Pairs sharing a date keep their input order, so repeated runs over
    /// the same file produce the same trend.
    pub fn from_points(mut points: Vec<(NaiveDate, f64)>) -> Self {
        points.sort_by_key(|(date, _)| *date);
        let (dates, scores) = points.into_iter().unzip();
        Self { dates, scores }
    }

    /// Number of observations in the trend
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Check whether the trend has no observations
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Dates in ascending order
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Scores aligned with `dates()`
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Iterate over (date, score) pairs in chronological order
    pub fn points(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.dates.iter().copied().zip(self.scores.iter().copied())
    }
}

// =============================================================================
// Analysis Result Structure
// =============================================================================

/// Complete aggregation result for one loaded dataset
///
/// Maps are keyed on module / participant name; `BTreeMap` keeps iteration
/// in name order so the rendered report is stable across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Aggregate statistics per module, keyed by module name
    pub module_stats: BTreeMap<String, ModuleStats>,

    /// Aggregate statistics per participant, keyed by participant name
    pub participant_stats: BTreeMap<String, ParticipantStats>,

    /// Qualified performers, best average score first, at most three
    pub top_performers: Vec<RankedPerformer>,

    /// Chronological score trend, `None` when no record had both a date
    /// and a score
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_trend: Option<ScoreTrend>,
}

impl Analysis {
    /// Distinct module names in lexicographic order
    ///
    /// This is also the display order of the module table.
    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.module_stats.keys().map(String::as_str)
    }

    /// Distinct participant names in lexicographic order
    pub fn participants(&self) -> impl Iterator<Item = &str> {
        self.participant_stats.keys().map(String::as_str)
    }

    /// Number of distinct modules seen in the dataset
    pub fn total_modules(&self) -> usize {
        self.module_stats.len()
    }

    /// Number of distinct participants seen in the dataset
    pub fn total_participants(&self) -> usize {
        self.participant_stats.len()
    }

    /// Check whether a trend is available for charting
    pub fn has_trend(&self) -> bool {
        self.score_trend
            .as_ref()
            .is_some_and(|trend| !trend.is_empty())
    }
}
