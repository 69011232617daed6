//! Chronological score trend extraction

use crate::app::models::{ScoreTrend, TrainingRecord};

/// Build the score trend from records carrying both a date and a score
///
/// Returns `None` when no record qualifies, which the renderers surface as
/// an explicit "no trend" rather than an empty chart.
pub fn score_trend(records: &[TrainingRecord]) -> Option<ScoreTrend> {
    let points: Vec<_> = records
        .iter()
        .filter_map(TrainingRecord::dated_score)
        .collect();

    if points.is_empty() {
        None
    } else {
        Some(ScoreTrend::from_points(points))
    }
}
