//! Top-performer qualification and ordering

use std::collections::BTreeMap;

use crate::app::models::{ParticipantStats, RankedPerformer};
use crate::constants::{qualifies_as_top_performer, TOP_PERFORMER_LIMIT};

/// Rank qualified participants by average score, best first
///
/// A participant qualifies with a completion rate of at least 50% and at
/// least one completed module. The input map iterates in name order and
/// the sort is stable, so participants with equal average scores appear
/// alphabetically, run after run.
pub fn rank_top_performers(
    participant_stats: &BTreeMap<String, ParticipantStats>,
) -> Vec<RankedPerformer> {
    let mut qualified: Vec<RankedPerformer> = participant_stats
        .iter()
        .filter(|(_, stats)| {
            qualifies_as_top_performer(stats.completion_rate, stats.modules_completed)
        })
        .map(|(name, stats)| RankedPerformer {
            name: name.clone(),
            stats: stats.clone(),
        })
        .collect();

    qualified.sort_by(|a, b| b.stats.average_score.total_cmp(&a.stats.average_score));
    qualified.truncate(TOP_PERFORMER_LIMIT);
    qualified
}
