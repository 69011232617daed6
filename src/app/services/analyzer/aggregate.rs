//! Grouping and per-group statistics for training records

use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info};

use super::ranking::rank_top_performers;
use super::trend::score_trend;
use crate::app::models::{Analysis, ModuleStats, ParticipantStats, TrainingRecord};
use crate::constants::PERCENT_SCALE;

/// Analyze loaded records into the complete report statistics
///
/// Record order does not affect any per-category statistic; it only breaks
/// ties in the trend for records sharing a date.
pub fn analyze(records: &[TrainingRecord]) -> Analysis {
    let module_stats = aggregate_modules(records);
    let participant_stats = aggregate_participants(records);
    let top_performers = rank_top_performers(&participant_stats);
    let score_trend = score_trend(records);

    info!(
        "Data analysis completed: {} modules, {} participants, {} top performers",
        module_stats.len(),
        participant_stats.len(),
        top_performers.len()
    );

    Analysis {
        module_stats,
        participant_stats,
        top_performers,
        score_trend,
    }
}

/// Aggregate records per module
pub fn aggregate_modules(records: &[TrainingRecord]) -> BTreeMap<String, ModuleStats> {
    let mut groups: BTreeMap<String, GroupAccumulator> = BTreeMap::new();
    for record in records {
        groups.entry(record.module.clone()).or_default().add(record);
    }
    debug!("Aggregated {} modules", groups.len());

    groups
        .into_iter()
        .map(|(module, acc)| {
            let stats = ModuleStats {
                completion_rate: acc.completion_rate(),
                average_score: acc.average_score(),
                participants: acc.distinct_names(),
            };
            (module, stats)
        })
        .collect()
}

/// Aggregate records per participant
///
/// `modules_completed` counts completed rows, so a participant re-completing
/// a module inflates it. See [`ParticipantStats::modules_completed`].
pub fn aggregate_participants(records: &[TrainingRecord]) -> BTreeMap<String, ParticipantStats> {
    let mut groups: BTreeMap<String, GroupAccumulator> = BTreeMap::new();
    for record in records {
        groups.entry(record.name.clone()).or_default().add(record);
    }
    debug!("Aggregated {} participants", groups.len());

    groups
        .into_iter()
        .map(|(name, acc)| {
            let stats = ParticipantStats {
                completion_rate: acc.completion_rate(),
                average_score: acc.average_score(),
                modules_completed: acc.completed,
            };
            (name, stats)
        })
        .collect()
}

/// Running totals for one module or participant group
///
/// Scores count toward the average only on completed rows. A high score on
/// an unfinished module does not lift the group's average.
#[derive(Debug, Default)]
struct GroupAccumulator {
    rows: usize,
    completed: usize,
    score_sum: f64,
    score_count: usize,
    names: HashSet<String>,
}

impl GroupAccumulator {
    fn add(&mut self, record: &TrainingRecord) {
        self.rows += 1;
        self.names.insert(record.name.clone());
        if record.completed {
            self.completed += 1;
            if let Some(score) = record.score {
                self.score_sum += score;
                self.score_count += 1;
            }
        }
    }

    /// Completed rows as a percentage of all rows, 0.0 for an empty group
    fn completion_rate(&self) -> f64 {
        if self.rows == 0 {
            0.0
        } else {
            (self.completed as f64 / self.rows as f64) * PERCENT_SCALE
        }
    }

    /// Mean score over completed rows carrying a score, 0.0 when none
    fn average_score(&self) -> f64 {
        if self.score_count == 0 {
            0.0
        } else {
            self.score_sum / self.score_count as f64
        }
    }

    /// Distinct participant names seen in this group
    fn distinct_names(&self) -> usize {
        self.names.len()
    }
}
