//! Markdown report rendering
//!
//! This module lays the analysis out as a Markdown document with a fixed
//! section order: title, program summary, module progress table, top
//! performers table, then the score trend chart when one was generated.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::app::models::Analysis;
use crate::config::ReportConfig;
use crate::{Error, Result};

/// Notice shown in place of the top-performers table when nobody qualifies
const NO_TOP_PERFORMERS_NOTICE: &str = "No qualified top performers found";

/// Renders the final Markdown report
#[derive(Debug)]
pub struct ReportRenderer {
    config: ReportConfig,
}

impl ReportRenderer {
    /// Create a new renderer with the given report configuration
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Render the report to disk, returning the path of the written file
    ///
    /// `chart_path` is the image produced by the chart renderer; `None`
    /// omits the trend section entirely. A write failure here is fatal to
    /// the run.
    pub fn render(&self, analysis: &Analysis, chart_path: Option<&Path>) -> Result<PathBuf> {
        let markdown = self.build_markdown(analysis, chart_path);

        std::fs::write(&self.config.path, markdown)
            .map_err(|e| Error::report_write(self.config.path.display().to_string(), e))?;

        info!(
            "Report generated successfully at: {}",
            self.config.path.display()
        );
        Ok(self.config.path.clone())
    }

    /// Build the report body without touching the filesystem
    pub fn build_markdown(&self, analysis: &Analysis, chart_path: Option<&Path>) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "# {}", self.config.title);
        let _ = writeln!(out);

        let _ = writeln!(out, "## Program Summary");
        let _ = writeln!(out);
        let _ = writeln!(out, "- **Total Modules:** {}", analysis.total_modules());
        let _ = writeln!(
            out,
            "- **Total Participants:** {}",
            analysis.total_participants()
        );
        let _ = writeln!(out);

        let _ = writeln!(out, "## Module Progress");
        let _ = writeln!(out);
        let _ = writeln!(out, "| Module | Completion Rate | Avg Score | Participants |");
        let _ = writeln!(out, "|--------|-----------------|-----------|--------------|");
        for (module, stats) in &analysis.module_stats {
            let _ = writeln!(
                out,
                "| {} | {:.1}% | {:.1} | {} |",
                module, stats.completion_rate, stats.average_score, stats.participants
            );
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "## Top Performers");
        let _ = writeln!(out);
        if analysis.top_performers.is_empty() {
            let _ = writeln!(out, "{}", NO_TOP_PERFORMERS_NOTICE);
        } else {
            let _ = writeln!(out, "| Name | Avg Score | Completion | Modules Completed |");
            let _ = writeln!(out, "|------|-----------|------------|-------------------|");
            for performer in &analysis.top_performers {
                let _ = writeln!(
                    out,
                    "| {} | {:.1} | {:.1}% | {} |",
                    performer.name,
                    performer.stats.average_score,
                    performer.stats.completion_rate,
                    performer.stats.modules_completed
                );
            }
        }

        if let Some(chart) = chart_path {
            let _ = writeln!(out);
            let _ = writeln!(out, "## Score Trend Over Time");
            let _ = writeln!(out);
            let _ = writeln!(out, "![Score trend]({})", self.chart_link(chart));
        }

        out
    }

    /// Image reference for the chart: just the file name when the chart
    /// sits next to the report, the full path otherwise
    fn chart_link(&self, chart_path: &Path) -> String {
        let same_dir = match (self.config.path.parent(), chart_path.parent()) {
            (Some(report_dir), Some(chart_dir)) => report_dir == chart_dir,
            _ => false,
        };

        if same_dir {
            chart_path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| chart_path.display().to_string())
        } else {
            chart_path.display().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::NaiveDate;
    use tempfile::tempdir;

    use super::*;
    use crate::app::models::{ModuleStats, ParticipantStats, RankedPerformer, ScoreTrend};

    fn test_analysis() -> Analysis {
        let mut module_stats = BTreeMap::new();
        module_stats.insert(
            "Equipment".to_string(),
            ModuleStats {
                completion_rate: 0.0,
                average_score: 0.0,
                participants: 1,
            },
        );
        module_stats.insert(
            "Safety".to_string(),
            ModuleStats {
                completion_rate: 100.0,
                average_score: 80.0,
                participants: 2,
            },
        );

        let mut participant_stats = BTreeMap::new();
        participant_stats.insert(
            "Alice".to_string(),
            ParticipantStats {
                completion_rate: 50.0,
                average_score: 90.0,
                modules_completed: 1,
            },
        );

        Analysis {
            module_stats,
            participant_stats: participant_stats.clone(),
            top_performers: vec![RankedPerformer {
                name: "Alice".to_string(),
                stats: participant_stats["Alice"].clone(),
            }],
            score_trend: Some(ScoreTrend::from_points(vec![(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                90.0,
            )])),
        }
    }

    fn renderer_at(path: PathBuf) -> ReportRenderer {
        ReportRenderer::new(ReportConfig {
            path,
            ..ReportConfig::default()
        })
    }

    #[test]
    fn test_sections_appear_in_fixed_order() {
        let renderer = renderer_at(PathBuf::from("report.md"));
        let markdown =
            renderer.build_markdown(&test_analysis(), Some(Path::new("progress_chart.png")));

        let title = markdown.find("# Intern Training Progress Report").unwrap();
        let summary = markdown.find("## Program Summary").unwrap();
        let modules = markdown.find("## Module Progress").unwrap();
        let performers = markdown.find("## Top Performers").unwrap();
        let trend = markdown.find("## Score Trend Over Time").unwrap();

        assert!(title < summary);
        assert!(summary < modules);
        assert!(modules < performers);
        assert!(performers < trend);
    }

    #[test]
    fn test_summary_counts_and_table_formats() {
        let renderer = renderer_at(PathBuf::from("report.md"));
        let markdown = renderer.build_markdown(&test_analysis(), None);

        assert!(markdown.contains("- **Total Modules:** 2"));
        assert!(markdown.contains("- **Total Participants:** 1"));
        // One decimal place, percent sign on rates only
        assert!(markdown.contains("| Safety | 100.0% | 80.0 | 2 |"));
        assert!(markdown.contains("| Equipment | 0.0% | 0.0 | 1 |"));
        assert!(markdown.contains("| Alice | 90.0 | 50.0% | 1 |"));
    }

    #[test]
    fn test_module_rows_follow_sorted_order() {
        let renderer = renderer_at(PathBuf::from("report.md"));
        let markdown = renderer.build_markdown(&test_analysis(), None);

        let equipment = markdown.find("| Equipment |").unwrap();
        let safety = markdown.find("| Safety |").unwrap();
        assert!(equipment < safety);
    }

    #[test]
    fn test_no_qualified_performers_notice() {
        let mut analysis = test_analysis();
        analysis.top_performers.clear();

        let renderer = renderer_at(PathBuf::from("report.md"));
        let markdown = renderer.build_markdown(&analysis, None);

        assert!(markdown.contains(NO_TOP_PERFORMERS_NOTICE));
        assert!(!markdown.contains("| Name |"));
    }

    #[test]
    fn test_chart_section_omitted_without_chart() {
        let renderer = renderer_at(PathBuf::from("report.md"));
        let markdown = renderer.build_markdown(&test_analysis(), None);

        assert!(!markdown.contains("## Score Trend Over Time"));
        assert!(!markdown.contains("!["));
    }

    #[test]
    fn test_chart_link_relative_when_side_by_side() {
        let renderer = renderer_at(PathBuf::from("/tmp/reports/report.md"));
        let markdown = renderer.build_markdown(
            &test_analysis(),
            Some(Path::new("/tmp/reports/progress_chart.png")),
        );
        assert!(markdown.contains("![Score trend](progress_chart.png)"));

        let elsewhere = renderer.build_markdown(
            &test_analysis(),
            Some(Path::new("/tmp/charts/progress_chart.png")),
        );
        assert!(elsewhere.contains("![Score trend](/tmp/charts/progress_chart.png)"));
    }

    #[test]
    fn test_render_writes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.md");

        let renderer = renderer_at(path.clone());
        let written = renderer.render(&test_analysis(), None).unwrap();

        assert_eq!(written, path);
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Intern Training Progress Report"));
    }

    #[test]
    fn test_render_fails_on_unwritable_path() {
        let renderer = renderer_at(PathBuf::from("/nonexistent-dir/report.md"));
        let err = renderer.render(&test_analysis(), None).unwrap_err();
        assert!(matches!(err, Error::ReportWrite { .. }));
    }
}
