//! Score trend chart rendering
//!
//! This module draws the chronological score trend as a PNG line chart.
//! Chart generation is a soft feature: callers treat any error here as a
//! warning and produce the report without a chart.

use std::path::PathBuf;

use plotters::prelude::*;
use tracing::{debug, info};

use crate::app::models::ScoreTrend;
use crate::config::ChartConfig;
use crate::constants::{
    CHART_DATE_LABEL_FORMAT, CHART_TITLE, SCORE_AXIS_MAX, TREND_LINE_RGB, TREND_MARKER_SIZE,
};
use crate::{Error, Result};

/// Renders the score trend to a PNG file
///
/// Observations are plotted at equally spaced positions in date order with
/// the date as the axis label, so sparse periods do not stretch the line.
#[derive(Debug)]
pub struct ChartRenderer {
    config: ChartConfig,
}

impl ChartRenderer {
    /// Create a new renderer with the given chart configuration
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    /// Render the trend chart, returning the path of the written image
    ///
    /// Returns `Ok(None)` without touching the filesystem when charting is
    /// disabled or there is no trend to draw.
    pub fn render(&self, trend: Option<&ScoreTrend>) -> Result<Option<PathBuf>> {
        if !self.config.enabled {
            debug!("Chart generation disabled, skipping");
            return Ok(None);
        }

        let trend = match trend {
            Some(trend) if !trend.is_empty() => trend,
            _ => {
                debug!("No score trend available, skipping chart");
                return Ok(None);
            }
        };

        self.draw(trend)?;
        info!("Generated progress chart: {}", self.config.path.display());
        Ok(Some(self.config.path.clone()))
    }

    fn draw(&self, trend: &ScoreTrend) -> Result<()> {
        let labels: Vec<String> = trend
            .dates()
            .iter()
            .map(|date| date.format(CHART_DATE_LABEL_FORMAT).to_string())
            .collect();

        // A single observation still needs a non-degenerate axis
        let x_max = (trend.len() as i32 - 1).max(1);
        let line_color = RGBColor(TREND_LINE_RGB.0, TREND_LINE_RGB.1, TREND_LINE_RGB.2);

        let root = BitMapBackend::new(&self.config.path, (self.config.width, self.config.height))
            .into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(CHART_TITLE, ("sans-serif", 30))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(0..x_max, 0f64..SCORE_AXIS_MAX)
            .map_err(chart_err)?;

        chart
            .configure_mesh()
            .x_desc("Date")
            .y_desc("Score")
            .x_labels(trend.len().min(12))
            .x_label_formatter(&|index| {
                labels
                    .get(*index as usize)
                    .cloned()
                    .unwrap_or_default()
            })
            .draw()
            .map_err(chart_err)?;

        let points: Vec<(i32, f64)> = trend
            .scores()
            .iter()
            .enumerate()
            .map(|(index, score)| (index as i32, *score))
            .collect();

        chart
            .draw_series(LineSeries::new(points.iter().copied(), &line_color))
            .map_err(chart_err)?;

        chart
            .draw_series(
                points
                    .iter()
                    .map(|point| Circle::new(*point, TREND_MARKER_SIZE, line_color.filled())),
            )
            .map_err(chart_err)?;

        root.present().map_err(chart_err)?;
        Ok(())
    }
}

fn chart_err<E: std::fmt::Display>(error: E) -> Error {
    Error::chart_render(error.to_string())
}
