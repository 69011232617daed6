//! Generate command implementation for the training report CLI
//!
//! This module contains the complete report generation workflow including
//! configuration loading, CSV ingestion, statistical analysis, chart
//! rendering, and Markdown report output.

use std::path::Path;
use std::time::Instant;

use colored::*;
use indicatif::HumanDuration;
use tracing::{debug, info, warn};

use super::shared::{
    RunStats, artifact_entry, create_spinner, load_generate_configuration, setup_logging,
};
use crate::Result;
use crate::app::services::analyzer::analyze;
use crate::app::services::chart_renderer::ChartRenderer;
use crate::app::services::csv_loader::load_training_data;
use crate::app::services::report_renderer::ReportRenderer;
use crate::cli::args::{GenerateArgs, OutputFormat};

/// Generate command runner for the training report tool
///
/// This function orchestrates the entire reporting workflow:
/// 1. Set up logging and configuration
/// 2. Load the training CSV export with row-level fault tolerance
/// 3. Aggregate statistics and rank top performers
/// 4. Render the score-trend chart and the Markdown report
pub fn run_generate(args: GenerateArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    // Set up logging
    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting training report generation");
    debug!("Command line arguments: {:?}", args);

    // Validate arguments
    args.validate()?;

    // Load configuration with layered approach
    let config = load_generate_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);

    // Create output directories before any artifact is written
    config.ensure_output_directories()?;

    let spinner = if args.show_progress() {
        Some(create_spinner("Loading training data..."))
    } else {
        None
    };

    // Load the CSV export; structural errors abort, bad rows are skipped
    let load_result = load_training_data(&config.processing.input_path)?;

    if let Some(pb) = &spinner {
        pb.set_message("Analyzing records...");
    }

    let analysis = analyze(&load_result.records);

    if let Some(pb) = &spinner {
        pb.set_message("Rendering artifacts...");
    }

    // Chart failures degrade the run to a chart-less report
    let chart_renderer = ChartRenderer::new(config.chart.clone());
    let chart_path = match chart_renderer.render(analysis.score_trend.as_ref()) {
        Ok(path) => path,
        Err(e) => {
            warn!("Could not generate chart: {}", e);
            None
        }
    };

    let report_renderer = ReportRenderer::new(config.report.clone());
    let report_path = report_renderer.render(&analysis, chart_path.as_deref())?;

    if let Some(pb) = &spinner {
        pb.finish_with_message("Report generated");
    }

    // Collect run statistics
    let mut stats = RunStats {
        rows_read: load_result.stats.rows_read,
        records_loaded: load_result.stats.records_loaded,
        rows_rejected: load_result.stats.rows_rejected,
        modules_analyzed: analysis.total_modules(),
        participants_analyzed: analysis.total_participants(),
        top_performers: analysis.top_performers.len(),
        processing_time: start_time.elapsed(),
        artifacts: vec![artifact_entry(&report_path)],
    };
    if let Some(chart) = &chart_path {
        stats.artifacts.push(artifact_entry(chart));
    }

    // Generate final report
    generate_final_report(&args, &report_path, &stats)?;

    Ok(stats)
}

/// Generate final run summary
fn generate_final_report(args: &GenerateArgs, report_path: &Path, stats: &RunStats) -> Result<()> {
    info!("Generating run summary");

    match args.output_format {
        OutputFormat::Human => generate_human_report(report_path, stats),
        OutputFormat::Json => generate_json_report(report_path, stats),
        OutputFormat::Csv => generate_csv_report(report_path, stats),
    }
}

/// Generate human-readable run summary
fn generate_human_report(report_path: &Path, stats: &RunStats) -> Result<()> {
    let duration = HumanDuration(stats.processing_time);
    let total_size = RunStats::format_size(stats.total_artifact_size());

    println!("\n{}", "Training report complete!".bright_green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📊 Run Summary:");
    println!(
        "   • Records loaded: {}",
        stats.records_loaded.to_string().bright_white().bold()
    );
    if stats.rows_rejected > 0 {
        println!(
            "   • Rows rejected: {}",
            stats.rows_rejected.to_string().bright_yellow().bold()
        );
    }
    println!("   • Modules analyzed: {}", stats.modules_analyzed);
    println!(
        "   • Participants analyzed: {}",
        stats.participants_analyzed
    );
    println!("   • Top performers: {}", stats.top_performers);
    println!("   • Total output size: {}", total_size);
    println!("   • Processing time: {}", duration);

    if !stats.artifacts.is_empty() {
        println!("\n📁 Output Files:");
        for (filename, size) in &stats.artifacts {
            println!("   • {}: {}", filename, RunStats::format_size(*size));
        }
    }

    println!(
        "\n✅ Report generated successfully at: {}",
        report_path.display()
    );
    println!();
    Ok(())
}

/// Generate JSON run summary for machine consumption
fn generate_json_report(report_path: &Path, stats: &RunStats) -> Result<()> {
    let json_stats = serde_json::json!({
        "report_path": report_path.display().to_string(),
        "rows_read": stats.rows_read,
        "records_loaded": stats.records_loaded,
        "rows_rejected": stats.rows_rejected,
        "modules_analyzed": stats.modules_analyzed,
        "participants_analyzed": stats.participants_analyzed,
        "top_performers": stats.top_performers,
        "processing_time_seconds": stats.processing_time.as_secs_f64(),
        "total_output_size_bytes": stats.total_artifact_size(),
        "output_files": stats.artifacts.iter().map(|(name, size)| {
            serde_json::json!({
                "filename": name,
                "size_bytes": size
            })
        }).collect::<Vec<_>>()
    });

    println!("{}", serde_json::to_string_pretty(&json_stats).unwrap());
    Ok(())
}

/// Generate CSV run summary for data analysis
fn generate_csv_report(report_path: &Path, stats: &RunStats) -> Result<()> {
    println!("metric,value");
    println!("report_path,{}", report_path.display());
    println!("rows_read,{}", stats.rows_read);
    println!("records_loaded,{}", stats.records_loaded);
    println!("rows_rejected,{}", stats.rows_rejected);
    println!("modules_analyzed,{}", stats.modules_analyzed);
    println!("participants_analyzed,{}", stats.participants_analyzed);
    println!("top_performers,{}", stats.top_performers);
    println!(
        "processing_time_seconds,{}",
        stats.processing_time.as_secs_f64()
    );
    println!("total_output_size_bytes,{}", stats.total_artifact_size());

    Ok(())
}
