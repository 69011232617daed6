//! Validate command implementation for the training report CLI
//!
//! This module runs the loader's structural and row-level checks against a
//! CSV export and reports the outcome without writing any artifacts.

use std::path::Path;
use std::time::Instant;

use colored::*;
use tracing::{debug, info};

use super::shared::{RunStats, load_validate_configuration, setup_logging};
use crate::Result;
use crate::app::services::csv_loader::{LoadStats, load_training_data};
use crate::cli::args::{OutputFormat, ValidateArgs};

/// Maximum number of rejection reasons listed in the human summary
const MAX_LISTED_REJECTIONS: usize = 10;

/// Validate command runner for the training report tool
///
/// This function runs the same existence, structure, and row-parse checks
/// as the generate command, then prints load diagnostics instead of
/// producing a report. Structural problems surface as the same errors the
/// generate command would fail with.
pub fn run_validate(args: ValidateArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    // Set up logging
    setup_logging(args.get_log_level(), false)?;

    info!("Starting training data validation");
    debug!("Validation arguments: {:?}", args);

    // Validate arguments
    args.validate()?;

    // Load configuration with layered approach
    let config = load_validate_configuration(&args)?;

    let input_path = &config.processing.input_path;
    info!("Validating input file: {}", input_path.display());

    let load_result = load_training_data(input_path)?;

    // Generate final report
    generate_validation_report(&args, input_path, &load_result.stats)?;

    let stats = RunStats {
        rows_read: load_result.stats.rows_read,
        records_loaded: load_result.stats.records_loaded,
        rows_rejected: load_result.stats.rows_rejected,
        processing_time: start_time.elapsed(),
        ..Default::default()
    };

    info!(
        "Validation completed in {:.2}s: {} rows read, {:.1}% success rate",
        stats.processing_time.as_secs_f64(),
        load_result.stats.rows_read,
        load_result.stats.success_rate()
    );

    Ok(stats)
}

/// Generate validation report based on output format
fn generate_validation_report(
    args: &ValidateArgs,
    input_path: &Path,
    stats: &LoadStats,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => generate_human_validation_report(input_path, stats),
        OutputFormat::Json => generate_json_validation_report(input_path, stats),
        OutputFormat::Csv => generate_csv_validation_report(stats),
    }
}

/// Generate human-readable validation report
fn generate_human_validation_report(input_path: &Path, stats: &LoadStats) -> Result<()> {
    println!(
        "\n{}",
        "Training Data Validation Results".bright_green().bold()
    );
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📄 Input file: {}", input_path.display());

    // Overall status
    if stats.is_successful() {
        println!("✅ Overall Status: PASS");
    } else {
        println!("❌ Overall Status: FAIL");
    }

    println!("\n📊 Row Summary:");
    println!("   • Rows read: {}", stats.rows_read);
    println!(
        "   • Records loaded: {}",
        stats.records_loaded.to_string().bright_white().bold()
    );
    println!("   • Rows rejected: {}", stats.rows_rejected);
    println!("   • Success rate: {:.1}%", stats.success_rate());

    if stats.rejections.is_empty() {
        println!("\n✅ No row-level problems found");
    } else {
        println!("\n⚠️  Rejected Rows:");
        for reason in stats.rejections.iter().take(MAX_LISTED_REJECTIONS) {
            println!("   • {}", reason);
        }
        if stats.rejections.len() > MAX_LISTED_REJECTIONS {
            println!(
                "   • ... and {} more rejected rows",
                stats.rejections.len() - MAX_LISTED_REJECTIONS
            );
        }
    }

    println!();
    Ok(())
}

/// Generate JSON validation report
fn generate_json_validation_report(input_path: &Path, stats: &LoadStats) -> Result<()> {
    let json_result = serde_json::json!({
        "input_file": input_path.display().to_string(),
        "passed": stats.is_successful(),
        "stats": stats,
    });

    println!("{}", serde_json::to_string_pretty(&json_result).unwrap());
    Ok(())
}

/// Generate CSV validation report
fn generate_csv_validation_report(stats: &LoadStats) -> Result<()> {
    println!("metric,value");
    println!("passed,{}", stats.is_successful());
    println!("rows_read,{}", stats.rows_read);
    println!("records_loaded,{}", stats.records_loaded);
    println!("rows_rejected,{}", stats.rows_rejected);
    println!("success_rate_percent,{:.2}", stats.success_rate());

    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_run_validate_reports_rejections() {
        let temp_dir = TempDir::new().unwrap();
        let input_path = temp_dir.path().join("training_data.csv");
        std::fs::write(
            &input_path,
            "Name,Module,Score,Date,Completed\n\
             Alice,Safety,90,2024-01-15,yes\n\
             Bob,Safety,ninety,2024-01-16,yes\n",
        )
        .unwrap();

        let args = ValidateArgs {
            input_path: Some(input_path),
            ..Default::default()
        };

        let stats = run_validate(args).unwrap();
        assert_eq!(stats.rows_read, 2);
        assert_eq!(stats.records_loaded, 1);
        assert_eq!(stats.rows_rejected, 1);

        // Validation never writes artifacts
        assert!(stats.artifacts.is_empty());
    }

    #[test]
    fn test_run_validate_missing_input() {
        let temp_dir = TempDir::new().unwrap();

        let args = ValidateArgs {
            input_path: Some(temp_dir.path().join("missing.csv")),
            ..Default::default()
        };

        assert!(run_validate(args).is_err());
    }

    #[test]
    fn test_human_validation_report_with_many_rejections() {
        let mut stats = LoadStats::new();
        stats.rows_read = 20;
        stats.records_loaded = 5;
        for row in 1..=15 {
            stats.record_rejection(row, "Invalid numeric format for Score: 'n/a'");
        }

        // Should not panic; listing is capped
        let result = generate_human_validation_report(Path::new("training_data.csv"), &stats);
        assert!(result.is_ok());
    }

    #[test]
    fn test_json_validation_report() {
        let stats = LoadStats {
            rows_read: 3,
            records_loaded: 3,
            rows_rejected: 0,
            rejections: vec![],
        };

        let result = generate_json_validation_report(Path::new("training_data.csv"), &stats);
        assert!(result.is_ok());
    }

    #[test]
    fn test_csv_validation_report() {
        let stats = LoadStats::new();

        let result = generate_csv_validation_report(&stats);
        assert!(result.is_ok());
    }
}
