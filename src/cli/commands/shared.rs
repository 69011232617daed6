//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! multiple CLI command implementations.

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::cli::args::{GenerateArgs, ValidateArgs};
use crate::config::Config;
use crate::Result;

/// Run statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Number of data rows read from the input file
    pub rows_read: usize,
    /// Number of records that survived parsing
    pub records_loaded: usize,
    /// Number of rows rejected during parsing
    pub rows_rejected: usize,
    /// Number of training modules analyzed
    pub modules_analyzed: usize,
    /// Number of participants analyzed
    pub participants_analyzed: usize,
    /// Number of ranked top performers
    pub top_performers: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
    /// Output artifact sizes in bytes
    pub artifacts: Vec<(String, u64)>,
}

impl RunStats {
    /// Calculate total artifact size in bytes
    pub fn total_artifact_size(&self) -> u64 {
        self.artifacts.iter().map(|(_, size)| size).sum()
    }

    /// Format output size in human-readable format
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

/// Build an artifact entry (file name plus on-disk size) for the run summary
pub fn artifact_entry(path: &Path) -> (String, u64) {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("unknown")
        .to_string();
    let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
    (name, size)
}

/// Set up structured logging for a command
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("training_report={}", log_level)));

    // try_init: repeated in-process runs keep the first subscriber
    let initialized = if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if initialized.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }

    Ok(())
}

/// Load configuration using layered approach (defaults -> file)
///
/// When no file is given explicitly, the default config location is used
/// if a file exists there.
pub fn load_configuration(config_file: Option<&Path>) -> Result<Config> {
    info!("Loading configuration");

    // Determine config file path
    let default_config_path = if config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = match config_file {
        Some(path) => Some(path),
        None => {
            // Try default config file location
            default_config_path
                .as_ref()
                .filter(|path| path.exists())
                .map(|path| path.as_path())
        }
    };

    if let Some(config_path) = config_file {
        info!("Using config file: {}", config_path.display());
    } else {
        info!("No config file found, using built-in defaults");
    }

    Config::load_layered(config_file)
}

/// Load configuration for the generate command with CLI overrides applied
pub fn load_generate_configuration(args: &GenerateArgs) -> Result<Config> {
    let mut config = load_configuration(args.config_file.as_deref())?;

    apply_generate_overrides(&mut config, args);

    // Final validation
    config.validate()?;

    Ok(config)
}

/// Load configuration for the validate command with CLI overrides applied
pub fn load_validate_configuration(args: &ValidateArgs) -> Result<Config> {
    let mut config = load_configuration(args.config_file.as_deref())?;

    apply_validate_overrides(&mut config, args);

    // Final validation
    config.validate()?;

    Ok(config)
}

/// Apply generate command argument overrides to configuration
pub fn apply_generate_overrides(config: &mut Config, args: &GenerateArgs) {
    // Override path settings if explicitly provided
    if let Some(input_path) = &args.input_path {
        config.processing.input_path = input_path.clone();
    }
    if let Some(report_path) = &args.report_path {
        config.report.path = report_path.clone();
    }
    if let Some(chart_path) = &args.chart_path {
        config.chart.path = chart_path.clone();
    }

    // Override report settings
    if let Some(title) = &args.title {
        config.report.title = title.clone();
    }
    if args.no_chart {
        config.chart.enabled = false;
    }

    // Override logging settings
    config.logging.level = args.get_log_level().to_string();
}

/// Apply validate command argument overrides to configuration
pub fn apply_validate_overrides(config: &mut Config, args: &ValidateArgs) {
    if let Some(input_path) = &args.input_path {
        config.processing.input_path = input_path.clone();
    }

    config.logging.level = args.get_log_level().to_string();
}

/// Create a progress spinner with appropriate styling
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
