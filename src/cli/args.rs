//! Command-line argument definitions for the training report tool
//!
//! This module defines the complete CLI interface using clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the training report generator
///
/// Turns intern training-progress CSV exports into Markdown reports with
/// completion statistics, top-performer rankings, and a score-trend chart.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "training-report",
    version,
    about = "Generate Markdown progress reports from intern training CSV exports",
    long_about = "Reads a training-progress CSV export, aggregates completion and score \
                  statistics per module and per participant, renders a score-trend chart, \
                  and writes a Markdown report. Malformed rows are skipped with a logged \
                  reason instead of aborting the run."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the training report tool
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Generate the Markdown report and score-trend chart (default command)
    Generate(GenerateArgs),
    /// Check a CSV export and report row-level problems without writing artifacts
    Validate(ValidateArgs),
}

/// Arguments for the generate command (main report pipeline)
#[derive(Debug, Clone, Parser)]
pub struct GenerateArgs {
    /// Input path to the training CSV export
    ///
    /// Must contain a header row with the columns Name, Module, Score, Date
    /// and Completed (extra columns are ignored).
    /// If not specified, defaults to ./training_data.csv
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input path to the training CSV export"
    )]
    pub input_path: Option<PathBuf>,

    /// Output path for the Markdown report
    ///
    /// Parent directories will be created if they do not exist.
    /// If not specified, defaults to ./training_report.md
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output path for the Markdown report"
    )]
    pub report_path: Option<PathBuf>,

    /// Output path for the score-trend chart PNG
    ///
    /// The report links the chart by file name when both land in the same
    /// directory. If not specified, defaults to ./progress_chart.png
    #[arg(
        long = "chart",
        value_name = "FILE",
        help = "Output path for the score-trend chart PNG",
        conflicts_with = "no_chart"
    )]
    pub chart_path: Option<PathBuf>,

    /// Skip chart rendering entirely
    ///
    /// The report is still generated; its trend section is omitted.
    #[arg(long = "no-chart", help = "Skip chart rendering")]
    pub no_chart: bool,

    /// Report title override
    ///
    /// If not specified, uses the configured title
    /// ("Intern Training Progress Report" by default).
    #[arg(long = "title", value_name = "TEXT", help = "Report title override")]
    pub title: Option<String>,

    /// Path to configuration file
    ///
    /// TOML configuration file for default paths and chart geometry. If not
    /// specified, looks for ~/.config/training-report/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for the run summary
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the run summary"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the validate command (input diagnostics)
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Input path to the training CSV export to check
    ///
    /// If not specified, defaults to ./training_data.csv
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input path to the training CSV export to check"
    )]
    pub input_path: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// TOML configuration file providing the default input path. If not
    /// specified, looks for ~/.config/training-report/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Output format for the validation summary
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the validation summary"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for run summaries
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl GenerateArgs {
    /// Validate the generate command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        // Validate input path exists (only if explicitly provided)
        if let Some(input_path) = &self.input_path {
            if !input_path.exists() {
                return Err(Error::configuration(format!(
                    "Input file does not exist: {}",
                    input_path.display()
                )));
            }

            if input_path.is_dir() {
                return Err(Error::configuration(format!(
                    "Input path is a directory, not a file: {}",
                    input_path.display()
                )));
            }
        }

        // Validate title if explicitly provided
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(Error::configuration(
                    "Report title cannot be blank".to_string(),
                ));
            }
        }

        // Validate config file exists if specified
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress output (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl ValidateArgs {
    /// Validate the validate command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        // Validate input path exists (only if explicitly provided)
        if let Some(input_path) = &self.input_path {
            if !input_path.exists() {
                return Err(Error::configuration(format!(
                    "Input file does not exist: {}",
                    input_path.display()
                )));
            }
        }

        // Validate config file exists if specified
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn", // Default level for validate command
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            input_path: None,
            report_path: None,
            chart_path: None,
            no_chart: false,
            title: None,
            config_file: None,
            verbose: 0,
            quiet: false,
            output_format: OutputFormat::Human,
        }
    }
}

impl Default for ValidateArgs {
    fn default() -> Self {
        Self {
            input_path: None,
            config_file: None,
            output_format: OutputFormat::Human,
            verbose: 0,
        }
    }
}
