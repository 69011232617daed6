//! Configuration management and validation.
//!
//! Provides the layered configuration for a report run: built-in defaults,
//! then an optional TOML file, then command-line overrides applied by the
//! CLI layer. Every section is optional in the file; omitted values fall
//! back to defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{
    CHART_HEIGHT_PX, CHART_WIDTH_PX, DEFAULT_CHART_FILENAME, DEFAULT_INPUT_FILENAME,
    DEFAULT_REPORT_FILENAME, DEFAULT_REPORT_TITLE,
};
use crate::{Error, Result};

/// Log levels accepted in the `[logging]` section
const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Global configuration for a training report run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Input processing settings
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Report output settings
    #[serde(default)]
    pub report: ReportConfig,

    /// Chart output settings
    #[serde(default)]
    pub chart: ChartConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Input processing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Path of the training-progress CSV to load
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,
}

/// Report output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Path the Markdown report is written to
    #[serde(default = "default_report_path")]
    pub path: PathBuf,

    /// Title printed at the top of the report
    #[serde(default = "default_report_title")]
    pub title: String,
}

/// Chart output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Path the trend chart PNG is written to
    #[serde(default = "default_chart_path")]
    pub path: PathBuf,

    /// Chart width in pixels
    #[serde(default = "default_chart_width")]
    pub width: u32,

    /// Chart height in pixels
    #[serde(default = "default_chart_height")]
    pub height: u32,

    /// Whether to generate the chart at all
    #[serde(default = "default_chart_enabled")]
    pub enabled: bool,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, or trace
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_input_path() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_FILENAME)
}

fn default_report_path() -> PathBuf {
    PathBuf::from(DEFAULT_REPORT_FILENAME)
}

fn default_report_title() -> String {
    DEFAULT_REPORT_TITLE.to_string()
}

fn default_chart_path() -> PathBuf {
    PathBuf::from(DEFAULT_CHART_FILENAME)
}

fn default_chart_width() -> u32 {
    CHART_WIDTH_PX
}

fn default_chart_height() -> u32 {
    CHART_HEIGHT_PX
}

fn default_chart_enabled() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path: default_report_path(),
            title: default_report_title(),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            path: default_chart_path(),
            width: default_chart_width(),
            height: default_chart_height(),
            enabled: default_chart_enabled(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Default config file location (`~/.config/training-report/config.toml`)
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("training-report").join("config.toml"))
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            Error::configuration(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration with defaults and an optional file layer
    ///
    /// CLI overrides are applied separately by the command layer, after
    /// loading.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        match config_file {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<()> {
        if self.processing.input_path.as_os_str().is_empty() {
            return Err(Error::configuration("Input path cannot be empty"));
        }

        if self.report.path.as_os_str().is_empty() {
            return Err(Error::configuration("Report path cannot be empty"));
        }

        if self.report.title.trim().is_empty() {
            return Err(Error::configuration("Report title cannot be empty"));
        }

        if self.chart.width == 0 || self.chart.height == 0 {
            return Err(Error::configuration(format!(
                "Chart dimensions must be positive, got {}x{}",
                self.chart.width, self.chart.height
            )));
        }

        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(Error::configuration(format!(
                "Invalid log level '{}': must be one of {}",
                self.logging.level,
                VALID_LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Create the parent directories of the output artifacts
    pub fn ensure_output_directories(&self) -> Result<()> {
        for path in [&self.report.path, &self.chart.path] {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        Error::configuration(format!(
                            "Failed to create output directory '{}': {}",
                            parent.display(),
                            e
                        ))
                    })?;
                }
            }
        }
        Ok(())
    }
}
