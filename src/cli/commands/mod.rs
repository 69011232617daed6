//! Command implementations for the training report CLI
//!
//! This module contains the main command execution logic, run summaries,
//! and error handling for the CLI interface. Each command is implemented in
//! its own module for better organization and maintainability.

pub mod generate;
pub mod shared;
pub mod validate;

// Re-export the run summary type shared by all commands
pub use shared::RunStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the training report tool
///
/// This function dispatches to the appropriate subcommand handler based on CLI args.
/// Each command is implemented in its own module:
/// - `generate`: Full report pipeline with Markdown and chart output
/// - `validate`: Input diagnostics without artifact output
pub fn run(args: Args) -> Result<RunStats> {
    match args.get_command() {
        Commands::Generate(generate_args) => generate::run_generate(generate_args),
        Commands::Validate(validate_args) => validate::run_validate(validate_args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_stats_re_export() {
        // Verify that RunStats is properly re-exported
        let stats = RunStats::default();
        assert_eq!(stats.records_loaded, 0);
        assert_eq!(stats.total_artifact_size(), 0);
    }
}
