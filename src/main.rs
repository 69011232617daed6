use clap::Parser;
use std::process;
use training_report::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Training Report - Intern Progress Report Generator");
    println!("==================================================");
    println!();
    println!("Turn intern training-progress CSV exports into Markdown reports with");
    println!("completion statistics, top-performer rankings, and a score-trend chart.");
    println!();
    println!("USAGE:");
    println!("    training-report <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    generate    Generate the Markdown report and score-trend chart (main command)");
    println!("    validate    Check a CSV export and report row-level problems");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Generate a report from ./training_data.csv:");
    println!("    training-report generate");
    println!();
    println!("    # Generate with custom paths and no chart:");
    println!(
        "    training-report generate --input data/interns.csv --output reports/progress.md \\"
    );
    println!("                             --no-chart");
    println!();
    println!("    # Check an export for bad rows:");
    println!("    training-report validate --input data/interns.csv");
    println!();
    println!("    # Get help for specific commands:");
    println!("    training-report generate --help");
    println!("    training-report validate --help");
    println!();
    println!("For detailed help on any command, use:");
    println!("    training-report <COMMAND> --help");
}
