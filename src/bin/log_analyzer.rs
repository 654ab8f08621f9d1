// LogTally - bin/log_analyzer.rs
//
// Entry point of the analyzer. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation
// 3. The analyze run, with fatal errors reported on stderr

use clap::Parser;
use logtally::app::analyze::{self, AnalyzeRequest, ReportFormat};
use logtally::app::startup::startup;
use std::path::PathBuf;
use std::process::ExitCode;

/// Compute per-player per-datatype statistics from a harness log.
#[derive(Parser, Debug)]
#[command(name = "log-analyzer", version, about)]
struct Cli {
    /// Path to the input log file.
    input_file: PathBuf,

    /// Write the report to this file instead of stdout.
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Report format.
    #[arg(long = "format", value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Explicit config.toml (defaults to the platform config directory).
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = startup(cli.config.as_deref(), cli.debug).and_then(|_config| {
        analyze::run(&AnalyzeRequest {
            input: cli.input_file,
            output: cli.output,
            format: cli.format,
        })
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Analyze failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
