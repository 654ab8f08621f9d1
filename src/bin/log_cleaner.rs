// LogTally - bin/log_cleaner.rs
//
// Entry point of the cleaner. Handles:
// 1. CLI argument parsing, including range and boolean validation
// 2. Config loading and logging initialisation
// 3. The clean run and its console audit summary

use clap::Parser;
use logtally::app::clean::{self, CleanRequest};
use logtally::app::startup::startup;
use logtally::core::model::RangeRule;
use logtally::core::rules::parse_bool_flag;
use logtally::util::constants;
use logtally::util::error::Result;
use std::path::PathBuf;
use std::process::ExitCode;

/// Clean a harness log by per-datatype min/max and optional text transforms.
///
/// The cleaned copy is always written to cleanedData.txt in the working
/// directory.
#[derive(Parser, Debug)]
#[command(name = "log-cleaner", version, about)]
struct Cli {
    /// Path to the input log file.
    input_file: PathBuf,

    /// Datatype:min:max (repeatable). Example: --range ThinkTime:0:20000
    #[arg(long = "range", value_name = "DATATYPE:MIN:MAX")]
    ranges: Vec<RangeRule>,

    /// Remove the [TAG] prefix (true/false). Default: false
    #[arg(long = "remove-tags", value_name = "BOOL", value_parser = parse_bool_flag)]
    remove_tags: Option<bool>,

    /// Remove all lines with non-numeric or missing data (true/false). Default: false
    #[arg(long = "drop-non-numeric", value_name = "BOOL", value_parser = parse_bool_flag)]
    drop_non_numeric: Option<bool>,

    /// Replace spaces with '_' left of the first ':' or ';' (true/false). Default: false
    #[arg(
        long = "underscores",
        alias = "underscores-left-of-sep",
        value_name = "BOOL",
        value_parser = parse_bool_flag
    )]
    underscores: Option<bool>,

    /// Explicit config.toml (defaults to the platform config directory).
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn run(cli: Cli) -> Result<()> {
    let config = startup(cli.config.as_deref(), cli.debug)?;

    let request = CleanRequest {
        rules: clean::merge_rules(&config, cli.ranges),
        options: clean::resolve_options(
            cli.remove_tags,
            cli.drop_non_numeric,
            cli.underscores,
            &config,
        ),
        input: cli.input_file,
        output: PathBuf::from(constants::CLEANED_OUTPUT_FILE),
    };

    let outcome = clean::clean_file(&request)?;
    for line in clean::warning_lines(&outcome) {
        println!("{line}");
    }

    clean::write_cleaned(&request.output, &outcome)?;
    for line in clean::info_lines(&outcome, &request.output) {
        println!("{line}");
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Clean failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
