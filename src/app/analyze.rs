// LogTally - app/analyze.rs
//
// One analyzer run: read the input, tally it, render the report, and send
// it to a file or stdout.

use crate::core::export::export_json;
use crate::core::report::report;
use crate::core::stats::{process, Tally};
use crate::platform::fs::{read_input, write_output};
use crate::util::error::{LogTallyError, Result};
use std::io::Write;
use std::path::PathBuf;

/// Report rendering selected with `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// `Player datatype Statistic: value` lines.
    #[default]
    Text,
    /// Pretty-printed JSON array.
    Json,
}

/// Inputs of one analyzer run.
#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    pub input: PathBuf,
    /// `None` prints to stdout.
    pub output: Option<PathBuf>,
    pub format: ReportFormat,
}

/// Render a tally without a trailing newline.
pub fn render(tally: &Tally, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(report(tally).join("\n")),
        ReportFormat::Json => {
            let mut buf = Vec::new();
            export_json(tally, &mut buf)?;
            Ok(String::from_utf8_lossy(&buf).into_owned())
        }
    }
}

/// Analyze `request.input` and deliver the report.
pub fn run(request: &AnalyzeRequest) -> Result<()> {
    let content = read_input(&request.input)?;
    let tally = process(content.lines());
    let mut text = render(&tally, request.format)?;
    text.push('\n');

    match &request.output {
        Some(path) => {
            write_output(path, &text)?;
            tracing::info!(path = %path.display(), keys = tally.records.len(), "Report written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| LogTallyError::Io {
                    path: PathBuf::from("<stdout>"),
                    operation: "write",
                    source: e,
                })?;
        }
    }

    Ok(())
}
