// LogTally - core/cleaner.rs
//
// Range filtering and text normalisation of a raw log.
// Every line is either dropped, kept verbatim, or kept transformed; the
// outcome carries counters and warnings instead of printing them.
// Core layer: pure logic, the app decides where output goes.

use crate::core::grammar::{
    is_blank, parse_line, strip_tag_prefix, underscores_left_of_separator,
};
use crate::core::model::{CleanOptions, CleanRunStats, LineMatch};
use crate::core::rules::RangeRules;
use std::fmt;

/// Non-fatal condition observed while cleaning.
#[derive(Debug, Clone, PartialEq)]
pub enum CleanWarning {
    /// The line did not match the grammar and was kept.
    Unparsable { line_number: usize },

    /// The datatype has a range rule but the data cannot be compared.
    RangeWithoutNumericData {
        line_number: usize,
        datatype: String,
        min: f64,
        max: f64,
    },

    /// A configured range rule never matched any line.
    DatatypeAbsent { datatype: String },
}

impl fmt::Display for CleanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unparsable { line_number } => {
                write!(f, "Line {line_number}: could not parse, kept.")
            }
            Self::RangeWithoutNumericData {
                line_number,
                datatype,
                min,
                max,
            } => write!(
                f,
                "Line {line_number}: datatype '{datatype}' has range \
                 [{min:?}, {max:?}] but data is non-numeric/missing; kept."
            ),
            Self::DatatypeAbsent { datatype } => {
                write!(f, "Datatype '{datatype}' not found in input; skipped.")
            }
        }
    }
}

/// Result of one cleaner pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanOutcome {
    /// Surviving lines in input order, already transformed.
    pub kept_lines: Vec<String>,
    pub stats: CleanRunStats,
    /// Line warnings in input order, followed by absent-datatype warnings.
    pub warnings: Vec<CleanWarning>,
}

impl CleanOutcome {
    /// Kept lines joined with and terminated by `\n`.
    pub fn output_text(&self) -> String {
        let mut text = String::with_capacity(self.kept_lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.kept_lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}

/// Apply the enabled text transforms, tag removal first.
fn transform(line: &str, options: &CleanOptions) -> String {
    let mut out = if options.remove_tags {
        strip_tag_prefix(line)
    } else {
        line.to_string()
    };
    if options.underscores_left_of_separator {
        out = underscores_left_of_separator(&out);
    }
    out
}

/// Clean `content` line by line.
///
/// Policy per line, in order: blank lines pass through; unparsable lines are
/// kept with a warning; with `drop_non_numeric` any line without numeric data
/// is dropped; a numeric value outside its datatype's range drops the line;
/// survivors are transformed and kept.
pub fn clean_content(content: &str, rules: &RangeRules, options: &CleanOptions) -> CleanOutcome {
    let mut outcome = CleanOutcome::default();
    let mut seen = vec![false; rules.len()];

    for (line_idx, line) in content.lines().enumerate() {
        let line_number = line_idx + 1;

        if is_blank(line) {
            outcome.kept_lines.push(line.to_string());
            continue;
        }

        let parsed = match parse_line(line) {
            LineMatch::Matched(parsed) => parsed,
            LineMatch::Unmatched => {
                tracing::debug!(line = line_number, "Unparsable line kept");
                outcome.kept_lines.push(transform(line, options));
                outcome.stats.kept_malformed += 1;
                outcome.warnings.push(CleanWarning::Unparsable { line_number });
                continue;
            }
        };

        let value = parsed.numeric_value();

        if options.drop_non_numeric && value.is_none() {
            tracing::trace!(line = line_number, datatype = %parsed.datatype, "Dropped non-numeric line");
            outcome.stats.removed_non_numeric += 1;
            continue;
        }

        if let Some((idx, rule)) = rules.find(&parsed.datatype) {
            seen[idx] = true;

            match value {
                Some(v) if !rule.contains(v) => {
                    tracing::trace!(
                        line = line_number,
                        datatype = %parsed.datatype,
                        value = v,
                        "Dropped out-of-range line"
                    );
                    outcome.stats.removed_out_of_range += 1;
                    continue;
                }
                Some(_) => {}
                None => outcome.warnings.push(CleanWarning::RangeWithoutNumericData {
                    line_number,
                    datatype: parsed.datatype.clone(),
                    min: rule.min,
                    max: rule.max,
                }),
            }
        }

        outcome.kept_lines.push(transform(line, options));
    }

    for (rule, was_seen) in rules.iter().zip(&seen) {
        if !was_seen {
            outcome.warnings.push(CleanWarning::DatatypeAbsent {
                datatype: rule.datatype.clone(),
            });
        }
    }

    tracing::debug!(
        kept = outcome.kept_lines.len(),
        out_of_range = outcome.stats.removed_out_of_range,
        non_numeric = outcome.stats.removed_non_numeric,
        malformed = outcome.stats.kept_malformed,
        "Clean pass complete"
    );

    outcome
}
