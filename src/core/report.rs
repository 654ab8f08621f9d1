// LogTally - core/report.rs
//
// Deterministic text report over a `Tally`.
// Core layer: returns lines, the binary decides where they go.

use crate::core::model::{StatKey, Summary};
use crate::core::stats::Tally;
use crate::util::constants::{MIN_FIXED_EXPONENT, SIGNIFICANT_DIGITS};

/// Render a statistic.
///
/// Integral values print without a decimal point; everything else uses
/// `%g`-style output with six significant digits.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        if value == 0.0 {
            // covers -0.0
            return "0".to_string();
        }
        return format!("{value:.0}");
    }
    format_general(value, SIGNIFICANT_DIGITS)
}

/// C `%.{precision}g` formatting: trailing zeros removed, exponent notation
/// when the decimal exponent is below -4 or at least `precision`.
fn format_general(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // Round to the requested significant digits first: the exponent of the
    // rounded value decides the notation.
    let scientific = format!("{:.*e}", precision.saturating_sub(1), value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < MIN_FIXED_EXPONENT || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

/// Drop trailing zeros after a decimal point, then the point itself.
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Statistic labels in report order.
fn summary_fields(summary: &Summary) -> [(&'static str, f64); 6] {
    [
        ("Mean", summary.mean),
        ("Median", summary.median),
        ("Min", summary.min),
        ("Max", summary.max),
        ("Mode", summary.mode),
        ("StandardDeviation", summary.standard_deviation),
    ]
}

/// Lines for one key: `Count` always, statistics when samples exist.
fn key_block(key: &StatKey, count: u64, summary: Option<&Summary>) -> Vec<String> {
    let prefix = format!("{} {}", key.player, key.datatype);
    let mut lines = vec![format!("{prefix} Count: {count}")];
    if let Some(summary) = summary {
        lines.extend(
            summary_fields(summary)
                .into_iter()
                .map(|(label, value)| format!("{prefix} {label}: {}", format_number(value))),
        );
    }
    lines
}

/// Build the full report.
///
/// Keys are ordered case-insensitively with original case as tiebreak.
/// Blocks are separated by one empty line; there is no trailing empty line.
pub fn report(tally: &Tally) -> Vec<String> {
    let mut lines = Vec::new();

    for key in tally.sorted_keys() {
        let record = &tally.records[key];
        if !lines.is_empty() {
            lines.push(String::new());
        }
        let summary = Summary::from_samples(&record.samples);
        lines.extend(key_block(key, record.count, summary.as_ref()));
    }

    lines
}
