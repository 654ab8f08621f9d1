// LogTally - core/stats.rs
//
// Aggregation of parsed lines into per-(player, datatype) tallies and the
// descriptive statistics computed over them.
// Core layer: pure logic, no I/O.

use crate::core::grammar::{is_blank, parse_line};
use crate::core::model::{AggregateRecord, LineMatch, StatKey, Summary};
use std::collections::HashMap;

/// Counts and numeric samples for every key seen in one input.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    pub records: HashMap<StatKey, AggregateRecord>,

    /// Non-blank lines that did not match the grammar (discarded).
    pub malformed_lines: u64,
}

impl Tally {
    /// Keys in report order.
    pub fn sorted_keys(&self) -> Vec<&StatKey> {
        let mut keys: Vec<&StatKey> = self.records.keys().collect();
        keys.sort_by(|a, b| a.report_order(b));
        keys
    }
}

/// Tally every parsed line; malformed and blank lines are skipped.
pub fn process<'a, I>(lines: I) -> Tally
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tally = Tally::default();

    for (line_idx, line) in lines.into_iter().enumerate() {
        if is_blank(line) {
            continue;
        }

        let LineMatch::Matched(parsed) = parse_line(line) else {
            tracing::trace!(line = line_idx + 1, "Skipping malformed line");
            tally.malformed_lines += 1;
            continue;
        };

        let record = tally.records.entry(parsed.key()).or_default();
        record.count += 1;
        if let Some(value) = parsed.numeric_value() {
            record.samples.push(value);
        }
    }

    tracing::debug!(
        keys = tally.records.len(),
        malformed = tally.malformed_lines,
        "Tally complete"
    );

    tally
}

impl Summary {
    /// Compute statistics over `samples`; `None` when there are none.
    ///
    /// Standard deviation is the population form and is exactly 0 when all
    /// samples are equal. Sums are compensated so large values of opposite
    /// sign do not swallow small ones. Mode ties resolve to the numerically
    /// smallest value.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        let (min, max) = (sorted[0], sorted[n - 1]);
        // Constant input: avoid a mean that is one ulp off the value.
        let mean = if min == max {
            min
        } else {
            compensated_sum(samples.iter().copied()) / n as f64
        };

        let median = if n % 2 == 1 {
            sorted[n / 2]
        } else {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        };

        let standard_deviation = if min == max {
            0.0
        } else {
            let squares = compensated_sum(samples.iter().map(|x| (x - mean).powi(2)));
            (squares / n as f64).sqrt()
        };

        Some(Self {
            mean,
            median,
            min,
            max,
            mode: smallest_mode(&sorted),
            standard_deviation,
        })
    }
}

/// Neumaier summation: the running compensation keeps the low-order bits
/// that plain addition drops.
fn compensated_sum<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    let mut sum = 0.0;
    let mut compensation = 0.0;
    for value in values {
        let t = sum + value;
        if f64::abs(sum) >= f64::abs(value) {
            compensation += (sum - t) + value;
        } else {
            compensation += (value - t) + sum;
        }
        sum = t;
    }
    sum + compensation
}

/// Most frequent value of an ascending, non-empty slice.
///
/// Runs are visited in ascending order and only a strictly longer run
/// replaces the current best, so ties keep the smallest value.
fn smallest_mode(sorted: &[f64]) -> f64 {
    let mut best = sorted[0];
    let mut best_len = 0;
    let mut start = 0;

    while start < sorted.len() {
        let value = sorted[start];
        let len = sorted[start..].iter().take_while(|v| **v == value).count();
        if len > best_len {
            best = value;
            best_len = len;
        }
        start += len;
    }

    best
}
