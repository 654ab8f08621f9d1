// LogTally - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies.
//
// These types are the shared vocabulary of the analyzer and the cleaner.

use serde::Serialize;

// =============================================================================
// Log line (output of the grammar)
// =============================================================================

/// One harness log record: `[TAG] Player datatype: data`.
///
/// `player` and `datatype` never contain whitespace. `data` is the trimmed
/// remainder after the first `:` or `;` following the datatype token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    /// Bracketed severity/category prefix, without the brackets.
    pub tag: Option<String>,

    /// First whitespace-delimited token after the optional tag.
    pub player: String,

    /// Second token, naming the metric (e.g. `ThinkTime`).
    pub datatype: String,

    /// Payload after the separator, if any.
    pub data: Option<String>,
}

impl LogLine {
    /// Numeric value of `data`, when it parses as a finite number.
    pub fn numeric_value(&self) -> Option<f64> {
        self.data.as_deref().and_then(crate::core::grammar::parse_numeric)
    }

    /// Key under which statistics for this line are aggregated.
    pub fn key(&self) -> StatKey {
        StatKey {
            player: self.player.clone(),
            datatype: self.datatype.clone(),
        }
    }
}

/// Result of matching a single line against the grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineMatch {
    Matched(LogLine),
    Unmatched,
}

// =============================================================================
// Aggregation
// =============================================================================

/// `(player, datatype)` pair, compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StatKey {
    pub player: String,
    pub datatype: String,
}

impl StatKey {
    pub fn new(player: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            datatype: datatype.into(),
        }
    }

    /// Case-insensitive primary order with original case as tiebreak.
    ///
    /// Two keys differing only in case still compare unequal, so report
    /// ordering never depends on input order.
    pub fn report_order(&self, other: &Self) -> std::cmp::Ordering {
        (
            self.player.to_lowercase(),
            &self.player,
            self.datatype.to_lowercase(),
            &self.datatype,
        )
            .cmp(&(
                other.player.to_lowercase(),
                &other.player,
                other.datatype.to_lowercase(),
                &other.datatype,
            ))
    }
}

/// Running tally for one `StatKey`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateRecord {
    /// Number of parsed lines with this key (numeric or not).
    pub count: u64,

    /// Numeric values in input order.
    pub samples: Vec<f64>,
}

/// Descriptive statistics over the numeric samples of one key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub mode: f64,
    pub standard_deviation: f64,
}

// =============================================================================
// Cleaning
// =============================================================================

/// Inclusive numeric bound applied to one datatype during cleaning.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeRule {
    pub datatype: String,
    pub min: f64,
    pub max: f64,
}

impl RangeRule {
    /// True when `value` lies within `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Independent text/filter switches for the cleaner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanOptions {
    /// Strip a leading `[TAG] ` prefix from kept lines.
    pub remove_tags: bool,

    /// Drop every parsed line whose data is missing or non-numeric.
    pub drop_non_numeric: bool,

    /// Replace spaces left of the first `:`/`;` with underscores.
    pub underscores_left_of_separator: bool,
}

/// Counters for one cleaner invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanRunStats {
    pub removed_out_of_range: usize,
    pub removed_non_numeric: usize,
    pub kept_malformed: usize,
}
