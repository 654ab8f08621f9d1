// LogTally - tests/e2e_pipeline.rs
//
// End-to-end tests for the analyze and clean pipelines.
//
// These tests read the real fixture from disk and run it through the same
// request/run functions the binaries use; no mocks, no stubs.

use logtally::app::analyze::{self, AnalyzeRequest, ReportFormat};
use logtally::app::clean::{self, CleanRequest};
use logtally::core::model::{CleanOptions, RangeRule};
use logtally::core::report::report;
use logtally::core::rules::RangeRules;
use logtally::core::stats::process;
use logtally::platform::fs::read_input;
use std::path::PathBuf;

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to an on-disk fixture file.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn rules(specs: &[&str]) -> RangeRules {
    specs
        .iter()
        .map(|s| s.parse::<RangeRule>().unwrap())
        .collect()
}

// =============================================================================
// Analyzer E2E
// =============================================================================

/// The fixture report lists every key once, case-insensitively ordered.
#[test]
fn e2e_analyzer_report_for_fixture() {
    let content = read_input(&fixture("harness_sample.log")).unwrap();
    let lines = report(&process(content.lines()));

    let expected = "\
AI1 NoMoves Count: 1

AI1 ThinkTime Count: 2
AI1 ThinkTime Mean: 20000
AI1 ThinkTime Median: 20000
AI1 ThinkTime Min: 15000
AI1 ThinkTime Max: 25000
AI1 ThinkTime Mode: 15000
AI1 ThinkTime StandardDeviation: 5000

ai1 ThinkTime Count: 1
ai1 ThinkTime Mean: 3.14159
ai1 ThinkTime Median: 3.14159
ai1 ThinkTime Min: 3.14159
ai1 ThinkTime Max: 3.14159
ai1 ThinkTime Mode: 3.14159
ai1 ThinkTime StandardDeviation: 0

AI2 ThinkTime Count: 4
AI2 ThinkTime Mean: 10666.7
AI2 ThinkTime Median: 10000
AI2 ThinkTime Min: 10000
AI2 ThinkTime Max: 12000
AI2 ThinkTime Mode: 10000
AI2 ThinkTime StandardDeviation: 942.809

BOT_A Nodes Count: 1
BOT_A Nodes Mean: 15230
BOT_A Nodes Median: 15230
BOT_A Nodes Min: 15230
BOT_A Nodes Max: 15230
BOT_A Nodes Mode: 15230
BOT_A Nodes StandardDeviation: 0

P1 EvalScore Count: 2
P1 EvalScore Mean: 17
P1 EvalScore Median: 17
P1 EvalScore Min: -8
P1 EvalScore Max: 42
P1 EvalScore Mode: -8
P1 EvalScore StandardDeviation: 25";

    assert_eq!(lines.join("\n"), expected);
}

/// Report output does not depend on input line order.
#[test]
fn e2e_analyzer_report_is_order_independent() {
    let content = read_input(&fixture("harness_sample.log")).unwrap();
    let mut reversed: Vec<&str> = content.lines().collect();
    reversed.reverse();

    assert_eq!(
        report(&process(content.lines())),
        report(&process(reversed.iter().copied()))
    );
}

#[test]
fn e2e_analyzer_json_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("report.json");

    analyze::run(&AnalyzeRequest {
        input: fixture("harness_sample.log"),
        output: Some(output.clone()),
        format: ReportFormat::Json,
    })
    .unwrap();

    let text = std::fs::read_to_string(output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let records = value.as_array().expect("top-level array");
    assert_eq!(records.len(), 6);
    assert_eq!(records[0]["datatype"], "NoMoves");
    assert!(records[0]["summary"].is_null());
    assert_eq!(records[3]["count"], 4);
}

// =============================================================================
// Cleaner E2E
// =============================================================================

fn clean_fixture(rules: RangeRules, options: CleanOptions) -> (String, Vec<String>) {
    let dir = tempfile::tempdir().unwrap();
    let request = CleanRequest {
        input: fixture("harness_sample.log"),
        output: dir.path().join("cleanedData.txt"),
        rules,
        options,
    };
    let outcome = clean::clean_file(&request).unwrap();
    clean::write_cleaned(&request.output, &outcome).unwrap();

    let mut console = clean::warning_lines(&outcome);
    console.extend(clean::info_lines(&outcome, &request.output));
    (std::fs::read_to_string(&request.output).unwrap(), console)
}

/// No flags, no ranges: byte-for-byte copy of the input.
#[test]
fn e2e_cleaner_round_trip() {
    let original = std::fs::read_to_string(fixture("harness_sample.log")).unwrap();
    let (cleaned, console) = clean_fixture(RangeRules::new(), CleanOptions::default());
    assert_eq!(cleaned, original);
    assert_eq!(console[0], "[WARN] Line 7: could not parse, kept.");
    assert_eq!(console.last().unwrap(), "[INFO] Kept malformed lines: 1");
}

#[test]
fn e2e_cleaner_all_switches() {
    let (cleaned, console) = clean_fixture(
        rules(&["ThinkTime:0:20000", "Missing:0:1"]),
        CleanOptions {
            remove_tags: true,
            drop_non_numeric: true,
            underscores_left_of_separator: true,
        },
    );

    let expected = "\
AI2_ThinkTime: 10000
P1_EvalScore; 42

BOT_A_Nodes: 15230
AI1_Move_Choice: 42
AI1_ThinkTime: 15000
ai1_ThinkTime: 3.14159265
AI2_ThinkTime: 12000
AI2_ThinkTime: 10000
P1_EvalScore: -8
";
    assert_eq!(cleaned, expected);

    assert_eq!(console.len(), 6, "{console:?}");
    assert_eq!(console[0], "[WARN] Line 7: could not parse, kept.");
    assert_eq!(
        console[1],
        "[WARN] Datatype 'Missing' not found in input; skipped."
    );
    assert!(console[2].starts_with("[INFO] Wrote cleaned file: "));
    assert!(console[2].ends_with("cleanedData.txt"));
    assert_eq!(
        &console[3..],
        [
            "[INFO] Removed out-of-range lines: 1",
            "[INFO] Removed non-numeric/missing-data lines: 2",
            "[INFO] Kept malformed lines: 1",
        ]
    );
}

/// Without drop-non-numeric, ranged datatypes with unusable data are kept
/// and reported.
#[test]
fn e2e_cleaner_range_keeps_non_numeric_with_warning() {
    let (cleaned, console) = clean_fixture(rules(&["ThinkTime:0:20000"]), CleanOptions::default());
    assert!(cleaned.contains("AI2 ThinkTime; timeout\n"));
    assert!(!cleaned.contains("25000"));
    assert!(console.contains(
        &"[WARN] Line 12: datatype 'ThinkTime' has range [0.0, 20000.0] \
          but data is non-numeric/missing; kept."
            .to_string()
    ));
}
