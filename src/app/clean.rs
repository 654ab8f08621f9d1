// LogTally - app/clean.rs
//
// One cleaner run: merge rules and switches from config and CLI, clean the
// input, write the cleaned copy, and build the console audit lines.

use crate::core::cleaner::{clean_content, CleanOutcome};
use crate::core::model::{CleanOptions, RangeRule};
use crate::core::rules::RangeRules;
use crate::platform::config::AppConfig;
use crate::platform::fs::{read_input, write_output};
use crate::util::error::Result;
use std::path::{Path, PathBuf};

/// Inputs of one cleaner run.
#[derive(Debug, Clone)]
pub struct CleanRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rules: RangeRules,
    pub options: CleanOptions,
}

/// Config rules first, then CLI rules; a CLI rule overrides a config rule
/// for the same datatype.
pub fn merge_rules(config: &AppConfig, cli_rules: Vec<RangeRule>) -> RangeRules {
    if !config.ranges.is_empty() {
        tracing::debug!(count = config.ranges.len(), "Using range rules from config");
    }
    let mut rules = config.ranges.clone();
    rules.extend(cli_rules);
    rules
}

/// Switch values: CLI, then config, then `false`.
pub fn resolve_options(
    remove_tags: Option<bool>,
    drop_non_numeric: Option<bool>,
    underscores: Option<bool>,
    config: &AppConfig,
) -> CleanOptions {
    CleanOptions {
        remove_tags: remove_tags.or(config.remove_tags).unwrap_or(false),
        drop_non_numeric: drop_non_numeric.or(config.drop_non_numeric).unwrap_or(false),
        underscores_left_of_separator: underscores.or(config.underscores).unwrap_or(false),
    }
}

/// Read and clean `request.input`. Nothing is written yet.
pub fn clean_file(request: &CleanRequest) -> Result<CleanOutcome> {
    let content = read_input(&request.input)?;
    tracing::debug!(
        input = %request.input.display(),
        rules = request.rules.len(),
        options = ?request.options,
        "Cleaning"
    );
    Ok(clean_content(&content, &request.rules, &request.options))
}

/// Write the kept lines, each terminated by a newline.
pub fn write_cleaned(path: &Path, outcome: &CleanOutcome) -> Result<()> {
    write_output(path, &outcome.output_text())
}

/// `[WARN]` lines in the order the conditions were found.
pub fn warning_lines(outcome: &CleanOutcome) -> Vec<String> {
    outcome
        .warnings
        .iter()
        .map(|warning| format!("[WARN] {warning}"))
        .collect()
}

/// `[INFO]` summary; the malformed count only appears when nonzero.
pub fn info_lines(outcome: &CleanOutcome, output: &Path) -> Vec<String> {
    let mut lines = vec![
        format!("[INFO] Wrote cleaned file: {}", output.display()),
        format!(
            "[INFO] Removed out-of-range lines: {}",
            outcome.stats.removed_out_of_range
        ),
        format!(
            "[INFO] Removed non-numeric/missing-data lines: {}",
            outcome.stats.removed_non_numeric
        ),
    ];
    if outcome.stats.kept_malformed > 0 {
        lines.push(format!(
            "[INFO] Kept malformed lines: {}",
            outcome.stats.kept_malformed
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(spec: &str) -> RangeRule {
        spec.parse().unwrap()
    }

    #[test]
    fn test_cli_rule_overrides_config_rule() {
        let config = AppConfig {
            ranges: [rule("ThinkTime:0:10"), rule("Eval:0:1")].into_iter().collect(),
            ..AppConfig::default()
        };
        let rules = merge_rules(&config, vec![rule("ThinkTime:0:20000")]);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.find("ThinkTime").map(|(_, r)| r.max), Some(20000.0));
        assert_eq!(rules.iter().next().map(|r| r.datatype.as_str()), Some("ThinkTime"));
    }

    #[test]
    fn test_merge_without_config_rules() {
        let rules = merge_rules(&AppConfig::default(), vec![]);
        assert!(rules.is_empty());
        let rules = merge_rules(&AppConfig::default(), vec![rule("Eval:0:1")]);
        assert_eq!(rules.len(), 1);
    }

    #[test]
    fn test_resolve_options_precedence() {
        let config = AppConfig {
            remove_tags: Some(true),
            drop_non_numeric: Some(true),
            ..AppConfig::default()
        };
        let options = resolve_options(None, Some(false), None, &config);
        assert!(options.remove_tags, "config value applies when CLI is unset");
        assert!(!options.drop_non_numeric, "CLI value wins over config");
        assert!(!options.underscores_left_of_separator, "unset everywhere is false");
    }

    #[test]
    fn test_summary_lines() {
        let outcome = clean_content(
            "P ThinkTime: 99\nnot parseable here\n",
            &[rule("ThinkTime:0:10"), rule("Nodes:0:1")].into_iter().collect(),
            &CleanOptions::default(),
        );
        assert_eq!(
            warning_lines(&outcome),
            vec![
                "[WARN] Line 2: could not parse, kept.",
                "[WARN] Datatype 'Nodes' not found in input; skipped.",
            ]
        );
        assert_eq!(
            info_lines(&outcome, Path::new("cleanedData.txt")),
            vec![
                "[INFO] Wrote cleaned file: cleanedData.txt",
                "[INFO] Removed out-of-range lines: 1",
                "[INFO] Removed non-numeric/missing-data lines: 0",
                "[INFO] Kept malformed lines: 1",
            ]
        );
    }

    #[test]
    fn test_info_lines_omit_zero_malformed() {
        let outcome = clean_content("P D: 1\n", &RangeRules::new(), &CleanOptions::default());
        let lines = info_lines(&outcome, Path::new("out.txt"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_clean_file_and_write() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("log.txt");
        let output = dir.path().join("cleanedData.txt");
        std::fs::write(&input, "[DEBUG] AI2 ThinkTime: 25000\n[DEBUG] AI2 ThinkTime: 100").unwrap();

        let request = CleanRequest {
            input,
            output: output.clone(),
            rules: [rule("ThinkTime:0:20000")].into_iter().collect(),
            options: CleanOptions {
                remove_tags: true,
                ..CleanOptions::default()
            },
        };
        let outcome = clean_file(&request).unwrap();
        write_cleaned(&request.output, &outcome).unwrap();

        assert_eq!(std::fs::read_to_string(output).unwrap(), "AI2 ThinkTime: 100\n");
    }
}
