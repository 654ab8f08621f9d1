// LogTally - core/grammar.rs
//
// The shared log-line grammar. Both the analyzer and the cleaner call
// `parse_line`, so they can never disagree about what a line means.
// Core layer: pure functions, no I/O.

use crate::core::model::{LineMatch, LogLine};
use regex::Regex;
use std::sync::OnceLock;

/// `[TAG] Player datatype: data` with the tag and data parts optional.
///
/// `datatype` is a greedy non-whitespace run, so `P D:5` yields datatype
/// `D:5` with no data. `data` is lazy so trailing whitespace is excluded.
const LINE_PATTERN: &str =
    r"^(?:\[(?P<tag>[^\]]+)\]\s+)?(?P<player>\S+)\s+(?P<datatype>\S+)(?:[;:]\s*(?P<data>.+?))?\s*$";

/// Literal leading `[TAG]` plus the whitespace after it.
const TAG_PREFIX_PATTERN: &str = r"^\[[^\]]+\]\s+";

fn line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(LINE_PATTERN).expect("line pattern is a valid regex"))
}

fn tag_prefix_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TAG_PREFIX_PATTERN).expect("tag pattern is a valid regex"))
}

/// Returns true for lines both tools skip entirely.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Match one newline-stripped line against the grammar.
///
/// The line is trimmed before matching. Blank lines are `Unmatched`; callers
/// check `is_blank` first because blank and malformed lines are handled
/// differently.
pub fn parse_line(line: &str) -> LineMatch {
    let Some(caps) = line_regex().captures(line.trim()) else {
        return LineMatch::Unmatched;
    };

    // player and datatype are mandatory groups, present whenever the regex matches.
    let (Some(player), Some(datatype)) = (caps.name("player"), caps.name("datatype")) else {
        return LineMatch::Unmatched;
    };

    LineMatch::Matched(LogLine {
        tag: caps.name("tag").map(|m| m.as_str().to_string()),
        player: player.as_str().to_string(),
        datatype: datatype.as_str().to_string(),
        data: caps.name("data").map(|m| m.as_str().trim().to_string()),
    })
}

/// Parse `data` as a base-10 float literal.
///
/// Non-finite values (`nan`, `inf`) count as non-numeric so that every
/// sample can be ordered and summed.
pub fn parse_numeric(data: &str) -> Option<f64> {
    data.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Remove a literal leading `[TAG] ` prefix from the raw line text.
///
/// Operates on the original text, not on the parsed tag: a line with
/// leading whitespace before the bracket keeps its prefix.
pub fn strip_tag_prefix(line: &str) -> String {
    tag_prefix_regex().replace(line, "").into_owned()
}

/// Replace every space left of the first `:` or `;` with `_`.
///
/// With no separator, every space in the line is replaced. The separator
/// and everything right of it are untouched.
pub fn underscores_left_of_separator(line: &str) -> String {
    match line.find([':', ';']) {
        Some(idx) => {
            let (left, right) = line.split_at(idx);
            format!("{}{right}", left.replace(' ', "_"))
        }
        None => line.replace(' ', "_"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(line: &str) -> LogLine {
        match parse_line(line) {
            LineMatch::Matched(parsed) => parsed,
            LineMatch::Unmatched => panic!("expected {line:?} to match"),
        }
    }

    #[test]
    fn test_tagged_line_with_colon() {
        let parsed = matched("[T] P D: 5");
        assert_eq!(parsed.tag.as_deref(), Some("T"));
        assert_eq!(parsed.player, "P");
        assert_eq!(parsed.datatype, "D");
        assert_eq!(parsed.data.as_deref(), Some("5"));
    }

    #[test]
    fn test_untagged_separators_and_missing_data() {
        for (line, data) in [("P D: 5", Some("5")), ("P D; 5", Some("5")), ("P D", None)] {
            let parsed = matched(line);
            assert_eq!(parsed.tag, None, "{line}");
            assert_eq!(parsed.player, "P", "{line}");
            assert_eq!(parsed.datatype, "D", "{line}");
            assert_eq!(parsed.data.as_deref(), data, "{line}");
        }
    }

    #[test]
    fn test_datatype_is_greedy_without_space_after_separator() {
        let parsed = matched("P D:5");
        assert_eq!(parsed.datatype, "D:5");
        assert_eq!(parsed.data, None);
    }

    #[test]
    fn test_second_separator_kept_verbatim_in_data() {
        let parsed = matched("[INFO]  P1 EvalScore; 42 extra: x   ");
        assert_eq!(parsed.tag.as_deref(), Some("INFO"));
        assert_eq!(parsed.datatype, "EvalScore");
        assert_eq!(parsed.data.as_deref(), Some("42 extra: x"));
    }

    #[test]
    fn test_multi_word_datatype_is_unmatched() {
        assert_eq!(parse_line("AI1 Move Choice: 42"), LineMatch::Unmatched);
        assert_eq!(parse_line("lonely"), LineMatch::Unmatched);
        assert_eq!(parse_line("   "), LineMatch::Unmatched);
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let parsed = matched("   BOT_A Nodes: 15230  \t");
        assert_eq!(parsed.player, "BOT_A");
        assert_eq!(parsed.data.as_deref(), Some("15230"));
    }

    #[test]
    fn test_parse_numeric() {
        assert_eq!(parse_numeric(" 42 "), Some(42.0));
        assert_eq!(parse_numeric("-1.5e3"), Some(-1500.0));
        assert_eq!(parse_numeric("+7"), Some(7.0));
        assert_eq!(parse_numeric("abc"), None);
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("nan"), None);
        assert_eq!(parse_numeric("inf"), None);
        // Digit separators are not part of the number syntax.
        assert_eq!(parse_numeric("1_000"), None);
    }

    #[test]
    fn test_strip_tag_prefix() {
        assert_eq!(strip_tag_prefix("[DEBUG] AI2 ThinkTime: 10000"), "AI2 ThinkTime: 10000");
        assert_eq!(strip_tag_prefix("[INFO]  P1 Eval; 4"), "P1 Eval; 4");
        assert_eq!(strip_tag_prefix("AI1 NoMoves"), "AI1 NoMoves");
        assert_eq!(strip_tag_prefix(" [DEBUG] AI1 X"), " [DEBUG] AI1 X");
    }

    #[test]
    fn test_underscores_left_of_separator() {
        assert_eq!(
            underscores_left_of_separator("AI1 Move Choice: 42"),
            "AI1_Move_Choice: 42"
        );
        assert_eq!(
            underscores_left_of_separator("[DEBUG] AI1 Move; a b: c"),
            "[DEBUG]_AI1_Move; a b: c"
        );
        assert_eq!(underscores_left_of_separator("AI1 No Moves"), "AI1_No_Moves");
    }
}
