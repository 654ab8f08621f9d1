// LogTally - core/rules.rs
//
// Range rule parsing (`Datatype:min:max`) and boolean switch parsing for
// the cleaner. Shared by the CLI and the config loader so both reject the
// same inputs with the same messages.

use crate::core::model::RangeRule;
use crate::util::constants::{FALSE_SPELLINGS, TRUE_SPELLINGS};
use crate::util::error::RangeSpecError;
use std::str::FromStr;

impl FromStr for RangeRule {
    type Err = RangeSpecError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = spec.split(':').collect();
        let [datatype, min, max] = parts.as_slice() else {
            return Err(RangeSpecError::WrongShape {
                spec: spec.to_string(),
            });
        };

        let datatype = datatype.trim();
        if datatype.is_empty() {
            return Err(RangeSpecError::EmptyDatatype {
                spec: spec.to_string(),
            });
        }

        let (Ok(min), Ok(max)) = (min.trim().parse::<f64>(), max.trim().parse::<f64>()) else {
            return Err(RangeSpecError::NonNumericBound {
                spec: spec.to_string(),
            });
        };
        // NaN bounds would make every comparison false.
        if min.is_nan() || max.is_nan() {
            return Err(RangeSpecError::NonNumericBound {
                spec: spec.to_string(),
            });
        }
        if min > max {
            return Err(RangeSpecError::MinAboveMax {
                spec: spec.to_string(),
            });
        }

        Ok(Self {
            datatype: datatype.to_string(),
            min,
            max,
        })
    }
}

/// Ordered set of range rules, at most one per datatype.
///
/// A rule for an already-present datatype replaces its bounds but keeps the
/// original position, which fixes the order of "datatype absent" warnings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RangeRules {
    rules: Vec<RangeRule>,
}

impl RangeRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule, replacing the bounds of an existing rule for the datatype.
    pub fn insert(&mut self, rule: RangeRule) {
        match self.rules.iter_mut().find(|r| r.datatype == rule.datatype) {
            Some(existing) => {
                tracing::debug!(datatype = %rule.datatype, "Range rule overridden");
                *existing = rule;
            }
            None => self.rules.push(rule),
        }
    }

    /// Rule for `datatype` together with its position, used to track which
    /// rules fired during a pass.
    pub fn find(&self, datatype: &str) -> Option<(usize, &RangeRule)> {
        self.rules
            .iter()
            .enumerate()
            .find(|(_, r)| r.datatype == datatype)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RangeRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<RangeRule> for RangeRules {
    fn from_iter<T: IntoIterator<Item = RangeRule>>(iter: T) -> Self {
        let mut rules = Self::new();
        for rule in iter {
            rules.insert(rule);
        }
        rules
    }
}

impl Extend<RangeRule> for RangeRules {
    fn extend<T: IntoIterator<Item = RangeRule>>(&mut self, iter: T) {
        for rule in iter {
            self.insert(rule);
        }
    }
}

/// Parse a boolean switch value: true/false, yes/no, y/n, 1/0.
///
/// Case-insensitive; surrounding whitespace is ignored.
pub fn parse_bool_flag(value: &str) -> Result<bool, String> {
    let normalised = value.trim().to_lowercase();
    if TRUE_SPELLINGS.contains(&normalised.as_str()) {
        Ok(true)
    } else if FALSE_SPELLINGS.contains(&normalised.as_str()) {
        Ok(false)
    } else {
        Err(format!(
            "'{value}' is not a boolean; expected true/false (or yes/no, 1/0)"
        ))
    }
}
