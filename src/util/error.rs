// LogTally - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Per-line parse failures are not errors: they are routed through
// `LineMatch::Unmatched` and never reach this module.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all LogTally operations.
#[derive(Debug)]
pub enum LogTallyError {
    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// JSON report serialisation failed.
    Export(serde_json::Error),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for LogTallyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for LogTallyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Range specification errors
// ---------------------------------------------------------------------------

/// Errors produced while parsing a `--range Datatype:min:max` value.
///
/// Every variant keeps the original spec text so the message points at
/// exactly what the user typed.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeSpecError {
    /// Not exactly three colon-separated parts.
    WrongShape { spec: String },

    /// The datatype part is empty after trimming.
    EmptyDatatype { spec: String },

    /// Either bound is not a number.
    NonNumericBound { spec: String },

    /// The lower bound exceeds the upper bound.
    MinAboveMax { spec: String },
}

impl fmt::Display for RangeSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongShape { spec } => write!(
                f,
                "Invalid --range '{spec}'. Expected Datatype:min:max \
                 (example: ThinkTime:0:20000)"
            ),
            Self::EmptyDatatype { spec } => {
                write!(f, "Invalid --range '{spec}': datatype cannot be empty.")
            }
            Self::NonNumericBound { spec } => {
                write!(f, "Invalid --range '{spec}': min/max must be numeric.")
            }
            Self::MinAboveMax { spec } => write!(f, "Invalid --range '{spec}': min > max."),
        }
    }
}

impl std::error::Error for RangeSpecError {}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A `[cleaner] ranges` entry is not a valid range spec.
    InvalidRange {
        path: PathBuf,
        source: RangeSpecError,
    },

    /// A config value is not one of the accepted values.
    UnrecognisedValue {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::InvalidRange { path, source } => {
                write!(f, "Config '{}' [cleaner] ranges: {source}", path.display())
            }
            Self::UnrecognisedValue {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is not recognised. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::InvalidRange { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::UnrecognisedValue { .. } => None,
        }
    }
}

impl From<ConfigError> for LogTallyError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<serde_json::Error> for LogTallyError {
    fn from(e: serde_json::Error) -> Self {
        Self::Export(e)
    }
}

/// Convenience type alias for LogTally results.
pub type Result<T> = std::result::Result<T, LogTallyError>;
