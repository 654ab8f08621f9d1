// LogTally - util/constants.rs
//
// Single source of truth for named constants and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogTally";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "logtally";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Files
// =============================================================================

/// Name of the optional configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Fixed output file written by the cleaner, relative to the working directory.
pub const CLEANED_OUTPUT_FILE: &str = "cleanedData.txt";

// =============================================================================
// Logging
// =============================================================================

/// Default tracing filter when neither RUST_LOG, --debug, nor config set one.
///
/// Kept at `warn` so diagnostics on stderr stay quiet next to reports on stdout.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Level names accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Report formatting
// =============================================================================

/// Significant digits used when rendering non-integral statistics.
pub const SIGNIFICANT_DIGITS: usize = 6;

/// Exponent at which `%g`-style rendering switches to fixed notation.
pub const MIN_FIXED_EXPONENT: i32 = -4;

// =============================================================================
// Cleaner switches
// =============================================================================

/// Spellings accepted as `true` for boolean switches (compared lowercased).
pub const TRUE_SPELLINGS: &[&str] = &["true", "1", "yes", "y"];

/// Spellings accepted as `false` for boolean switches (compared lowercased).
pub const FALSE_SPELLINGS: &[&str] = &["false", "0", "no", "n"];
