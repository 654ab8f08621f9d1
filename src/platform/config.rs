// LogTally - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::model::RangeRule;
use crate::core::rules::RangeRules;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for LogTally configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/logtally/ or %APPDATA%\logtally\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Location of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[logging]` section.
    pub logging: LoggingSection,
    /// `[cleaner]` section.
    pub cleaner: CleanerSection,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// `[cleaner]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct CleanerSection {
    /// Default `Datatype:min:max` rules.
    pub ranges: Option<Vec<String>>,
    pub remove_tags: Option<bool>,
    pub drop_non_numeric: Option<bool>,
    pub underscores: Option<bool>,
}

/// Validated configuration derived from `config.toml`.
///
/// Switches stay `None` when unset so the CLI can tell "not configured"
/// from "configured false".
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,

    /// Range rules applied before any given on the command line.
    pub ranges: RangeRules,

    pub remove_tags: Option<bool>,
    pub drop_non_numeric: Option<bool>,
    pub underscores: Option<bool>,
}

/// Load and validate config.toml at `path`.
///
/// Returns defaults with no warnings when the file does not exist
/// (first run). Unreadable or unparseable files and invalid individual
/// values produce warnings and fall back to defaults; the run continues.
pub fn load_config(path: &Path) -> (AppConfig, Vec<ConfigError>) {
    let mut warnings = Vec::new();

    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warnings.push(ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            });
            return (AppConfig::default(), warnings);
        }
    };

    let (config, mut value_warnings) = parse_config(&content, path);
    warnings.append(&mut value_warnings);

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}

/// Validate config.toml content; `path` is only used in messages.
pub fn parse_config(content: &str, path: &Path) -> (AppConfig, Vec<ConfigError>) {
    let mut warnings = Vec::new();

    let raw: RawConfig = match toml::from_str(content) {
        Ok(r) => r,
        Err(e) => {
            warnings.push(ConfigError::TomlParse {
                path: path.to_path_buf(),
                source: e,
            });
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %path.display(), "Loaded config.toml");

    let mut config = AppConfig {
        remove_tags: raw.cleaner.remove_tags,
        drop_non_numeric: raw.cleaner.drop_non_numeric,
        underscores: raw.cleaner.underscores,
        ..AppConfig::default()
    };

    // -- Logging: level --
    if let Some(level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level);
        } else {
            warnings.push(ConfigError::UnrecognisedValue {
                field: "[logging] level".to_string(),
                value: level,
                expected: constants::VALID_LOG_LEVELS.join(", "),
            });
        }
    }

    // -- Cleaner: ranges --
    for spec in raw.cleaner.ranges.unwrap_or_default() {
        match spec.parse::<RangeRule>() {
            Ok(rule) => config.ranges.insert(rule),
            Err(e) => warnings.push(ConfigError::InvalidRange {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    (config, warnings)
}
