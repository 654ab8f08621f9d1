// LogTally - app/startup.rs
//
// Shared process startup for both binaries: config resolution, then
// logging initialisation, then reporting of config warnings.

use crate::platform::config::{load_config, AppConfig, PlatformPaths};
use crate::util::error::{ConfigError, Result};
use crate::util::{constants, logging};
use std::io;
use std::path::Path;

/// Load configuration and initialise logging.
///
/// An explicit `config_path` (from `--config`) must exist; the platform
/// default is optional. Invalid values inside either file are non-fatal.
pub fn startup(config_path: Option<&Path>, debug: bool) -> Result<AppConfig> {
    let path = match config_path {
        Some(explicit) => {
            if !explicit.exists() {
                return Err(ConfigError::Io {
                    path: explicit.to_path_buf(),
                    source: io::Error::new(io::ErrorKind::NotFound, "config file not found"),
                }
                .into());
            }
            explicit.to_path_buf()
        }
        None => PlatformPaths::resolve().config_file(),
    };

    let (config, warnings) = load_config(&path);

    logging::init(debug, config.log_level.as_deref());

    let debug_enabled = debug;
    tracing::info!(
        version = constants::APP_VERSION,
        debug = debug_enabled,
        config = %path.display(),
        "LogTally starting"
    );

    for warning in &warnings {
        tracing::warn!(error = %warning, "Config warning");
    }

    Ok(config)
}
