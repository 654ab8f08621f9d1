// LogTally - platform/fs.rs
//
// File reads and writes with path context attached to every error.

use crate::util::error::{LogTallyError, Result};
use std::path::Path;

/// Read a UTF-8 input file in full.
///
/// Invalid UTF-8 is an I/O error, not a lossy conversion: the cleaner must
/// reproduce its input exactly.
pub fn read_input(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path).map_err(|e| LogTallyError::Io {
        path: path.to_path_buf(),
        operation: "read",
        source: e,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "Input read");
    Ok(content)
}

/// Write `content` to `path`, replacing any existing file.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|e| LogTallyError::Io {
        path: path.to_path_buf(),
        operation: "write",
        source: e,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "Output written");
    Ok(())
}
