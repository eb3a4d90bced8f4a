use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EdiError, Result};

/// Write encoded envelopes to `path`, creating the parent directory if needed.
pub fn write_edi(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| EdiError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, content).map_err(|source| EdiError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = content.len(), "edi output written");
    Ok(())
}
