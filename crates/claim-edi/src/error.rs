//! Error types for EDI output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when writing encoded output.
#[derive(Debug, Error)]
pub enum EdiError {
    /// Output directory could not be created.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for EDI operations.
pub type Result<T> = std::result::Result<T, EdiError>;
