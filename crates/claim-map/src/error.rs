//! Error types for mapping table loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a mapping source.
#[derive(Debug, Error)]
pub enum MappingLoadError {
    /// A row did not have exactly two fields.
    #[error("mapping row {row} has {found} field(s), expected 2")]
    FieldCount { row: usize, found: usize },

    /// Mapping file could not be opened.
    #[error("failed to open mapping file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Mapping file is not readable as delimited text.
    #[error("failed to read mapping file: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for mapping operations.
pub type Result<T> = std::result::Result<T, MappingLoadError>;
