//! Error types for claim data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// One or more required input columns are absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required column(s): {}", missing.join(", "))]
pub struct SchemaError {
    /// Missing column names, in required-column order.
    pub missing: Vec<String>,
}

/// Errors that can occur during data ingestion operations.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Malformed CSV content.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    // === Schema Errors ===
    /// Required column missing from the input table.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/claims.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/claims.csv");
    }

    #[test]
    fn test_schema_error_lists_columns() {
        let err = IngestError::from(SchemaError {
            missing: vec!["ProviderNPI".to_string(), "ChargeAmount".to_string()],
        });
        assert_eq!(
            err.to_string(),
            "missing required column(s): ProviderNPI, ChargeAmount"
        );
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("test".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }
}
