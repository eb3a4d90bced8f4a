//! Claim data ingestion.
//!
//! This crate turns a claim CSV file into typed records:
//!
//! - **CSV Loading**: Read the raw table with normalized headers and cells
//! - **Parsing**: Build `ClaimRecord` values, failing only on missing columns
//! - **Values**: Best-effort date and decimal parsing (bad values become null)
//! - **Profiling**: Column statistics for the raw table, computed with Polars
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use claim_ingest::{parse_claims, profile_table, read_csv_table};
//!
//! let table = read_csv_table(Path::new("claims.csv"))?;
//! let profile = profile_table(&table)?;
//! let dataset = parse_claims(&table)?;
//! ```

mod table;
mod error;
mod parse;
mod profile;
mod values;

// === Error Types ===
pub use error::{IngestError, Result, SchemaError};

// === CSV Reading ===
pub use table::{CsvTable, read_csv_table};

// === Record Parsing ===
pub use parse::parse_claims;

// === Profiling ===
pub use profile::{ColumnKind, ColumnProfile, DatasetProfile, NumericSummary, profile_table};

// === Value Parsing ===
pub use values::{parse_date, parse_decimal};
