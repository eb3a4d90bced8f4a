//! Typed data model for claim conversion.
//!
//! - **record**: `ClaimRecord` and the `Dataset` batch type
//! - **columns**: required input column names
//! - **report**: provider-level charge aggregation

pub mod columns;
pub mod record;
pub mod report;

pub use columns::{REQUIRED_COLUMNS, column};
pub use record::{ClaimRecord, Dataset};
pub use report::{AggregationReport, ProviderTotal};
