//! Original-to-replacement name mapping.
//!
//! A `MappingTable` is built once from a two-column source and is read-only
//! afterwards. Lookups never fall back to the original value: an unmapped
//! name resolves to `None`.

mod error;
mod table;

pub use error::{MappingLoadError, Result};
pub use table::MappingTable;
