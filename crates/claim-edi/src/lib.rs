//! 837-style claim envelope encoding.
//!
//! Each claim record becomes one self-contained envelope of eleven segments:
//! `ISA`, `GS`, `ST`, `NM1*IL`, `N3`, `N4`, `DMG`, `NM1*PR`, `CLM`, `SE`, `GE`.
//! Segments are separated by newlines; every segment except `ISA` ends with
//! `~`, while `ISA` ends with its component separator `:`.
//!
//! # Known limitation
//!
//! Field values are written verbatim. A value containing `*`, `~`, `:` or
//! `^` corrupts the segment structure; use [`delimiter_conflicts`] to detect
//! affected records.
//!
//! # Example
//!
//! ```
//! use claim_edi::SegmentEncoder;
//! use claim_model::ClaimRecord;
//!
//! let encoder = SegmentEncoder::new();
//! let block = encoder.encode(&ClaimRecord::default());
//! assert_eq!(block.lines().count(), 11);
//! ```

mod encoder;
mod error;
mod segment;
mod writer;

pub use encoder::{EnvelopeOptions, SegmentEncoder, delimiter_conflicts};
pub use error::{EdiError, Result};
pub use segment::{
    COMPONENT_SEPARATOR, ELEMENT_SEPARATOR, REPETITION_SEPARATOR, RESERVED_DELIMITERS, Segment,
    SEGMENT_TERMINATOR,
};
pub use writer::write_edi;
