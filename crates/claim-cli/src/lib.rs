//! CLI library components for the claim 837 converter.

pub mod logging;
pub mod pipeline;
