//! Claim dataset transformation.
//!
//! This crate provides the batch transformation applied between parsing and
//! encoding:
//!
//! - **capability**: Injected randomness (`NameSynthesizer`, `RandomAdjuster`)
//! - **stages**: Filter, sort, name mapping, masking, aggregation, adjustment
//! - **pipeline**: `TransformPipeline` running the stages in their fixed order

pub mod capability;
pub mod pipeline;
pub mod stages;

pub use capability::{
    ConstantDelta, ConstantName, MAX_DELTA, NameSynthesizer, PoolNameSynthesizer,
    RandomAdjuster, UniformAdjuster,
};
pub use pipeline::{PipelineOutput, StageCounts, TransformPipeline};
pub use stages::{
    adjust_charges, aggregate_by_provider, filter_positive_charges, map_member_names,
    mask_member_names, sort_by_service_date,
};
