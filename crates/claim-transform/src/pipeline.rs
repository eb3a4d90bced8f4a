//! Fixed-order transformation pipeline.
//!
//! Stages run in this order:
//! 1. **Filter**: drop records without a positive charge
//! 2. **Sort**: stable sort by service start date
//! 3. **NameMap**: replace first names through the mapping table
//! 4. **NameMask**: synthesize names for unmapped members
//! 5. **Aggregate**: provider totals (side output)
//! 6. **NumericAdjust**: perturb charges into `adjusted_charge_amount`
//!
//! Reordering the stages changes the output, so the order is not
//! configurable.

use std::time::Instant;

use claim_map::MappingTable;
use claim_model::{AggregationReport, Dataset};
use tracing::{debug, info, info_span};

use crate::capability::{NameSynthesizer, PoolNameSynthesizer, RandomAdjuster, UniformAdjuster};
use crate::stages::{
    adjust_charges, aggregate_by_provider, filter_positive_charges, map_member_names,
    mask_member_names, sort_by_service_date,
};

/// Record counts observed while the pipeline ran.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageCounts {
    pub input: usize,
    pub filtered_out: usize,
    pub mapped: usize,
    pub masked: usize,
    pub output: usize,
}

/// Result of a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Transformed records in service-date order.
    pub records: Dataset,
    pub report: AggregationReport,
    pub counts: StageCounts,
}

/// Transformation pipeline with its injected capabilities.
pub struct TransformPipeline {
    mapping: MappingTable,
    names: Box<dyn NameSynthesizer>,
    adjuster: Box<dyn RandomAdjuster>,
}

impl TransformPipeline {
    /// Creates a pipeline that draws names and deltas from OS entropy.
    pub fn new(mapping: MappingTable) -> Self {
        Self {
            mapping,
            names: Box::new(PoolNameSynthesizer::from_entropy()),
            adjuster: Box::new(UniformAdjuster::from_entropy()),
        }
    }

    /// Creates a reproducible pipeline.
    ///
    /// The name synthesizer is seeded with `seed` and the adjuster with
    /// `seed + 1`.
    pub fn seeded(mapping: MappingTable, seed: u64) -> Self {
        Self {
            mapping,
            names: Box::new(PoolNameSynthesizer::seeded(seed)),
            adjuster: Box::new(UniformAdjuster::seeded(seed.wrapping_add(1))),
        }
    }

    /// Sets the name synthesizer.
    pub fn with_name_synthesizer(mut self, names: impl NameSynthesizer + 'static) -> Self {
        self.names = Box::new(names);
        self
    }

    /// Sets the charge adjuster.
    pub fn with_adjuster(mut self, adjuster: impl RandomAdjuster + 'static) -> Self {
        self.adjuster = Box::new(adjuster);
        self
    }

    pub fn mapping(&self) -> &MappingTable {
        &self.mapping
    }

    /// Run every stage over `dataset`.
    pub fn run(&mut self, dataset: Dataset) -> PipelineOutput {
        let span = info_span!("transform", records = dataset.len());
        let _guard = span.enter();
        let start = Instant::now();
        let mut counts = StageCounts {
            input: dataset.len(),
            ..StageCounts::default()
        };

        let dataset = filter_positive_charges(dataset);
        counts.filtered_out = counts.input - dataset.len();
        debug!(
            kept = dataset.len(),
            dropped = counts.filtered_out,
            "filter complete"
        );

        let dataset = sort_by_service_date(dataset);

        let dataset = map_member_names(dataset, &self.mapping);
        counts.mapped = dataset
            .iter()
            .filter(|record| record.member_first_name.is_some())
            .count();
        counts.masked = dataset.len() - counts.mapped;
        debug!(
            mapped = counts.mapped,
            unmapped = counts.masked,
            "name mapping complete"
        );

        let dataset = mask_member_names(dataset, self.names.as_mut());

        let report = aggregate_by_provider(&dataset);
        debug!(providers = report.len(), "aggregation complete");

        let records = adjust_charges(dataset, self.adjuster.as_mut());
        counts.output = records.len();

        info!(
            input = counts.input,
            output = counts.output,
            filtered_out = counts.filtered_out,
            masked = counts.masked,
            providers = report.len(),
            duration_ms = start.elapsed().as_millis(),
            "transform complete"
        );
        PipelineOutput {
            records,
            report,
            counts,
        }
    }
}
