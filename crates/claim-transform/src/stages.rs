//! Individual transformation stages.
//!
//! Every stage is a total function over the whole dataset. None of them can
//! fail: bad values are either filtered out or left null.

use claim_map::MappingTable;
use claim_model::{AggregationReport, ClaimRecord, Dataset};
use tracing::warn;

use crate::capability::{MAX_DELTA, NameSynthesizer, RandomAdjuster};

/// Keep only records with a charge strictly greater than zero.
///
/// Records whose charge is null are dropped as well.
pub fn filter_positive_charges(dataset: Dataset) -> Dataset {
    dataset
        .into_iter()
        .filter(ClaimRecord::has_positive_charge)
        .collect()
}

/// Stable sort by service start date, ascending, with null dates last.
///
/// Records sharing a date (or both null) keep their relative order.
pub fn sort_by_service_date(mut dataset: Dataset) -> Dataset {
    dataset.sort_by_key(|record| {
        (
            record.service_start_date.is_none(),
            record.service_start_date,
        )
    });
    dataset
}

/// Replace each first name with its mapped value.
///
/// Names without a mapping entry become null; the original value is never
/// kept.
pub fn map_member_names(dataset: Dataset, mapping: &MappingTable) -> Dataset {
    dataset
        .into_iter()
        .map(|mut record| {
            record.member_first_name = record
                .member_first_name
                .as_deref()
                .and_then(|name| mapping.lookup(name))
                .map(str::to_string);
            record
        })
        .collect()
}

/// Fill every null first name with a synthesized one.
///
/// The synthesizer is called once per null name, in dataset order.
pub fn mask_member_names<N>(dataset: Dataset, names: &mut N) -> Dataset
where
    N: NameSynthesizer + ?Sized,
{
    dataset
        .into_iter()
        .map(|mut record| {
            if record.member_first_name.is_none() {
                record.member_first_name = Some(names.generate());
            }
            record
        })
        .collect()
}

/// Sum charges per provider name.
///
/// Records with a blank provider name or a null charge are not grouped.
/// Totals past the `Decimal` range saturate instead of failing.
pub fn aggregate_by_provider(dataset: &[ClaimRecord]) -> AggregationReport {
    let mut report = AggregationReport::default();
    let mut ungrouped = 0usize;
    let mut saturated = 0usize;
    for record in dataset {
        match record.charge_amount {
            Some(charge) if !record.provider_name.is_empty() => {
                if !report.add(&record.provider_name, charge) {
                    saturated += 1;
                }
            }
            _ => ungrouped += 1,
        }
    }
    if ungrouped > 0 {
        warn!(ungrouped, "records without provider name left out of aggregation");
    }
    if saturated > 0 {
        warn!(saturated, "provider totals saturated at the decimal range");
    }
    report
}

/// Set `adjusted_charge_amount = charge_amount + delta` for every record.
///
/// Deltas outside `[-MAX_DELTA, MAX_DELTA]` are clamped and the sum saturates
/// at the `Decimal` bounds. A null charge stays null after adjustment; one
/// delta is drawn per record regardless.
pub fn adjust_charges<A>(dataset: Dataset, adjuster: &mut A) -> Dataset
where
    A: RandomAdjuster + ?Sized,
{
    dataset
        .into_iter()
        .map(|mut record| {
            let delta = adjuster.delta().clamp(-MAX_DELTA, MAX_DELTA);
            record.adjusted_charge_amount = record
                .charge_amount
                .map(|charge| charge.saturating_add(delta));
            record
        })
        .collect()
}
