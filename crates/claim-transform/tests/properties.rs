//! Property tests for pipeline invariants.

use chrono::NaiveDate;
use claim_map::MappingTable;
use claim_model::ClaimRecord;
use claim_transform::{
    MAX_DELTA, TransformPipeline, aggregate_by_provider, filter_positive_charges,
    sort_by_service_date,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

const PROVIDERS: [&str; 4] = ["Acme Clinic", "Beta Health", "Cedar Medical", ""];
const NAMES: [&str; 3] = ["Jon", "Liz", "Unknown"];

fn arb_record() -> impl Strategy<Value = ClaimRecord> {
    (
        prop::option::of(-20_000i64..20_000),
        prop::option::of(0u32..60),
        0usize..PROVIDERS.len(),
        prop::option::of(0usize..NAMES.len()),
        any::<u32>(),
    )
        .prop_map(|(cents, day, provider, name, id)| ClaimRecord {
            member_first_name: name.map(|idx| NAMES[idx].to_string()),
            member_id: format!("M{id}"),
            provider_name: PROVIDERS[provider].to_string(),
            charge_amount: cents.map(|c| Decimal::new(c, 2)),
            service_start_date: day.and_then(|d| {
                NaiveDate::from_ymd_opt(2024, 1, 1)
                    .and_then(|base| base.checked_add_days(chrono::Days::new(u64::from(d))))
            }),
            ..ClaimRecord::default()
        })
}

fn arb_dataset() -> impl Strategy<Value = Vec<ClaimRecord>> {
    prop::collection::vec(arb_record(), 0..40)
}

proptest! {
    #[test]
    fn filter_keeps_only_positive_charges(dataset in arb_dataset()) {
        let before = dataset.len();
        let kept = filter_positive_charges(dataset);
        prop_assert!(kept.len() <= before);
        prop_assert!(kept.iter().all(|r| r.charge_amount.is_some_and(|c| c > Decimal::ZERO)));
    }

    #[test]
    fn sort_is_ordered_stable_and_idempotent(dataset in arb_dataset()) {
        let tagged: Vec<ClaimRecord> = dataset
            .into_iter()
            .enumerate()
            .map(|(idx, mut r)| { r.member_id = format!("{idx:04}"); r })
            .collect();
        let sorted = sort_by_service_date(tagged.clone());
        prop_assert_eq!(sorted.len(), tagged.len());

        for pair in sorted.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            match (a.service_start_date, b.service_start_date) {
                (Some(x), Some(y)) => {
                    prop_assert!(x <= y);
                    if x == y {
                        prop_assert!(a.member_id < b.member_id);
                    }
                }
                (None, None) => prop_assert!(a.member_id < b.member_id),
                (Some(_), None) => {}
                (None, Some(_)) => prop_assert!(false, "null date sorted before a date"),
            }
        }

        let again = sort_by_service_date(sorted.clone());
        prop_assert_eq!(again, sorted);
    }

    #[test]
    fn pipeline_output_invariants(dataset in arb_dataset(), seed in any::<u64>()) {
        let mapping = MappingTable::from_rows([["Jon", "Jonathan"]], false).expect("mapping");
        let kept = filter_positive_charges(dataset.clone());
        let expected = aggregate_by_provider(&kept);
        let output = TransformPipeline::seeded(mapping, seed).run(dataset);

        prop_assert_eq!(output.records.len(), output.counts.output);
        prop_assert_eq!(output.records.len(), kept.len());
        for record in &output.records {
            prop_assert!(record.member_first_name.is_some());
            let charge = record.charge_amount.expect("positive charge");
            let adjusted = record.adjusted_charge_amount.expect("adjusted charge");
            let delta = adjusted - charge;
            prop_assert!(delta >= -MAX_DELTA && delta <= MAX_DELTA);
        }
        prop_assert_eq!(output.report, expected);
    }

    #[test]
    fn report_sums_match_records(dataset in arb_dataset()) {
        let kept = filter_positive_charges(dataset);
        let report = aggregate_by_provider(&kept);
        for (provider, total) in report.iter() {
            let expected: Decimal = kept
                .iter()
                .filter(|r| r.provider_name == provider)
                .filter_map(|r| r.charge_amount)
                .sum();
            prop_assert_eq!(total.total_charge, expected);
        }
    }
}
