//! Parse stage: raw table to typed claim records.

use std::collections::BTreeMap;

use claim_model::{ClaimRecord, Dataset, REQUIRED_COLUMNS, column};
use tracing::{info, warn};

use crate::error::SchemaError;
use crate::table::CsvTable;
use crate::values::{parse_date, parse_decimal};

/// Resolved positions of the required columns.
struct ColumnIndex {
    positions: BTreeMap<&'static str, usize>,
}

impl ColumnIndex {
    /// Exact header matches win; otherwise headers match case-insensitively.
    fn resolve(headers: &[String]) -> Result<Self, SchemaError> {
        let upper = build_header_map(headers);
        let mut positions = BTreeMap::new();
        let mut missing = Vec::new();
        for name in REQUIRED_COLUMNS {
            let exact = headers.iter().position(|header| header == name);
            match exact.or_else(|| upper.get(&name.to_uppercase()).copied()) {
                Some(idx) => {
                    positions.insert(name, idx);
                }
                None => missing.push(name.to_string()),
            }
        }
        if missing.is_empty() {
            Ok(Self { positions })
        } else {
            Err(SchemaError { missing })
        }
    }

    fn cell<'a>(&self, row: &'a [String], name: &str) -> &'a str {
        self.positions
            .get(name)
            .and_then(|idx| row.get(*idx))
            .map_or("", String::as_str)
    }
}

fn build_header_map(headers: &[String]) -> BTreeMap<String, usize> {
    let mut map = BTreeMap::new();
    for (idx, header) in headers.iter().enumerate() {
        map.entry(header.to_uppercase()).or_insert(idx);
    }
    map
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[derive(Default)]
struct CoercionCounts {
    member_dob: usize,
    service_start_date: usize,
    charge_amount: usize,
}

/// Build claim records from a raw table.
///
/// Fails only when a required column is absent. Dates and amounts that do
/// not parse become null; the count of coerced cells is logged per column.
pub fn parse_claims(table: &CsvTable) -> Result<Dataset, SchemaError> {
    let index = ColumnIndex::resolve(&table.headers)?;
    let mut coerced = CoercionCounts::default();
    let mut dataset = Vec::with_capacity(table.len());
    for row in &table.rows {
        let cell = |name: &str| index.cell(row, name);

        let member_dob = parse_date(cell(column::MEMBER_DOB));
        if member_dob.is_none() && !cell(column::MEMBER_DOB).is_empty() {
            coerced.member_dob += 1;
        }
        let service_start_date = parse_date(cell(column::SERVICE_START_DATE));
        if service_start_date.is_none() && !cell(column::SERVICE_START_DATE).is_empty() {
            coerced.service_start_date += 1;
        }
        let charge_amount = parse_decimal(cell(column::CHARGE_AMOUNT));
        if charge_amount.is_none() && !cell(column::CHARGE_AMOUNT).is_empty() {
            coerced.charge_amount += 1;
        }

        dataset.push(ClaimRecord {
            member_first_name: non_empty(cell(column::MEMBER_FIRST_NAME)),
            member_last_name: cell(column::MEMBER_LAST_NAME).to_string(),
            member_id: cell(column::MEMBER_ID).to_string(),
            member_dob,
            subscriber_address: cell(column::SUBSCRIBER_ADDRESS).to_string(),
            subscriber_city: cell(column::SUBSCRIBER_CITY).to_string(),
            subscriber_state: cell(column::SUBSCRIBER_STATE).to_string(),
            subscriber_zip: cell(column::SUBSCRIBER_ZIP).to_string(),
            subscriber_gender: cell(column::SUBSCRIBER_GENDER).to_string(),
            provider_name: cell(column::PROVIDER_NAME).to_string(),
            provider_npi: cell(column::PROVIDER_NPI).to_string(),
            diagnosis_code: cell(column::DIAGNOSIS_CODE).to_string(),
            charge_amount,
            adjusted_charge_amount: None,
            service_start_date,
        });
    }

    for (name, count) in [
        (column::MEMBER_DOB, coerced.member_dob),
        (column::SERVICE_START_DATE, coerced.service_start_date),
        (column::CHARGE_AMOUNT, coerced.charge_amount),
    ] {
        if count > 0 {
            warn!(column = name, count, "unparseable values coerced to null");
        }
    }
    info!(records = dataset.len(), "claims parsed");
    Ok(dataset)
}
