use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One claim line item.
///
/// Records are built once by the parse stage. Afterwards only
/// `member_first_name` (name mapping, then masking) and
/// `adjusted_charge_amount` (numeric adjustment) change.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClaimRecord {
    /// Null when the source cell is blank or the name has no mapping entry.
    pub member_first_name: Option<String>,
    pub member_last_name: String,
    pub member_id: String,
    /// Null when the source value is not a recognizable date.
    pub member_dob: Option<NaiveDate>,
    pub subscriber_address: String,
    pub subscriber_city: String,
    pub subscriber_state: String,
    pub subscriber_zip: String,
    pub subscriber_gender: String,
    pub provider_name: String,
    pub provider_npi: String,
    pub diagnosis_code: String,
    /// Null when the source value is blank or not numeric.
    pub charge_amount: Option<Decimal>,
    /// Set by the numeric adjustment stage.
    pub adjusted_charge_amount: Option<Decimal>,
    pub service_start_date: Option<NaiveDate>,
}

impl ClaimRecord {
    /// Returns true when the charge is a strictly positive number.
    pub fn has_positive_charge(&self) -> bool {
        self.charge_amount
            .is_some_and(|amount| amount > Decimal::ZERO)
    }
}

/// Ordered batch of claim records.
pub type Dataset = Vec<ClaimRecord>;
