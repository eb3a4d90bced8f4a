use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Charge totals for one provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProviderTotal {
    pub claim_count: usize,
    pub total_charge: Decimal,
}

/// Summed charge amounts grouped by provider name.
///
/// Side output of the aggregate stage; it is never fed back into the record
/// stream. Providers are kept in name order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AggregationReport {
    pub providers: BTreeMap<String, ProviderTotal>,
}

impl AggregationReport {
    /// Add one charge to a provider's running total.
    ///
    /// A total that would leave the `Decimal` range saturates at its bound;
    /// returns `false` in that case.
    pub fn add(&mut self, provider: &str, charge: Decimal) -> bool {
        let entry = self.providers.entry(provider.to_string()).or_default();
        entry.claim_count += 1;
        match entry.total_charge.checked_add(charge) {
            Some(total) => {
                entry.total_charge = total;
                true
            }
            None => {
                entry.total_charge = entry.total_charge.saturating_add(charge);
                false
            }
        }
    }

    /// Summed charge for a provider, if it has any records.
    pub fn total(&self, provider: &str) -> Option<Decimal> {
        self.providers.get(provider).map(|entry| entry.total_charge)
    }

    pub fn contains(&self, provider: &str) -> bool {
        self.providers.contains_key(provider)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Sum over all providers, saturating at the `Decimal` bounds.
    pub fn grand_total(&self) -> Decimal {
        self.providers
            .values()
            .fold(Decimal::ZERO, |sum, entry| sum.saturating_add(entry.total_charge))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProviderTotal)> {
        self.providers
            .iter()
            .map(|(name, total)| (name.as_str(), total))
    }
}
