use crate::schema::RecordSet;
use crate::util::safe_ratio;
use serde::{Deserialize, Serialize};

/// Whole-account scalars shown above the n-gram tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub total_spend: f64,
    pub total_conversions: f64,
    pub total_value: f64,
    /// total_value / total_spend, 0 without spend.
    pub account_roas: f64,
    pub analyzed_terms: usize,
}

impl AccountSummary {
    pub fn from_records(set: &RecordSet) -> Self {
        let (spend, conversions, value) = set.iter().fold((0.0, 0.0, 0.0), |acc, r| {
            (acc.0 + r.cost, acc.1 + r.conversions, acc.2 + r.value)
        });

        Self {
            total_spend: spend,
            total_conversions: conversions,
            total_value: value,
            account_roas: safe_ratio(value, spend),
            analyzed_terms: set.len(),
        }
    }
}
