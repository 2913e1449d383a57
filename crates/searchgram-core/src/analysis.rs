use crate::ngram::NGramEntry;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// N-grams that spent money without a single conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WasteReport {
    /// Sorted by cost, highest first.
    pub candidates: Vec<NGramEntry>,
    pub potential_savings: f64,
}

impl WasteReport {
    pub fn top(&self, limit: usize) -> &[NGramEntry] {
        &self.candidates[..limit.min(self.candidates.len())]
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Cost descending, then n-gram ascending so equal costs print in a stable order.
pub fn sort_by_cost_desc(entries: &mut [NGramEntry]) {
    entries.sort_by(|a, b| {
        b.cost
            .partial_cmp(&a.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.ngram.cmp(&b.ngram))
    });
}

pub fn waste_candidates(entries: &[NGramEntry]) -> WasteReport {
    let mut candidates: Vec<NGramEntry> = entries.iter().filter(|e| e.is_waste()).cloned().collect();
    sort_by_cost_desc(&mut candidates);
    let potential_savings = candidates.iter().map(|e| e.cost).sum();

    WasteReport {
        candidates,
        potential_savings,
    }
}

pub fn filter_min_clicks(entries: &[NGramEntry], min_clicks: f64) -> Vec<NGramEntry> {
    entries
        .iter()
        .filter(|e| e.clicks >= min_clicks)
        .cloned()
        .collect()
}

/// Explorer view: at least `min_clicks`, most expensive first, at most `limit` rows.
pub fn explore(entries: &[NGramEntry], min_clicks: f64, limit: usize) -> Vec<NGramEntry> {
    let mut rows = filter_min_clicks(entries, min_clicks);
    sort_by_cost_desc(&mut rows);
    rows.truncate(limit);
    rows
}
