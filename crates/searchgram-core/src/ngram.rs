use crate::error::{SearchgramError, SgResult};
use crate::schema::Record;
use crate::util::safe_ratio;
use fnv::FnvHashMap;
use itertools::Itertools;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Additive metrics summed over every occurrence of an n-gram.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricTotals {
    pub cost: f64,
    pub conversions: f64,
    pub value: f64,
    pub clicks: f64,
    pub imps: f64,
    /// Number of contributions (a term repeating the n-gram counts each time).
    pub count: u64,
}

impl MetricTotals {
    #[inline(always)]
    pub fn add_record(&mut self, record: &Record) {
        self.cost += record.cost;
        self.conversions += record.conversions;
        self.value += record.value;
        self.clicks += record.clicks;
        self.imps += record.imps;
        self.count += 1;
    }
}

/// Ratio KPIs. Each is 0 when its denominator is 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Kpis {
    pub cpa: f64,
    pub roas: f64,
    pub cpc: f64,
    pub ctr: f64,
}

impl Kpis {
    pub fn from_totals(t: &MetricTotals) -> Self {
        Self {
            cpa: safe_ratio(t.cost, t.conversions),
            roas: safe_ratio(t.value, t.cost),
            cpc: safe_ratio(t.cost, t.clicks),
            ctr: safe_ratio(t.clicks, t.imps) * 100.0,
        }
    }
}

/// One row of an n-gram table.
///
/// Built only from final totals via [`NGramEntry::from_totals`], so the KPI
/// columns always agree with the sums next to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NGramEntry {
    pub ngram: String,
    pub cost: f64,
    pub conversions: f64,
    pub value: f64,
    pub clicks: f64,
    pub imps: f64,
    pub count: u64,
    pub cpa: f64,
    pub roas: f64,
    pub cpc: f64,
    pub ctr: f64,
}

impl NGramEntry {
    pub fn from_totals(ngram: String, totals: MetricTotals) -> Self {
        let kpis = Kpis::from_totals(&totals);
        Self {
            ngram,
            cost: totals.cost,
            conversions: totals.conversions,
            value: totals.value,
            clicks: totals.clicks,
            imps: totals.imps,
            count: totals.count,
            cpa: kpis.cpa,
            roas: kpis.roas,
            cpc: kpis.cpc,
            ctr: kpis.ctr,
        }
    }

    pub fn totals(&self) -> MetricTotals {
        MetricTotals {
            cost: self.cost,
            conversions: self.conversions,
            value: self.value,
            clicks: self.clicks,
            imps: self.imps,
            count: self.count,
        }
    }

    pub fn kpis(&self) -> Kpis {
        Kpis {
            cpa: self.cpa,
            roas: self.roas,
            cpc: self.cpc,
            ctr: self.ctr,
        }
    }

    /// Spent money, never converted.
    pub fn is_waste(&self) -> bool {
        self.cost > 0.0 && self.conversions == 0.0
    }
}

/// All entries for one n-gram length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NGramTable {
    pub n: usize,
    pub entries: Vec<NGramEntry>,
}

impl NGramTable {
    pub fn find(&self, ngram: &str) -> Option<&NGramEntry> {
        self.entries.iter().find(|e| e.ngram == ngram)
    }
}

/// Lowercases a search term and splits it on whitespace.
pub fn tokenize(term: &str) -> Vec<String> {
    term.to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// The `w - n + 1` space-joined windows of a tokenized term, left to right.
/// Empty when there are fewer than `n` words or `n` is 0.
pub fn windows(words: &[String], n: usize) -> impl Iterator<Item = String> + '_ {
    let len = if n == 0 { 0 } else { words.len() };
    words[..len].windows(n.max(1)).map(|w| w.iter().join(" "))
}

/// Builds the n-gram table for one length from the full record set.
///
/// Every call owns a fresh accumulator, so calls for different `n` (or
/// different inputs) are independent. Work is linear in the total word count.
pub fn aggregate(records: &[Record], n: usize) -> SgResult<Vec<NGramEntry>> {
    if n == 0 {
        return Err(SearchgramError::Validation(
            "N-gram length must be at least 1".to_string(),
        ));
    }

    let mut acc: FnvHashMap<String, MetricTotals> = FnvHashMap::default();
    let mut count = 0usize;

    for record in records {
        let words = tokenize(&record.term);
        for key in windows(&words, n) {
            acc.entry(key).or_default().add_record(record);
            count += 1;
        }
    }

    debug!(
        "{}-grams: {} windows from {} records -> {} distinct",
        n,
        count,
        records.len(),
        acc.len()
    );

    Ok(acc
        .into_iter()
        .map(|(ngram, totals)| NGramEntry::from_totals(ngram, totals))
        .collect())
}

/// Runs [`aggregate`] once per requested length, in parallel, over the same
/// read-only records. Tables come back in the order of `sizes`.
pub fn aggregate_sizes(records: &[Record], sizes: &[usize]) -> SgResult<Vec<NGramTable>> {
    sizes
        .par_iter()
        .map(|&n| aggregate(records, n).map(|entries| NGramTable { n, entries }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kpis_zero_guards() {
        let totals = MetricTotals::default();
        let k = Kpis::from_totals(&totals);
        assert_eq!(k, Kpis::default());
    }

    #[test]
    fn test_kpis_formulas() {
        let totals = MetricTotals {
            cost: 15.0,
            conversions: 3.0,
            value: 30.0,
            clicks: 5.0,
            imps: 200.0,
            count: 2,
        };
        let k = Kpis::from_totals(&totals);
        assert_eq!(k.cpa, 5.0);
        assert_eq!(k.roas, 2.0);
        assert_eq!(k.cpc, 3.0);
        assert_eq!(k.ctr, 2.5);
    }

    #[test]
    fn test_windows_join_tokens() {
        let keys = |term: &str, n| windows(&tokenize(term), n).collect::<Vec<_>>();
        assert_eq!(keys("Buy Red  Shoes", 2), vec!["buy red", "red shoes"]);
        assert_eq!(keys("shoes", 2), Vec::<String>::new());
        assert_eq!(keys("   ", 1), Vec::<String>::new());
        assert_eq!(keys("a b", 0), Vec::<String>::new());
    }

    #[test]
    fn test_aggregate_keys_match_windows() {
        let records = vec![
            Record::new("Buy RED shoes".to_string()),
            Record::new("red shoes".to_string()),
        ];
        let mut got: Vec<_> = aggregate(&records, 2)
            .unwrap()
            .into_iter()
            .map(|e| (e.ngram, e.count))
            .collect();
        got.sort();

        let mut expected: Vec<_> = records
            .iter()
            .flat_map(|r| windows(&tokenize(&r.term), 2).collect::<Vec<_>>())
            .collect();
        expected.sort();
        expected.dedup();

        assert_eq!(got, vec![("buy red".to_string(), 1), ("red shoes".to_string(), 2)]);
        assert_eq!(got.iter().map(|(k, _)| k.clone()).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_entry_round_trips_totals() {
        let totals = MetricTotals {
            cost: 4.0,
            conversions: 0.0,
            value: 0.0,
            clicks: 2.0,
            imps: 0.0,
            count: 1,
        };
        let e = NGramEntry::from_totals("cheap".to_string(), totals);
        assert_eq!(e.totals(), totals);
        assert_eq!(e.kpis(), Kpis::from_totals(&totals));
        assert!(e.is_waste());
    }
}
