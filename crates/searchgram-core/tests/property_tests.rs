use proptest::prelude::*;
use searchgram_core::ngram::aggregate;
use searchgram_core::schema::Record;
use std::collections::{BTreeMap, HashSet};

// --- STRATEGIES ---

prop_compose! {
    fn arb_term()(words in proptest::collection::vec("[a-c]{1,2}", 0..8)) -> String {
        words.join(" ")
    }
}

prop_compose! {
    fn arb_record()(
        term in arb_term(),
        cost in 0u32..1000,
        conversions in 0u32..5,
        value in 0u32..2000,
        clicks in 0u32..50,
        imps in 0u32..500
    ) -> Record {
        Record {
            term,
            cost: cost as f64,
            conversions: conversions as f64,
            value: value as f64,
            clicks: clicks as f64,
            imps: imps as f64,
        }
    }
}

fn keyed(records: &[Record], n: usize) -> BTreeMap<String, (u64, f64)> {
    aggregate(records, n)
        .unwrap()
        .into_iter()
        .map(|e| (e.ngram, (e.count, e.cost)))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn test_window_count_matches_word_count(term in arb_term(), n in 1usize..4) {
        let words = term.split_whitespace().count();
        let records = vec![Record { term, cost: 1.0, ..Default::default() }];
        let total: u64 = aggregate(&records, n).unwrap().iter().map(|e| e.count).sum();
        let expected = if words >= n { (words - n + 1) as u64 } else { 0 };
        prop_assert_eq!(total, expected);
    }

    #[test]
    fn test_unigram_cost_conservation(cost in 1u32..1000, words in proptest::collection::hash_set("[a-z]{1,6}", 1..8)) {
        let distinct: Vec<String> = words.into_iter().collect();
        let records = vec![Record { term: distinct.join(" "), cost: cost as f64, ..Default::default() }];
        let sum: f64 = aggregate(&records, 1).unwrap().iter().map(|e| e.cost).sum();
        prop_assert_eq!(sum, distinct.len() as f64 * cost as f64);
    }

    #[test]
    fn test_aggregation_is_idempotent(records in proptest::collection::vec(arb_record(), 0..20), n in 1usize..4) {
        prop_assert_eq!(keyed(&records, n), keyed(&records, n));
    }

    #[test]
    fn test_kpis_follow_final_sums(records in proptest::collection::vec(arb_record(), 0..20), n in 1usize..4) {
        for e in aggregate(&records, n).unwrap() {
            let cpa = if e.conversions > 0.0 { e.cost / e.conversions } else { 0.0 };
            let roas = if e.cost > 0.0 { e.value / e.cost } else { 0.0 };
            let cpc = if e.clicks > 0.0 { e.cost / e.clicks } else { 0.0 };
            let ctr = if e.imps > 0.0 { e.clicks / e.imps * 100.0 } else { 0.0 };
            prop_assert_eq!(e.cpa, cpa);
            prop_assert_eq!(e.roas, roas);
            prop_assert_eq!(e.cpc, cpc);
            prop_assert_eq!(e.ctr, ctr);
        }
    }

    #[test]
    fn test_keys_are_unique_and_lowercase(records in proptest::collection::vec(arb_record(), 0..20), n in 1usize..4) {
        let entries = aggregate(&records, n).unwrap();
        let keys: HashSet<&str> = entries.iter().map(|e| e.ngram.as_str()).collect();
        prop_assert_eq!(keys.len(), entries.len());
        for e in &entries {
            prop_assert_eq!(e.ngram.split(' ').count(), n);
            prop_assert_eq!(e.ngram.to_lowercase(), e.ngram.clone());
        }
    }
}
