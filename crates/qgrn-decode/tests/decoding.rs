//! Decoder properties over arbitrary counts.

use proptest::prelude::*;
use qgrn_decode::{DecodeOptions, decode, decode_counts, decode_distribution};
use qgrn_hal::{Counts, Distribution, ExecutionResult};
use qgrn_network::GeneOrdering;

fn arb_counts(genes: usize) -> impl Strategy<Value = Counts> {
    proptest::collection::btree_map(
        proptest::collection::vec(any::<bool>(), genes)
            .prop_map(|bits| bits.into_iter().map(|b| if b { '1' } else { '0' }).collect::<String>()),
        1u64..500,
        1..16,
    )
    .prop_map(|map| map.into_iter().collect())
}

fn ordering(genes: usize) -> GeneOrdering {
    GeneOrdering::new((0..genes).map(|i| format!("g{i}"))).unwrap()
}

proptest! {
    #[test]
    fn marginals_are_probabilities(counts in arb_counts(4)) {
        let profile = decode_counts(&counts, &ordering(4), DecodeOptions::default()).unwrap();
        for (_, p) in profile.iter() {
            prop_assert!((0.0..=1.0).contains(&p));
        }
        prop_assert!((profile.distribution().total() - 1.0).abs() < 1e-9);
        prop_assert!(profile.entropy() >= 0.0);
        prop_assert!(profile.entropy() <= 4.0 + 1e-9);
        prop_assert_eq!(profile.distinct_states(), counts.len());
    }

    #[test]
    fn most_probable_matches_counts(counts in arb_counts(3)) {
        let profile = decode_counts(&counts, &ordering(3), DecodeOptions::default()).unwrap();
        let (best, _) = counts.most_frequent().unwrap();
        prop_assert_eq!(profile.most_probable_state(), best);
    }

    #[test]
    fn reversing_bits_reverses_marginals(counts in arb_counts(3)) {
        let forward = ordering(3);
        let reversed = GeneOrdering::new(["g2", "g1", "g0"]).unwrap();
        let flipped: Counts = counts
            .iter()
            .map(|(bits, n)| (bits.chars().rev().collect::<String>(), n))
            .collect();

        let a = decode_counts(&counts, &forward, DecodeOptions::default()).unwrap();
        let b = decode_counts(&flipped, &reversed, DecodeOptions::default()).unwrap();
        for gene in ["g0", "g1", "g2"] {
            let diff = (a.probability(gene).unwrap() - b.probability(gene).unwrap()).abs();
            prop_assert!(diff < 1e-12);
        }
    }
}

#[test]
fn decode_uses_result_counts() {
    let counts: Counts = [("01", 3u64), ("00", 1)].into_iter().collect();
    let result = ExecutionResult::new(counts, 4).with_seed(7);
    let profile = decode(&result, &ordering(2)).unwrap();
    assert_eq!(profile.probability("g0"), Some(0.0));
    assert_eq!(profile.probability("g1"), Some(0.75));
}

#[test]
fn exact_distribution_decodes() {
    let dist: Distribution = [("11", 0.3), ("10", 0.3), ("00", 0.4)].into_iter().collect();
    let profile = decode_distribution(&dist, &ordering(2)).unwrap();
    assert!((profile.probability("g0").unwrap() - 0.6).abs() < 1e-12);
    assert!((profile.probability("g1").unwrap() - 0.3).abs() < 1e-12);
    assert_eq!(profile.most_probable_state(), "00");
    assert!((profile.state_probability("11") - 0.3).abs() < 1e-12);
}

#[test]
fn profile_serializes_by_gene_name() {
    let counts: Counts = [("10", 1u64)].into_iter().collect();
    let profile = decode_counts(&counts, &ordering(2), DecodeOptions::default()).unwrap();
    let json = serde_json::to_value(&profile).unwrap();
    assert_eq!(json["genes"], serde_json::json!(["g0", "g1"]));
    assert_eq!(json["most_probable_state"], "10");

    let back: qgrn_decode::ExpressionProfile = serde_json::from_value(json).unwrap();
    assert_eq!(back, profile);
}

#[test]
fn options_deserialize_with_defaults() {
    let options: DecodeOptions = serde_json::from_str("{}").unwrap();
    assert!(!options.drop_all_off);
    let options: DecodeOptions = serde_json::from_str(r#"{"drop_all_off": true}"#).unwrap();
    assert!(options.drop_all_off);
}
