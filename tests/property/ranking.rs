//! Ranking completeness, order and determinism.

use crate::common::{assert_ranking_well_formed, doc_id_strategy, set_strategy};
use proptest::prelude::*;
use relevance::{RankedEntry, RelevanceSet};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_rank_complete_and_ordered(a in set_strategy()) {
        let ranking = a.rank();
        assert_ranking_well_formed(&a, ranking.as_slice());
    }

    #[test]
    fn prop_rank_of_combinations_well_formed(a in set_strategy(), b in set_strategy()) {
        for combined in [a.union(&b), a.intersection(&b), a.difference(&b)] {
            assert_ranking_well_formed(&combined, combined.rank().as_slice());
        }
    }

    /// Two calls give identical output.
    #[test]
    fn prop_rank_repeatable(a in set_strategy()) {
        prop_assert_eq!(a.rank(), a.rank());
    }

    /// Identical content built in different orders ranks identically, down to
    /// the serialized bytes.
    #[test]
    fn prop_rank_independent_of_build_order(
        pairs in prop::collection::vec((doc_id_strategy(), 1u32..50), 0..30),
        seed in any::<u64>(),
    ) {
        // Dedup so both builds see the same final value per id
        let mut unique: Vec<(String, u32)> = Vec::new();
        for (id, score) in pairs {
            if !unique.iter().any(|(u, _)| *u == id) {
                unique.push((id, score));
            }
        }
        let mut shuffled = unique.clone();
        let len = shuffled.len();
        if len > 1 {
            shuffled.rotate_left((seed as usize) % len);
            shuffled.reverse();
        }

        let first: RelevanceSet = unique.into_iter().collect();
        let second: RelevanceSet = shuffled.into_iter().collect();

        let bytes_first = serde_json::to_vec(&first.rank()).unwrap();
        let bytes_second = serde_json::to_vec(&second.rank()).unwrap();
        prop_assert_eq!(bytes_first, bytes_second);
    }

    /// All ties: order is purely by id.
    #[test]
    fn prop_all_equal_scores_sorted_by_id(
        ids in prop::collection::btree_set(doc_id_strategy(), 0..24),
        score in 1u32..100_000,
    ) {
        let a: RelevanceSet = ids.iter().map(|id| (id.clone(), score)).collect();
        let got: Vec<String> = a.rank().into_iter().map(|e| e.doc_id).collect();
        let expected: Vec<String> = ids.into_iter().collect();
        prop_assert_eq!(got, expected);
    }

    /// `top(n)` is the n best by score, ties by ascending id.
    #[test]
    fn prop_top_matches_sorted_reference(a in set_strategy(), n in 0usize..30) {
        let mut reference: Vec<RankedEntry> = a
            .iter()
            .map(|(id, &score)| RankedEntry::new(id.clone(), score))
            .collect();
        reference.sort_by(|x, y| y.score.cmp(&x.score).then_with(|| x.doc_id.cmp(&y.doc_id)));
        reference.truncate(n);
        prop_assert_eq!(a.rank().top(n), reference);
    }
}
