// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the set algebra and ranking.
//!
//! Arbitrary pairs of sets, full-range scores included, must keep the
//! membership rules of union/intersection/difference and always rank into a
//! complete, strictly ordered list. Scores near `u32::MAX` exercise the
//! saturating combiners.

#![no_main]

use libfuzzer_sys::fuzz_target;
use relevance::{compare_entries, Combiner, Maximum, Minimum, RelevanceSet, Score, Weighted};
use std::cmp::Ordering;

#[derive(Debug, arbitrary::Arbitrary)]
struct SetAlgebraInput {
    left: Vec<(u8, Score)>,
    right: Vec<(u8, Score)>,
    weights: (Score, Score),
}

fn build(pairs: &[(u8, Score)]) -> RelevanceSet {
    pairs.iter().map(|&(id, score)| (format!("d{}", id), score)).collect()
}

fn check_ranking(set: &RelevanceSet) {
    let ranking = set.rank();
    assert_eq!(ranking.len(), set.len());
    for entry in &ranking {
        assert_eq!(set.lookup(&entry.doc_id), entry.score);
        assert!(entry.score > 0);
    }
    for pair in ranking.as_slice().windows(2) {
        assert_eq!(compare_entries(&pair[0], &pair[1]), Ordering::Less);
    }
}

fuzz_target!(|input: SetAlgebraInput| {
    let a = build(&input.left);
    let b = build(&input.right);

    let union = a.union(&b);
    let intersection = a.intersection(&b);
    let difference = a.difference(&b);

    for id in a.doc_ids().chain(b.doc_ids()) {
        let (x, y) = (a.lookup(id), b.lookup(id));
        assert_eq!(union.lookup(id), x.saturating_add(y));
        assert_eq!(intersection.contains(id), x > 0 && y > 0);
        assert_eq!(difference.contains(id), x > 0 && y == 0);
    }
    assert_eq!(intersection.len() + difference.len(), a.len());

    for set in [&union, &intersection, &difference] {
        check_ranking(set);
    }

    let (l, r) = input.weights;
    let weighted = Weighted::new(l, r);
    for combiner in [&Maximum as &dyn Combiner, &Minimum, &weighted] {
        let custom = a.union_with(&b, combiner);
        for id in custom.doc_ids() {
            assert!(a.contains(id) || b.contains(id));
        }
        check_ranking(&custom);
        check_ranking(&a.intersection_with(&b, combiner));
    }

    let k = (input.left.len() % 8) + 1;
    let top = union.rank().top(k);
    assert!(top.len() <= k);
    for pair in top.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
});
