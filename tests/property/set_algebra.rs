//! Membership and score laws for union, intersection and difference.

use crate::common::{set_strategy, universe};
use proptest::prelude::*;
use relevance::RelevanceSet;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Absent ids score 0 and nothing stored is 0.
    #[test]
    fn prop_lookup_zero_iff_absent(a in set_strategy()) {
        for id in universe(&[&a]) {
            prop_assert_eq!(a.lookup(&id) == 0, !a.contains(&id));
        }
        for (_, &score) in &a {
            prop_assert!(score > 0);
        }
    }

    #[test]
    fn prop_union_commutative(a in set_strategy(), b in set_strategy()) {
        prop_assert_eq!(a.union(&b), b.union(&a));
    }

    #[test]
    fn prop_union_associative(a in set_strategy(), b in set_strategy(), c in set_strategy()) {
        prop_assert_eq!(a.union(&b).union(&c), a.union(&b.union(&c)));
    }

    /// (A ∪ B).lookup(id) = A.lookup(id) + B.lookup(id) for every id.
    #[test]
    fn prop_union_totality(a in set_strategy(), b in set_strategy()) {
        let u = a.union(&b);
        for id in universe(&[&a, &b]) {
            prop_assert_eq!(u.lookup(&id), a.lookup(&id) + b.lookup(&id), "id {}", id);
        }
    }

    /// A ∪ A doubles every score.
    #[test]
    fn prop_union_with_self_doubles(a in set_strategy()) {
        let doubled = a.union(&a);
        prop_assert_eq!(doubled.len(), a.len());
        for (id, &score) in &a {
            prop_assert_eq!(doubled.lookup(id), score * 2);
        }
    }

    #[test]
    fn prop_intersection_membership(a in set_strategy(), b in set_strategy()) {
        let i = a.intersection(&b);
        for id in universe(&[&a, &b]) {
            let expected = a.lookup(&id) > 0 && b.lookup(&id) > 0;
            prop_assert_eq!(i.contains(&id), expected, "id {}", id);
            if expected {
                prop_assert_eq!(i.lookup(&id), a.lookup(&id) + b.lookup(&id));
            }
        }
    }

    #[test]
    fn prop_intersection_commutative(a in set_strategy(), b in set_strategy()) {
        prop_assert_eq!(a.intersection(&b), b.intersection(&a));
    }

    #[test]
    fn prop_difference_membership_and_scores(a in set_strategy(), b in set_strategy()) {
        let d = a.difference(&b);
        for id in universe(&[&a, &b]) {
            let expected = a.lookup(&id) > 0 && b.lookup(&id) == 0;
            prop_assert_eq!(d.contains(&id), expected, "id {}", id);
            if expected {
                prop_assert_eq!(d.lookup(&id), a.lookup(&id));
            }
        }
    }

    /// Every document of A lands in exactly one of A ∩ B and A − B.
    #[test]
    fn prop_intersection_difference_partition(a in set_strategy(), b in set_strategy()) {
        let i = a.intersection(&b);
        let d = a.difference(&b);
        for id in a.doc_ids() {
            prop_assert!(i.contains(id) ^ d.contains(id), "id {} not in exactly one side", id);
        }
        prop_assert_eq!(i.len() + d.len(), a.len());
    }

    #[test]
    fn prop_empty_operand_identities(a in set_strategy()) {
        let empty = RelevanceSet::empty();
        prop_assert_eq!(a.union(&empty), a.clone());
        prop_assert_eq!(a.intersection(&empty), empty.clone());
        prop_assert_eq!(a.difference(&empty), a.clone());
        prop_assert_eq!(empty.difference(&a), empty);
    }

    /// Combinators never modify their operands.
    #[test]
    fn prop_operands_unchanged(a in set_strategy(), b in set_strategy()) {
        let (a0, b0) = (a.clone(), b.clone());
        let _ = (a.union(&b), a.intersection(&b), a.difference(&b));
        prop_assert_eq!(a, a0);
        prop_assert_eq!(b, b0);
    }

    /// Insertion order of the source pairs does not matter.
    #[test]
    fn prop_construction_order_irrelevant(
        pairs in prop::collection::btree_map(crate::common::doc_id_strategy(), 1u32..1000, 0..20)
    ) {
        let forward: RelevanceSet = pairs.iter().map(|(k, &v)| (k.clone(), v)).collect();
        let backward: RelevanceSet = pairs.iter().rev().map(|(k, &v)| (k.clone(), v)).collect();
        prop_assert_eq!(forward, backward);
    }
}
