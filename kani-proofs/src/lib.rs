// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for relevance scoring primitives.
//!
//! This standalone crate extracts the score combiners and the ranking
//! comparator and proves their algebraic properties using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No overflow**: no combiner panics for any pair of scores
//! 2. **Commutativity**: additive, max and min ignore operand order
//! 3. **Monotonicity**: additive never scores below either input
//! 4. **Total order**: the ranking comparator is antisymmetric and transitive,
//!    and only calls two entries equal when score and id both match

use std::cmp::Ordering;

pub type Score = u32;

// ============================================================================
// COMBINERS (copied from src/combine.rs)
// ============================================================================

pub fn additive(left: Score, right: Score) -> Score {
    left.saturating_add(right)
}

pub fn maximum(left: Score, right: Score) -> Score {
    left.max(right)
}

pub fn minimum(left: Score, right: Score) -> Score {
    left.min(right)
}

pub fn weighted(left: Score, right: Score, left_weight: Score, right_weight: Score) -> Score {
    left.saturating_mul(left_weight)
        .saturating_add(right.saturating_mul(right_weight))
}

// ============================================================================
// RANKING ORDER (copied from src/ranking.rs)
// ============================================================================

/// A ranked entry with the id reduced to an integer key. The comparator only
/// needs `Ord` on ids, so this keeps the state space finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub id: u16,
    pub score: Score,
}

/// Score ascending, then id ascending.
pub fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    match a.score.cmp(&b.score) {
        Ordering::Equal => a.id.cmp(&b.id),
        ord => ord,
    }
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    fn any_entry() -> Entry {
        Entry {
            id: kani::any(),
            score: kani::any(),
        }
    }

    /// Verify additive is commutative and saturates instead of wrapping.
    #[kani::proof]
    fn verify_additive_commutative_and_saturating() {
        let a: Score = kani::any();
        let b: Score = kani::any();

        let sum = additive(a, b);
        kani::assert(sum == additive(b, a), "additive must be commutative");
        kani::assert(sum >= a && sum >= b, "additive must never lower a score");

        let exact = a as u64 + b as u64;
        if exact <= Score::MAX as u64 {
            kani::assert(sum as u64 == exact, "additive must be exact below the cap");
        } else {
            kani::assert(sum == Score::MAX, "additive must saturate at the cap");
        }
    }

    /// Verify additive is associative, so fold order cannot change a score.
    #[kani::proof]
    fn verify_additive_associative() {
        let a: Score = kani::any();
        let b: Score = kani::any();
        let c: Score = kani::any();

        kani::assert(
            additive(additive(a, b), c) == additive(a, additive(b, c)),
            "additive must be associative",
        );
    }

    /// Verify max and min are commutative, idempotent, and pick an input.
    #[kani::proof]
    fn verify_max_min_properties() {
        let a: Score = kani::any();
        let b: Score = kani::any();

        kani::assert(maximum(a, b) == maximum(b, a), "max must be commutative");
        kani::assert(minimum(a, b) == minimum(b, a), "min must be commutative");
        kani::assert(maximum(a, a) == a, "max must be idempotent");
        kani::assert(minimum(a, a) == a, "min must be idempotent");

        let hi = maximum(a, b);
        let lo = minimum(a, b);
        kani::assert(hi == a || hi == b, "max must return one of its inputs");
        kani::assert(lo == a || lo == b, "min must return one of its inputs");
        kani::assert(lo <= hi, "min must not exceed max");
    }

    /// Verify weighted never panics and only produces zero from zero inputs.
    #[kani::proof]
    fn verify_weighted_no_panic() {
        let a: Score = kani::any();
        let b: Score = kani::any();
        let l: Score = kani::any();
        let r: Score = kani::any();

        let score = weighted(a, b, l, r);
        if a > 0 && l > 0 {
            kani::assert(score > 0, "positive weighted input must stay positive");
        }
    }

    /// Verify the comparator is antisymmetric and equal only on identity.
    #[kani::proof]
    fn verify_compare_antisymmetric() {
        let a = any_entry();
        let b = any_entry();

        kani::assert(
            compare_entries(&a, &b) == compare_entries(&b, &a).reverse(),
            "compare must be antisymmetric",
        );
        kani::assert(
            (compare_entries(&a, &b) == Ordering::Equal) == (a == b),
            "compare must only tie identical entries",
        );
    }

    /// Verify the comparator is transitive.
    #[kani::proof]
    fn verify_compare_transitive() {
        let a = any_entry();
        let b = any_entry();
        let c = any_entry();

        if compare_entries(&a, &b) == Ordering::Less && compare_entries(&b, &c) == Ordering::Less {
            kani::assert(
                compare_entries(&a, &c) == Ordering::Less,
                "compare must be transitive",
            );
        }
    }
}
