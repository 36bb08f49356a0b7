// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring policy: how two scores for the same document become one.
//!
//! Set membership and scoring are separate concerns. `union` and `intersection`
//! decide *which* documents survive; a [`Combiner`] decides *what score* a
//! document gets when both operands know about it. Swapping the policy never
//! changes membership, only numbers.
//!
//! | Combiner     | Result               | Commutative | Associative |
//! |--------------|----------------------|-------------|-------------|
//! | `Additive`   | `a + b` (saturating) | yes         | yes         |
//! | `Maximum`    | `max(a, b)`          | yes         | yes         |
//! | `Minimum`    | `min(a, b)`          | yes         | yes         |
//! | `Weighted`   | `l*a + r*b`          | iff `l == r`| no          |
//!
//! Any `Fn(Score, Score) -> Score` is a combiner too, so one-off policies don't
//! need a type.

use crate::types::Score;

/// Merges the scores a document has in the left and right operand.
///
/// Called only for documents present in both operands, so both arguments are
/// non-zero. A result of 0 removes the document from the combined set.
pub trait Combiner {
    fn combine(&self, left: Score, right: Score) -> Score;
}

impl<F> Combiner for F
where
    F: Fn(Score, Score) -> Score,
{
    #[inline]
    fn combine(&self, left: Score, right: Score) -> Score {
        self(left, right)
    }
}

/// Default policy: relevance is the sum of the term frequencies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Additive;

impl Combiner for Additive {
    #[inline]
    fn combine(&self, left: Score, right: Score) -> Score {
        left.saturating_add(right)
    }
}

/// Keep the stronger of the two matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Maximum;

impl Combiner for Maximum {
    #[inline]
    fn combine(&self, left: Score, right: Score) -> Score {
        left.max(right)
    }
}

/// Keep the weaker of the two matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Minimum;

impl Combiner for Minimum {
    #[inline]
    fn combine(&self, left: Score, right: Score) -> Score {
        left.min(right)
    }
}

/// Linear blend with separate weights for each side.
///
/// Not symmetric unless the weights match: `a.union_with(&b, &w)` and
/// `b.union_with(&a, &w)` differ when `left != right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weighted {
    pub left: Score,
    pub right: Score,
}

impl Weighted {
    pub fn new(left: Score, right: Score) -> Self {
        Weighted { left, right }
    }
}

impl Combiner for Weighted {
    #[inline]
    fn combine(&self, left: Score, right: Score) -> Score {
        left.saturating_mul(self.left)
            .saturating_add(right.saturating_mul(self.right))
    }
}
