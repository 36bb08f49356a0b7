// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Relevance sets: per-document scores and the boolean algebra over them.
//!
//! A `RelevanceSet` is what one term lookup returns, and also what every
//! combination of lookups returns. `java AND programming` is
//! `java.intersection(&programming)`; `java OR programming` is a union;
//! `java NOT coffee` is a difference. Because the result has the same type as
//! the inputs, compound queries are just nested calls.
//!
//! # Membership vs. score
//!
//! | Operation      | Keeps doc when                 | Score of kept doc          |
//! |----------------|--------------------------------|----------------------------|
//! | `union`        | `a > 0 ∨ b > 0`                | `combine(a, b)` or the one that exists |
//! | `intersection` | `a > 0 ∧ b > 0`                | `combine(a, b)`            |
//! | `difference`   | `a > 0 ∧ b = 0`                | `a`                        |
//!
//! where `a = self.lookup(doc)`, `b = other.lookup(doc)`. The `_with` variants
//! take any [`Combiner`]; the plain ones use [`Additive`].
//!
//! # Ownership
//!
//! Sets own their scores. Every operator builds a fresh map, so a result never
//! shares storage with its operands and operands are never touched.

use crate::combine::{Additive, Combiner};
use crate::contracts::{check_no_zero_scores, check_ranking_complete, check_subset};
use crate::lookup::IndexLookup;
use crate::ranking::Ranking;
use crate::types::{DocId, Score};
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, Entry};
use std::collections::{BTreeMap, HashMap};
use std::ops::{BitAnd, BitOr, Sub};

/// Document scores for one term or one compound query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<DocId, Score>", into = "BTreeMap<DocId, Score>")]
pub struct RelevanceSet {
    scores: BTreeMap<DocId, Score>,
}

impl RelevanceSet {
    /// The set that matches nothing.
    pub fn empty() -> Self {
        RelevanceSet::default()
    }

    /// Wrap an owned map, dropping zero-score entries.
    fn from_map(mut scores: BTreeMap<DocId, Score>) -> Self {
        scores.retain(|_, score| *score > 0);
        check_no_zero_scores(&scores);
        RelevanceSet { scores }
    }

    /// Look up a document's score. Absent documents score 0.
    #[inline]
    pub fn lookup(&self, doc_id: &str) -> Score {
        self.scores.get(doc_id).copied().unwrap_or(0)
    }

    /// Whether the document has a non-zero score.
    #[inline]
    pub fn contains(&self, doc_id: &str) -> bool {
        self.scores.contains_key(doc_id)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Iterate (id, score) pairs in id order.
    pub fn iter(&self) -> btree_map::Iter<'_, DocId, Score> {
        self.scores.iter()
    }

    pub fn doc_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.scores.keys().map(String::as_str)
    }

    /// Sum of all scores, widened so it cannot overflow.
    pub fn total_score(&self) -> u64 {
        self.scores.values().map(|&s| u64::from(s)).sum()
    }

    // =========================================================================
    // SET ALGEBRA
    // =========================================================================

    /// OR: every document in either set, shared documents summed.
    pub fn union(&self, other: &RelevanceSet) -> RelevanceSet {
        self.union_with(other, &Additive)
    }

    /// OR with a custom scoring policy for shared documents.
    pub fn union_with<C: Combiner + ?Sized>(&self, other: &RelevanceSet, combiner: &C) -> RelevanceSet {
        let mut scores = self.scores.clone();
        for (doc_id, &theirs) in &other.scores {
            match scores.entry(doc_id.clone()) {
                Entry::Occupied(mut entry) => {
                    let ours = *entry.get();
                    entry.insert(combiner.combine(ours, theirs));
                }
                Entry::Vacant(entry) => {
                    entry.insert(theirs);
                }
            }
        }
        log::trace!(
            "union: {} ∪ {} -> {} docs",
            self.len(),
            other.len(),
            scores.len()
        );
        RelevanceSet::from_map(scores)
    }

    /// AND: documents present in both sets, scores summed.
    pub fn intersection(&self, other: &RelevanceSet) -> RelevanceSet {
        self.intersection_with(other, &Additive)
    }

    /// AND with a custom scoring policy.
    pub fn intersection_with<C: Combiner + ?Sized>(
        &self,
        other: &RelevanceSet,
        combiner: &C,
    ) -> RelevanceSet {
        let scores: BTreeMap<DocId, Score> = self
            .scores
            .iter()
            .filter_map(|(doc_id, &ours)| match other.lookup(doc_id) {
                0 => None,
                theirs => Some((doc_id.clone(), combiner.combine(ours, theirs))),
            })
            .collect();
        check_subset(&scores, &self.scores);
        log::trace!(
            "intersection: {} ∩ {} -> {} docs",
            self.len(),
            other.len(),
            scores.len()
        );
        RelevanceSet::from_map(scores)
    }

    /// NOT: documents of `self` that `other` does not contain, scores untouched.
    ///
    /// `a.difference(&b)` is generally not `b.difference(&a)`.
    pub fn difference(&self, other: &RelevanceSet) -> RelevanceSet {
        let scores: BTreeMap<DocId, Score> = self
            .scores
            .iter()
            .filter(|(doc_id, _)| other.lookup(doc_id) == 0)
            .map(|(doc_id, &score)| (doc_id.clone(), score))
            .collect();
        check_subset(&scores, &self.scores);
        log::trace!(
            "difference: {} - {} -> {} docs",
            self.len(),
            other.len(),
            scores.len()
        );
        RelevanceSet::from_map(scores)
    }

    // =========================================================================
    // RANKING
    // =========================================================================

    /// Rank by ascending score, ties by ascending document id.
    ///
    /// Recomputed on every call from a copy of the scores.
    pub fn rank(&self) -> Ranking {
        let ranking = Ranking::from_pairs(self.scores.iter());
        check_ranking_complete(ranking.as_slice(), &self.scores);
        ranking
    }

    // =========================================================================
    // CONSTRUCTION FROM AN INDEX
    // =========================================================================

    /// Look up one term and wrap the result.
    ///
    /// Lookup errors come back exactly as the index reported them.
    pub fn search<L>(term: &str, index: &L) -> Result<RelevanceSet, L::Error>
    where
        L: IndexLookup + ?Sized,
    {
        crate::lookup::search(term, index)
    }

    pub fn into_inner(self) -> BTreeMap<DocId, Score> {
        self.scores
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl From<BTreeMap<DocId, Score>> for RelevanceSet {
    fn from(scores: BTreeMap<DocId, Score>) -> Self {
        RelevanceSet::from_map(scores)
    }
}

impl From<HashMap<DocId, Score>> for RelevanceSet {
    fn from(scores: HashMap<DocId, Score>) -> Self {
        RelevanceSet::from_map(scores.into_iter().collect())
    }
}

impl From<RelevanceSet> for BTreeMap<DocId, Score> {
    fn from(set: RelevanceSet) -> Self {
        set.scores
    }
}

/// Later pairs overwrite earlier ones with the same id, like collecting into a map.
impl<K: Into<DocId>> FromIterator<(K, Score)> for RelevanceSet {
    fn from_iter<I: IntoIterator<Item = (K, Score)>>(iter: I) -> Self {
        RelevanceSet::from_map(iter.into_iter().map(|(k, s)| (k.into(), s)).collect())
    }
}

impl<'a> IntoIterator for &'a RelevanceSet {
    type Item = (&'a DocId, &'a Score);
    type IntoIter = btree_map::Iter<'a, DocId, Score>;

    fn into_iter(self) -> Self::IntoIter {
        self.scores.iter()
    }
}

// =============================================================================
// OPERATORS
// =============================================================================

impl BitOr for &RelevanceSet {
    type Output = RelevanceSet;

    fn bitor(self, rhs: &RelevanceSet) -> RelevanceSet {
        self.union(rhs)
    }
}

impl BitAnd for &RelevanceSet {
    type Output = RelevanceSet;

    fn bitand(self, rhs: &RelevanceSet) -> RelevanceSet {
        self.intersection(rhs)
    }
}

impl Sub for &RelevanceSet {
    type Output = RelevanceSet;

    fn sub(self, rhs: &RelevanceSet) -> RelevanceSet {
        self.difference(rhs)
    }
}
