// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how a relevance set becomes an ordered list.
//!
//! Ranking works on a snapshot. The (id, score) pairs are copied out of the
//! set into a `Vec` and that `Vec` is sorted, so nothing done to the ranking
//! can reach back into the set it came from.
//!
//! Sort order:
//! 1. **Score** ascending
//! 2. **Doc ID** ascending, the tiebreaker that makes output reproducible
//!
//! Comparison is by value on both keys. Two documents with the same score are
//! always adjacent and always in the same relative order, however many of them
//! share that score.

use crate::contracts::check_ranking_sorted;
use crate::types::{DocId, RankedEntry, Score};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Compare two entries for ranking: score first, then document identifier.
///
/// # Example
///
/// ```
/// use relevance::{compare_entries, RankedEntry};
/// use std::cmp::Ordering;
///
/// let low = RankedEntry::new("zeta", 3);
/// let high = RankedEntry::new("alpha", 7);
/// assert_eq!(compare_entries(&low, &high), Ordering::Less);
///
/// // Equal scores fall back to the id
/// let a = RankedEntry::new("doc2", 7);
/// let b = RankedEntry::new("doc3", 7);
/// assert_eq!(compare_entries(&a, &b), Ordering::Less);
/// ```
pub fn compare_entries(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    match a.score.cmp(&b.score) {
        Ordering::Equal => a.doc_id.cmp(&b.doc_id),
        ord => ord,
    }
}

/// Order for "best first" listings: score descending, then id ascending.
fn compare_best_first(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    match b.score.cmp(&a.score) {
        Ordering::Equal => a.doc_id.cmp(&b.doc_id),
        ord => ord,
    }
}

/// An ordered, owned list of ranked entries.
///
/// Iterating is restartable: `iter()` can be called any number of times and
/// always yields the same sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ranking {
    entries: Vec<RankedEntry>,
}

impl Ranking {
    /// Build a ranking from (id, score) pairs.
    ///
    /// Callers pass unique ids; `RelevanceSet` guarantees that by construction.
    pub(crate) fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a DocId, &'a Score)>,
    {
        let mut entries: Vec<RankedEntry> = pairs
            .into_iter()
            .map(|(doc_id, &score)| RankedEntry::new(doc_id.clone(), score))
            .collect();
        // Ids are unique, so an unstable sort is still fully determined
        entries.sort_unstable_by(compare_entries);
        check_ranking_sorted(&entries);
        Ranking { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedEntry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn first(&self) -> Option<&RankedEntry> {
        self.entries.first()
    }

    pub fn last(&self) -> Option<&RankedEntry> {
        self.entries.last()
    }

    /// The `n` highest-scoring entries, best first.
    ///
    /// Ties still break by ascending id, so this is *not* simply the tail of
    /// the ranking reversed: among equal scores `doc2` comes before `doc3` in
    /// both directions.
    pub fn top(&self, n: usize) -> Vec<RankedEntry> {
        let mut best = self.entries.clone();
        best.sort_unstable_by(compare_best_first);
        best.truncate(n);
        best
    }

    pub fn into_vec(self) -> Vec<RankedEntry> {
        self.entries
    }
}

impl IntoIterator for Ranking {
    type Item = RankedEntry;
    type IntoIter = std::vec::IntoIter<RankedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Ranking {
    type Item = &'a RankedEntry;
    type IntoIter = std::slice::Iter<'a, RankedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
