// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the relevance set invariants.
//!
//! These checks:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Fail at the operation that broke the invariant, not three calls later
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Invariant                                      |
//! |----------------------------|------------------------------------------------|
//! | `check_no_zero_scores`     | zero is absence: no stored entry has score 0   |
//! | `check_ranking_sorted`     | ranking is non-decreasing in (score, id)       |
//! | `check_ranking_complete`   | one ranking entry per stored document          |
//! | `check_subset`             | intersection/difference only keep left docs    |
//!
//! # Usage
//!
//! ```ignore
//! use relevance::contracts::*;
//!
//! // In debug builds, this panics if a zero-score entry slipped through
//! check_no_zero_scores(&scores);
//! ```

use crate::ranking::compare_entries;
use crate::types::{DocId, RankedEntry, Score};
use std::cmp::Ordering;
use std::collections::BTreeMap;

// ============================================================================
// SET CONTRACTS
// ============================================================================

/// Check that no entry stores an explicit zero.
///
/// # Panics (debug builds only)
/// Panics on the first document whose stored score is 0.
#[inline]
pub fn check_no_zero_scores(scores: &BTreeMap<DocId, Score>) {
    if cfg!(debug_assertions) {
        if let Some((doc_id, _)) = scores.iter().find(|(_, &score)| score == 0) {
            panic!(
                "Contract violation: zero-is-absence - '{}' stored with score 0",
                doc_id
            );
        }
    }
}

/// Check that every document of `result` also belongs to `left`.
///
/// Holds for intersection and difference, which only ever filter the left
/// operand.
#[inline]
pub fn check_subset(result: &BTreeMap<DocId, Score>, left: &BTreeMap<DocId, Score>) {
    if cfg!(debug_assertions) {
        for doc_id in result.keys() {
            debug_assert!(
                left.contains_key(doc_id),
                "Contract violation: result contains '{}' which is not in the left operand",
                doc_id
            );
        }
    }
}

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

/// Check that a ranking is sorted by (score, id) with no repeated ids.
///
/// Strictly increasing in the combined key: equal neighbours would mean the
/// same document was emitted twice.
#[inline]
pub fn check_ranking_sorted(entries: &[RankedEntry]) {
    for i in 1..entries.len() {
        debug_assert!(
            compare_entries(&entries[i - 1], &entries[i]) == Ordering::Less,
            "Contract violation: ranking out of order at position {}: {} then {}",
            i,
            entries[i - 1],
            entries[i]
        );
    }
}

/// Check that a ranking has exactly one entry per stored document.
#[inline]
pub fn check_ranking_complete(entries: &[RankedEntry], scores: &BTreeMap<DocId, Score>) {
    debug_assert_eq!(
        entries.len(),
        scores.len(),
        "Contract violation: ranking has {} entries for {} documents",
        entries.len(),
        scores.len()
    );
    if cfg!(debug_assertions) {
        for entry in entries {
            debug_assert_eq!(
                scores.get(&entry.doc_id),
                Some(&entry.score),
                "Contract violation: ranking entry {} does not match the set",
                entry
            );
        }
    }
}
