//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::memory::MemoryIndex;
use crate::set::RelevanceSet;
use crate::types::{RankedEntry, Score};

/// Build a relevance set from literal pairs.
///
/// This is the canonical implementation used across all tests.
pub fn set(pairs: &[(&str, Score)]) -> RelevanceSet {
    pairs.iter().map(|&(id, score)| (id, score)).collect()
}

/// Build the ranking a test expects, in the order given.
pub fn entries(pairs: &[(&str, Score)]) -> Vec<RankedEntry> {
    pairs
        .iter()
        .map(|&(id, score)| RankedEntry::new(id, score))
        .collect()
}

/// Build an index from `(term, doc, count)` triples.
pub fn index(triples: &[(&str, &str, Score)]) -> MemoryIndex {
    let mut index = MemoryIndex::new();
    for &(term, doc_id, count) in triples {
        index.insert(term, doc_id, count);
    }
    index
}
