//! Shared test utilities and fixtures.

#![allow(dead_code)]

use proptest::prelude::*;
use relevance::{compare_entries, MemoryIndex, RankedEntry, RelevanceSet, Score};
use std::cmp::Ordering;
use std::collections::BTreeMap;

// Re-export canonical test utilities from relevance::testing
pub use relevance::testing::{entries, index, set};

// ============================================================================
// FIXTURES
// ============================================================================

/// A small wiki-like index: a few pages, overlapping terms, tied scores.
pub fn wiki_index() -> MemoryIndex {
    index(&[
        ("java", "https://en.wikipedia.org/wiki/Java", 12),
        ("java", "https://en.wikipedia.org/wiki/Java_(programming_language)", 30),
        ("java", "https://en.wikipedia.org/wiki/Coffee", 4),
        ("java", "https://en.wikipedia.org/wiki/Indonesia", 4),
        ("programming", "https://en.wikipedia.org/wiki/Java_(programming_language)", 18),
        ("programming", "https://en.wikipedia.org/wiki/Python_(programming_language)", 22),
        ("programming", "https://en.wikipedia.org/wiki/Computer_programming", 40),
        ("coffee", "https://en.wikipedia.org/wiki/Coffee", 25),
        ("coffee", "https://en.wikipedia.org/wiki/Java", 2),
    ])
}

/// The same fixture as JSON, in the on-disk index format.
pub const WIKI_JSON: &str = r#"{
  "java": {
    "https://en.wikipedia.org/wiki/Java": 12,
    "https://en.wikipedia.org/wiki/Java_(programming_language)": 30,
    "https://en.wikipedia.org/wiki/Coffee": 4,
    "https://en.wikipedia.org/wiki/Indonesia": 4
  },
  "programming": {
    "https://en.wikipedia.org/wiki/Java_(programming_language)": 18,
    "https://en.wikipedia.org/wiki/Python_(programming_language)": 22,
    "https://en.wikipedia.org/wiki/Computer_programming": 40
  },
  "coffee": {
    "https://en.wikipedia.org/wiki/Coffee": 25,
    "https://en.wikipedia.org/wiki/Java": 2
  }
}"#;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Document ids from a small pool so that random sets overlap often.
pub fn doc_id_strategy() -> impl Strategy<Value = String> {
    (0u8..24).prop_map(|n| format!("doc{:02}", n))
}

/// Scores small enough that sums never saturate.
pub fn score_strategy() -> impl Strategy<Value = Score> {
    0u32..1_000
}

/// Raw (id, score) pairs, zeros and duplicates included.
pub fn pairs_strategy() -> impl Strategy<Value = Vec<(String, Score)>> {
    prop::collection::vec((doc_id_strategy(), score_strategy()), 0..20)
}

pub fn set_strategy() -> impl Strategy<Value = RelevanceSet> {
    pairs_strategy().prop_map(|pairs| pairs.into_iter().collect())
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Every id any of the given sets mentions, plus one none of them do.
pub fn universe(sets: &[&RelevanceSet]) -> Vec<String> {
    let mut ids: Vec<String> = sets
        .iter()
        .flat_map(|s| s.doc_ids().map(String::from))
        .collect();
    ids.push("never-indexed".to_string());
    ids.sort();
    ids.dedup();
    ids
}

/// Check the ranking invariants against the set it came from.
pub fn assert_ranking_well_formed(set: &RelevanceSet, ranking: &[RankedEntry]) {
    assert_eq!(ranking.len(), set.len(), "ranking must have one entry per document");

    let mut seen: BTreeMap<&str, Score> = BTreeMap::new();
    for entry in ranking {
        assert!(
            seen.insert(entry.doc_id.as_str(), entry.score).is_none(),
            "duplicate entry for {}",
            entry.doc_id
        );
        assert_eq!(set.lookup(&entry.doc_id), entry.score, "score mismatch for {}", entry.doc_id);
    }

    for pair in ranking.windows(2) {
        assert_eq!(
            compare_entries(&pair[0], &pair[1]),
            Ordering::Less,
            "ranking out of order: {} then {}",
            pair[0],
            pair[1]
        );
    }
}
