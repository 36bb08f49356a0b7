// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Value types shared by the set algebra, the ranking and the lookup layer.
//!
//! Document identifiers are opaque strings (usually URLs). Scores are unsigned,
//! so "never negative" is a property of the type rather than something every
//! operator has to check.
//!
//! # Invariants
//!
//! - **Zero is absence**: a score of 0 and a missing key mean the same thing.
//!   Nothing in this crate stores an explicit zero.
//! - **Saturation**: arithmetic on scores saturates at `Score::MAX` instead of
//!   wrapping, so a sum can never turn into a small number.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Relevance score of one document for a term or compound query.
pub type Score = u32;

/// Opaque document identifier, e.g. a page URL.
pub type DocId = String;

/// One line of a ranking: a document and its score.
///
/// Entries order by score first, then by document identifier. That is the
/// ordering `rank()` uses, so sorting a `Vec<RankedEntry>` gives the same
/// sequence a `Ranking` would.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankedEntry {
    pub doc_id: DocId,
    pub score: Score,
}

impl RankedEntry {
    pub fn new(doc_id: impl Into<DocId>, score: Score) -> Self {
        RankedEntry {
            doc_id: doc_id.into(),
            score,
        }
    }
}

impl PartialOrd for RankedEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankedEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        crate::ranking::compare_entries(self, other)
    }
}

impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.doc_id, self.score)
    }
}

impl From<(DocId, Score)> for RankedEntry {
    fn from((doc_id, score): (DocId, Score)) -> Self {
        RankedEntry { doc_id, score }
    }
}
