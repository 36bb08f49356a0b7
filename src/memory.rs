// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! An index that lives in a `HashMap`.
//!
//! Good for tests, demos, and anything small enough to load whole. The on-disk
//! form is the same shape the lookup returns, one level deeper:
//!
//! ```json
//! {
//!   "java":        { "/wiki/Java": 12, "/wiki/Coffee": 1 },
//!   "programming": { "/wiki/Java": 4,  "/wiki/Python": 9 }
//! }
//! ```
//!
//! Terms are matched exactly. Tokenizing and case folding happen before
//! anything reaches this index.

use crate::error::{IndexError, Result};
use crate::lookup::IndexLookup;
use crate::types::{DocId, Score};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::convert::Infallible;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// In-memory `term → {doc → count}` index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryIndex {
    terms: HashMap<String, HashMap<DocId, Score>>,
}

impl MemoryIndex {
    pub fn new() -> Self {
        MemoryIndex::default()
    }

    /// Record `count` more occurrences of `term` in `doc_id`.
    ///
    /// Counts accumulate (saturating). A zero count records nothing.
    pub fn insert(&mut self, term: impl Into<String>, doc_id: impl Into<DocId>, count: Score) {
        if count == 0 {
            return;
        }
        let slot = self
            .terms
            .entry(term.into())
            .or_default()
            .entry(doc_id.into())
            .or_insert(0);
        *slot = slot.saturating_add(count);
    }

    /// Count each already-tokenized term of a document.
    pub fn add_document<I, S>(&mut self, doc_id: &str, terms: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for term in terms {
            self.insert(term.as_ref(), doc_id, 1);
        }
    }

    /// Number of distinct terms.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    /// Load an index from JSON.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let index: MemoryIndex = serde_json::from_reader(reader)?;
        log::debug!("loaded index with {} terms", index.term_count());
        Ok(index)
    }

    /// Load an index from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_reader(BufReader::new(file))
    }
}

impl IndexLookup for MemoryIndex {
    type Error = Infallible;

    fn get_counts(&self, term: &str) -> std::result::Result<HashMap<DocId, Score>, Infallible> {
        Ok(self.terms.get(term).cloned().unwrap_or_default())
    }
}
