// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The boundary to the inverted index.
//!
//! Everything this crate knows about storage is one method: give it a term,
//! get back `{doc_id → frequency}`. Whether that lives in Redis, a file, or a
//! `HashMap` built by a test is the implementor's business.
//!
//! ```text
//!   term ──► IndexLookup::get_counts ──► {doc → count} ──► RelevanceSet
//! ```
//!
//! # Contract for implementors
//!
//! - A term with no matches returns an empty map, not an error.
//! - Counts are opaque non-negative scores. Zero counts are allowed in the
//!   returned map and are dropped when the set is built.
//! - Real failures (storage down, connection reset) go in `Self::Error`. They
//!   propagate through [`search`] untouched: no retries, no partial results.

use crate::set::RelevanceSet;
use crate::types::{DocId, Score};
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Maps a single query term to its per-document frequencies.
pub trait IndexLookup {
    type Error;

    fn get_counts(&self, term: &str) -> Result<HashMap<DocId, Score>, Self::Error>;
}

impl<T: IndexLookup + ?Sized> IndexLookup for &T {
    type Error = T::Error;

    fn get_counts(&self, term: &str) -> Result<HashMap<DocId, Score>, Self::Error> {
        (**self).get_counts(term)
    }
}

impl<T: IndexLookup + ?Sized> IndexLookup for Box<T> {
    type Error = T::Error;

    fn get_counts(&self, term: &str) -> Result<HashMap<DocId, Score>, Self::Error> {
        (**self).get_counts(term)
    }
}

impl<T: IndexLookup + ?Sized> IndexLookup for Rc<T> {
    type Error = T::Error;

    fn get_counts(&self, term: &str) -> Result<HashMap<DocId, Score>, Self::Error> {
        (**self).get_counts(term)
    }
}

impl<T: IndexLookup + ?Sized> IndexLookup for Arc<T> {
    type Error = T::Error;

    fn get_counts(&self, term: &str) -> Result<HashMap<DocId, Score>, Self::Error> {
        (**self).get_counts(term)
    }
}

/// Look up one term and wrap its counts as a relevance set.
pub fn search<L>(term: &str, index: &L) -> Result<RelevanceSet, L::Error>
where
    L: IndexLookup + ?Sized,
{
    let counts = index.get_counts(term)?;
    log::debug!("lookup '{}': {} documents", term, counts.len());
    Ok(RelevanceSet::from(counts))
}

/// Look up several terms, one set per term in input order.
///
/// Lookups run on the rayon pool. If several fail, the error for the earliest
/// term is returned, same as the sequential build.
#[cfg(feature = "parallel")]
pub fn search_all<L, S>(terms: &[S], index: &L) -> Result<Vec<RelevanceSet>, L::Error>
where
    L: IndexLookup + Sync + ?Sized,
    L::Error: Send,
    S: AsRef<str> + Sync,
{
    let results: Vec<Result<RelevanceSet, L::Error>> = terms
        .par_iter()
        .map(|term| search(term.as_ref(), index))
        .collect();
    results.into_iter().collect()
}

/// Look up several terms, one set per term in input order.
#[cfg(not(feature = "parallel"))]
pub fn search_all<L, S>(terms: &[S], index: &L) -> Result<Vec<RelevanceSet>, L::Error>
where
    L: IndexLookup + ?Sized,
    S: AsRef<str>,
{
    terms
        .iter()
        .map(|term| search(term.as_ref(), index))
        .collect()
}
