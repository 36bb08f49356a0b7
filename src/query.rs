// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Compound boolean queries as a tree.
//!
//! A `Query` is built in code, not parsed from text. Evaluation looks up each
//! `Term` leaf and folds the results with the set operators:
//!
//! ```text
//! Not { include: And[java, programming], exclude: Term(coffee) }
//!
//!            java ──┐
//!                   ├─ ∩ ──┐
//!     programming ──┘      ├─ − ──► RelevanceSet
//!          coffee ─────────┘
//! ```
//!
//! `And([])` and `Or([])` match nothing.

use crate::combine::{Additive, Combiner};
use crate::lookup::{search, IndexLookup};
use crate::set::RelevanceSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Documents containing the term.
    Term(String),
    /// Documents matching every sub-query.
    And(Vec<Query>),
    /// Documents matching any sub-query.
    Or(Vec<Query>),
    /// Documents matching `include` but not `exclude`.
    Not {
        include: Box<Query>,
        exclude: Box<Query>,
    },
}

impl Query {
    pub fn term(term: impl Into<String>) -> Self {
        Query::Term(term.into())
    }

    pub fn and(queries: impl IntoIterator<Item = Query>) -> Self {
        Query::And(queries.into_iter().collect())
    }

    pub fn or(queries: impl IntoIterator<Item = Query>) -> Self {
        Query::Or(queries.into_iter().collect())
    }

    pub fn not(include: Query, exclude: Query) -> Self {
        Query::Not {
            include: Box::new(include),
            exclude: Box::new(exclude),
        }
    }

    /// All distinct terms in the tree, in first-appearance order.
    pub fn terms(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_terms(&mut out);
        out
    }

    fn collect_terms<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Query::Term(term) => {
                if !out.contains(&term.as_str()) {
                    out.push(term);
                }
            }
            Query::And(children) | Query::Or(children) => {
                for child in children {
                    child.collect_terms(out);
                }
            }
            Query::Not { include, exclude } => {
                include.collect_terms(out);
                exclude.collect_terms(out);
            }
        }
    }

    /// Evaluate with the default additive scoring.
    pub fn evaluate<L>(&self, index: &L) -> Result<RelevanceSet, L::Error>
    where
        L: IndexLookup + ?Sized,
    {
        self.evaluate_with(index, &Additive)
    }

    /// Evaluate, merging shared documents with `combiner`.
    ///
    /// Every leaf is looked up, even when an earlier branch already came back
    /// empty. The first lookup error stops evaluation and is returned as-is.
    pub fn evaluate_with<L, C>(&self, index: &L, combiner: &C) -> Result<RelevanceSet, L::Error>
    where
        L: IndexLookup + ?Sized,
        C: Combiner + ?Sized,
    {
        match self {
            Query::Term(term) => search(term, index),
            Query::And(children) => {
                let mut children = children.iter();
                let Some(first) = children.next() else {
                    return Ok(RelevanceSet::empty());
                };
                let mut acc = first.evaluate_with(index, combiner)?;
                for child in children {
                    acc = acc.intersection_with(&child.evaluate_with(index, combiner)?, combiner);
                }
                Ok(acc)
            }
            Query::Or(children) => {
                let mut acc = RelevanceSet::empty();
                for child in children {
                    acc = acc.union_with(&child.evaluate_with(index, combiner)?, combiner);
                }
                Ok(acc)
            }
            Query::Not { include, exclude } => {
                let included = include.evaluate_with(index, combiner)?;
                let excluded = exclude.evaluate_with(index, combiner)?;
                Ok(included.difference(&excluded))
            }
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join(f: &mut fmt::Formatter<'_>, children: &[Query], op: &str) -> fmt::Result {
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    write!(f, " {} ", op)?;
                }
                match child {
                    Query::Term(_) => write!(f, "{}", child)?,
                    _ => write!(f, "({})", child)?,
                }
            }
            Ok(())
        }

        match self {
            Query::Term(term) => write!(f, "{}", term),
            Query::And(children) => join(f, children, "AND"),
            Query::Or(children) => join(f, children, "OR"),
            Query::Not { include, exclude } => {
                join(f, std::slice::from_ref(include.as_ref()), "")?;
                write!(f, " NOT ")?;
                join(f, std::slice::from_ref(exclude.as_ref()), "")
            }
        }
    }
}
