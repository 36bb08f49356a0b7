// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for boolean query evaluation.
//!
//! Builds a random query tree over a small vocabulary and checks it against a
//! brute-force evaluation: a document matches the tree iff the same boolean
//! formula holds over its term memberships.

#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use relevance::{MemoryIndex, Query};

const TERMS: [&str; 4] = ["alpha", "beta", "gamma", "delta"];
const DOCS: u8 = 6;

#[derive(Debug)]
struct QueryInput {
    postings: Vec<(u8, u8, u16)>,
    query: Query,
}

fn arbitrary_query(u: &mut Unstructured<'_>, depth: u8) -> arbitrary::Result<Query> {
    if depth == 0 || u.ratio(1, 3)? {
        let term = TERMS[u.int_in_range(0..=TERMS.len() - 1)?];
        return Ok(Query::term(term));
    }
    Ok(match u.int_in_range(0..=2)? {
        0 => {
            let n = u.int_in_range(0..=3)?;
            let children = (0..n)
                .map(|_| arbitrary_query(u, depth - 1))
                .collect::<arbitrary::Result<Vec<_>>>()?;
            Query::And(children)
        }
        1 => {
            let n = u.int_in_range(0..=3)?;
            let children = (0..n)
                .map(|_| arbitrary_query(u, depth - 1))
                .collect::<arbitrary::Result<Vec<_>>>()?;
            Query::Or(children)
        }
        _ => Query::not(arbitrary_query(u, depth - 1)?, arbitrary_query(u, depth - 1)?),
    })
}

impl<'a> Arbitrary<'a> for QueryInput {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let postings = Vec::<(u8, u8, u16)>::arbitrary(u)?;
        let query = arbitrary_query(u, 4)?;
        Ok(QueryInput { postings, query })
    }
}

fn matches(query: &Query, index: &MemoryIndex, doc: &str) -> bool {
    match query {
        Query::Term(term) => relevance::search(term, index)
            .map(|set| set.contains(doc))
            .unwrap_or(false),
        Query::And(children) => !children.is_empty() && children.iter().all(|c| matches(c, index, doc)),
        Query::Or(children) => children.iter().any(|c| matches(c, index, doc)),
        Query::Not { include, exclude } => matches(include, index, doc) && !matches(exclude, index, doc),
    }
}

fuzz_target!(|input: QueryInput| {
    let mut index = MemoryIndex::new();
    for &(term, doc, count) in &input.postings {
        let term = TERMS[term as usize % TERMS.len()];
        index.insert(term, format!("doc{}", doc % DOCS), count as u32);
    }

    let result = match input.query.evaluate(&index) {
        Ok(result) => result,
        Err(never) => match never {},
    };

    for doc in (0..DOCS).map(|d| format!("doc{}", d)) {
        assert_eq!(
            result.contains(&doc),
            matches(&input.query, &index, &doc),
            "query {} disagrees on {}",
            input.query,
            doc
        );
    }

    let ranking = result.rank();
    assert_eq!(ranking.len(), result.len());
});
