//! Boolean queries against real and failing indexes.

use crate::common::{set, wiki_index};
use relevance::{search_all, DocId, IndexLookup, Maximum, Query, RelevanceSet, Score};
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

/// Index that errors on one term and records every term it is asked for.
struct Recording {
    inner: relevance::MemoryIndex,
    broken: &'static str,
    asked: RefCell<Vec<String>>,
}

#[derive(Debug, PartialEq)]
struct Outage(String);

impl IndexLookup for Recording {
    type Error = Outage;

    fn get_counts(&self, term: &str) -> Result<HashMap<DocId, Score>, Outage> {
        self.asked.borrow_mut().push(term.to_string());
        if term == self.broken {
            return Err(Outage(term.to_string()));
        }
        Ok(self.inner.get_counts(term).unwrap_or_default())
    }
}

fn recording(broken: &'static str) -> Recording {
    Recording {
        inner: wiki_index(),
        broken,
        asked: RefCell::new(Vec::new()),
    }
}

#[test]
fn test_and_not_query() {
    let query = Query::not(
        Query::and([Query::term("java"), Query::term("programming")]),
        Query::term("coffee"),
    );
    assert_eq!(query.to_string(), "(java AND programming) NOT coffee");

    let result = query.evaluate(&wiki_index()).unwrap();
    assert_eq!(
        result,
        set(&[("https://en.wikipedia.org/wiki/Java_(programming_language)", 48)])
    );
}

#[test]
fn test_or_query_matches_union() {
    let index = wiki_index();
    let query = Query::or([Query::term("java"), Query::term("coffee")]);

    let java = RelevanceSet::search("java", &index).unwrap();
    let coffee = RelevanceSet::search("coffee", &index).unwrap();
    assert_eq!(query.evaluate(&index).unwrap(), &java | &coffee);
}

#[test]
fn test_combiner_applies_to_every_merge() {
    let index = wiki_index();
    let query = Query::or([Query::term("java"), Query::term("coffee")]);

    let result = query.evaluate_with(&index, &Maximum).unwrap();
    assert_eq!(result.lookup("https://en.wikipedia.org/wiki/Coffee"), 25);
    assert_eq!(result.lookup("https://en.wikipedia.org/wiki/Java"), 12);
}

#[test]
fn test_lookup_error_propagates_unchanged() {
    let index = recording("programming");
    let query = Query::and([Query::term("java"), Query::term("programming")]);

    assert_eq!(query.evaluate(&index), Err(Outage("programming".to_string())));
}

#[test]
fn test_error_not_hidden_by_empty_branch() {
    // "haskell" matches nothing, so the AND is already empty when the
    // broken term is reached; the failure still surfaces.
    let index = recording("coffee");
    let query = Query::and([Query::term("haskell"), Query::term("coffee")]);

    assert_eq!(query.evaluate(&index), Err(Outage("coffee".to_string())));
    assert_eq!(*index.asked.borrow(), vec!["haskell".to_string(), "coffee".to_string()]);
}

#[test]
fn test_search_error_propagates() {
    let index = recording("java");
    assert_eq!(
        RelevanceSet::search("java", &index),
        Err(Outage("java".to_string()))
    );
}

#[test]
fn test_search_all_reports_earliest_failure() {
    struct AlwaysDown;

    impl IndexLookup for AlwaysDown {
        type Error = Outage;

        fn get_counts(&self, term: &str) -> Result<HashMap<DocId, Score>, Outage> {
            Err(Outage(term.to_string()))
        }
    }

    let err = search_all(&["first", "second", "third"], &AlwaysDown).unwrap_err();
    assert_eq!(err, Outage("first".to_string()));
}

#[test]
fn test_shared_index_through_arc() {
    let index = Arc::new(wiki_index());
    let query = Query::term("coffee");

    let via_arc = query.evaluate(&index).unwrap();
    let direct = query.evaluate(&*index).unwrap();
    assert_eq!(via_arc, direct);
}
