//! Boolean combination and ranking of keyword search results.
//!
//! An inverted index answers one question per term: which documents contain
//! it, and how often. This crate takes those per-term answers and does the
//! part that needs to be right: AND, OR and NOT over scored document sets, and
//! a ranking that comes out the same every time.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  lookup.rs   │────▶│    set.rs    │────▶│  ranking.rs  │
//! │ (IndexLookup,│     │(RelevanceSet:│     │  (Ranking,   │
//! │   search)    │     │  ∪  ∩  −)    │     │compare_entries)
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        ▲                    │
//!        │                    ▼
//! ┌──────────────┐     ┌──────────────┐
//! │  memory.rs   │     │  combine.rs  │
//! │ (MemoryIndex)│     │  (Combiner)  │
//! └──────────────┘     └──────────────┘
//! ```
//!
//! `query.rs` sits on top and evaluates a `Query` tree through the same calls.
//!
//! # Properties
//!
//! | Property          | Statement                                              |
//! |-------------------|--------------------------------------------------------|
//! | Zero is absence   | `lookup(id) == 0` ⇔ `id` not stored                    |
//! | Union totality    | `(a ∪ b).lookup(id) == a.lookup(id) + b.lookup(id)`    |
//! | Intersection      | `id ∈ a ∩ b` ⇔ `a.lookup(id) > 0 ∧ b.lookup(id) > 0`   |
//! | Difference        | `id ∈ a − b` ⇔ `a.lookup(id) > 0 ∧ b.lookup(id) == 0`  |
//! | Partition         | every doc of `a` is in exactly one of `a ∩ b`, `a − b` |
//! | Rank order        | ascending score, ties by ascending id, no duplicates   |
//!
//! Union totality is stated for the default [`Additive`] combiner.
//! `contracts` checks the structural ones in debug builds; `tests/property.rs`
//! checks all of them with proptest.
//!
//! # Usage
//!
//! ```
//! use relevance::{MemoryIndex, RelevanceSet};
//!
//! let mut index = MemoryIndex::new();
//! index.insert("java", "/wiki/Java", 12);
//! index.insert("java", "/wiki/Coffee", 3);
//! index.insert("programming", "/wiki/Java", 5);
//!
//! let java = RelevanceSet::search("java", &index).unwrap();
//! let programming = RelevanceSet::search("programming", &index).unwrap();
//!
//! let both = java.intersection(&programming);
//! assert_eq!(both.lookup("/wiki/Java"), 17);
//!
//! let ranked: Vec<_> = java.union(&programming).rank().into_iter().collect();
//! assert_eq!(ranked[0].doc_id, "/wiki/Coffee");
//! ```

// Module declarations
mod combine;
pub mod contracts;
pub mod error;
mod lookup;
mod memory;
mod query;
mod ranking;
mod set;
mod types;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use combine::{Additive, Combiner, Maximum, Minimum, Weighted};
pub use error::IndexError;
pub use lookup::{search, search_all, IndexLookup};
pub use memory::MemoryIndex;
pub use query::Query;
pub use ranking::{compare_entries, Ranking};
pub use set::RelevanceSet;
pub use types::{DocId, RankedEntry, Score};
