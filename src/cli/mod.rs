// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the relevance command-line interface.
//!
//! Two subcommands over a JSON index file: `demo` runs two term searches and
//! prints each of them plus their AND and OR, and `query` combines any number
//! of required, optional and excluded terms. Queries are assembled from flags;
//! there is no query language to parse.

pub mod display;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use relevance::{Additive, Combiner, Maximum, Minimum, Query};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "relevance",
    about = "Boolean keyword search over a term-frequency index",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args)]
pub struct IndexArgs {
    /// JSON index file: {"term": {"doc": count}}
    #[arg(short, long, env = "RELEVANCE_INDEX")]
    pub index: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search two terms and show each result, their AND, and their OR
    Demo {
        #[command(flatten)]
        index: IndexArgs,

        /// First term
        first: String,

        /// Second term
        second: String,
    },

    /// Combine required, optional and excluded terms
    Query {
        #[command(flatten)]
        index: IndexArgs,

        /// Term every result must contain (repeatable)
        #[arg(long = "all", value_name = "TERM")]
        all: Vec<String>,

        /// Term of which at least one must match (repeatable)
        #[arg(long = "any", value_name = "TERM")]
        any: Vec<String>,

        /// Term no result may contain (repeatable)
        #[arg(long = "none", value_name = "TERM")]
        none: Vec<String>,

        /// How scores combine when a document matches several terms
        #[arg(long, value_enum, default_value_t = CombineMode::Add)]
        combine: CombineMode,

        /// Show only the N best results, best first
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Scoring policy selectable from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CombineMode {
    /// Sum the scores (default)
    Add,
    /// Keep the highest score
    Max,
    /// Keep the lowest score
    Min,
}

impl CombineMode {
    pub fn combiner(self) -> &'static dyn Combiner {
        match self {
            CombineMode::Add => &Additive,
            CombineMode::Max => &Maximum,
            CombineMode::Min => &Minimum,
        }
    }
}

/// `(all₁ AND all₂ AND (any₁ OR any₂)) NOT (none₁ OR none₂)`.
///
/// Returns `None` when no positive term was given: excluding terms from
/// nothing would always be empty.
pub fn build_query(all: &[String], any: &[String], none: &[String]) -> Option<Query> {
    let mut required: Vec<Query> = all.iter().map(Query::term).collect();
    match any.len() {
        0 => {}
        1 => required.push(Query::term(&any[0])),
        _ => required.push(Query::or(any.iter().map(Query::term))),
    }

    let positive = match required.len() {
        0 => return None,
        1 => required.remove(0),
        _ => Query::And(required),
    };

    Some(match none.len() {
        0 => positive,
        1 => Query::not(positive, Query::term(&none[0])),
        _ => Query::not(positive, Query::or(none.iter().map(Query::term))),
    })
}
