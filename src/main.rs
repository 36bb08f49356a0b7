use anyhow::{bail, Context, Result};
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;
use std::path::Path;

use relevance::{MemoryIndex, RankedEntry};

mod cli;
use cli::display::print_ranking;
use cli::{build_query, Cli, CombineMode, Commands};

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let result = match cli.command {
        Commands::Demo {
            index,
            first,
            second,
        } => run_demo(&index.index, &first, &second),
        Commands::Query {
            index,
            all,
            any,
            none,
            combine,
            limit,
            json,
        } => run_query(&index.index, &all, &any, &none, combine, limit, json),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn load_index(path: &Path) -> Result<MemoryIndex> {
    let index = MemoryIndex::from_json_file(path)
        .with_context(|| format!("loading index {}", path.display()))?;
    log::info!("{} terms in {}", index.term_count(), path.display());
    Ok(index)
}

/// Two searches, then AND and OR, each printed in ascending order.
fn run_demo(path: &Path, first: &str, second: &str) -> Result<()> {
    let index = load_index(path)?;

    let terms = [first, second];
    let sets = relevance::search_all(&terms, &index)?;
    let (first_set, second_set) = (&sets[0], &sets[1]);

    print_ranking(&format!("Query: {}", first), first_set.rank().as_slice());
    print_ranking(&format!("Query: {}", second), second_set.rank().as_slice());
    print_ranking(
        &format!("Query: {} AND {}", first, second),
        first_set.intersection(second_set).rank().as_slice(),
    );
    print_ranking(
        &format!("Query: {} OR {}", first, second),
        first_set.union(second_set).rank().as_slice(),
    );
    Ok(())
}

fn run_query(
    path: &Path,
    all: &[String],
    any: &[String],
    none: &[String],
    combine: CombineMode,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let Some(query) = build_query(all, any, none) else {
        bail!("nothing to search for: give at least one --all or --any term");
    };
    let index = load_index(path)?;

    let result = query.evaluate_with(&index, combine.combiner())?;
    log::info!("{} -> {} documents", query, result.len());

    let ranking = result.rank();
    let entries: Vec<RankedEntry> = match limit {
        Some(n) => ranking.top(n),
        None => ranking.into_vec(),
    };

    if json {
        let out = serde_json::to_string_pretty(&entries).context("serializing results")?;
        println!("{}", out);
    } else {
        print_ranking(&format!("Query: {}", query), &entries);
    }
    Ok(())
}
