//! Debug CLI for tuning ranker thresholds without launching the host app.
//!
//! Run: cargo run --bin suggest -- --corpus tags.txt "pyton"
//!
//! Reads one candidate per line, builds a ranker, and prints one
//! `score<TAB>candidate` line per suggestion.

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use hunch::{RankerConfig, ScoreKind, SuggestionRanker};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "suggest",
    version,
    about = "Rank a corpus of candidate strings against a query fragment"
)]
struct Cli {
    /// Corpus file, one candidate per line
    #[arg(short, long)]
    corpus: PathBuf,

    /// Minimum score a candidate must reach
    #[arg(long, default_value_t = hunch::DEFAULT_SCORE_CUTOFF)]
    cutoff: u8,

    /// Maximum suggestions to print
    #[arg(long, default_value_t = hunch::DEFAULT_MAX_RESULTS)]
    limit: u32,

    /// Score with the legacy matching-block ratio
    #[arg(long)]
    blocks: bool,

    /// Query fragment
    query: String,
}

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info")).try_init();
    let cli = Cli::parse();

    let text = fs::read_to_string(&cli.corpus)
        .with_context(|| format!("reading corpus file {}", cli.corpus.display()))?;
    let candidates: Vec<String> = text.lines().map(str::to_string).collect();
    log::info!("loaded {} candidates", candidates.len());

    let config = RankerConfig {
        score_cutoff: cli.cutoff,
        max_results: cli.limit,
        strategy: if cli.blocks {
            ScoreKind::MatchingBlocks
        } else {
            ScoreKind::EditDistance
        },
    };
    let ranker = SuggestionRanker::new(candidates, config);

    for (score, candidate) in ranker.suggest_scored(&cli.query) {
        println!("{score}\t{candidate}");
    }
    Ok(())
}
