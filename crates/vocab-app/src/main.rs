use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use vocab_core::{RandomSource, SeededRandom, ThreadRandom, WordLookup};

pub mod logging;
pub mod output;
pub mod profile;

#[derive(Parser)]
#[command(name = "vocab")]
#[command(about = "Random and rank lookups over JSON word books")]
#[command(version)]
struct Args {
    /// JSON config file (defaults come from the environment)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Books directory to read instead of <program dir>/books
    #[arg(long)]
    books_dir: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Seed for reproducible random picks
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show a random word
    Random,
    /// Show the word with the given wordRank
    Rank { rank: String },
    /// List a word's example sentences for dictation
    Dictation { rank: String },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = profile::load_config(args.config.as_deref())?;
    logging::init(&config.log);

    let rng: Box<dyn RandomSource> = match args.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };

    let mut lookup = match &args.books_dir {
        Some(dir) => WordLookup::with_books_dir(dir, rng),
        None => WordLookup::from_config(&config.data)
            .context("failed to locate program directory")?
            .random_source(rng),
    };
    tracing::info!("Reading word books from {}", lookup.books_dir().display());

    let text = match &args.command {
        Command::Random => {
            let record = lookup.random_word()?;
            if args.json {
                serde_json::to_string_pretty(&record)?
            } else {
                output::word_record(&record)
            }
        }
        Command::Rank { rank } => {
            let found = lookup.word_by_rank(rank)?;
            if args.json {
                serde_json::to_string_pretty(&found)?
            } else {
                output::rank_result(&found)
            }
        }
        Command::Dictation { rank } => {
            let found = lookup.word_by_rank(rank)?;
            if args.json {
                serde_json::to_string_pretty(&found.raw_sentences)?
            } else {
                output::dictation(&found)
            }
        }
    };

    println!("{text}");
    Ok(())
}
