//! Lists the moves available on a freshly seeded grid.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example find_words -- words.txt
//! ```
//!
//! Use a frequency table (`word count` per line) instead of a plain list:
//!
//! ```sh
//! cargo run --example find_words -- freq.txt --min-count 5
//! ```
//!
//! Pick the grid size and the seed word:
//!
//! ```sh
//! cargo run --example find_words -- words.txt --rows 7 --cols 7 --seed-word автобус
//! ```
//!
//! Set `RUST_LOG=debug` to see load and search timings.

use std::{path::PathBuf, process};

use balda_core::LetterGrid;
use balda_dictionary::{Dictionary, DictionaryError, loader};
use balda_search::PathSearch;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Word list file, one word per line.
    #[arg(value_name = "FILE")]
    word_list: PathBuf,

    /// Treat the file as a frequency table and keep words seen at least this often.
    #[arg(long, value_name = "COUNT")]
    min_count: Option<u64>,

    /// Number of grid rows.
    #[arg(long, default_value_t = 5)]
    rows: usize,

    /// Number of grid columns (and seed word length).
    #[arg(long, default_value_t = 5)]
    cols: usize,

    /// Word to place in the middle row. Defaults to the first word of matching length.
    #[arg(long, value_name = "WORD")]
    seed_word: Option<String>,

    /// Maximum number of words to print.
    #[arg(long, value_name = "COUNT", default_value_t = 50)]
    limit: usize,
}

fn load(args: &Args) -> Result<Dictionary, DictionaryError> {
    match args.min_count {
        Some(min_count) => loader::load_frequency_table(&args.word_list, min_count),
        None => loader::load_word_list(&args.word_list),
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let dict = load(&args).unwrap_or_else(|err| {
        eprintln!("Failed to load {}: {err}", args.word_list.display());
        process::exit(1);
    });

    let mut grid = LetterGrid::new(args.rows, args.cols).unwrap_or_else(|err| {
        eprintln!("{err}");
        process::exit(2);
    });

    let seed = args
        .seed_word
        .clone()
        .or_else(|| dict.words_of_len(args.cols).first().cloned());
    let Some(seed) = seed else {
        eprintln!("No {}-letter word in the dictionary.", args.cols);
        process::exit(1);
    };
    if let Err(err) = grid.seed_middle_row(&seed) {
        eprintln!("Cannot seed grid with {seed:?}: {err}");
        process::exit(2);
    }

    let mut found = PathSearch::new(&dict).search(&mut grid);
    found.retain(|candidate| candidate.word != seed);
    found.sort_by_key(|candidate| std::cmp::Reverse(candidate.len()));

    println!("{grid}");
    println!();
    println!("{} words available:", found.len());
    for candidate in found.iter().take(args.limit) {
        println!(
            "  {:<12} {} at {}",
            candidate.word, candidate.new_letter, candidate.new_cell
        );
    }
}
