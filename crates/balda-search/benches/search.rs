//! Benchmarks for grid word search.
//!
//! # Benchmarks
//!
//! - **`search_seeded`**: a freshly seeded 9×9 grid, only the middle row filled.
//! - **`search_midgame`**: a 9×9 grid with three filled rows.
//!
//! # Test Data
//!
//! The dictionary is synthetic: every 2 to 4 letter string over a 14-letter
//! alphabet, about 40,000 words, which is far denser than a real word list
//! and so a pessimistic case for pruning.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench search
//! ```

use std::hint;

use balda_core::LetterGrid;
use balda_dictionary::Dictionary;
use balda_search::PathSearch;
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};

const ALPHABET: &str = "абвгдеклмнопрс";

fn synthetic_dictionary() -> Dictionary {
    let letters: Vec<char> = ALPHABET.chars().collect();
    let mut words: Vec<String> = letters.iter().map(char::to_string).collect();
    let mut all = Vec::new();
    for _ in 1..4 {
        words = words
            .iter()
            .flat_map(|prefix| {
                letters.iter().map(move |&c| {
                    let mut word = prefix.clone();
                    word.push(c);
                    word
                })
            })
            .collect();
        all.extend(words.iter().cloned());
    }
    Dictionary::from_words(all)
}

fn grids() -> [(&'static str, LetterGrid); 2] {
    let mut seeded = LetterGrid::new(9, 9).unwrap();
    seeded.seed_middle_row("программа").unwrap();

    let midgame: LetterGrid = "\
        .........\n\
        .........\n\
        .........\n\
        ...кол...\n\
        программа\n\
        ..слон...\n\
        .........\n\
        .........\n\
        ........."
        .parse()
        .unwrap();

    [("search_seeded", seeded), ("search_midgame", midgame)]
}

fn bench_search(c: &mut Criterion) {
    let dict = synthetic_dictionary();
    let search = PathSearch::new(&dict);

    for (name, grid) in grids() {
        c.bench_with_input(BenchmarkId::new(name, "9x9"), &grid, |b, grid| {
            b.iter_batched(
                || hint::black_box(grid.clone()),
                |mut grid| search.search(&mut grid),
                BatchSize::SmallInput,
            );
        });
    }
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
