//! Word discovery on a Balda grid.
//!
//! [`PathSearch`] enumerates every word that can be played on the current
//! grid: a simple, orthogonally connected path whose letters spell a
//! dictionary word and which passes through exactly one empty cell, where the
//! new letter would be placed.
//!
//! The search is a depth-first walk that advances through the trie in lock
//! step with the path, so branches that cannot lead to a word are pruned as
//! soon as their prefix leaves the dictionary.
//!
//! # Examples
//!
//! ```
//! use balda_core::{LetterGrid, Position};
//! use balda_dictionary::Dictionary;
//! use balda_search::PathSearch;
//!
//! let dict = Dictionary::from_words(["сом", "ком", "кот"]);
//! let mut grid: LetterGrid = "\
//! ...
//! .ом
//! ...
//! "
//! .parse()
//! .unwrap();
//!
//! let found = PathSearch::new(&dict).search(&mut grid);
//! let words: Vec<&str> = found.iter().map(|c| c.word.as_str()).collect();
//! assert_eq!(words, ["ком", "сом"]);
//! assert_eq!(found[0].new_cell, Position::new(0, 1));
//!
//! // The grid is left exactly as it was.
//! assert_eq!(grid.to_string(), "...\n.ом\n...");
//! ```

pub use self::{candidate::*, search::*};

mod candidate;
mod search;
