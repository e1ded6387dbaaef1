//! Prefix dictionary for Balda.
//!
//! The [`Dictionary`] is a trie stored as a flat node arena: nodes are
//! addressed by [`NodeId`], and each node's outgoing edges occupy a sorted,
//! contiguous slice of one shared edge table. The search engine walks it with
//! [`TrieNode`] handles, one letter at a time.
//!
//! Dictionaries are built once through [`DictionaryBuilder`] (or the loaders in
//! [`loader`]) and are immutable afterwards. Alongside the trie, words are
//! indexed by their length in letters so that a fresh grid can be seeded with
//! a word spanning exactly one row.
//!
//! # Examples
//!
//! ```
//! use balda_core::Letter;
//! use balda_dictionary::Dictionary;
//!
//! let dict = Dictionary::from_words(["Лампа", "лама", "сало", "7up"]);
//! assert_eq!(dict.len(), 3);
//! assert!(dict.contains("лампа"));
//! assert!(!dict.contains("лам"));
//!
//! let node = dict.root().walk("лам").unwrap();
//! assert!(!node.is_terminal());
//! let next: Vec<char> = node.children().map(|(l, _)| l.as_char()).collect();
//! assert_eq!(next, ['а', 'п']);
//!
//! assert_eq!(dict.words_of_len(4), ["лама", "сало"]);
//! ```

pub use self::{error::*, trie::*};

mod error;
pub mod loader;
mod trie;
