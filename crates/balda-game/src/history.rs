use std::slice;

use balda_core::{Path, Position};

/// A committed word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordHistoryEntry {
    /// The played word.
    pub word: String,
    /// The cells it was traced through.
    pub path: Path,
    /// The cell filled by the move, cleared again on undo.
    ///
    /// `None` for entries that did not place a letter, such as those
    /// restored from a snapshot that did not record one.
    pub new_cell: Option<Position>,
}

/// The ordered list of committed words.
///
/// Grows by [`push`](Self::push) and shrinks only by [`pop`](Self::pop) (undo)
/// or [`clear`](Self::clear) (new game).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordHistory {
    entries: Vec<WordHistoryEntry>,
}

impl WordHistory {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of committed words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no word has been committed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at `index`, oldest first.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&WordHistoryEntry> {
        self.entries.get(index)
    }

    /// Returns the most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&WordHistoryEntry> {
        self.entries.last()
    }

    /// Returns whether `word` has been committed.
    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        self.entries.iter().any(|entry| entry.word == word)
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: WordHistoryEntry) {
        self.entries.push(entry);
    }

    /// Removes and returns the most recent entry.
    pub fn pop(&mut self) -> Option<WordHistoryEntry> {
        self.entries.pop()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns an iterator over entries, oldest first.
    pub fn iter(&self) -> slice::Iter<'_, WordHistoryEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a WordHistory {
    type Item = &'a WordHistoryEntry;
    type IntoIter = slice::Iter<'a, WordHistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
