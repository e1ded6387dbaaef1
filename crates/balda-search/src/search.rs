use std::{
    collections::HashSet,
    ops::{Deref, DerefMut},
    time::Instant,
};

use balda_core::{Letter, LetterGrid, Path, Position};
use balda_dictionary::{Dictionary, TrieNode};

use crate::Candidate;

/// Enumerates playable words on a grid.
///
/// A word is playable when a simple path of orthogonally adjacent cells spells
/// it, and exactly one cell of the path is currently empty. The search tries
/// every letter the dictionary allows for that empty cell.
///
/// Results are ordered by discovery and unique by word text: when a word can
/// be traced in several ways, the first path found is kept. Cells are scanned
/// in row-major order and neighbors in up, left, right, down order, so the
/// result is deterministic for a given grid and dictionary.
///
/// No other filtering is applied. In particular words already played are
/// still reported; excluding them is the caller's concern.
#[derive(Debug, Clone, Copy)]
pub struct PathSearch<'d> {
    dict: &'d Dictionary,
}

impl<'d> PathSearch<'d> {
    /// Creates a search over `dict`.
    #[must_use]
    pub fn new(dict: &'d Dictionary) -> Self {
        Self { dict }
    }

    /// Returns the dictionary searched against.
    #[must_use]
    pub fn dictionary(&self) -> &'d Dictionary {
        self.dict
    }

    /// Finds every playable word on `grid`.
    ///
    /// The grid is borrowed exclusively because candidate letters are written
    /// into empty cells while their subtree is explored. Every such write is
    /// undone before this method returns, so the grid is unchanged afterwards.
    pub fn search(&self, grid: &mut LetterGrid) -> Vec<Candidate> {
        let started = Instant::now();
        let root = self.dict.root();
        let mut walk = Walk::new(grid);

        for pos in grid.positions() {
            match grid[pos] {
                Some(letter) => {
                    if let Some(node) = root.child(letter) {
                        walk.step(grid, pos, letter, node);
                    }
                }
                None => walk.hypothesize(grid, pos, root),
            }
        }

        log::debug!(
            "found {} candidates on a {}x{} grid in {:?}",
            walk.found.len(),
            grid.rows(),
            grid.cols(),
            started.elapsed()
        );
        walk.found
    }
}

/// A letter written into an empty cell for the lifetime of the guard.
///
/// Dropping the guard empties the cell again, on every exit path.
struct TentativeLetter<'g> {
    grid: &'g mut LetterGrid,
    pos: Position,
}

impl<'g> TentativeLetter<'g> {
    fn place(grid: &'g mut LetterGrid, pos: Position, letter: Letter) -> Self {
        debug_assert!(grid[pos].is_none());
        grid[pos] = Some(letter);
        Self { grid, pos }
    }
}

impl Drop for TentativeLetter<'_> {
    fn drop(&mut self) {
        self.grid[self.pos] = None;
    }
}

impl Deref for TentativeLetter<'_> {
    type Target = LetterGrid;

    fn deref(&self) -> &Self::Target {
        self.grid
    }
}

impl DerefMut for TentativeLetter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.grid
    }
}

/// Mutable state of one search: the current path and what has been found.
struct Walk {
    cols: usize,
    path: Path,
    word: String,
    visited: Vec<bool>,
    new_cell: Option<(Position, Letter)>,
    seen: HashSet<String>,
    found: Vec<Candidate>,
}

impl Walk {
    fn new(grid: &LetterGrid) -> Self {
        Self {
            cols: grid.cols(),
            path: Path::new(),
            word: String::new(),
            visited: vec![false; grid.cell_count()],
            new_cell: None,
            seen: HashSet::new(),
            found: Vec::new(),
        }
    }

    fn slot(&self, pos: Position) -> usize {
        usize::from(pos.row()) * self.cols + usize::from(pos.col())
    }

    /// Tries every letter `node` allows in the empty cell at `pos`.
    fn hypothesize(&mut self, grid: &mut LetterGrid, pos: Position, node: TrieNode<'_>) {
        debug_assert!(self.new_cell.is_none());
        for (letter, child) in node.children() {
            let mut tentative = TentativeLetter::place(grid, pos, letter);
            self.new_cell = Some((pos, letter));
            self.step(&mut tentative, pos, letter, child);
            self.new_cell = None;
        }
    }

    /// Extends the path with `pos`, already known to spell a trie prefix.
    fn step(&mut self, grid: &mut LetterGrid, pos: Position, letter: Letter, node: TrieNode<'_>) {
        let slot = self.slot(pos);
        self.visited[slot] = true;
        self.path.push(pos);
        self.word.push(letter.as_char());

        if node.is_terminal() && self.path.len() >= 2 {
            self.record();
        }

        for next in grid.neighbors(pos) {
            if self.visited[self.slot(next)] {
                continue;
            }
            match grid[next] {
                Some(next_letter) => {
                    if let Some(child) = node.child(next_letter) {
                        self.step(grid, next, next_letter, child);
                    }
                }
                None if self.new_cell.is_none() => self.hypothesize(grid, next, node),
                None => {}
            }
        }

        self.word.pop();
        self.path.pop();
        self.visited[slot] = false;
    }

    fn record(&mut self) {
        let Some((new_cell, new_letter)) = self.new_cell else {
            return;
        };
        if self.seen.contains(&self.word) {
            return;
        }
        self.seen.insert(self.word.clone());
        self.found.push(Candidate {
            word: self.word.clone(),
            path: self.path.clone(),
            new_cell,
            new_letter,
        });
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{self, AssertUnwindSafe};

    use proptest::prelude::*;

    use super::*;

    fn lampa_grid() -> LetterGrid {
        let mut grid = LetterGrid::new(5, 5).unwrap();
        grid.seed_middle_row("лампа").unwrap();
        grid
    }

    fn words(found: &[Candidate]) -> Vec<&str> {
        found.iter().map(|c| c.word.as_str()).collect()
    }

    #[test]
    fn test_two_letter_word_needs_compatible_neighbor() {
        let dict = Dictionary::from_words(["ил"]);
        let mut grid = lampa_grid();
        let found = PathSearch::new(&dict).search(&mut grid);
        assert_eq!(words(&found), ["ил"]);
        assert_eq!(found[0].new_cell, Position::new(1, 0));
        assert_eq!(found[0].new_letter, Letter::new('и').unwrap());

        let dict = Dictionary::from_words(["ир"]);
        assert!(PathSearch::new(&dict).search(&mut grid).is_empty());
    }

    #[test]
    fn test_words_without_a_new_letter_are_not_reported() {
        let dict = Dictionary::from_words(["кот", "от"]);
        let mut grid: LetterGrid = "кот\nжжж\nжжж".parse().unwrap();
        assert!(PathSearch::new(&dict).search(&mut grid).is_empty());
    }

    #[test]
    fn test_new_letter_can_sit_mid_word() {
        let dict = Dictionary::from_words(["мак"]);
        let mut grid: LetterGrid = "....\nм.к.\n....".parse().unwrap();
        let found = PathSearch::new(&dict).search(&mut grid);
        assert_eq!(words(&found), ["мак"]);
        assert_eq!(found[0].new_cell, Position::new(1, 1));
        assert_eq!(found[0].new_letter, Letter::new('а').unwrap());
        let path: Vec<Position> = found[0].path.clone().into();
        assert_eq!(
            path,
            [Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)]
        );

        // A second gap breaks the word: only one new letter per move.
        let mut grid: LetterGrid = ".....\nм..к.\n.....".parse().unwrap();
        assert!(PathSearch::new(&dict).search(&mut grid).is_empty());
    }

    #[test]
    fn test_first_discovered_path_is_kept() {
        let dict = Dictionary::from_words(["ба"]);
        let mut grid: LetterGrid = "...\nа.а\n...".parse().unwrap();
        let found = PathSearch::new(&dict).search(&mut grid);
        assert_eq!(found.len(), 1);
        let path: Vec<Position> = found[0].path.clone().into();
        assert_eq!(path, [Position::new(0, 0), Position::new(1, 0)]);
    }

    #[test]
    fn test_search_leaves_grid_unchanged() {
        let dict = Dictionary::from_words(["клад", "лампа", "плам", "мама", "ам", "ла", "пал"]);
        let mut grid = lampa_grid();
        let before = grid.clone();
        let found = PathSearch::new(&dict).search(&mut grid);
        assert!(!found.is_empty());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_tentative_letter_is_cleared_on_unwind() {
        let mut grid = lampa_grid();
        let pos = Position::new(0, 0);
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let tentative = TentativeLetter::place(&mut grid, pos, Letter::new('ж').unwrap());
            assert!(tentative[pos].is_some());
            panic!("search aborted");
        }));
        assert!(result.is_err());
        assert_eq!(grid[pos], None);
    }

    fn grid_strategy() -> impl Strategy<Value = LetterGrid> {
        "[абв.]{12}".prop_map(|cells| {
            let chars: Vec<char> = cells.chars().collect();
            let text: Vec<String> = chars.chunks(4).map(|row| row.iter().collect()).collect();
            text.join("\n").parse().unwrap()
        })
    }

    proptest! {
        #[test]
        fn candidates_are_legal_moves(
            mut grid in grid_strategy(),
            raw_words in prop::collection::vec("[абв]{2,4}", 1..30),
        ) {
            let dict = Dictionary::from_words(&raw_words);
            let before = grid.clone();
            let found = PathSearch::new(&dict).search(&mut grid);
            prop_assert_eq!(&grid, &before);

            let mut seen = HashSet::new();
            for candidate in &found {
                prop_assert!(seen.insert(candidate.word.clone()));
                prop_assert!(dict.contains(&candidate.word));
                prop_assert!(candidate.path.is_simple());

                let empty: Vec<Position> = candidate
                    .path
                    .iter()
                    .copied()
                    .filter(|&pos| before[pos].is_none())
                    .collect();
                prop_assert_eq!(empty, vec![candidate.new_cell]);
                prop_assert!(candidate.is_playable_on(&before));

                let mut played = before.clone();
                played[candidate.new_cell] = Some(candidate.new_letter);
                prop_assert_eq!(played.word_along(&candidate.path), Some(candidate.word.clone()));
            }
        }
    }
}
