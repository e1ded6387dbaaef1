use balda_core::{Letter, LetterGrid, Path, Position};

/// A playable word discovered by [`PathSearch`](crate::PathSearch).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    /// The word spelled along `path`.
    pub word: String,
    /// The traced cells, in spelling order.
    pub path: Path,
    /// The cell that was empty and receives the new letter.
    pub new_cell: Position,
    /// The letter to place in `new_cell`.
    pub new_letter: Letter,
}

impl Candidate {
    /// Returns the word length in letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Returns whether the word has no letters. Always `false` for search results.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Returns whether this candidate can still be played on `grid`.
    ///
    /// The new cell must be empty, every other cell on the path must hold the
    /// matching letter, and the path must be simple and include the new cell.
    #[must_use]
    pub fn is_playable_on(&self, grid: &LetterGrid) -> bool {
        if !self.path.is_simple()
            || !self.path.contains(self.new_cell)
            || self.path.len() != self.word.chars().count()
        {
            return false;
        }
        self.path.iter().zip(self.word.chars()).all(|(&pos, c)| {
            let Ok(cell) = grid.get(pos) else {
                return false;
            };
            if pos == self.new_cell {
                cell.is_none() && self.new_letter.as_char() == c
            } else {
                cell.map(Letter::as_char) == Some(c)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> Candidate {
        Candidate {
            word: "сом".to_owned(),
            path: [(1, 0), (1, 1), (1, 2)]
                .into_iter()
                .map(|(r, c)| Position::new(r, c))
                .collect(),
            new_cell: Position::new(1, 0),
            new_letter: Letter::new('с').unwrap(),
        }
    }

    #[test]
    fn test_playable_on_matching_grid() {
        let grid: LetterGrid = "...\n.ом\n...".parse().unwrap();
        assert!(candidate().is_playable_on(&grid));
        assert_eq!(candidate().len(), 3);
    }

    #[test]
    fn test_not_playable_once_cell_is_taken() {
        let grid: LetterGrid = "...\nком\n...".parse().unwrap();
        assert!(!candidate().is_playable_on(&grid));

        let grid: LetterGrid = "...\n.ум\n...".parse().unwrap();
        assert!(!candidate().is_playable_on(&grid));
    }
}
