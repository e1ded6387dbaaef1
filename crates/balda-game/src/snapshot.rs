use balda_core::{LetterGrid, Path, Position};
use serde::{Deserialize, Serialize};

use crate::{GameError, WordHistory, WordHistoryEntry};

/// Serializable state of a game between turns.
///
/// The grid is stored as one string per row, `'.'` marking empty cells.
/// Positions are `[row, col]` pairs.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use balda_dictionary::Dictionary;
/// use balda_game::{Game, GameOptions};
///
/// let dict = Arc::new(Dictionary::from_words(["кот"]));
/// let options = GameOptions::default().size(3, 3);
/// let game = Game::new(Arc::clone(&dict), &options)?;
///
/// let snapshot = game.snapshot();
/// assert_eq!(snapshot.grid, ["...", "кот", "..."]);
///
/// let restored = Game::restore(dict, snapshot, &options)?;
/// assert_eq!(restored.grid(), game.grid());
/// # Ok::<(), balda_game::GameError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Grid rows, top to bottom.
    pub grid: Vec<String>,
    /// The word the grid was seeded with.
    pub initial_word: Option<String>,
    /// Committed words, oldest first.
    pub history: Vec<WordSnapshot>,
}

/// Serializable form of a [`WordHistoryEntry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSnapshot {
    /// The played word.
    pub word: String,
    /// The traced cells.
    pub path: Vec<[u8; 2]>,
    /// The cell filled by the move.
    #[serde(default)]
    pub new_cell: Option<[u8; 2]>,
}

fn pair(pos: Position) -> [u8; 2] {
    [pos.row(), pos.col()]
}

fn position([row, col]: [u8; 2]) -> Position {
    Position::new(row, col)
}

impl GameSnapshot {
    pub(crate) fn capture(
        grid: &LetterGrid,
        initial_word: Option<String>,
        history: &WordHistory,
    ) -> Self {
        Self {
            grid: grid.to_string().lines().map(str::to_owned).collect(),
            initial_word,
            history: history
                .iter()
                .map(|entry| WordSnapshot {
                    word: entry.word.clone(),
                    path: entry.path.iter().copied().map(pair).collect(),
                    new_cell: entry.new_cell.map(pair),
                })
                .collect(),
        }
    }

    /// Checks every history entry against the grid and converts to game types.
    pub(crate) fn into_parts(self) -> Result<(LetterGrid, Option<String>, WordHistory), GameError> {
        let grid: LetterGrid = self.grid.join("\n").parse()?;
        let mut history = WordHistory::new();
        for (i, entry) in self.history.into_iter().enumerate() {
            let invalid = |reason: &str| GameError::InvalidSnapshot {
                reason: format!("history entry {i} ({:?}): {reason}", entry.word),
            };
            let path: Path = entry.path.iter().copied().map(position).collect();
            if path.len() < 2 || !path.is_simple() {
                return Err(invalid("not a simple path of two or more cells"));
            }
            if grid.word_along(&path).as_deref() != Some(entry.word.as_str()) {
                return Err(invalid("path does not spell the word"));
            }
            let new_cell = entry.new_cell.map(position);
            if new_cell.is_some_and(|cell| !path.contains(cell)) {
                return Err(invalid("new cell is not on the path"));
            }
            if history.contains_word(&entry.word)
                || self.initial_word.as_deref() == Some(entry.word.as_str())
            {
                return Err(invalid("word is used twice"));
            }
            history.push(WordHistoryEntry {
                word: entry.word,
                path,
                new_cell,
            });
        }
        Ok((grid, self.initial_word, history))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use balda_core::Letter;
    use balda_dictionary::Dictionary;

    use super::*;
    use crate::{Game, GameOptions, GameSeed};

    fn played_game() -> Game {
        let dict = Arc::new(Dictionary::from_words(["лампа", "мак", "ам"]));
        let options = GameOptions::default().seed(GameSeed::from_bytes([3; 32]));
        let mut game = Game::new(dict, &options).unwrap();
        let index = game
            .candidates()
            .iter()
            .position(|c| c.word == "мак")
            .unwrap();
        game.play_candidate(index).unwrap();
        game
    }

    #[test]
    fn test_restore_reproduces_game() {
        let game = played_game();
        let snapshot = game.snapshot();
        assert_eq!(snapshot.history.len(), 1);
        assert_eq!(snapshot.history[0].path.len(), 3);

        let restored = Game::restore(
            Arc::clone(game.dictionary()),
            snapshot,
            &GameOptions::default(),
        )
        .unwrap();
        assert_eq!(restored.grid(), game.grid());
        assert_eq!(restored.history(), game.history());
        assert_eq!(restored.initial_word(), game.initial_word());
        assert_eq!(restored.candidates(), game.candidates());
    }

    #[test]
    fn test_snapshot_omits_pending_letter() {
        let mut game = played_game();
        let before = game.snapshot();
        game.place_letter(Position::new(0, 0), Letter::new('ж').unwrap()).unwrap();
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_restore_rejects_inconsistent_history() {
        let game = played_game();
        let dict = Arc::clone(game.dictionary());
        let options = GameOptions::default();

        let mut snapshot = game.snapshot();
        snapshot.history[0].word = "мук".to_owned();
        assert!(matches!(
            Game::restore(Arc::clone(&dict), snapshot, &options),
            Err(GameError::InvalidSnapshot { .. })
        ));

        let mut snapshot = game.snapshot();
        snapshot.history[0].path.reverse();
        assert!(matches!(
            Game::restore(Arc::clone(&dict), snapshot, &options),
            Err(GameError::InvalidSnapshot { .. })
        ));

        let mut snapshot = game.snapshot();
        snapshot.history[0].new_cell = Some([0, 0]);
        assert!(matches!(
            Game::restore(Arc::clone(&dict), snapshot, &options),
            Err(GameError::InvalidSnapshot { .. })
        ));

        let mut snapshot = game.snapshot();
        snapshot.grid.pop();
        snapshot.grid.pop();
        snapshot.grid.pop();
        assert!(matches!(
            Game::restore(dict, snapshot, &options),
            Err(GameError::Core(_))
        ));
    }
}
