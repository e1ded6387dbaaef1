use balda_core::{Path, Position};

/// Where the current turn stands.
///
/// A turn starts in [`TurnState::AddingLetter`]. Placing a letter moves it to
/// [`TurnState::SelectingPath`], where paths are traced until one is committed
/// or the letter is cancelled. An unknown word under
/// [`UnknownWordPolicy::Confirm`](crate::UnknownWordPolicy::Confirm) parks the
/// turn in [`TurnState::AwaitingWordConfirmation`].
#[derive(Debug, Default, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum TurnState {
    /// Waiting for a letter to be placed in an empty cell.
    #[default]
    AddingLetter,
    /// A letter is pending and a path is being traced.
    SelectingPath {
        /// The cell holding this turn's new letter.
        pending: Position,
        /// The path traced so far, possibly empty.
        path: Path,
    },
    /// A traced word is missing from the dictionary and needs a decision.
    AwaitingWordConfirmation {
        /// The cell holding this turn's new letter.
        pending: Position,
        /// The traced path.
        path: Path,
        /// The word spelled along `path`.
        word: String,
    },
}

impl TurnState {
    /// Returns the state without its data.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        match self {
            Self::AddingLetter => TurnPhase::AddingLetter,
            Self::SelectingPath { .. } => TurnPhase::SelectingPath,
            Self::AwaitingWordConfirmation { .. } => TurnPhase::AwaitingWordConfirmation,
        }
    }

    /// Returns the cell holding this turn's new letter, if any.
    #[must_use]
    pub fn pending_cell(&self) -> Option<Position> {
        match self {
            Self::AddingLetter => None,
            Self::SelectingPath { pending, .. } | Self::AwaitingWordConfirmation { pending, .. } => {
                Some(*pending)
            }
        }
    }

    /// Returns the traced path, if a letter is pending.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::AddingLetter => None,
            Self::SelectingPath { path, .. } | Self::AwaitingWordConfirmation { path, .. } => {
                Some(path)
            }
        }
    }

    /// Returns the word awaiting confirmation, if any.
    #[must_use]
    pub fn pending_word(&self) -> Option<&str> {
        match self {
            Self::AwaitingWordConfirmation { word, .. } => Some(word),
            _ => None,
        }
    }
}

/// Data-free tag of a [`TurnState`], for prompts such as "add a letter".
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum TurnPhase {
    /// See [`TurnState::AddingLetter`].
    AddingLetter,
    /// See [`TurnState::SelectingPath`].
    SelectingPath,
    /// See [`TurnState::AwaitingWordConfirmation`].
    AwaitingWordConfirmation,
}

/// Result of [`Game::finish_path`](crate::Game::finish_path).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum FinishOutcome {
    /// The word was played and the turn is over.
    Committed,
    /// The word is unknown and awaits [`Game::confirm_word`](crate::Game::confirm_word)
    /// or [`Game::reject_word`](crate::Game::reject_word).
    NeedsConfirmation,
    /// The path was dropped. The pending letter stays in place.
    Discarded(DiscardReason),
}

/// Why a traced path was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum DiscardReason {
    /// Fewer than two cells were traced.
    #[display("a word needs at least two letters")]
    TooShort,
    /// The path does not pass through this turn's new letter.
    #[display("the word must use the new letter")]
    MissingNewLetter,
    /// The word is the initial word or has already been played.
    #[display("the word has already been used")]
    DuplicateWord,
    /// The word is not in the dictionary.
    #[display("the word is not in the dictionary")]
    UnknownWord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_follow_variant() {
        let pending = Position::new(1, 2);
        let path: Path = [Position::new(1, 1), pending].into_iter().collect();

        let state = TurnState::AddingLetter;
        assert_eq!(state.phase(), TurnPhase::AddingLetter);
        assert_eq!(state.pending_cell(), None);
        assert_eq!(state.path(), None);

        let state = TurnState::SelectingPath {
            pending,
            path: path.clone(),
        };
        assert!(state.phase().is_selecting_path());
        assert_eq!(state.pending_cell(), Some(pending));
        assert_eq!(state.pending_word(), None);

        let state = TurnState::AwaitingWordConfirmation {
            pending,
            path: path.clone(),
            word: "аб".to_owned(),
        };
        assert!(state.is_awaiting_word_confirmation());
        assert_eq!(state.path(), Some(&path));
        assert_eq!(state.pending_word(), Some("аб"));
    }
}
