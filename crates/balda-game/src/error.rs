use balda_core::{CoreError, Position};

/// Errors returned by [`Game`](crate::Game) operations.
///
/// Every operation that returns an error leaves the game unchanged.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GameError {
    /// A grid operation failed, typically because a position is out of range.
    #[display("{_0}")]
    #[from]
    Core(CoreError),
    /// The operation needs a pending letter, but none has been placed.
    #[display("no letter has been placed this turn")]
    NoPendingLetter,
    /// A letter has already been placed this turn.
    #[display("a letter is already pending at {pos}")]
    LetterAlreadyPending {
        /// The pending cell.
        pos: Position,
    },
    /// The target cell already holds a letter.
    #[display("cell {pos} is already filled")]
    CellOccupied {
        /// The filled cell.
        pos: Position,
    },
    /// The target cell is empty.
    #[display("cell {pos} is empty")]
    CellEmpty {
        /// The empty cell.
        pos: Position,
    },
    /// The cell cannot extend the current path.
    #[display("cell {pos} cannot extend the current path")]
    InvalidPathStep {
        /// The rejected cell.
        pos: Position,
    },
    /// The traced path crosses an empty cell.
    #[display("the traced path crosses an empty cell")]
    BrokenPath,
    /// A word is awaiting confirmation and must be confirmed or rejected first.
    #[display("a word is awaiting confirmation")]
    AwaitingConfirmation,
    /// No word is awaiting confirmation.
    #[display("no word is awaiting confirmation")]
    NoWordAwaitingConfirmation,
    /// Normal turn input is suspended while edit mode is active.
    #[display("edit mode is active")]
    EditModeActive,
    /// Cells can only be toggled in edit mode.
    #[display("edit mode is not active")]
    EditModeInactive,
    /// No candidate exists at the index.
    #[display("no candidate at index {index}")]
    CandidateOutOfRange {
        /// The requested index.
        index: usize,
    },
    /// The candidate no longer fits the grid or its word has been played.
    #[display("candidate {word:?} can no longer be played")]
    StaleCandidate {
        /// The candidate word.
        word: String,
    },
    /// No history entry exists at the index.
    #[display("no history entry at index {index}")]
    HistoryOutOfRange {
        /// The requested index.
        index: usize,
    },
    /// A seed string is not 64 hexadecimal digits.
    #[display("invalid game seed: {text:?}")]
    InvalidSeed {
        /// The rejected text.
        text: String,
    },
    /// A snapshot is inconsistent with its own grid.
    #[display("invalid snapshot: {reason}")]
    InvalidSnapshot {
        /// What is wrong with the snapshot.
        reason: String,
    },
    /// A stored snapshot could not be encoded or decoded.
    #[display("snapshot serialization failed: {_0}")]
    #[from]
    Serialization(serde_json::Error),
}
