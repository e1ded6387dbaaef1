use crate::Position;

/// Errors produced by the core grid types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CoreError {
    /// A coordinate lies outside the grid.
    #[display("position {pos} is outside a {rows}x{cols} grid")]
    OutOfRange {
        /// The offending position.
        pos: Position,
        /// Number of rows in the grid.
        rows: u8,
        /// Number of columns in the grid.
        cols: u8,
    },
    /// Grid dimensions are outside the supported range.
    #[display("invalid grid dimensions {rows}x{cols}")]
    InvalidDimensions {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
    },
    /// A character cannot be used as a letter.
    #[display("invalid letter: {_0:?}")]
    InvalidLetter(#[error(not(source))] char),
    /// A seed word does not match the number of columns.
    #[display("seed word has {actual} letters, expected {expected}")]
    SeedLengthMismatch {
        /// Number of columns in the grid.
        expected: usize,
        /// Number of letters in the word.
        actual: usize,
    },
    /// Grid text has rows of differing widths or no rows at all.
    #[display("malformed grid text")]
    InvalidGridText,
}
