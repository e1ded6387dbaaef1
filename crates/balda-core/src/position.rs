//! Grid coordinates.

use std::fmt::{self, Display};

/// A cell coordinate in a grid.
///
/// Rows grow downwards and columns grow to the right. A position carries no
/// grid dimensions; bounds are checked by the grid that interprets it.
///
/// # Examples
///
/// ```
/// use balda_core::Position;
///
/// let pos = Position::new(1, 2);
/// assert!(pos.is_adjacent(Position::new(0, 2)));
/// assert!(!pos.is_adjacent(Position::new(0, 1))); // diagonal
///
/// let neighbors: Vec<_> = Position::new(0, 0).neighbors(3, 3).collect();
/// assert_eq!(neighbors, [Position::new(0, 1), Position::new(1, 0)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position from row and column indices.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the row index.
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index.
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns whether `other` shares an edge with this position.
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }

    /// Returns the orthogonal neighbors that lie inside a `rows × cols` grid.
    ///
    /// Neighbors are yielded in up, left, right, down order.
    pub fn neighbors(self, rows: u8, cols: u8) -> impl Iterator<Item = Self> {
        let Self { row, col } = self;
        [
            row.checked_sub(1).map(|r| Self::new(r, col)),
            col.checked_sub(1).map(|c| Self::new(row, c)),
            col.checked_add(1)
                .filter(|&c| c < cols)
                .map(|c| Self::new(row, c)),
            row.checked_add(1)
                .filter(|&r| r < rows)
                .map(|r| Self::new(r, col)),
        ]
        .into_iter()
        .flatten()
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
