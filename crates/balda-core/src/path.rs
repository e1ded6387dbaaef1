//! Paths traced through a grid.

use std::slice;

use tinyvec::TinyVec;

use crate::Position;

const INLINE_PATH_LEN: usize = 12;

/// An ordered sequence of grid positions.
///
/// A path used to spell a word is *simple*: no position repeats and every
/// consecutive pair is orthogonally adjacent. [`Path`] itself does not enforce
/// this so that callers can build and shorten paths step by step; use
/// [`Path::is_simple`] or [`Path::can_extend`] to check.
///
/// Positions are stored inline up to [`Path::INLINE_LEN`] and spill to the
/// heap beyond that.
///
/// # Examples
///
/// ```
/// use balda_core::{Path, Position};
///
/// let mut path = Path::new();
/// path.push(Position::new(0, 0));
/// assert!(path.can_extend(Position::new(0, 1)));
/// assert!(!path.can_extend(Position::new(1, 1)));
/// path.push(Position::new(0, 1));
///
/// assert_eq!(path.len(), 2);
/// assert_eq!(path.second_to_last(), Some(Position::new(0, 0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(TinyVec<[Position; INLINE_PATH_LEN]>);

impl Path {
    /// Number of positions stored without allocating.
    pub const INLINE_LEN: usize = INLINE_PATH_LEN;

    /// Creates an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self(TinyVec::new())
    }

    /// Returns the number of positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the path has no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends a position without validation.
    pub fn push(&mut self, pos: Position) {
        self.0.push(pos);
    }

    /// Removes and returns the last position.
    pub fn pop(&mut self) -> Option<Position> {
        self.0.pop()
    }

    /// Removes every position.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Returns the first position.
    #[must_use]
    pub fn first(&self) -> Option<Position> {
        self.0.first().copied()
    }

    /// Returns the last position.
    #[must_use]
    pub fn last(&self) -> Option<Position> {
        self.0.last().copied()
    }

    /// Returns the position before the last one.
    #[must_use]
    pub fn second_to_last(&self) -> Option<Position> {
        self.0.len().checked_sub(2).map(|i| self.0[i])
    }

    /// Returns whether the path visits `pos`.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// Returns whether `pos` may be appended while keeping the path simple.
    ///
    /// An empty path can be extended by any position.
    #[must_use]
    pub fn can_extend(&self, pos: Position) -> bool {
        match self.last() {
            None => true,
            Some(last) => last.is_adjacent(pos) && !self.contains(pos),
        }
    }

    /// Returns whether no position repeats and consecutive positions are adjacent.
    #[must_use]
    pub fn is_simple(&self) -> bool {
        let adjacent = self.0.windows(2).all(|w| w[0].is_adjacent(w[1]));
        adjacent
            && self
                .0
                .iter()
                .enumerate()
                .all(|(i, pos)| !self.0[..i].contains(pos))
    }

    /// Returns the positions as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Position] {
        &self.0
    }

    /// Returns an iterator over the positions.
    pub fn iter(&self) -> slice::Iter<'_, Position> {
        self.0.iter()
    }
}

impl From<Vec<Position>> for Path {
    fn from(positions: Vec<Position>) -> Self {
        positions.into_iter().collect()
    }
}

impl From<Path> for Vec<Position> {
    fn from(path: Path) -> Self {
        path.0.to_vec()
    }
}

impl FromIterator<Position> for Path {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Position;
    type IntoIter = slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
