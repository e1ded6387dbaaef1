//! The letter grid.

use std::{
    fmt::{self, Display, Write as _},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{CoreError, Letter, Path, Position};

/// A `rows × cols` matrix of optional letters.
///
/// Dimensions are fixed at construction and must lie in
/// [`LetterGrid::MIN_SIZE`]`..=`[`LetterGrid::MAX_SIZE`]. Cells are stored in
/// row-major order.
///
/// Accessors taking a [`Position`] return [`CoreError::OutOfRange`] for
/// coordinates outside the grid. Indexing with `grid[pos]` panics instead and
/// is meant for positions already known to be in bounds, such as those
/// produced by [`LetterGrid::positions`] or [`LetterGrid::neighbors`].
///
/// The text form (see [`Display`] and [`FromStr`]) has one line per row, with
/// `.` for an empty cell.
///
/// # Examples
///
/// ```
/// use balda_core::{Letter, LetterGrid, Position};
///
/// let mut grid: LetterGrid = "\
/// ...
/// кот
/// ...
/// "
/// .parse()
/// .unwrap();
/// assert_eq!(grid.dimensions(), (3, 3));
/// assert_eq!(grid.get(Position::new(1, 1)).unwrap(), Some(Letter::new('о').unwrap()));
///
/// grid.set(Position::new(0, 0), Some(Letter::new('с').unwrap())).unwrap();
/// assert_eq!(grid.to_string(), "с..\nкот\n...");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LetterGrid {
    rows: u8,
    cols: u8,
    cells: Vec<Option<Letter>>,
}

impl LetterGrid {
    /// Smallest supported number of rows or columns.
    pub const MIN_SIZE: usize = 3;
    /// Largest supported number of rows or columns.
    pub const MAX_SIZE: usize = 16;

    /// Creates an empty grid.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDimensions`] if either dimension is outside
    /// `MIN_SIZE..=MAX_SIZE`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, CoreError> {
        let invalid = CoreError::InvalidDimensions { rows, cols };
        let valid = Self::MIN_SIZE..=Self::MAX_SIZE;
        if !valid.contains(&rows) || !valid.contains(&cols) {
            return Err(invalid);
        }
        let (Ok(row_count), Ok(col_count)) = (u8::try_from(rows), u8::try_from(cols)) else {
            return Err(invalid);
        };
        Ok(Self {
            rows: row_count,
            cols: col_count,
            cells: vec![None; rows * cols],
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        usize::from(self.rows)
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        usize::from(self.cols)
    }

    /// Returns `(rows, cols)`.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns whether `pos` lies inside the grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row() < self.rows && pos.col() < self.cols
    }

    /// Returns the row-major cell index of `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::OutOfRange`] if `pos` lies outside the grid.
    pub fn index_of(&self, pos: Position) -> Result<usize, CoreError> {
        if self.contains(pos) {
            Ok(usize::from(pos.row()) * self.cols() + usize::from(pos.col()))
        } else {
            Err(CoreError::OutOfRange {
                pos,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Returns the letter at `pos`, or `None` for an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::OutOfRange`] if `pos` lies outside the grid.
    pub fn get(&self, pos: Position) -> Result<Option<Letter>, CoreError> {
        Ok(self.cells[self.index_of(pos)?])
    }

    /// Writes a letter, or empties the cell when `letter` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::OutOfRange`] if `pos` lies outside the grid.
    pub fn set(&mut self, pos: Position, letter: Option<Letter>) -> Result<(), CoreError> {
        let index = self.index_of(pos)?;
        self.cells[index] = letter;
        Ok(())
    }

    /// Empties the cell at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::OutOfRange`] if `pos` lies outside the grid.
    pub fn clear(&mut self, pos: Position) -> Result<(), CoreError> {
        self.set(pos, None)
    }

    /// Returns whether the cell at `pos` is inside the grid and empty.
    #[must_use]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        matches!(self.get(pos), Ok(None))
    }

    /// Returns the number of non-empty cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Returns all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let (rows, cols) = (self.rows, self.cols);
        (0..rows).flat_map(move |row| (0..cols).map(move |col| Position::new(row, col)))
    }

    /// Returns the in-bounds orthogonal neighbors of `pos`.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + use<> {
        pos.neighbors(self.rows, self.cols)
    }

    /// Empties every cell.
    pub fn reset_to_empty(&mut self) {
        self.cells.fill(None);
    }

    /// Returns the index of the row used for seeding.
    #[must_use]
    pub fn middle_row(&self) -> usize {
        self.rows() / 2
    }

    /// Writes `word` across the middle row.
    ///
    /// Other cells are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidLetter`] if `word` contains a non-letter and
    /// [`CoreError::SeedLengthMismatch`] if its length differs from the column count.
    ///
    /// # Examples
    ///
    /// ```
    /// use balda_core::LetterGrid;
    ///
    /// let mut grid = LetterGrid::new(4, 3).unwrap();
    /// grid.seed_middle_row("кот").unwrap();
    /// assert_eq!(grid.to_string(), "...\n...\nкот\n...");
    ///
    /// assert!(grid.seed_middle_row("коты").is_err());
    /// ```
    pub fn seed_middle_row(&mut self, word: &str) -> Result<(), CoreError> {
        let letters = Letter::parse_word(word)?;
        if letters.len() != self.cols() {
            return Err(CoreError::SeedLengthMismatch {
                expected: self.cols(),
                actual: letters.len(),
            });
        }
        let start = self.middle_row() * self.cols();
        for (cell, letter) in self.cells[start..].iter_mut().zip(letters) {
            *cell = Some(letter);
        }
        Ok(())
    }

    /// Returns the letters along `path`, or `None` if any cell is empty or out of range.
    #[must_use]
    pub fn word_along(&self, path: &Path) -> Option<String> {
        path.iter()
            .map(|&pos| self.get(pos).ok().flatten().map(Letter::as_char))
            .collect()
    }

    /// Returns the rows as slices of optional letters.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Option<Letter>]> {
        self.cells.chunks(self.cols())
    }
}

impl Index<Position> for LetterGrid {
    type Output = Option<Letter>;

    fn index(&self, pos: Position) -> &Self::Output {
        assert!(self.contains(pos), "position {pos} out of range");
        &self.cells[usize::from(pos.row()) * self.cols() + usize::from(pos.col())]
    }
}

impl IndexMut<Position> for LetterGrid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        assert!(self.contains(pos), "position {pos} out of range");
        let cols = self.cols();
        &mut self.cells[usize::from(pos.row()) * cols + usize::from(pos.col())]
    }
}

impl Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows_iter().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            for cell in row {
                f.write_char(cell.map_or('.', Letter::as_char))?;
            }
        }
        Ok(())
    }
}

impl FromStr for LetterGrid {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let cols = lines.first().ok_or(CoreError::InvalidGridText)?.chars().count();
        if lines.iter().any(|line| line.chars().count() != cols) {
            return Err(CoreError::InvalidGridText);
        }
        let mut grid = Self::new(lines.len(), cols)?;
        for (cell, c) in grid.cells.iter_mut().zip(lines.iter().flat_map(|l| l.chars())) {
            *cell = match c {
                '.' => None,
                c => Some(Letter::new(c)?),
            };
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_dimensions_are_validated() {
        assert!(LetterGrid::new(3, 3).is_ok());
        assert!(LetterGrid::new(16, 9).is_ok());
        assert_eq!(
            LetterGrid::new(2, 5),
            Err(CoreError::InvalidDimensions { rows: 2, cols: 5 })
        );
        assert!(LetterGrid::new(5, 17).is_err());
    }

    #[test]
    fn test_out_of_range_access() {
        let mut grid = LetterGrid::new(3, 4).unwrap();
        let outside = Position::new(3, 0);
        assert!(matches!(
            grid.get(outside),
            Err(CoreError::OutOfRange { rows: 3, cols: 4, .. })
        ));
        assert!(grid.set(Position::new(0, 4), None).is_err());
        assert!(!grid.is_empty_at(outside));
        assert_eq!(grid.get(Position::new(2, 3)), Ok(None));
    }

    #[test]
    fn test_seed_middle_row_even_rows() {
        let mut grid = LetterGrid::new(6, 5).unwrap();
        grid.seed_middle_row("лампа").unwrap();
        assert_eq!(grid.middle_row(), 3);
        let word: Path = (0..5).map(|c| Position::new(3, c)).collect();
        assert_eq!(grid.word_along(&word).as_deref(), Some("лампа"));
        assert_eq!(grid.filled_count(), 5);
    }

    #[test]
    fn test_word_along_stops_at_empty_cells() {
        let grid: LetterGrid = "...\nкот\n...".parse().unwrap();
        let path: Path = [Position::new(1, 0), Position::new(0, 0)].into_iter().collect();
        assert_eq!(grid.word_along(&path), None);
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        assert_eq!(
            "...\n....\n...".parse::<LetterGrid>(),
            Err(CoreError::InvalidGridText)
        );
        assert_eq!("".parse::<LetterGrid>(), Err(CoreError::InvalidGridText));
        assert!(matches!(
            "...\n.1.\n...".parse::<LetterGrid>(),
            Err(CoreError::InvalidLetter('1'))
        ));
    }

    #[test]
    fn test_reset_to_empty() {
        let mut grid: LetterGrid = "абв\nгде\nжзи".parse().unwrap();
        grid.reset_to_empty();
        assert_eq!(grid.filled_count(), 0);
        assert_eq!(grid.dimensions(), (3, 3));
    }

    proptest! {
        #[test]
        fn seed_fills_exactly_the_middle_row(
            rows in 3usize..=16,
            word in "[a-z]{3,16}",
        ) {
            let cols = word.chars().count();
            let mut grid = LetterGrid::new(rows, cols).unwrap();
            grid.seed_middle_row(&word).unwrap();
            for pos in grid.positions() {
                let filled = grid[pos].is_some();
                prop_assert_eq!(filled, usize::from(pos.row()) == rows / 2);
            }
        }
    }
}
