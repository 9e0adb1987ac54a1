//! Letter grid representation
//!
//! A Grid is a rectangular matrix of cells, each empty or holding one
//! uppercase A-Z letter. The engine only ever reads grids; mutation belongs
//! to the owner (game state, the play mode, tests).

use std::fmt;

/// A cell position, row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Error type for malformed grid input
///
/// These indicate caller bugs (the engine requires a rectangular grid of
/// letters), so construction fails fast rather than patching the input up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A row's length differs from the first row's
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// A character that is neither a letter nor an empty-cell marker
    InvalidCell { row: usize, col: usize, ch: char },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RaggedRows { row, expected, got } => {
                write!(
                    f,
                    "Row {row} has {got} cells, expected {expected} (grid must be rectangular)"
                )
            }
            Self::InvalidCell { row, col, ch } => {
                write!(f, "Invalid cell {ch:?} at ({row},{col}); use A-Z or '.'")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A rectangular grid of optional uppercase letters
///
/// Stored row-major as a flat vector. All scan/score operations treat a grid
/// as an immutable snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Option<u8>>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Create an empty grid of the given dimensions
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![None; rows * cols],
            rows,
            cols,
        }
    }

    /// Parse a grid from row strings
    ///
    /// Each string is one row. `A`-`Z` (either case) is a letter; `.`, `_`
    /// and space are empty cells. All rows must have the same length.
    ///
    /// # Errors
    /// Returns `GridError` on ragged rows or unrecognized cell characters.
    ///
    /// # Examples
    /// ```
    /// use wordgrid::core::Grid;
    ///
    /// let grid = Grid::from_rows(&["CAT", "A..", "B.X"]).unwrap();
    /// assert_eq!(grid.rows(), 3);
    /// assert_eq!(grid.cols(), 3);
    /// assert_eq!(grid.letter(0, 0), Some(b'C'));
    /// assert_eq!(grid.letter(1, 1), None);
    ///
    /// assert!(Grid::from_rows(&["AB", "A"]).is_err());
    /// ```
    pub fn from_rows<S: AsRef<str>>(row_strs: &[S]) -> Result<Self, GridError> {
        let rows = row_strs.len();
        let cols = row_strs.first().map_or(0, |r| r.as_ref().chars().count());
        let mut cells = Vec::with_capacity(rows * cols);

        for (row, line) in row_strs.iter().enumerate() {
            let line = line.as_ref();
            let got = line.chars().count();
            if got != cols {
                return Err(GridError::RaggedRows {
                    row,
                    expected: cols,
                    got,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    'A'..='Z' => cells.push(Some(ch as u8)),
                    'a'..='z' => cells.push(Some(ch.to_ascii_uppercase() as u8)),
                    '.' | '_' | ' ' => cells.push(None),
                    _ => return Err(GridError::InvalidCell { row, col, ch }),
                }
            }
        }

        Ok(Self { cells, rows, cols })
    }

    /// Number of rows
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the coordinate is inside the grid
    #[inline]
    #[must_use]
    pub const fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// The letter at (row, col), or `None` for an empty cell
    ///
    /// # Panics
    /// Panics if the coordinate is out of bounds.
    #[inline]
    #[must_use]
    pub fn letter(&self, row: usize, col: usize) -> Option<u8> {
        assert!(row < self.rows && col < self.cols, "cell out of bounds");
        self.cells[row * self.cols + col]
    }

    /// Set or clear the letter at (row, col)
    ///
    /// Non-letter bytes are rejected so the invariant (uppercase A-Z only)
    /// cannot be broken by a caller.
    ///
    /// # Panics
    /// Panics if the coordinate is out of bounds or `letter` is not an
    /// uppercase ASCII letter.
    pub fn set_letter(&mut self, row: usize, col: usize, letter: Option<u8>) {
        assert!(row < self.rows && col < self.cols, "cell out of bounds");
        if let Some(b) = letter {
            assert!(b.is_ascii_uppercase(), "letters must be uppercase A-Z");
        }
        self.cells[row * self.cols + col] = letter;
    }

    /// Count of occupied cells
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Whether every cell is occupied
    #[must_use]
    pub fn is_full(&self) -> bool {
        !self.cells.is_empty() && self.cells.iter().all(std::option::Option::is_some)
    }

    /// Whether no cell is occupied
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(std::option::Option::is_none)
    }

    /// Iterate one row as (coord, cell) pairs, left to right
    pub fn row_line(&self, row: usize) -> impl Iterator<Item = (Coord, Option<u8>)> + '_ {
        (0..self.cols).map(move |col| (Coord::new(row, col), self.letter(row, col)))
    }

    /// Iterate one column as (coord, cell) pairs, top to bottom
    pub fn col_line(&self, col: usize) -> impl Iterator<Item = (Coord, Option<u8>)> + '_ {
        (0..self.rows).map(move |row| (Coord::new(row, col), self.letter(row, col)))
    }
}

impl fmt::Display for Grid {
    /// Renders rows of letters with `.` for empty cells
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                match self.letter(row, col) {
                    Some(b) => write!(f, "{}", b as char)?,
                    None => write!(f, ".")?,
                }
            }
            if row + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
