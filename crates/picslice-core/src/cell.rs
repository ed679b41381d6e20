use derive_more::{Display, Error};

/// A grid cell addressed by row and column, both 0-indexed.
///
/// A cell is only meaningful relative to some [`GridDims`]; use
/// [`GridDims::contains`] to check membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display("({row}, {col})")]
pub struct Cell {
    /// Row index (0-based, top to bottom).
    pub row: u8,
    /// Column index (0-based, left to right).
    pub col: u8,
}

impl Cell {
    /// Creates a cell from row and column indices.
    #[must_use]
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// Error returned when grid dimensions are zero on either axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("grid dimensions must be positive, got {rows}x{cols}")]
pub struct InvalidDimsError {
    /// Requested row count.
    pub rows: u8,
    /// Requested column count.
    pub cols: u8,
}

/// Validated rows×cols dimensions of a tile grid.
///
/// Both axes are guaranteed strictly positive, so code consuming a `GridDims`
/// never has to re-check for empty grids.
///
/// # Example
///
/// ```
/// use picslice_core::{Cell, GridDims};
///
/// let dims = GridDims::new(3, 4).unwrap();
/// assert_eq!(dims.cell_count(), 12);
/// assert!(dims.contains(Cell::new(2, 3)));
/// assert!(!dims.contains(Cell::new(3, 0)));
///
/// assert!(GridDims::new(0, 4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("{rows}x{cols}")]
pub struct GridDims {
    rows: u8,
    cols: u8,
}

impl GridDims {
    /// Creates dimensions from row and column counts.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDimsError`] if either axis is zero.
    pub const fn new(rows: u8, cols: u8) -> Result<Self, InvalidDimsError> {
        if rows == 0 || cols == 0 {
            return Err(InvalidDimsError { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Creates square dimensions with the given side length.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDimsError`] if `side` is zero.
    pub const fn square(side: u8) -> Result<Self, InvalidDimsError> {
        Self::new(side, side)
    }

    /// Returns the row count (always positive).
    #[must_use]
    #[inline]
    pub const fn rows(self) -> u8 {
        self.rows
    }

    /// Returns the column count (always positive).
    #[must_use]
    #[inline]
    pub const fn cols(self) -> u8 {
        self.cols
    }

    /// Returns the total number of cells (`rows * cols`).
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Returns whether the cell lies inside these dimensions.
    #[must_use]
    pub const fn contains(self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Returns an iterator over all cells in row-major order.
    ///
    /// Row-major order is the canonical tile creation and reassignment order
    /// for the board model.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Cell::new(row, col)))
    }
}
