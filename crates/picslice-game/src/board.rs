use derive_more::{Display, Error};
use picslice_core::{Cell, GridDims};
use rand::{Rng, RngExt as _};

/// One rectangular fragment of the source image.
///
/// Identity is the home (original) cell, immutable once created; the current
/// cell changes as the tile is scrambled, swapped, and reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    home: Cell,
    at: Cell,
}

impl Tile {
    /// The cell this tile belongs to in the solved arrangement.
    #[must_use]
    #[inline]
    pub const fn home(&self) -> Cell {
        self.home
    }

    /// The cell this tile currently occupies.
    #[must_use]
    #[inline]
    pub const fn at(&self) -> Cell {
        self.at
    }

    /// Returns whether the tile sits in its home cell.
    #[must_use]
    pub fn is_home(&self) -> bool {
        self.home == self.at
    }
}

/// Errors from board mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// The cell lies outside the board dimensions.
    #[display("cell {cell} is outside the {dims} board")]
    CellOutOfBounds {
        /// The offending cell.
        cell: Cell,
        /// The board dimensions.
        dims: GridDims,
    },
    /// No tile occupies the cell. Unreachable while the permutation
    /// invariant holds; reported rather than panicking.
    #[display("no tile occupies cell {cell}")]
    CellUnoccupied {
        /// The unoccupied cell.
        cell: Cell,
    },
}

/// The full tile arrangement for one puzzle.
///
/// Tiles are created in row-major order with `home == at`, and a frozen copy
/// of that solved arrangement is kept for [`Board::reset`]. The board is
/// never structurally mutated during play; only current cells change.
///
/// Invariant: the set of current cells across all tiles is exactly the full
/// grid with no duplicates. Every mutation preserves this bijection.
///
/// # Example
///
/// ```
/// use picslice_core::{Cell, GridDims};
/// use picslice_game::Board;
///
/// let mut board = Board::new(GridDims::new(3, 3).unwrap());
/// assert!(board.is_solved());
///
/// board.swap(Cell::new(0, 0), Cell::new(2, 2)).unwrap();
/// assert!(!board.is_solved());
///
/// board.reset();
/// assert!(board.is_solved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dims: GridDims,
    tiles: Vec<Tile>,
    snapshot: Vec<Tile>,
}

impl Board {
    /// Creates a solved board with `dims.cell_count()` tiles in row-major
    /// order.
    #[must_use]
    pub fn new(dims: GridDims) -> Self {
        let tiles: Vec<_> = dims
            .cells()
            .map(|cell| Tile {
                home: cell,
                at: cell,
            })
            .collect();
        let snapshot = tiles.clone();
        Self {
            dims,
            tiles,
            snapshot,
        }
    }

    /// The board dimensions.
    #[must_use]
    pub const fn dims(&self) -> GridDims {
        self.dims
    }

    /// All tiles in their current sequence order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Applies a uniform random permutation to the arrangement.
    ///
    /// Runs Fisher-Yates over the tile sequence (index `i` from last down
    /// to 1, swapping with a uniformly chosen index in `0..=i`), then
    /// reassigns current cells in row-major order by walking the permuted
    /// sequence.
    ///
    /// The result may (rarely) equal the solved arrangement; no re-roll is
    /// performed.
    ///
    /// # Example
    ///
    /// ```
    /// use picslice_core::GridDims;
    /// use picslice_game::{Board, ScrambleSeed};
    ///
    /// let seed: ScrambleSeed = "00112233445566778899aabbccddeeff".parse().unwrap();
    /// let mut board = Board::new(GridDims::new(4, 4).unwrap());
    /// board.scramble(&mut seed.rng());
    /// ```
    pub fn scramble<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.tiles.len()).rev() {
            let j = rng.random_range(0..=i);
            self.tiles.swap(i, j);
        }
        for (tile, cell) in self.tiles.iter_mut().zip(self.dims.cells()) {
            tile.at = cell;
        }
    }

    /// Restores the frozen solved arrangement, sequence order included.
    pub fn reset(&mut self) {
        self.tiles.clone_from(&self.snapshot);
    }

    /// Returns whether every tile sits in its home cell.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.tiles.iter().all(Tile::is_home)
    }

    /// Exchanges the current cells of the tiles occupying `a` and `b`.
    ///
    /// A no-op when `a == b`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CellOutOfBounds`] if either cell is outside the
    /// dimensions, or [`BoardError::CellUnoccupied`] if either cell has no
    /// tile (unreachable while the permutation invariant holds).
    pub fn swap(&mut self, a: Cell, b: Cell) -> Result<(), BoardError> {
        for cell in [a, b] {
            if !self.dims.contains(cell) {
                return Err(BoardError::CellOutOfBounds {
                    cell,
                    dims: self.dims,
                });
            }
        }
        if a == b {
            return Ok(());
        }
        let index_a = self
            .tile_index_at(a)
            .ok_or(BoardError::CellUnoccupied { cell: a })?;
        let index_b = self
            .tile_index_at(b)
            .ok_or(BoardError::CellUnoccupied { cell: b })?;
        self.tiles[index_a].at = b;
        self.tiles[index_b].at = a;
        Ok(())
    }

    /// Looks up the tile currently occupying `cell`.
    ///
    /// Linear scan; grid sides are bounded by the difficulty set, so the
    /// board never exceeds 64 tiles.
    #[must_use]
    pub fn tile_at(&self, cell: Cell) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.at == cell)
    }

    /// Looks up a tile by its home cell.
    #[must_use]
    pub fn tile_with_home(&self, home: Cell) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.home == home)
    }

    fn tile_index_at(&self, cell: Cell) -> Option<usize> {
        self.tiles.iter().position(|tile| tile.at == cell)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use super::*;
    use crate::ScrambleSeed;

    fn board(rows: u8, cols: u8) -> Board {
        Board::new(GridDims::new(rows, cols).unwrap())
    }

    fn current_cells(board: &Board) -> BTreeSet<Cell> {
        board.tiles().iter().map(Tile::at).collect()
    }

    #[test]
    fn new_board_covers_grid_and_is_solved() {
        let board = board(3, 3);
        assert_eq!(board.tiles().len(), 9);
        assert!(board.is_solved());

        let homes: BTreeSet<_> = board.tiles().iter().map(Tile::home).collect();
        let all: BTreeSet<_> = board.dims().cells().collect();
        assert_eq!(homes, all);
    }

    #[test]
    fn swap_relocates_exactly_two_tiles() {
        let mut board = board(3, 3);
        let seed: ScrambleSeed = "000102030405060708090a0b0c0d0e0f".parse().unwrap();
        board.scramble(&mut seed.rng());

        let a = Cell::new(0, 0);
        let b = Cell::new(2, 2);
        let home_a = board.tile_at(a).unwrap().home();
        let home_b = board.tile_at(b).unwrap().home();

        board.swap(a, b).unwrap();

        assert_eq!(board.tile_at(a).unwrap().home(), home_b);
        assert_eq!(board.tile_at(b).unwrap().home(), home_a);
        // Every other tile kept its cell.
        for tile in board.tiles() {
            if tile.home() != home_a && tile.home() != home_b {
                assert_eq!(
                    board.tile_with_home(tile.home()).unwrap().at(),
                    tile.at()
                );
            }
        }
    }

    #[test]
    fn swap_same_pair_twice_restores_arrangement() {
        let mut board = board(4, 4);
        let seed: ScrambleSeed = "ffeeddccbbaa99887766554433221100".parse().unwrap();
        board.scramble(&mut seed.rng());
        let before = board.clone();

        let a = Cell::new(1, 2);
        let b = Cell::new(3, 0);
        board.swap(a, b).unwrap();
        assert_ne!(board.tile_at(a), before.tile_at(a));
        board.swap(a, b).unwrap();

        for cell in board.dims().cells() {
            assert_eq!(board.tile_at(cell), before.tile_at(cell));
        }
    }

    #[test]
    fn swap_same_cell_is_noop() {
        let mut board = board(3, 3);
        let before = board.clone();
        board.swap(Cell::new(1, 1), Cell::new(1, 1)).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn swap_out_of_bounds_is_rejected() {
        let mut board = board(3, 3);
        let result = board.swap(Cell::new(0, 0), Cell::new(3, 0));
        assert!(matches!(
            result,
            Err(BoardError::CellOutOfBounds { cell, .. }) if cell == Cell::new(3, 0)
        ));
    }

    #[test]
    fn reset_restores_solved_after_any_swaps() {
        let mut board = board(3, 3);
        let seed: ScrambleSeed = "0123456789abcdef0123456789abcdef".parse().unwrap();
        board.scramble(&mut seed.rng());
        board.swap(Cell::new(0, 0), Cell::new(1, 1)).unwrap();
        board.swap(Cell::new(2, 0), Cell::new(0, 2)).unwrap();

        board.reset();
        assert!(board.is_solved());
        for tile in board.tiles() {
            assert_eq!(tile.home(), tile.at());
        }
    }

    #[test]
    fn scramble_with_fixed_seed_is_reproducible() {
        let seed: ScrambleSeed = "00112233445566778899aabbccddeeff".parse().unwrap();
        let mut first = board(5, 5);
        let mut second = board(5, 5);
        first.scramble(&mut seed.rng());
        second.scramble(&mut seed.rng());
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_give_different_arrangements() {
        let seed_a: ScrambleSeed = "00112233445566778899aabbccddeeff".parse().unwrap();
        let seed_b: ScrambleSeed = "ffeeddccbbaa99887766554433221100".parse().unwrap();
        let mut a = board(6, 6);
        let mut b = board(6, 6);
        a.scramble(&mut seed_a.rng());
        b.scramble(&mut seed_b.rng());
        assert_ne!(a, b);
    }

    proptest! {
        #[test]
        fn scramble_preserves_permutation_invariant(
            rows in 1u8..=8,
            cols in 1u8..=8,
            seed in any::<u128>(),
        ) {
            let mut board = board(rows, cols);
            let seed = ScrambleSeed::from_bytes(seed.to_le_bytes());
            board.scramble(&mut seed.rng());

            let cells = current_cells(&board);
            let all: BTreeSet<_> = board.dims().cells().collect();
            prop_assert_eq!(cells, all);
        }

        #[test]
        fn swaps_preserve_permutation_invariant(
            seed in any::<u128>(),
            pairs in proptest::collection::vec((0u8..4, 0u8..4, 0u8..4, 0u8..4), 0..16),
        ) {
            let mut board = board(4, 4);
            let seed = ScrambleSeed::from_bytes(seed.to_le_bytes());
            board.scramble(&mut seed.rng());

            for (r1, c1, r2, c2) in pairs {
                board.swap(Cell::new(r1, c1), Cell::new(r2, c2)).unwrap();
            }

            let cells = current_cells(&board);
            let all: BTreeSet<_> = board.dims().cells().collect();
            prop_assert_eq!(cells, all);
        }
    }
}
