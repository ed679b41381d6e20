//! Board model and scramble machinery for the Picslice puzzle.
//!
//! The [`Board`] owns the tile arrangement: which image fragment currently
//! sits in which grid cell. All mutations (scramble, swap, reset) preserve
//! the permutation invariant - the current cells of all tiles are always
//! exactly the full grid with no duplicates.
//!
//! Scrambles are driven by a [`ScrambleSeed`], so any arrangement can be
//! reproduced from its seed.

pub use self::{board::*, scramble::*};

mod board;
mod scramble;
