//! Core vocabulary for the Picslice puzzle.
//!
//! This crate defines the cell/dimension types shared by the board model and
//! the application, plus the pure surface geometry that maps between pixel
//! coordinates and grid cells:
//!
//! - [`Cell`] and [`GridDims`] - 0-indexed grid addressing with validated
//!   dimensions
//! - [`FitRect`] - aspect-preserving placement of an image inside a surface
//! - [`TileGeometry`] - the whole-point tile partition of a fit rectangle and
//!   its floor-division coordinate mapping
//!
//! Everything here is pure data and arithmetic; no I/O, no randomness.

pub use self::{cell::*, geometry::*};

mod cell;
mod geometry;
