use picslice_core::GridDims;
use picslice_game::{Board, ScrambleSeed};
use picslice_image::RasterImage;

/// The live puzzle: board, source image, and the seed of the active
/// scramble.
///
/// Never persisted; a fresh session starts with a solved empty-surface board
/// and no image.
#[derive(Debug)]
pub(crate) struct PuzzleSession {
    pub(crate) board: Board,
    pub(crate) image: Option<RasterImage>,
    /// Seed of the arrangement currently on the board, if it came from a
    /// scramble. Cleared by reset and rebuild.
    pub(crate) seed: Option<ScrambleSeed>,
    /// Bumped whenever a new image replaces the old; keys the uploaded
    /// texture cache.
    pub(crate) image_revision: u64,
}

impl PuzzleSession {
    #[must_use]
    pub(crate) fn new(dims: GridDims) -> Self {
        Self {
            board: Board::new(dims),
            image: None,
            seed: None,
            image_revision: 0,
        }
    }

    #[must_use]
    pub(crate) fn has_image(&self) -> bool {
        self.image.is_some()
    }
}
