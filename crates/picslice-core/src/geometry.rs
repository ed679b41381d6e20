use crate::{Cell, GridDims};

/// Aspect-preserving placement of an image inside a surface.
///
/// The image is scaled to the largest size that fits the surface without
/// distortion and centered, letterboxing the shorter axis.
///
/// # Example
///
/// ```
/// use picslice_core::FitRect;
///
/// // A wide image in a square surface is letterboxed top and bottom.
/// let fit = FitRect::fit(200.0, 100.0, 600.0, 600.0);
/// assert_eq!(fit.x(), 0.0);
/// assert_eq!(fit.y(), 150.0);
/// assert_eq!(fit.width(), 600.0);
/// assert_eq!(fit.height(), 300.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitRect {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl FitRect {
    /// Fits an `image_w`×`image_h` image into a `surface_w`×`surface_h`
    /// surface.
    ///
    /// Degenerate extents (zero or negative on any axis) produce an empty fit
    /// at the origin.
    #[must_use]
    pub fn fit(image_w: f32, image_h: f32, surface_w: f32, surface_h: f32) -> Self {
        if image_w <= 0.0 || image_h <= 0.0 || surface_w <= 0.0 || surface_h <= 0.0 {
            return Self {
                x: 0.0,
                y: 0.0,
                width: 0.0,
                height: 0.0,
            };
        }

        let image_aspect = image_w / image_h;
        let surface_aspect = surface_w / surface_h;

        if image_aspect > surface_aspect {
            let height = surface_w / image_aspect;
            Self {
                x: 0.0,
                y: (surface_h - height) / 2.0,
                width: surface_w,
                height,
            }
        } else {
            let width = surface_h * image_aspect;
            Self {
                x: (surface_w - width) / 2.0,
                y: 0.0,
                width,
                height: surface_h,
            }
        }
    }

    /// Left edge of the fit within the surface.
    #[must_use]
    pub const fn x(self) -> f32 {
        self.x
    }

    /// Top edge of the fit within the surface.
    #[must_use]
    pub const fn y(self) -> f32 {
        self.y
    }

    /// Drawn width.
    #[must_use]
    pub const fn width(self) -> f32 {
        self.width
    }

    /// Drawn height.
    #[must_use]
    pub const fn height(self) -> f32 {
        self.height
    }

    /// Returns whether the fit has no drawable area.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Whole-point tile partition of a fit rectangle.
///
/// Tile width and height are `floor(drawn span / cols|rows)`; the sub-point
/// remainder is discarded, so the tiles may not perfectly cover the drawn
/// image. Points falling into that remainder band map to no cell, the same
/// as points outside the fit entirely.
///
/// # Example
///
/// ```
/// use picslice_core::{Cell, FitRect, GridDims, TileGeometry};
///
/// let fit = FitRect::fit(300.0, 300.0, 300.0, 300.0);
/// let geometry = TileGeometry::new(fit, GridDims::new(3, 3).unwrap());
///
/// assert_eq!(geometry.tile_width(), 100.0);
/// assert_eq!(geometry.cell_at(150.0, 50.0), Some(Cell::new(0, 1)));
/// assert_eq!(geometry.cell_at(-1.0, 50.0), None);
/// assert_eq!(geometry.cell_origin(Cell::new(2, 1)), (100.0, 200.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileGeometry {
    origin_x: f32,
    origin_y: f32,
    tile_w: f32,
    tile_h: f32,
    dims: GridDims,
}

impl TileGeometry {
    /// Partitions `fit` into a `dims` grid of whole-point tiles.
    #[must_use]
    pub fn new(fit: FitRect, dims: GridDims) -> Self {
        let tile_w = (fit.width() / f32::from(dims.cols())).floor();
        let tile_h = (fit.height() / f32::from(dims.rows())).floor();
        Self {
            origin_x: fit.x(),
            origin_y: fit.y(),
            tile_w,
            tile_h,
            dims,
        }
    }

    /// Tile width in points (zero for a degenerate fit).
    #[must_use]
    pub const fn tile_width(self) -> f32 {
        self.tile_w
    }

    /// Tile height in points (zero for a degenerate fit).
    #[must_use]
    pub const fn tile_height(self) -> f32 {
        self.tile_h
    }

    /// The grid dimensions of this partition.
    #[must_use]
    pub const fn dims(self) -> GridDims {
        self.dims
    }

    /// Maps a surface coordinate to the cell containing it.
    ///
    /// Returns `None` for coordinates left of or above the fit, beyond the
    /// tiled span on either axis (including the discarded remainder band),
    /// or when the fit is degenerate. Never panics.
    #[must_use]
    pub fn cell_at(self, x: f32, y: f32) -> Option<Cell> {
        if self.tile_w <= 0.0 || self.tile_h <= 0.0 {
            return None;
        }
        let dx = x - self.origin_x;
        let dy = y - self.origin_y;
        if dx < 0.0 || dy < 0.0 {
            return None;
        }
        let col = (dx / self.tile_w).floor();
        let row = (dy / self.tile_h).floor();
        if col >= f32::from(self.dims.cols()) || row >= f32::from(self.dims.rows()) {
            return None;
        }
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(Cell::new(row as u8, col as u8))
    }

    /// Returns the surface coordinates of a cell's top-left corner.
    ///
    /// The cell is not bounds-checked; out-of-range cells yield coordinates
    /// past the tiled span.
    #[must_use]
    pub fn cell_origin(self, cell: Cell) -> (f32, f32) {
        (
            self.origin_x + f32::from(cell.col) * self.tile_w,
            self.origin_y + f32::from(cell.row) * self.tile_h,
        )
    }
}
