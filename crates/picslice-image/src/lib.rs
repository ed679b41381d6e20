//! Raster decoding for the Picslice puzzle.
//!
//! [`decode_image`] turns uploaded bytes (PNG, JPEG, GIF, WebP, BMP) into an
//! RGBA8 [`RasterImage`] ready for texture upload, downscaling oversized
//! images to a configurable bound while preserving aspect ratio.

use std::fmt;

use derive_more::{Display, Error};
use image::imageops::FilterType;

/// A decoded RGBA8 raster.
///
/// Pixels are stored row-major, four bytes per pixel, straight (not
/// premultiplied) alpha.
#[derive(Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterImage {
    /// Wraps an existing RGBA8 buffer.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Empty`] for zero-sized dimensions, or
    /// [`DecodeError::BufferMismatch`] when the buffer length is not
    /// `width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, DecodeError> {
        if width == 0 || height == 0 {
            return Err(DecodeError::Empty);
        }
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(DecodeError::BufferMismatch {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Image width in pixels (always positive).
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels (always positive).
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` in pixels.
    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The raw RGBA8 pixel buffer.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

impl fmt::Debug for RasterImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RasterImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Errors from decoding uploaded image bytes.
#[derive(Debug, Display, Error)]
pub enum DecodeError {
    /// The bytes were not a decodable image.
    #[display("failed to decode image: {_0}")]
    Malformed(image::ImageError),
    /// The image decoded to zero pixels.
    #[display("image has no pixels")]
    Empty,
    /// A supplied pixel buffer did not match its dimensions.
    #[display("pixel buffer of {len} bytes does not match {width}x{height} RGBA")]
    BufferMismatch {
        /// Claimed width.
        width: u32,
        /// Claimed height.
        height: u32,
        /// Actual buffer length.
        len: usize,
    },
}

/// Decode-time limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Longest permitted axis; larger images are downscaled to fit,
    /// preserving aspect ratio.
    pub max_dimension: u32,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_dimension: 2048,
        }
    }
}

/// Decodes uploaded bytes into an RGBA8 raster.
///
/// Oversized images are downscaled so neither axis exceeds
/// `options.max_dimension`.
///
/// # Errors
///
/// Returns [`DecodeError::Malformed`] when the bytes are not a supported
/// image, or [`DecodeError::Empty`] when the decoded image has a zero axis.
///
/// # Example
///
/// ```
/// use picslice_image::{DecodeOptions, decode_image};
///
/// let err = decode_image(b"not an image", &DecodeOptions::default());
/// assert!(err.is_err());
/// ```
pub fn decode_image(bytes: &[u8], options: &DecodeOptions) -> Result<RasterImage, DecodeError> {
    let decoded = image::load_from_memory(bytes).map_err(DecodeError::Malformed)?;
    if decoded.width() == 0 || decoded.height() == 0 {
        return Err(DecodeError::Empty);
    }

    let decoded = if decoded.width() > options.max_dimension
        || decoded.height() > options.max_dimension
    {
        decoded.resize(
            options.max_dimension,
            options.max_dimension,
            FilterType::Triangle,
        )
    } else {
        decoded
    };

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    RasterImage::from_rgba8(width, height, rgba.into_raw())
}
