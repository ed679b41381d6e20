//! Image loading off the UI thread, split by platform.
//!
//! This module defines shared request/result types and delegates the
//! implementation to platform-specific modules to keep `#[cfg]` usage
//! centralized. The `native` module uses a shared loader thread (which also
//! hosts the blocking file dialog), while the `wasm` module uses
//! `spawn_local` with the async dialog.
//!
//! Each request carries a [`LoadTicket`] from a process-wide counter; the
//! app only polls the handle of its newest request, so a slow decode can
//! never clobber a newer image.

use std::fmt;
use std::sync::atomic::Ordering;

use derive_more::{Display, Error};
use futures_channel::oneshot;
use picslice_image::{DecodeOptions, RasterImage, decode_image};
use portable_atomic::AtomicU64;

mod platform;

pub(crate) use platform::{enqueue, warm_up};

static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

/// Identifies one load request; larger tickets are newer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
#[display("{_0}")]
pub(crate) struct LoadTicket(u64);

impl LoadTicket {
    pub(crate) fn next() -> Self {
        Self(NEXT_TICKET.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub(crate) const fn value(self) -> u64 {
        self.0
    }
}

/// A request that can be offloaded to the loader.
#[derive(Debug)]
pub(crate) enum LoadRequest {
    /// Open the file dialog, then read and decode the chosen file.
    PickFile,
    /// Decode bytes already in hand (file drop).
    DecodeBytes(Vec<u8>),
    /// Read and decode a dropped file by path. Native drops report a path
    /// instead of bytes.
    #[cfg(not(target_arch = "wasm32"))]
    ReadFile(std::path::PathBuf),
}

/// The outcome of a load request.
#[derive(Debug)]
pub(crate) enum LoadResult {
    /// A decoded raster ready for a board rebuild.
    Loaded(RasterImage),
    /// The user dismissed the file dialog.
    Cancelled,
    /// The file could not be read or decoded.
    Failed(LoadError),
}

/// Errors that can occur while loading an image.
#[derive(Debug, Clone, Display, Error)]
pub(crate) enum LoadError {
    /// Reading the selected file failed.
    #[display("could not read the selected file: {_0}")]
    Read(#[error(not(source))] String),
    /// The bytes were not a decodable image.
    #[display("{_0}")]
    Decode(#[error(not(source))] String),
    /// The loader backend went away before responding.
    #[display("image loader disconnected")]
    Disconnected,
}

/// File extensions offered by the pick dialog.
pub(crate) const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Decodes bytes with the app-wide limits. Shared by both backends.
fn decode_bytes(bytes: &[u8]) -> LoadResult {
    match decode_image(bytes, &DecodeOptions::default()) {
        Ok(raster) => LoadResult::Loaded(raster),
        Err(err) => LoadResult::Failed(LoadError::Decode(err.to_string())),
    }
}

/// A handle for polling load completion.
pub(crate) struct LoadHandle {
    receiver: oneshot::Receiver<LoadResult>,
}

impl fmt::Debug for LoadHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadHandle").finish()
    }
}

impl LoadHandle {
    /// Attempts to poll for a completed result.
    ///
    /// A disconnected backend reports as [`LoadError::Disconnected`] rather
    /// than silently never completing.
    pub(crate) fn poll(&mut self) -> Option<LoadResult> {
        match self.receiver.try_recv() {
            Ok(Some(result)) => Some(result),
            Ok(None) => None,
            Err(oneshot::Canceled) => Some(LoadResult::Failed(LoadError::Disconnected)),
        }
    }
}
