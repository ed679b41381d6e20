use std::fmt;

use eframe::egui::TextureHandle;
use picslice_core::TileGeometry;

use crate::{
    board_drag::DragState,
    image_loader::{LoadHandle, LoadTicket},
};

// UiState holds ephemeral UI-only state (drag machine, message row, texture
// cache, in-flight load). It is not persisted.
#[derive(Debug)]
pub(crate) struct UiState {
    pub(crate) drag: DragState,
    pub(crate) message: Option<Message>,
    /// Geometry of the board widget from the last layout pass. One frame
    /// stale after a resize, which a pointer gesture cannot observe.
    pub(crate) board_geometry: Option<TileGeometry>,
    pub(crate) board_texture: Option<BoardTexture>,
    pub(crate) pending_load: Option<PendingLoad>,
    /// Ticket of the newest load request ever made; completions for any
    /// other ticket are stale and discarded.
    pub(crate) latest_load_ticket: Option<LoadTicket>,
}

impl UiState {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            drag: DragState::Idle,
            message: None,
            board_geometry: None,
            board_texture: None,
            pending_load: None,
            latest_load_ticket: None,
        }
    }
}

/// Severity of the transient message row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MessageSeverity {
    Info,
    Warning,
}

/// A transient user-facing message below the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Message {
    pub(crate) text: String,
    pub(crate) severity: MessageSeverity,
}

impl Message {
    pub(crate) fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: MessageSeverity::Info,
        }
    }

    pub(crate) fn warning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: MessageSeverity::Warning,
        }
    }
}

/// The uploaded board texture, keyed by the image revision it was built
/// from.
pub(crate) struct BoardTexture {
    pub(crate) revision: u64,
    pub(crate) handle: TextureHandle,
}

impl fmt::Debug for BoardTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardTexture")
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

/// An image load the app is waiting on.
#[derive(Debug)]
pub(crate) struct PendingLoad {
    pub(crate) ticket: LoadTicket,
    pub(crate) handle: LoadHandle,
}
