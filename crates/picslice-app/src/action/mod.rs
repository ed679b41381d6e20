use std::mem;

use crate::{
    board_drag::PointerEvent,
    image_loader::{LoadResult, LoadTicket},
    state::Difficulty,
};

pub(crate) mod handler;

/// A request produced by UI widgets or input handling, applied in order by
/// the action handler.
#[derive(Debug)]
pub(crate) enum Action {
    /// Open the file dialog and load the chosen image.
    OpenImage,
    /// Decode an image dropped onto the window as bytes.
    ImageDropped(Vec<u8>),
    /// Read and decode an image dropped onto the window as a path.
    #[cfg(not(target_arch = "wasm32"))]
    ImageFileDropped(std::path::PathBuf),
    /// A load request finished off-thread.
    ImageLoadFinished {
        ticket: LoadTicket,
        result: LoadResult,
    },
    /// Randomize the tile arrangement with a fresh seed.
    Scramble,
    /// Restore the solved arrangement.
    Reset,
    /// Change the grid side selection.
    SetDifficulty(Difficulty),
    /// One pointer event from the board widget.
    Pointer(PointerEvent),
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}
