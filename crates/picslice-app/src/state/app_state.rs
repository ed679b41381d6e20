use crate::state::{PuzzleSession, Settings};

// AppState holds the puzzle session plus the persisted settings. Only the
// settings are serialized for resume.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) session: PuzzleSession,
    pub(crate) settings: Settings,
    dirty: bool,
}

impl AppState {
    #[must_use]
    pub(crate) fn new(settings: Settings) -> Self {
        Self {
            session: PuzzleSession::new(settings.difficulty.dims()),
            settings,
            dirty: false,
        }
    }

    pub(crate) fn access(&mut self) -> AppStateAccess<'_> {
        AppStateAccess { app_state: self }
    }

    #[must_use]
    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

#[derive(Debug)]
pub(crate) struct AppStateAccess<'a> {
    app_state: &'a mut AppState,
}

impl AppStateAccess<'_> {
    #[must_use]
    pub(crate) fn as_ref(&self) -> &AppState {
        self.app_state
    }

    pub(crate) fn as_mut(&mut self) -> &mut AppState {
        self.app_state.dirty = true;
        self.app_state
    }
}
