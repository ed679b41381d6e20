use log::{debug, info, warn};
use picslice_game::{Board, ScrambleSeed};

use crate::{
    action::{Action, ActionRequestQueue},
    board_drag::PointerEvent,
    image_loader::{self, LoadRequest, LoadResult, LoadTicket},
    state::{AppState, AppStateAccess, Difficulty, Message, PendingLoad, UiState},
};

const MSG_NO_IMAGE: &str = "Load an image first.";
const MSG_IMAGE_LOADED: &str = "Image loaded! Drag the tiles to solve the puzzle.";
const MSG_RESET: &str = "Puzzle reset.";
const MSG_SOLVED: &str = "Puzzle solved!";

#[derive(Debug)]
struct ActionContext<'a> {
    app_state: AppStateAccess<'a>,
    ui_state: &'a mut UiState,
}

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action);
    }
}

pub(crate) fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) {
    let mut ctx = ActionContext {
        app_state: app_state.access(),
        ui_state,
    };

    match action {
        Action::OpenImage => ctx.start_load(LoadRequest::PickFile),
        Action::ImageDropped(bytes) => ctx.start_load(LoadRequest::DecodeBytes(bytes)),
        #[cfg(not(target_arch = "wasm32"))]
        Action::ImageFileDropped(path) => ctx.start_load(LoadRequest::ReadFile(path)),
        Action::ImageLoadFinished { ticket, result } => ctx.finish_load(ticket, result),
        Action::Scramble => ctx.scramble(),
        Action::Reset => ctx.reset(),
        Action::SetDifficulty(difficulty) => ctx.set_difficulty(difficulty),
        Action::Pointer(event) => ctx.pointer(event),
    }
}

impl ActionContext<'_> {
    fn start_load(&mut self, request: LoadRequest) {
        let ticket = LoadTicket::next();
        match image_loader::enqueue(request) {
            Ok(handle) => {
                info!("image load {ticket} started");
                self.ui_state.pending_load = Some(PendingLoad { ticket, handle });
                self.ui_state.latest_load_ticket = Some(ticket);
            }
            Err(err) => {
                warn!("image load failed to start: {err}");
                self.ui_state.message = Some(Message::warning(err.to_string()));
            }
        }
    }

    fn finish_load(&mut self, ticket: LoadTicket, result: LoadResult) {
        if self.ui_state.latest_load_ticket != Some(ticket) {
            debug!("discarding stale image load {ticket}");
            return;
        }
        match result {
            LoadResult::Loaded(raster) => {
                info!(
                    "image load {ticket} completed ({}x{})",
                    raster.width(),
                    raster.height()
                );
                let app_state = self.app_state.as_mut();
                app_state.session.image = Some(raster);
                app_state.session.image_revision = ticket.value();
                self.rebuild_board();
                self.scramble();
                self.ui_state.message = Some(Message::info(MSG_IMAGE_LOADED));
            }
            LoadResult::Cancelled => {
                debug!("image load {ticket} cancelled");
            }
            LoadResult::Failed(err) => {
                warn!("image load {ticket} failed: {err}");
                self.ui_state.message = Some(Message::warning(err.to_string()));
            }
        }
    }

    fn scramble(&mut self) {
        if !self.app_state.as_ref().session.has_image() {
            self.ui_state.message = Some(Message::warning(MSG_NO_IMAGE));
            return;
        }
        let seed = ScrambleSeed::random();
        info!("scrambling with seed {seed}");
        let app_state = self.app_state.as_mut();
        let mut rng = seed.rng();
        app_state.session.board.scramble(&mut rng);
        app_state.session.seed = Some(seed);
        self.ui_state.drag.cancel();
        self.ui_state.message = None;
    }

    fn reset(&mut self) {
        if !self.app_state.as_ref().session.has_image() {
            self.ui_state.message = Some(Message::warning(MSG_NO_IMAGE));
            return;
        }
        info!("resetting puzzle to the solved arrangement");
        let app_state = self.app_state.as_mut();
        app_state.session.board.reset();
        app_state.session.seed = None;
        self.ui_state.drag.cancel();
        self.ui_state.message = Some(Message::info(MSG_RESET));
    }

    fn set_difficulty(&mut self, difficulty: Difficulty) {
        if self.app_state.as_ref().settings.difficulty == difficulty {
            return;
        }
        info!("difficulty set to {}", difficulty.label());
        self.app_state.as_mut().settings.difficulty = difficulty;
        // Without an image the selection is just recorded; the empty board
        // is rebuilt lazily on the next load.
        if self.app_state.as_ref().session.has_image() {
            self.rebuild_board();
            self.scramble();
        }
    }

    fn pointer(&mut self, event: PointerEvent) {
        if !self.app_state.as_ref().session.has_image() {
            return;
        }
        let Some(geometry) = self.ui_state.board_geometry else {
            return;
        };
        let board = &self.app_state.as_ref().session.board;
        let Some((source, target)) = self.ui_state.drag.apply(event, board, &geometry) else {
            return;
        };

        let app_state = self.app_state.as_mut();
        match app_state.session.board.swap(source, target) {
            Ok(()) => {
                debug!("swapped tiles at {source} and {target}");
                if app_state.session.board.is_solved() {
                    info!("puzzle solved");
                    self.ui_state.message = Some(Message::info(MSG_SOLVED));
                }
            }
            Err(err) => warn!("rejected swap: {err}"),
        }
    }

    fn rebuild_board(&mut self) {
        let app_state = self.app_state.as_mut();
        let dims = app_state.settings.difficulty.dims();
        debug!("rebuilding board at {dims}");
        app_state.session.board = Board::new(dims);
        app_state.session.seed = None;
        self.ui_state.drag.cancel();
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::Pos2;
    use picslice_core::{Cell, FitRect, TileGeometry};
    use picslice_image::RasterImage;

    use super::*;
    use crate::{
        board_drag::PointerPhase,
        state::{MessageSeverity, Settings},
    };

    fn fixture() -> (AppState, UiState) {
        (AppState::new(Settings::default()), UiState::new())
    }

    fn raster(width: u32, height: u32) -> RasterImage {
        let pixels = vec![0x7f; width as usize * height as usize * 4];
        RasterImage::from_rgba8(width, height, pixels).unwrap()
    }

    fn load_image(app_state: &mut AppState, ui_state: &mut UiState) {
        let ticket = LoadTicket::next();
        ui_state.latest_load_ticket = Some(ticket);
        handle(
            app_state,
            ui_state,
            Action::ImageLoadFinished {
                ticket,
                result: LoadResult::Loaded(raster(30, 30)),
            },
        );
    }

    fn geometry_3x3() -> TileGeometry {
        TileGeometry::new(
            FitRect::fit(300.0, 300.0, 300.0, 300.0),
            Difficulty::Side3.dims(),
        )
    }

    fn pointer(phase: PointerPhase, x: f32, y: f32) -> Action {
        Action::Pointer(PointerEvent::new(phase, Some(Pos2::new(x, y))))
    }

    #[test]
    fn scramble_without_image_warns_and_leaves_board() {
        let (mut app_state, mut ui_state) = fixture();

        handle(&mut app_state, &mut ui_state, Action::Scramble);

        assert!(app_state.session.board.is_solved());
        assert!(app_state.session.seed.is_none());
        let message = ui_state.message.as_ref().unwrap();
        assert_eq!(message.severity, MessageSeverity::Warning);
        assert_eq!(message.text, MSG_NO_IMAGE);
    }

    #[test]
    fn reset_without_image_warns() {
        let (mut app_state, mut ui_state) = fixture();

        handle(&mut app_state, &mut ui_state, Action::Reset);

        assert_eq!(
            ui_state.message.as_ref().unwrap().severity,
            MessageSeverity::Warning
        );
    }

    #[test]
    fn finished_load_rebuilds_scrambles_and_informs() {
        let (mut app_state, mut ui_state) = fixture();

        load_image(&mut app_state, &mut ui_state);

        assert!(app_state.session.has_image());
        assert!(app_state.session.seed.is_some());
        assert_eq!(app_state.session.board.tiles().len(), 9);
        let message = ui_state.message.as_ref().unwrap();
        assert_eq!(message.severity, MessageSeverity::Info);
        assert_eq!(message.text, MSG_IMAGE_LOADED);
    }

    #[test]
    fn stale_load_result_is_discarded() {
        let (mut app_state, mut ui_state) = fixture();
        let stale = LoadTicket::next();
        ui_state.latest_load_ticket = Some(LoadTicket::next());

        handle(
            &mut app_state,
            &mut ui_state,
            Action::ImageLoadFinished {
                ticket: stale,
                result: LoadResult::Loaded(raster(30, 30)),
            },
        );

        assert!(!app_state.session.has_image());
        assert!(ui_state.message.is_none());
    }

    #[test]
    fn failed_load_surfaces_warning_without_rebuild() {
        let (mut app_state, mut ui_state) = fixture();
        let ticket = LoadTicket::next();
        ui_state.latest_load_ticket = Some(ticket);

        handle(
            &mut app_state,
            &mut ui_state,
            Action::ImageLoadFinished {
                ticket,
                result: LoadResult::Failed(image_loader::LoadError::Decode(
                    "image has no pixels".into(),
                )),
            },
        );

        assert!(!app_state.session.has_image());
        assert!(app_state.session.board.is_solved());
        assert_eq!(
            ui_state.message.as_ref().unwrap().severity,
            MessageSeverity::Warning
        );
    }

    #[test]
    fn cancelled_load_is_silent() {
        let (mut app_state, mut ui_state) = fixture();
        let ticket = LoadTicket::next();
        ui_state.latest_load_ticket = Some(ticket);

        handle(
            &mut app_state,
            &mut ui_state,
            Action::ImageLoadFinished {
                ticket,
                result: LoadResult::Cancelled,
            },
        );

        assert!(ui_state.message.is_none());
        assert!(!app_state.session.has_image());
    }

    #[test]
    fn difficulty_change_with_image_rebuilds_and_scrambles() {
        let (mut app_state, mut ui_state) = fixture();
        load_image(&mut app_state, &mut ui_state);

        handle(
            &mut app_state,
            &mut ui_state,
            Action::SetDifficulty(Difficulty::Side4),
        );

        assert_eq!(app_state.settings.difficulty, Difficulty::Side4);
        assert_eq!(app_state.session.board.tiles().len(), 16);
        assert!(app_state.session.seed.is_some());
        assert!(!ui_state.drag.is_dragging());
    }

    #[test]
    fn difficulty_change_without_image_records_only() {
        let (mut app_state, mut ui_state) = fixture();

        handle(
            &mut app_state,
            &mut ui_state,
            Action::SetDifficulty(Difficulty::Side8),
        );

        assert_eq!(app_state.settings.difficulty, Difficulty::Side8);
        // The board keeps its old dimensions until a load rebuilds it.
        assert_eq!(app_state.session.board.tiles().len(), 9);
        assert!(ui_state.message.is_none());
    }

    #[test]
    fn rebuild_mid_drag_forces_idle() {
        let (mut app_state, mut ui_state) = fixture();
        load_image(&mut app_state, &mut ui_state);
        ui_state.board_geometry = Some(geometry_3x3());

        handle(
            &mut app_state,
            &mut ui_state,
            pointer(PointerPhase::Start, 50.0, 50.0),
        );
        assert!(ui_state.drag.is_dragging());

        handle(
            &mut app_state,
            &mut ui_state,
            Action::SetDifficulty(Difficulty::Side5),
        );
        assert!(!ui_state.drag.is_dragging());
    }

    #[test]
    fn drag_end_over_distinct_cell_swaps_tiles() {
        let (mut app_state, mut ui_state) = fixture();
        load_image(&mut app_state, &mut ui_state);
        ui_state.board_geometry = Some(geometry_3x3());

        let home_a = app_state
            .session
            .board
            .tile_at(Cell::new(0, 0))
            .unwrap()
            .home();
        let home_b = app_state
            .session
            .board
            .tile_at(Cell::new(2, 2))
            .unwrap()
            .home();

        handle(
            &mut app_state,
            &mut ui_state,
            pointer(PointerPhase::Start, 50.0, 50.0),
        );
        handle(
            &mut app_state,
            &mut ui_state,
            pointer(PointerPhase::End, 250.0, 250.0),
        );

        let board = &app_state.session.board;
        assert_eq!(board.tile_at(Cell::new(0, 0)).unwrap().home(), home_b);
        assert_eq!(board.tile_at(Cell::new(2, 2)).unwrap().home(), home_a);
        assert!(!ui_state.drag.is_dragging());
    }

    #[test]
    fn drag_end_outside_bounds_changes_nothing() {
        let (mut app_state, mut ui_state) = fixture();
        load_image(&mut app_state, &mut ui_state);
        ui_state.board_geometry = Some(geometry_3x3());
        let before = app_state.session.board.clone();

        handle(
            &mut app_state,
            &mut ui_state,
            pointer(PointerPhase::Start, 50.0, 50.0),
        );
        handle(
            &mut app_state,
            &mut ui_state,
            pointer(PointerPhase::End, 500.0, 500.0),
        );

        assert_eq!(app_state.session.board, before);
        assert!(!ui_state.drag.is_dragging());
    }

    #[test]
    fn solving_swap_sets_solved_message() {
        let (mut app_state, mut ui_state) = fixture();
        load_image(&mut app_state, &mut ui_state);
        ui_state.board_geometry = Some(geometry_3x3());

        // Force a one-swap-from-solved arrangement.
        app_state.session.board.reset();
        app_state
            .session
            .board
            .swap(Cell::new(0, 0), Cell::new(1, 1))
            .unwrap();

        handle(
            &mut app_state,
            &mut ui_state,
            pointer(PointerPhase::Start, 50.0, 50.0),
        );
        handle(
            &mut app_state,
            &mut ui_state,
            pointer(PointerPhase::End, 150.0, 150.0),
        );

        assert!(app_state.session.board.is_solved());
        let message = ui_state.message.as_ref().unwrap();
        assert_eq!(message.severity, MessageSeverity::Info);
        assert_eq!(message.text, MSG_SOLVED);
    }

    #[test]
    fn pointer_without_image_is_ignored() {
        let (mut app_state, mut ui_state) = fixture();
        ui_state.board_geometry = Some(geometry_3x3());

        handle(
            &mut app_state,
            &mut ui_state,
            pointer(PointerPhase::Start, 50.0, 50.0),
        );

        assert!(!ui_state.drag.is_dragging());
    }
}
