//! Picslice application shell.
//!
//! Per frame: poll the image loader, drain pending actions, gather input,
//! rebuild view models, draw, and drain actions the UI produced. All board
//! mutations go through the action handler, so nothing races.

use std::time::Duration;

use eframe::{
    App, CreationContext, Frame, Storage,
    egui::{CentralPanel, ColorImage, Context, TextureOptions},
};
use log::info;

use crate::{
    action::{self, Action, ActionRequestQueue},
    image_loader,
    state::{AppState, BoardTexture, Settings, UiState},
    ui, version, view_model_builder,
};

#[derive(Debug)]
pub struct PicsliceApp {
    app_state: AppState,
    ui_state: UiState,
}

impl PicsliceApp {
    #[must_use]
    pub fn new(cc: &CreationContext<'_>) -> Self {
        info!("starting picslice {}", version::build_version());
        image_loader::warm_up();
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value::<Settings>(storage, eframe::APP_KEY))
            .unwrap_or_default();
        Self {
            app_state: AppState::new(settings),
            ui_state: UiState::new(),
        }
    }

    fn poll_image_load(&mut self, ctx: &Context, action_queue: &mut ActionRequestQueue) {
        let Some(pending) = &mut self.ui_state.pending_load else {
            return;
        };
        if let Some(result) = pending.handle.poll() {
            let ticket = pending.ticket;
            self.ui_state.pending_load = None;
            action_queue.request(Action::ImageLoadFinished { ticket, result });
        } else {
            // Keep polling while the loader works, even without input.
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }

    /// Re-uploads the board texture when a new image revision arrives.
    fn ensure_board_texture(&mut self, ctx: &Context) {
        let session = &self.app_state.session;
        let Some(image) = &session.image else {
            self.ui_state.board_texture = None;
            return;
        };
        let revision = session.image_revision;
        if self
            .ui_state
            .board_texture
            .as_ref()
            .is_some_and(|texture| texture.revision == revision)
        {
            return;
        }
        let size = [image.width() as usize, image.height() as usize];
        let color_image = ColorImage::from_rgba_unmultiplied(size, image.pixels());
        let handle = ctx.load_texture("board-image", color_image, TextureOptions::LINEAR);
        self.ui_state.board_texture = Some(BoardTexture { revision, handle });
    }

    fn apply_persistence(&mut self, frame: &mut Frame) {
        if self.app_state.is_dirty()
            && let Some(storage) = frame.storage_mut()
        {
            self.save(storage);
            self.app_state.clear_dirty();
        }
    }
}

impl App for PicsliceApp {
    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.app_state.settings);
    }

    fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(30)
    }

    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        self.poll_image_load(ctx, &mut action_queue);
        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        ctx.input(|i| {
            ui::input::handle_input(i, &mut action_queue);
            ui::input::handle_dropped_files(i, &mut action_queue);
        });
        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        self.ensure_board_texture(ctx);

        let game_screen_vm =
            view_model_builder::build_game_screen_view_model(&self.app_state, &self.ui_state);

        let mut board_geometry = None;
        CentralPanel::default().show(ctx, |ui| {
            board_geometry = ui::game_screen::show(ui, &game_screen_vm, &mut action_queue);
        });
        self.ui_state.board_geometry = board_geometry;

        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        self.apply_persistence(frame);
    }
}
