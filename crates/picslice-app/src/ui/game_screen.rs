use eframe::egui::Ui;
use egui_extras::{Size, StripBuilder};
use picslice_core::TileGeometry;

use crate::{
    action::ActionRequestQueue,
    ui::{
        board::{self, BoardViewModel},
        sidebar::{self, SidebarViewModel},
        status_line::{self, StatusLineViewModel},
    },
};

const SIDEBAR_WIDTH: f32 = 220.0;
const STATUS_HEIGHT: f32 = 24.0;

pub(crate) struct GameScreenViewModel<'a> {
    pub(crate) board_vm: BoardViewModel<'a>,
    pub(crate) sidebar_vm: SidebarViewModel,
    pub(crate) status_line_vm: StatusLineViewModel<'a>,
}

/// Lays out the board, the status line under it, and the sidebar; returns
/// the board geometry used this frame.
pub(crate) fn show(
    ui: &mut Ui,
    vm: &GameScreenViewModel<'_>,
    action_queue: &mut ActionRequestQueue,
) -> Option<TileGeometry> {
    let mut geometry = None;
    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(SIDEBAR_WIDTH))
        .horizontal(|mut strip| {
            strip.cell(|ui| {
                StripBuilder::new(ui)
                    .size(Size::remainder())
                    .size(Size::exact(STATUS_HEIGHT))
                    .vertical(|mut strip| {
                        strip.cell(|ui| {
                            geometry = board::show(ui, &vm.board_vm, action_queue);
                        });
                        strip.cell(|ui| {
                            status_line::show(ui, &vm.status_line_vm);
                        });
                    });
            });
            strip.cell(|ui| {
                sidebar::show(ui, &vm.sidebar_vm, action_queue);
            });
        });
    geometry
}
