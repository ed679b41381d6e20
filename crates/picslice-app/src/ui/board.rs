//! The board widget: paints the tiled image and feeds pointer events to the
//! drag state machine via the action queue.

use eframe::egui::{
    Align2, Color32, CursorIcon, FontId, Painter, Pos2, Rect, Response, Sense, Stroke, StrokeKind,
    TextureHandle, Ui, pos2, vec2,
};
use picslice_core::{Cell, FitRect, GridDims, TileGeometry};
use picslice_game::Board;

use crate::{
    action::{Action, ActionRequestQueue},
    board_drag::{DragState, PointerEvent, PointerPhase},
};

// Light gray cell borders.
const TILE_BORDER: Color32 = Color32::from_rgb(0xe5, 0xe7, 0xeb);

pub(crate) struct BoardViewModel<'a> {
    pub(crate) board: &'a Board,
    pub(crate) texture: Option<&'a TextureHandle>,
    pub(crate) drag: DragState,
    pub(crate) solved: bool,
}

/// Draws the board and returns the tile geometry used for this frame's
/// layout, or `None` while no image is shown.
pub(crate) fn show(
    ui: &mut Ui,
    vm: &BoardViewModel<'_>,
    action_queue: &mut ActionRequestQueue,
) -> Option<TileGeometry> {
    let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::drag());

    let Some(texture) = vm.texture else {
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            "Drop an image here, or open one from the sidebar",
            FontId::proportional(16.0),
            ui.visuals().weak_text_color(),
        );
        return None;
    };

    let texture_size = texture.size_vec2();
    let fit = FitRect::fit(texture_size.x, texture_size.y, rect.width(), rect.height());
    let geometry = TileGeometry::new(fit, vm.board.dims());

    queue_pointer_events(&response, rect.min, action_queue);

    let painter = ui.painter_at(rect);
    let dims = vm.board.dims();
    let grabbed = vm.drag.grabbed_home();
    for tile in vm.board.tiles() {
        if grabbed == Some(tile.home()) {
            continue;
        }
        let (x, y) = geometry.cell_origin(tile.at());
        draw_tile(&painter, rect.min, geometry, texture, dims, tile.home(), pos2(x, y));
    }
    // The dragged tile floats above the rest, painted last.
    if let (Some(home), Some(pos)) = (grabbed, vm.drag.floating_pos()) {
        draw_tile(&painter, rect.min, geometry, texture, dims, home, pos);
    }

    if vm.solved {
        draw_completion_banner(&painter, rect);
    }

    update_cursor(ui, vm, &response, rect.min, geometry);

    Some(geometry)
}

/// Translates the widget response into at most one pointer event per frame,
/// in board-surface coordinates.
fn queue_pointer_events(response: &Response, origin: Pos2, action_queue: &mut ActionRequestQueue) {
    let pos = response
        .interact_pointer_pos()
        .map(|pos| pos2(pos.x - origin.x, pos.y - origin.y));
    let phase = if response.drag_started() {
        PointerPhase::Start
    } else if response.drag_stopped() {
        // `pos` may be `None` here when the pointer left the window; the
        // state machine then ends at the last known position.
        PointerPhase::End
    } else if response.dragged() {
        PointerPhase::Move
    } else {
        return;
    };
    action_queue.request(Action::Pointer(PointerEvent::new(phase, pos)));
}

fn draw_tile(
    painter: &Painter,
    origin: Pos2,
    geometry: TileGeometry,
    texture: &TextureHandle,
    dims: GridDims,
    home: Cell,
    top_left: Pos2,
) {
    let size = vec2(geometry.tile_width(), geometry.tile_height());
    let screen_rect = Rect::from_min_size(origin + top_left.to_vec2(), size);
    painter.image(texture.id(), screen_rect, tile_uv(dims, home), Color32::WHITE);
    painter.rect_stroke(
        screen_rect,
        0.0,
        Stroke::new(1.0, TILE_BORDER),
        StrokeKind::Inside,
    );
}

/// UV sub-rectangle of the full texture for a tile's home cell.
fn tile_uv(dims: GridDims, home: Cell) -> Rect {
    let cols = f32::from(dims.cols());
    let rows = f32::from(dims.rows());
    Rect::from_min_max(
        pos2(f32::from(home.col) / cols, f32::from(home.row) / rows),
        pos2(
            f32::from(home.col + 1) / cols,
            f32::from(home.row + 1) / rows,
        ),
    )
}

fn draw_completion_banner(painter: &Painter, rect: Rect) {
    let banner = Rect::from_center_size(rect.center(), vec2(rect.width().min(360.0), 64.0));
    painter.rect_filled(banner, 8.0, Color32::from_black_alpha(160));
    painter.text(
        banner.center(),
        Align2::CENTER_CENTER,
        "Congratulations!",
        FontId::proportional(28.0),
        Color32::WHITE,
    );
}

fn update_cursor(
    ui: &Ui,
    vm: &BoardViewModel<'_>,
    response: &Response,
    origin: Pos2,
    geometry: TileGeometry,
) {
    if vm.drag.is_dragging() {
        ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
    } else if !vm.solved
        && let Some(pos) = response.hover_pos()
        && geometry.cell_at(pos.x - origin.x, pos.y - origin.y).is_some()
    {
        ui.ctx().set_cursor_icon(CursorIcon::Grab);
    }
}
