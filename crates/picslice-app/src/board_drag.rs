//! Pointer-gesture state machine for dragging tiles.
//!
//! egui already unifies mouse and touch into one pointer stream; the board
//! widget turns its per-frame response into [`PointerEvent`]s, and the
//! action handler advances this machine against the board model. The machine
//! itself never mutates the board - it only reports the swap to commit when
//! a drag ends over a different occupied cell.

use eframe::egui::{Pos2, Vec2};
use picslice_core::{Cell, TileGeometry};
use picslice_game::Board;

/// Phase of a unified pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PointerPhase {
    Start,
    Move,
    End,
}

/// One pointer event in board-surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PointerEvent {
    pub(crate) phase: PointerPhase,
    /// Surface position. `None` on an end event whose position egui no
    /// longer reports (pointer left the window); the drag then ends at the
    /// last known coordinates.
    pub(crate) pos: Option<Pos2>,
}

impl PointerEvent {
    pub(crate) const fn new(phase: PointerPhase, pos: Option<Pos2>) -> Self {
        Self { phase, pos }
    }
}

/// The gesture state machine.
///
/// `Dragging` identifies the grabbed tile by its home cell (the only stable
/// identity), and records the grab offset so the floating tile tracks the
/// pointer instead of snapping its corner to it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) enum DragState {
    #[default]
    Idle,
    Dragging {
        grabbed: Cell,
        grab_offset: Vec2,
        pointer: Pos2,
    },
}

impl DragState {
    #[must_use]
    pub(crate) fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Abandons any in-flight drag. Used when the board is rebuilt and the
    /// grabbed tile's identity becomes meaningless.
    pub(crate) fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// The floating top-left position of the dragged tile, if any.
    #[must_use]
    pub(crate) fn floating_pos(&self) -> Option<Pos2> {
        match self {
            Self::Idle => None,
            Self::Dragging {
                grab_offset,
                pointer,
                ..
            } => Some(*pointer - *grab_offset),
        }
    }

    /// The home cell of the dragged tile, if any.
    #[must_use]
    pub(crate) fn grabbed_home(&self) -> Option<Cell> {
        match self {
            Self::Idle => None,
            Self::Dragging { grabbed, .. } => Some(*grabbed),
        }
    }

    /// Advances the machine by one event.
    ///
    /// Returns the `(source, target)` current cells to swap when a drag ends
    /// over a different occupied cell; all other transitions return `None`.
    /// A start on an empty area, out of bounds, or while the board is
    /// already solved stays `Idle`. An end outside the grid (or over the
    /// dragged tile itself) commits nothing, so the tile snaps back on the
    /// next repaint.
    pub(crate) fn apply(
        &mut self,
        event: PointerEvent,
        board: &Board,
        geometry: &TileGeometry,
    ) -> Option<(Cell, Cell)> {
        match (*self, event.phase) {
            (Self::Idle, PointerPhase::Start) => {
                let pos = event.pos?;
                if board.is_solved() {
                    return None;
                }
                let cell = geometry.cell_at(pos.x, pos.y)?;
                let tile = board.tile_at(cell)?;
                let (origin_x, origin_y) = geometry.cell_origin(cell);
                *self = Self::Dragging {
                    grabbed: tile.home(),
                    grab_offset: pos - Pos2::new(origin_x, origin_y),
                    pointer: pos,
                };
                None
            }
            (
                Self::Dragging {
                    grabbed,
                    grab_offset,
                    pointer,
                },
                PointerPhase::Move,
            ) => {
                *self = Self::Dragging {
                    grabbed,
                    grab_offset,
                    pointer: event.pos.unwrap_or(pointer),
                };
                None
            }
            (Self::Dragging { grabbed, pointer, .. }, PointerPhase::End) => {
                *self = Self::Idle;
                let pos = event.pos.unwrap_or(pointer);
                let target = geometry.cell_at(pos.x, pos.y)?;
                let source = board.tile_with_home(grabbed)?.at();
                if target == source {
                    return None;
                }
                Some((source, target))
            }
            // Idle move/end and a start mid-drag carry no information.
            (Self::Idle, PointerPhase::Move | PointerPhase::End)
            | (Self::Dragging { .. }, PointerPhase::Start) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use picslice_core::{FitRect, GridDims};
    use picslice_game::ScrambleSeed;

    use super::*;

    fn geometry_3x3() -> TileGeometry {
        // 300x300 surface, 100-point tiles.
        TileGeometry::new(
            FitRect::fit(300.0, 300.0, 300.0, 300.0),
            GridDims::new(3, 3).unwrap(),
        )
    }

    fn scrambled_board() -> Board {
        let seed: ScrambleSeed = "0123456789abcdef0123456789abcdef".parse().unwrap();
        let mut board = Board::new(GridDims::new(3, 3).unwrap());
        board.scramble(&mut seed.rng());
        assert!(!board.is_solved(), "fixture seed must not solve the board");
        board
    }

    fn start(x: f32, y: f32) -> PointerEvent {
        PointerEvent::new(PointerPhase::Start, Some(Pos2::new(x, y)))
    }

    fn move_to(x: f32, y: f32) -> PointerEvent {
        PointerEvent::new(PointerPhase::Move, Some(Pos2::new(x, y)))
    }

    fn end_at(x: f32, y: f32) -> PointerEvent {
        PointerEvent::new(PointerPhase::End, Some(Pos2::new(x, y)))
    }

    #[test]
    fn start_grabs_tile_and_records_offset() {
        let board = scrambled_board();
        let geometry = geometry_3x3();
        let mut drag = DragState::default();

        // 30 points into cell (1, 2).
        assert_eq!(drag.apply(start(230.0, 130.0), &board, &geometry), None);
        let grabbed = board.tile_at(Cell::new(1, 2)).unwrap().home();
        assert_eq!(drag.grabbed_home(), Some(grabbed));
        assert_eq!(drag.floating_pos(), Some(Pos2::new(200.0, 100.0)));
    }

    #[test]
    fn start_outside_grid_stays_idle() {
        let board = scrambled_board();
        let geometry = geometry_3x3();
        let mut drag = DragState::default();

        assert_eq!(drag.apply(start(-5.0, 40.0), &board, &geometry), None);
        assert!(!drag.is_dragging());
        assert_eq!(drag.apply(start(40.0, 301.0), &board, &geometry), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn start_on_solved_board_stays_idle() {
        let board = Board::new(GridDims::new(3, 3).unwrap());
        let geometry = geometry_3x3();
        let mut drag = DragState::default();

        assert_eq!(drag.apply(start(50.0, 50.0), &board, &geometry), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn move_tracks_pointer_without_committing() {
        let board = scrambled_board();
        let geometry = geometry_3x3();
        let mut drag = DragState::default();

        drag.apply(start(50.0, 50.0), &board, &geometry);
        assert_eq!(drag.apply(move_to(175.0, 220.0), &board, &geometry), None);
        assert!(drag.is_dragging());
        assert_eq!(drag.floating_pos(), Some(Pos2::new(125.0, 170.0)));
    }

    #[test]
    fn end_over_distinct_cell_reports_swap() {
        let board = scrambled_board();
        let geometry = geometry_3x3();
        let mut drag = DragState::default();

        drag.apply(start(50.0, 50.0), &board, &geometry);
        let swap = drag.apply(end_at(250.0, 250.0), &board, &geometry);
        assert_eq!(swap, Some((Cell::new(0, 0), Cell::new(2, 2))));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn end_outside_grid_commits_nothing() {
        let board = scrambled_board();
        let geometry = geometry_3x3();
        let mut drag = DragState::default();

        drag.apply(start(50.0, 50.0), &board, &geometry);
        assert_eq!(drag.apply(end_at(500.0, 500.0), &board, &geometry), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn end_over_own_cell_commits_nothing() {
        let board = scrambled_board();
        let geometry = geometry_3x3();
        let mut drag = DragState::default();

        drag.apply(start(50.0, 50.0), &board, &geometry);
        assert_eq!(drag.apply(end_at(60.0, 80.0), &board, &geometry), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn end_without_position_uses_last_known() {
        let board = scrambled_board();
        let geometry = geometry_3x3();
        let mut drag = DragState::default();

        drag.apply(start(50.0, 50.0), &board, &geometry);
        drag.apply(move_to(250.0, 150.0), &board, &geometry);
        let swap = drag.apply(
            PointerEvent::new(PointerPhase::End, None),
            &board,
            &geometry,
        );
        assert_eq!(swap, Some((Cell::new(0, 0), Cell::new(1, 2))));
    }

    #[test]
    fn cancel_discards_in_flight_drag() {
        let board = scrambled_board();
        let geometry = geometry_3x3();
        let mut drag = DragState::default();

        drag.apply(start(50.0, 50.0), &board, &geometry);
        assert!(drag.is_dragging());
        drag.cancel();
        assert!(!drag.is_dragging());
        assert_eq!(drag.apply(end_at(250.0, 250.0), &board, &geometry), None);
    }
}
