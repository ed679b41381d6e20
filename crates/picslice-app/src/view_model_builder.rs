use crate::{
    state::{AppState, UiState},
    ui::{
        board::BoardViewModel,
        game_screen::GameScreenViewModel,
        sidebar::SidebarViewModel,
        status_line::{GameStatus, StatusLineViewModel},
    },
};

#[must_use]
pub(crate) fn build_game_screen_view_model<'a>(
    app_state: &'a AppState,
    ui_state: &'a UiState,
) -> GameScreenViewModel<'a> {
    let session = &app_state.session;
    let solved = session.board.is_solved();
    let status = if !session.has_image() {
        GameStatus::NoImage
    } else if solved {
        GameStatus::Solved
    } else {
        GameStatus::InProgress
    };

    let board_vm = BoardViewModel {
        board: &session.board,
        texture: ui_state
            .board_texture
            .as_ref()
            .map(|texture| &texture.handle),
        drag: ui_state.drag,
        // The banner only makes sense over an actual picture.
        solved: solved && session.has_image(),
    };
    let sidebar_vm = SidebarViewModel::new(status, app_state.settings.difficulty, session.seed);
    let status_line_vm = StatusLineViewModel::new(status, ui_state.message.as_ref());

    GameScreenViewModel {
        board_vm,
        sidebar_vm,
        status_line_vm,
    }
}
