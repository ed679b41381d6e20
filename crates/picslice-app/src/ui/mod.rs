pub mod board;
pub mod game_screen;
pub mod input;
pub mod sidebar;
pub mod status_line;
