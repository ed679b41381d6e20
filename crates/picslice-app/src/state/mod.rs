pub(crate) use self::{app_state::*, session::*, settings::*, ui_state::*};

mod app_state;
mod session;
mod settings;
mod ui_state;
