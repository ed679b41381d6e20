use eframe::egui::{RichText, Ui};

use crate::state::{Message, MessageSeverity};

/// Overall puzzle status, derived from session state each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GameStatus {
    NoImage,
    InProgress,
    Solved,
}

#[derive(Debug, Clone)]
pub(crate) struct StatusLineViewModel<'a> {
    status: GameStatus,
    message: Option<&'a Message>,
}

impl<'a> StatusLineViewModel<'a> {
    #[must_use]
    pub(crate) fn new(status: GameStatus, message: Option<&'a Message>) -> Self {
        Self { status, message }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &StatusLineViewModel<'_>) {
    ui.horizontal(|ui| {
        let status_text = match vm.status {
            GameStatus::NoImage => "No image loaded",
            GameStatus::InProgress => "Puzzle in progress",
            GameStatus::Solved => "Solved!",
        };
        ui.label(RichText::new(status_text).strong());

        if let Some(message) = vm.message {
            ui.separator();
            let text = RichText::new(&message.text);
            let text = match message.severity {
                MessageSeverity::Info => text,
                MessageSeverity::Warning => text.color(ui.visuals().warn_fg_color),
            };
            ui.label(text);
        }
    });
}
