use eframe::egui::{Align, ComboBox, Layout, RichText, Ui, widgets};
use picslice_game::ScrambleSeed;

use crate::{
    action::{Action, ActionRequestQueue},
    state::Difficulty,
    ui::status_line::GameStatus,
    version,
};

#[derive(Debug, Clone)]
pub(crate) struct SidebarViewModel {
    status: GameStatus,
    difficulty: Difficulty,
    seed: Option<ScrambleSeed>,
}

impl SidebarViewModel {
    #[must_use]
    pub(crate) fn new(
        status: GameStatus,
        difficulty: Difficulty,
        seed: Option<ScrambleSeed>,
    ) -> Self {
        Self {
            status,
            difficulty,
            seed,
        }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &SidebarViewModel, action_queue: &mut ActionRequestQueue) {
    ui.vertical(|ui| {
        ui.group(|ui| {
            let status_text = match vm.status {
                GameStatus::NoImage => "Open an image to start",
                GameStatus::InProgress => "Puzzle in progress",
                GameStatus::Solved => "Congratulations! You restored the picture!",
            };
            let status_label = match vm.status {
                GameStatus::Solved => {
                    RichText::new(status_text).color(ui.visuals().warn_fg_color)
                }
                GameStatus::NoImage | GameStatus::InProgress => RichText::new(status_text),
            };
            ui.label(status_label.size(16.0));
        });

        ui.add_space(8.0);

        if ui.button("Open image\u{2026}").clicked() {
            action_queue.request(Action::OpenImage);
        }
        if ui.button("Scramble").clicked() {
            action_queue.request(Action::Scramble);
        }
        if ui.button("Reset").clicked() {
            action_queue.request(Action::Reset);
        }

        ui.add_space(8.0);

        ComboBox::from_label("Grid size")
            .selected_text(vm.difficulty.label())
            .show_ui(ui, |ui| {
                for difficulty in Difficulty::ALL {
                    if ui
                        .selectable_label(vm.difficulty == difficulty, difficulty.label())
                        .clicked()
                    {
                        action_queue.request(Action::SetDifficulty(difficulty));
                    }
                }
            });

        ui.add_space(8.0);
        widgets::global_theme_preference_buttons(ui);

        if let Some(seed) = vm.seed {
            ui.add_space(8.0);
            ui.label(RichText::new(format!("seed {seed}")).monospace().small());
        }

        ui.with_layout(Layout::bottom_up(Align::Min), |ui| {
            ui.label(RichText::new(version::build_version()).small().weak());
        });
    });
}
