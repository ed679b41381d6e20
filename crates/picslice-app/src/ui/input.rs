use eframe::egui::{InputState, Key};

use crate::action::{Action, ActionRequestQueue};

struct Trigger {
    key: Key,
    command: bool,
}

struct Shortcut {
    trigger: Trigger,
    action: Action,
}

impl Shortcut {
    const fn command(key: Key, action: Action) -> Self {
        Self {
            trigger: Trigger { key, command: true },
            action,
        }
    }

    const fn plain(key: Key, action: Action) -> Self {
        Self {
            trigger: Trigger {
                key,
                command: false,
            },
            action,
        }
    }
}

const SHORTCUTS: [Shortcut; 3] = [
    Shortcut::command(Key::O, Action::OpenImage),
    Shortcut::plain(Key::S, Action::Scramble),
    Shortcut::plain(Key::R, Action::Reset),
];

pub(crate) fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    // `i.modifiers.command` is true when Ctrl (Windows/Linux) or Cmd (Mac) is pressed
    for shortcut in SHORTCUTS {
        let triggered = i.key_pressed(shortcut.trigger.key)
            && i.modifiers.command == shortcut.trigger.command;

        if triggered {
            action_queue.request(shortcut.action);
            return;
        }
    }
}

/// Accepts images dropped onto the window, as bytes (web) or paths (native).
pub(crate) fn handle_dropped_files(i: &InputState, action_queue: &mut ActionRequestQueue) {
    for file in &i.raw.dropped_files {
        if let Some(bytes) = &file.bytes {
            action_queue.request(Action::ImageDropped(bytes.to_vec()));
            continue;
        }
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(path) = &file.path {
            action_queue.request(Action::ImageFileDropped(path.clone()));
        }
    }
}
