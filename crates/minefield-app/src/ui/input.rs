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

const SHORTCUTS: [Shortcut; 2] = [
    Shortcut::command(Key::N, Action::NewGame),
    Shortcut::plain(Key::F2, Action::NewGame),
];

pub(crate) fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    // `i.modifiers.command` is Ctrl on Windows/Linux and Cmd on Mac
    for shortcut in SHORTCUTS {
        let triggered = i.key_pressed(shortcut.trigger.key)
            && i.modifiers.command == shortcut.trigger.command;

        if triggered {
            action_queue.request(shortcut.action);
            return;
        }
    }
}
