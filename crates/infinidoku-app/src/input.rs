//! Keyboard shortcuts.

use eframe::egui::{InputState, Key, Pos2};

use crate::action::{Action, ActionRequestQueue, MoveDirection};

struct Trigger {
    key: Key,
    command: bool,
    shift: bool,
}

impl Trigger {
    const fn new(key: Key, command: bool, shift: bool) -> Self {
        Self {
            key,
            command,
            shift,
        }
    }
}

struct Shortcut {
    trigger: Trigger,
    action: Action,
}

impl Shortcut {
    const fn plain(key: Key, action: Action) -> Self {
        Self {
            trigger: Trigger::new(key, false, false),
            action,
        }
    }

    const fn digit(key: Key, value: u8) -> Self {
        Self::plain(key, Action::InputDigit(value))
    }
}

const SHORTCUTS: [Shortcut; 17] = [
    Shortcut::plain(Key::Escape, Action::OpenMenu),
    Shortcut::plain(Key::ArrowUp, Action::NudgeViewport(MoveDirection::Up)),
    Shortcut::plain(Key::ArrowDown, Action::NudgeViewport(MoveDirection::Down)),
    Shortcut::plain(Key::ArrowLeft, Action::NudgeViewport(MoveDirection::Left)),
    Shortcut::plain(Key::ArrowRight, Action::NudgeViewport(MoveDirection::Right)),
    Shortcut::digit(Key::Delete, 0),
    Shortcut::digit(Key::Backspace, 0),
    Shortcut::digit(Key::Num0, 0),
    Shortcut::digit(Key::Num1, 1),
    Shortcut::digit(Key::Num2, 2),
    Shortcut::digit(Key::Num3, 3),
    Shortcut::digit(Key::Num4, 4),
    Shortcut::digit(Key::Num5, 5),
    Shortcut::digit(Key::Num6, 6),
    Shortcut::digit(Key::Num7, 7),
    Shortcut::digit(Key::Num8, 8),
    Shortcut::digit(Key::Num9, 9),
];

pub(crate) fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    // `i.modifiers.command` is true when Ctrl (Windows/Linux) or Cmd (Mac)
    // is pressed
    for shortcut in SHORTCUTS {
        let triggered = i.key_pressed(shortcut.trigger.key)
            && i.modifiers.command == shortcut.trigger.command
            && i.modifiers.shift == shortcut.trigger.shift;

        if triggered {
            action_queue.request(shortcut.action);
            return;
        }
    }

    // Zoom keys anchor at the pointer, so they cannot live in the const
    // table. Shift is ignored here: `+` usually arrives as shift-equals.
    let anchor = i.pointer.latest_pos().unwrap_or(Pos2::ZERO);
    if i.key_pressed(Key::Plus) || i.key_pressed(Key::Equals) {
        action_queue.request(Action::Zoom { delta: 1.0, anchor });
    } else if i.key_pressed(Key::Minus) {
        action_queue.request(Action::Zoom { delta: -1.0, anchor });
    }
}
