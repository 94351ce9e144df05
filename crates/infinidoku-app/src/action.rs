//! Actions requested by input handling and UI, applied in one place.

use std::mem;

use eframe::egui::{Pos2, Vec2};

use crate::state::{AppState, Mode};

#[derive(Debug, Clone, Copy)]
pub(crate) enum Action {
    /// Select the cell under a screen point.
    SelectAt(Pos2),
    ClearSelection,
    /// Pan by a screen-space delta.
    Pan(Vec2),
    /// Change the zoom level, keeping the world under `anchor` fixed.
    Zoom { delta: f64, anchor: Pos2 },
    /// Arrow-key step: move viewport and selection cursor together.
    NudgeViewport(MoveDirection),
    /// Write a digit (0 clears) into the selected cell.
    InputDigit(u8),
    NewGame,
    ContinueGame,
    OpenMenu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

pub(crate) fn handle_all(
    state: &mut AppState,
    viewport_center: Pos2,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(state, viewport_center, action);
    }
}

fn handle(state: &mut AppState, viewport_center: Pos2, action: Action) {
    match action {
        Action::SelectAt(point) => {
            let world = state.camera.screen_to_world(point, viewport_center);
            state.selection.select_at(world);
        }
        Action::ClearSelection => state.selection.clear(),
        Action::Pan(delta) => state.camera.pan(delta),
        Action::Zoom { delta, anchor } => state.camera.zoom(delta, anchor, viewport_center),
        Action::NudgeViewport(direction) => {
            let step = state.camera.key_pan_step();
            // The selection anchor follows the world point at the viewport
            // center, so the cursor stays put on screen.
            let (cam, sel) = match direction {
                MoveDirection::Left => ((-step, 0.0), (-step, 0.0)),
                MoveDirection::Right => ((step, 0.0), (step, 0.0)),
                MoveDirection::Up => ((0.0, step), (0.0, -step)),
                MoveDirection::Down => ((0.0, -step), (0.0, step)),
            };
            state.camera.translate_by(cam.0, cam.1);
            state.selection.translate(sel.0, sel.1);
        }
        Action::InputDigit(value) => {
            if state.mode != Mode::Playing {
                return;
            }
            let Some(index) = state.selection.index(state.board.layout()) else {
                return;
            };
            match state.board.write_user_value(index, value) {
                Ok(()) => state.mark_dirty(),
                Err(err) => log::debug!("edit ignored: {err}"),
            }
        }
        Action::NewGame => state.start_new_game(),
        Action::ContinueGame => state.continue_game(),
        Action::OpenMenu => state.open_menu(),
    }
}
