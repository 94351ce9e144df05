//! The eframe application shell.

use std::time::Duration;

use eframe::{
    App, CreationContext, Frame, Storage,
    egui::{Align2, Area, CentralPanel, Context, Id, InputState, Vec2},
};

use crate::{
    action::{self, ActionRequestQueue},
    gesture::{FrameInput, GestureState},
    input,
    state::{AppState, Mode},
    ui,
};

/// Backdrop scroll speed on the menu, in screen points per second.
const MENU_DRIFT: Vec2 = Vec2::new(18.0, 12.0);

#[derive(Debug)]
pub struct InfinidokuApp {
    state: AppState,
    gesture: GestureState,
}

impl InfinidokuApp {
    pub fn new(cc: &CreationContext<'_>) -> Self {
        Self {
            state: AppState::startup(cc.storage),
            gesture: GestureState::new(),
        }
    }

    fn apply_persistence(&mut self, frame: &mut Frame) {
        if self.state.is_dirty()
            && let Some(storage) = frame.storage_mut()
        {
            self.save(storage);
            self.state.clear_dirty();
        }
    }
}

impl App for InfinidokuApp {
    fn save(&mut self, storage: &mut dyn Storage) {
        self.state.save(storage);
    }

    fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(30)
    }

    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();
        let viewport_center = ctx.screen_rect().center();

        match self.state.mode {
            Mode::Playing => ctx.input(|i| {
                input::handle_input(i, &mut action_queue);
                self.gesture.step(&sample_input(i), &mut action_queue);
            }),
            Mode::Menu => {
                let drift = ctx.input(|i| MENU_DRIFT * i.stable_dt);
                self.state.camera.pan(drift);
                ctx.request_repaint();
            }
        }
        action::handle_all(&mut self.state, viewport_center, &mut action_queue);

        CentralPanel::default().show(ctx, |ui| {
            ui::board::show(ui, &self.state);
            if self.state.mode == Mode::Menu {
                ui::menu::show(ui, &self.state, &mut action_queue);
            }
        });

        if self.state.mode == Mode::Playing && self.state.board.is_solved() {
            Area::new(Id::new("solved-banner"))
                .anchor(Align2::CENTER_TOP, Vec2::new(0.0, 24.0))
                .show(ctx, |ui| {
                    eframe::egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.heading("Solved!");
                    });
                });
        }

        action::handle_all(&mut self.state, viewport_center, &mut action_queue);
        self.apply_persistence(frame);
    }
}

fn sample_input(i: &InputState) -> FrameInput {
    let touch = i.multi_touch();
    FrameInput {
        pointer: touch
            .map(|t| t.center_pos)
            .or_else(|| i.pointer.latest_pos()),
        pressed: i.pointer.primary_pressed(),
        down: i.pointer.primary_down(),
        released: i.pointer.primary_released(),
        num_touches: touch.map_or(0, |t| t.num_touches),
        pinch_zoom: touch.map_or(1.0, |t| f64::from(t.zoom_delta)),
        pinch_translation: touch.map_or(Vec2::ZERO, |t| t.translation_delta),
        wheel: i.raw_scroll_delta.y,
    }
}
