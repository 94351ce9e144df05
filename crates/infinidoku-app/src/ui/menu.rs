//! The main menu, laid over the drifting backdrop board.

use eframe::egui::{Button, RichText, Ui, Vec2};

use crate::{
    action::{Action, ActionRequestQueue},
    state::AppState,
};

const BUTTON_SIZE: Vec2 = Vec2::new(200.0, 36.0);

pub(crate) fn show(ui: &mut Ui, state: &AppState, action_queue: &mut ActionRequestQueue) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.25);
        ui.heading(RichText::new("Infinidoku").size(40.0));
        ui.add_space(24.0);

        if ui
            .add(Button::new("New Game").min_size(BUTTON_SIZE))
            .clicked()
        {
            action_queue.request(Action::NewGame);
        }
        ui.add_space(8.0);
        if ui
            .add_enabled(
                state.can_continue(),
                Button::new("Continue").min_size(BUTTON_SIZE),
            )
            .clicked()
        {
            action_queue.request(Action::ContinueGame);
        }

        if state.slot_corrupt {
            ui.add_space(16.0);
            ui.colored_label(
                ui.visuals().warn_fg_color,
                "The saved game could not be loaded.",
            );
        }
    });
}
