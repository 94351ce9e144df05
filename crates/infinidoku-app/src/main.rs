//! Infinidoku desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop Infinidoku application.

use eframe::egui;

use crate::app::InfinidokuApp;

mod action;
mod app;
mod camera;
mod gesture;
mod input;
mod selection;
mod state;
mod ui;

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.infinidoku";

    better_panic::install();
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((1024.0, 768.0))
            .with_min_inner_size((400.0, 300.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Infinidoku",
        options,
        Box::new(|cc| Ok(Box::new(InfinidokuApp::new(cc)))),
    )
}
