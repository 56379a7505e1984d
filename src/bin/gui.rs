// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use archive_catalog::{config::state::AppState, gui, gui::router::NavConfig, log};
use eframe::egui::ViewportBuilder;

fn main() {
    log::init();

    let state = AppState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Archive")
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state, NavConfig::default()) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
