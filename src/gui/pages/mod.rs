// src/gui/pages/mod.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::{config::options::AppOptions, images::ImageResolver};

use super::router::{NavConfig, Route};

pub mod catalog;
pub mod landing;

/// Light-weight context pages can use to interact with the app.
/// Rebuilt every frame; pages must not hold on to it.
pub struct AppCtx<'a> {
    pub egui_ctx: &'a egui::Context,
    pub options: &'a AppOptions,
    pub nav: &'a NavConfig,
    pub resolver: &'a Arc<dyn ImageResolver>,

    /// Status line shared with background workers
    pub status: &'a Arc<Mutex<String>>,

    /// Set by a page to switch routes after this frame.
    pub navigate_to: Option<Route>,
}

impl AppCtx<'_> {
    pub fn navigate(&mut self, route: Route) {
        self.navigate_to = Some(route);
    }
}

pub trait Page {
    fn route(&self) -> Route;

    fn title(&self) -> &'static str {
        self.route().title()
    }

    /// Called once right after mounting.
    fn on_enter(&mut self, _ctx: &mut AppCtx) {}

    /// Draw the page into the central panel.
    fn draw(&mut self, ui: &mut egui::Ui, ctx: &mut AppCtx);
}
