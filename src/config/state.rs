// src/config/state.rs
use super::options::AppOptions;
use crate::gui::router::Route;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Route shown in the central panel
    pub route: Route,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            route: Route::Landing,
            window_w: 900,
            window_h: 800,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
