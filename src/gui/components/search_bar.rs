// src/gui/components/search_bar.rs
use eframe::egui;

use crate::{catalog::CatalogController, config::consts::TXT_SEARCH_HINT};

/// Search box bound to `text`. Pushes edits into the controller,
/// which resets the reveal window on change.
pub fn draw(ui: &mut egui::Ui, text: &mut String, controller: &mut CatalogController) {
    let resp = ui.add(
        egui::TextEdit::singleline(text)
            .hint_text(TXT_SEARCH_HINT)
            .desired_width(f32::INFINITY),
    );

    if resp.changed() && controller.set_query(text) {
        logd!("UI: Search → {:?}", text);
    }
}
