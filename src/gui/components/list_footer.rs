// src/gui/components/list_footer.rs
//
// Whatever goes under the revealed rows: the sentinel while more rows remain,
// the summary once everything is shown, or the empty-state message.

use eframe::egui;

use crate::{
    catalog::{CatalogController, ListState},
    config::consts::TXT_NOTHING_FOUND,
};

use super::{span, viewport};

/// `total` is this frame's filtered length.
/// Returns true if the sentinel grew the window this frame.
pub fn draw(ui: &mut egui::Ui, controller: &mut CatalogController, total: usize) -> bool {
    match controller.state_for(total) {
        ListState::Empty => {
            ui.vertical_centered(|ui| ui.label(TXT_NOTHING_FOUND));
            false
        }
        ListState::Partial { .. } => {
            let sentinel = ui.vertical_centered(|ui| ui.spinner()).response;
            let grew = controller.observe_sentinel_for(&viewport(ui), span(sentinel.rect), total);
            if grew {
                ui.ctx().request_repaint();
            }
            grew
        }
        state @ ListState::Complete { .. } => {
            ui.vertical_centered(|ui| ui.weak(state.summary()));
            false
        }
    }
}
