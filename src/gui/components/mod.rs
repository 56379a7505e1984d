// src/gui/components/mod.rs
//
// Reusable egui pieces. This is the only place egui geometry is turned into
// the `catalog::visibility` types.

use eframe::egui;

use crate::catalog::{Span, Viewport};

pub mod image_slot;
pub mod link_card;
pub mod list_footer;
pub mod product_card;
pub mod search_bar;

/// Visible band of the enclosing scroll area (or panel).
#[inline]
pub fn viewport(ui: &egui::Ui) -> Viewport {
    let clip = ui.clip_rect();
    Viewport::new(clip.top(), clip.bottom())
}

#[inline]
pub fn span(rect: egui::Rect) -> Span {
    Span::new(rect.top(), rect.bottom())
}
