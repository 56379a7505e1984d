// src/gui/components/product_card.rs
//
// One catalog card: photo on the left; name, note and price on the right.

use std::sync::Arc;

use eframe::egui::{self, RichText, Vec2};

use crate::{feed::Product, images::ImageResolver};

use super::image_slot::ImageSlot;

pub const PHOTO_SIZE: Vec2 = Vec2::splat(160.0);

pub fn photo_for(product: &Product) -> ImageSlot {
    ImageSlot::lazy(product.image_id(), product.display_name())
}

pub fn draw(
    ui: &mut egui::Ui,
    product: &Product,
    photo: &mut ImageSlot,
    resolver: &Arc<dyn ImageResolver>,
    margin: f32,
) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            photo.show(ui, resolver, margin, PHOTO_SIZE);

            ui.vertical(|ui| {
                ui.label(RichText::new(product.display_name()).heading());
                if let Some(note) = &product.note {
                    ui.label(note);
                }
                ui.add_space(8.0);
                ui.label(RichText::new(product.price_line()).strong());
            });
        });
    });
}
