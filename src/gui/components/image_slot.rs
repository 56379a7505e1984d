// src/gui/components/image_slot.rs
//
// egui face of a `LazyImage`: reserves a fixed box, checks proximity, and
// paints "loading", the alt text, or the picture. The texture belongs to this
// slot alone and is freed with it.

use std::{sync::Arc, time::Duration};

use eframe::egui::{self, ColorImage, Label, TextureHandle, TextureOptions, Vec2, load::SizedTexture};

use crate::{
    catalog::Visibility,
    config::consts::TXT_IMAGE_LOADING,
    images::{ImageResolver, LazyImage},
};

use super::{span, viewport};

const POLL_EVERY: Duration = Duration::from_millis(50);

pub struct ImageSlot {
    lazy: LazyImage,
    texture: Option<TextureHandle>,
}

impl ImageSlot {
    pub fn new(lazy: LazyImage) -> Self {
        Self { lazy, texture: None }
    }

    pub fn lazy(id: impl Into<String>, alt: impl Into<String>) -> Self {
        Self::new(LazyImage::new(id, alt))
    }

    pub fn eager(id: impl Into<String>, alt: impl Into<String>) -> Self {
        Self::new(LazyImage::new(id, alt).eager())
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        resolver: &Arc<dyn ImageResolver>,
        margin: f32,
        size: Vec2,
    ) -> egui::Response {
        let (rect, resp) = ui.allocate_exact_size(size, egui::Sense::hover());

        let in_view = self.lazy.wants_visibility() && viewport(ui).is_within(span(rect), margin);
        self.lazy.update(in_view, resolver);

        if self.texture.is_none() {
            if let Some(img) = self.lazy.image() {
                let pixels = ColorImage::from_rgba_unmultiplied(
                    [img.width as usize, img.height as usize],
                    &img.rgba,
                );
                self.texture = Some(ui.ctx().load_texture(
                    format!("img:{}", self.lazy.id()),
                    pixels,
                    TextureOptions::LINEAR,
                ));
            }
        }

        if let Some(tex) = &self.texture {
            ui.put(
                rect,
                egui::Image::from_texture(SizedTexture::from_handle(tex)).fit_to_exact_size(size),
            );
        } else if self.lazy.is_failed() {
            ui.put(rect, Label::new(self.lazy.alt()).wrap());
        } else {
            ui.put(rect, Label::new(TXT_IMAGE_LOADING));
            if self.lazy.is_loading() {
                ui.ctx().request_repaint_after(POLL_EVERY);
            }
        }

        resp
    }
}
