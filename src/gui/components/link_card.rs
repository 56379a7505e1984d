// src/gui/components/link_card.rs
use eframe::egui::{self, Vec2};

use crate::gui::{
    pages::AppCtx,
    router::{LinkTarget, NavLink},
};

use super::image_slot::ImageSlot;

pub const ICON_SIZE: Vec2 = Vec2::splat(96.0);

/// A navigation card: icon above a link label.
pub struct LinkCard {
    pub link: NavLink,
    icon: ImageSlot,
}

impl LinkCard {
    pub fn new(link: NavLink) -> Self {
        let icon = ImageSlot::eager(link.icon.clone(), "");
        Self { link, icon }
    }

    pub fn draw(&mut self, ui: &mut egui::Ui, ctx: &mut AppCtx) {
        ui.vertical_centered(|ui| {
            let icon = self.icon.show(ui, ctx.resolver, 0.0, ICON_SIZE);
            let icon = icon.interact(egui::Sense::click());
            let label = ui.link(self.link.label.as_str());

            if icon.clicked() || label.clicked() {
                follow(&self.link, ui.ctx(), ctx);
            }
        });
    }
}

/// Internal routes switch pages; external ones go to the system browser.
pub fn follow(link: &NavLink, egui_ctx: &egui::Context, ctx: &mut AppCtx) {
    match &link.target {
        LinkTarget::Route(r) => {
            logf!("UI: Link {:?} → {}", link.label, r.path());
            ctx.navigate(*r);
        }
        LinkTarget::External(url) => {
            logf!("UI: Link {:?} → {}", link.label, url);
            egui_ctx.open_url(egui::OpenUrl::new_tab(url));
        }
    }
}
