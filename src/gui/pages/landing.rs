// src/gui/pages/landing.rs
use eframe::egui;

use crate::gui::{
    components::{image_slot::ImageSlot, link_card::LinkCard},
    router::{NavConfig, Route},
};

use super::{AppCtx, Page};

const LOGO_SIZE: egui::Vec2 = egui::vec2(240.0, 120.0);

pub struct LandingPage {
    logo: ImageSlot,
    cards: Vec<LinkCard>,
}

impl LandingPage {
    pub fn new(nav: &NavConfig) -> Self {
        Self {
            logo: ImageSlot::eager(nav.logo.clone(), ""),
            cards: nav.landing_links.iter().cloned().map(LinkCard::new).collect(),
        }
    }
}

impl Page for LandingPage {
    fn route(&self) -> Route { Route::Landing }

    fn draw(&mut self, ui: &mut egui::Ui, ctx: &mut AppCtx) {
        ui.vertical_centered(|ui| {
            self.logo.show(ui, ctx.resolver, 0.0, LOGO_SIZE);
        });
        ui.add_space(24.0);

        let n = self.cards.len().max(1);
        ui.columns(n, |cols| {
            for (col, card) in cols.iter_mut().zip(self.cards.iter_mut()) {
                card.draw(col, ctx);
            }
        });
    }
}
