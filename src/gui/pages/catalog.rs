// src/gui/pages/catalog.rs
//
// Catalog page: logo, loading heading, search box, and the growing card list.
//
// Mounting starts the feed fetch. Cards are keyed by catalog position; a card
// that drops out of the revealed list (search change) is unmounted along with
// its photo slot, and a card that comes back gets a fresh slot.

use std::collections::{HashMap, HashSet};

use eframe::egui;

use crate::{
    catalog::CatalogController,
    config::{consts::TXT_LOADING, options::AppOptions},
    gui::{
        actions::{self, FeedTask, TaskPoll},
        components::{
            image_slot::ImageSlot,
            link_card::{self, ICON_SIZE},
            list_footer, product_card, search_bar,
        },
        router::{NavConfig, NavLink, Route},
    },
};

use super::{AppCtx, Page};

const LOGO_SIZE: egui::Vec2 = egui::vec2(240.0, 120.0);

pub struct CatalogPage {
    controller: CatalogController,
    search: String,
    task: Option<FeedTask>,
    logo: ImageSlot,
    footer: Option<(NavLink, ImageSlot)>,
    /// Mounted card photos, by catalog index
    photos: HashMap<usize, ImageSlot>,
}

impl CatalogPage {
    pub fn new(options: &AppOptions, nav: &NavConfig) -> Self {
        Self {
            controller: CatalogController::new(&options.catalog),
            search: s!(),
            task: None,
            logo: ImageSlot::eager(nav.logo.clone(), ""),
            footer: nav
                .catalog_footer
                .clone()
                .map(|l| {
                    let icon = ImageSlot::eager(l.icon.clone(), "");
                    (l, icon)
                }),
            photos: HashMap::new(),
        }
    }

    fn poll_feed(&mut self) {
        let Some(task) = &self.task else { return };

        match task.poll() {
            TaskPoll::Pending => {}
            TaskPoll::Done(Ok(products)) => {
                self.controller.set_catalog(products);
                self.task = None;
            }
            TaskPoll::Done(Err(e)) => {
                // Nothing shown to the user: the loading heading just stays.
                loge!("Fetch: {}", e);
                self.task = None;
            }
            TaskPoll::Lost => {
                loge!("Fetch: worker ended without a result");
                self.task = None;
            }
        }
    }

    fn draw_list(&mut self, ui: &mut egui::Ui, ctx: &AppCtx) {
        let margin = self.controller.margin();
        let slice = self.controller.slice();

        if let Some(catalog) = self.controller.catalog() {
            for &ix in &slice.indices {
                let product = &catalog.products()[ix];
                let photo = self
                    .photos
                    .entry(ix)
                    .or_insert_with(|| product_card::photo_for(product));
                product_card::draw(ui, product, photo, ctx.resolver, margin);
            }
        }

        // Unmount cards that are no longer listed
        let mounted: HashSet<usize> = slice.indices.iter().copied().collect();
        self.photos.retain(|ix, _| mounted.contains(ix));

        if !self.controller.is_loading() {
            list_footer::draw(ui, &mut self.controller, slice.total);
        }
    }
}

impl Page for CatalogPage {
    fn route(&self) -> Route { Route::Catalog }

    fn on_enter(&mut self, ctx: &mut AppCtx) {
        self.task = Some(actions::fetch_catalog(
            ctx.options.feed.clone(),
            ctx.status.clone(),
            ctx.egui_ctx.clone(),
        ));
    }

    fn draw(&mut self, ui: &mut egui::Ui, ctx: &mut AppCtx) {
        self.poll_feed();

        ui.horizontal(|ui| {
            if ui.link("← На главную").clicked() {
                ctx.navigate(Route::Landing);
            }
        });

        ui.vertical_centered(|ui| {
            self.logo.show(ui, ctx.resolver, 0.0, LOGO_SIZE);
            if self.controller.is_loading() {
                ui.heading(TXT_LOADING);
            }
        });

        search_bar::draw(ui, &mut self.search, &mut self.controller);
        ui.separator();

        // Leave room for the footer link under the list
        let footer_h = if self.footer.is_some() { ICON_SIZE.y + 8.0 } else { 0.0 };
        let list_h = (ui.available_height() - footer_h).max(0.0);

        egui::ScrollArea::vertical()
            .id_salt("catalog_scroll")
            .auto_shrink([false, false])
            .max_height(list_h)
            .show(ui, |ui| self.draw_list(ui, ctx));

        if let Some((link, icon)) = &mut self.footer {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let resp = icon.show(ui, ctx.resolver, 0.0, ICON_SIZE).interact(egui::Sense::click());
                if resp.on_hover_text(link.label.as_str()).clicked() {
                    link_card::follow(link, ui.ctx(), ctx);
                }
            });
        }
    }
}
