// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    images::{BundledImages, ImageResolver},
};

use super::{
    pages::{AppCtx, Page},
    router::{self, NavConfig, Route},
};

pub fn run(
    options: eframe::NativeOptions,
    state: AppState,
    nav: NavConfig,
) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Archive",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(&cc.egui_ctx, state, nav)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub nav: NavConfig,

    pub resolver: Arc<dyn ImageResolver>,

    // status line (workers write here)
    pub status: Arc<Mutex<String>>,

    // currently mounted page
    page: Box<dyn Page>,
}

impl App {
    pub fn new(egui_ctx: &egui::Context, state: AppState, nav: NavConfig) -> Self {
        let resolver: Arc<dyn ImageResolver> =
            Arc::new(BundledImages::new(state.options.images.dir.clone()));
        let status = Arc::new(Mutex::new(s!("Idle")));

        logf!(
            "Init: route={} images={} feed={}",
            state.gui.route.path(),
            state.options.images.dir.display(),
            state.options.feed.url
        );

        let page = {
            let mut ctx = AppCtx {
                egui_ctx,
                options: &state.options,
                nav: &nav,
                resolver: &resolver,
                status: &status,
                navigate_to: None,
            };
            router::mount(state.gui.route, &mut ctx)
        };

        Self { state, nav, resolver, status, page }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_route(&self) -> Route { self.state.gui.route }

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Unmount the current page and mount `route` fresh.
    pub fn navigate(&mut self, egui_ctx: &egui::Context, route: Route) {
        logf!("UI: Route {} → {}", self.current_route().path(), route.path());
        self.state.gui.route = route;

        let mut ctx = AppCtx {
            egui_ctx,
            options: &self.state.options,
            nav: &self.nav,
            resolver: &self.resolver,
            status: &self.status,
            navigate_to: None,
        };
        self.page = router::mount(route, &mut ctx);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.weak(self.status_text());
        });

        let mut next = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut pctx = AppCtx {
                egui_ctx: ctx,
                options: &self.state.options,
                nav: &self.nav,
                resolver: &self.resolver,
                status: &self.status,
                navigate_to: None,
            };
            self.page.draw(ui, &mut pctx);
            next = pctx.navigate_to;
        });

        if let Some(route) = next {
            self.navigate(ctx, route);
        }
    }
}
