// src/gui/router.rs
//
// Routes and navigation config. The route table is data handed to `gui::run`,
// not a global: callers can swap links/icons without touching the pages.

use super::pages::{self, AppCtx, Page};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Catalog,
}

pub static ROUTES: &[Route] = &[Route::Landing, Route::Catalog];

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Catalog => "/catalog",
        }
    }

    /// Lenient: ignores a trailing slash.
    pub fn from_path(path: &str) -> Option<Route> {
        let p = path.trim();
        let p = if p.len() > 1 { p.trim_end_matches('/') } else { p };
        ROUTES.iter().copied().find(|r| r.path() == p)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Landing => "Archive",
            Route::Catalog => "Каталог",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    Route(Route),
    External(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    /// Bundled image id for the card icon
    pub icon: String,
    pub target: LinkTarget,
}

impl NavLink {
    pub fn new(label: &str, icon: &str, target: LinkTarget) -> Self {
        Self { label: s!(label), icon: s!(icon), target }
    }

    pub fn external(label: &str, icon: &str, url: &str) -> Self {
        Self::new(label, icon, LinkTarget::External(s!(url)))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavConfig {
    /// Image id shown at the top of every page
    pub logo: String,
    pub landing_links: Vec<NavLink>,
    /// Floating link under the catalog list
    pub catalog_footer: Option<NavLink>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            logo: s!("logo.jpg"),
            landing_links: vec![
                NavLink::new("Каталог", "icon-main.png", LinkTarget::Route(Route::Catalog)),
                NavLink::external("Телеграмм", "icon-tg.png", "https://t.me/archive_vinylshop"),
                NavLink::external("Инстаграм", "icon-inst.png", "https://instagram.com/archive_shop"),
                NavLink::external("Ютуб", "icon-yt.png", "https://www.youtube.com/@radiofromarchive"),
            ],
            catalog_footer: Some(NavLink::external(
                "Telegram",
                "telegram.png",
                "https://t.me/archive_vinyl",
            )),
        }
    }
}

impl NavConfig {
    /// Every internal route the config links to.
    pub fn internal_routes(&self) -> Vec<Route> {
        self.landing_links
            .iter()
            .chain(self.catalog_footer.iter())
            .filter_map(|l| match l.target {
                LinkTarget::Route(r) => Some(r),
                LinkTarget::External(_) => None,
            })
            .collect()
    }
}

/// Build a fresh page for `route` and run its enter hook.
pub fn mount(route: Route, ctx: &mut AppCtx) -> Box<dyn Page> {
    let mut page: Box<dyn Page> = match route {
        Route::Landing => Box::new(pages::landing::LandingPage::new(ctx.nav)),
        Route::Catalog => Box::new(pages::catalog::CatalogPage::new(ctx.options, ctx.nav)),
    };
    logf!("Router: mount {} ({})", route.path(), page.title());
    page.on_enter(ctx);
    page
}
