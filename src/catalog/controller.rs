// src/catalog/controller.rs
//
// Glue between the loaded catalog, the search text, and the reveal window.
// Front ends (GUI page, CLI) drive it; it owns no UI types.

use crate::{
    config::options::CatalogOptions,
    data::{Catalog, SearchView},
    feed::Product,
};

use super::{
    visibility::{Span, Visibility},
    window::{ListState, RevealWindow},
};

/// One search pass worth of list data: the revealed catalog positions and the
/// number of matches. Front ends take one per frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListSlice {
    pub indices: Vec<usize>,
    pub total: usize,
}

#[derive(Clone, Debug)]
pub struct CatalogController {
    catalog: Option<Catalog>,
    window: RevealWindow,
    margin: f32,
}

impl CatalogController {
    pub fn new(opts: &CatalogOptions) -> Self {
        Self {
            catalog: None,
            window: RevealWindow::new(opts.page_size),
            margin: opts.proximity,
        }
    }

    /// Install the products of a finished feed load.
    pub fn set_catalog(&mut self, products: Vec<Product>) {
        logf!("Catalog: {} products loaded", products.len());
        self.catalog = Some(Catalog::new(products));
    }

    /// Still waiting for the feed (or it never arrived).
    pub fn is_loading(&self) -> bool {
        self.catalog.as_ref().is_none_or(|c| c.is_empty())
    }

    pub fn catalog(&self) -> Option<&Catalog> { self.catalog.as_ref() }

    pub fn query(&self) -> &str { self.window.query() }

    pub fn set_query(&mut self, text: &str) -> bool { self.window.set_query(text) }

    pub fn margin(&self) -> f32 { self.margin }

    /// Matches for the current search text, recomputed on each call.
    pub fn view(&self) -> Option<SearchView<'_>> {
        self.catalog.as_ref().map(|c| SearchView::from_query(c, self.window.query()))
    }

    /// Number of products matching the search text.
    pub fn filtered_len(&self) -> usize {
        self.view().map(|v| v.len()).unwrap_or(0)
    }

    pub fn revealed(&self) -> usize {
        self.window.revealed(self.filtered_len())
    }

    pub fn state(&self) -> ListState {
        self.state_for(self.filtered_len())
    }

    /// List state for an already known filtered length.
    pub fn state_for(&self, total: usize) -> ListState {
        self.window.state(total)
    }

    /// Revealed positions plus the filtered length, from a single search pass.
    pub fn slice(&self) -> ListSlice {
        match self.view() {
            Some(v) => {
                let total = v.len();
                let n = self.window.revealed(total);
                ListSlice { indices: v.row_ix.iter().take(n).copied().collect(), total }
            }
            None => ListSlice::default(),
        }
    }

    /// The revealed prefix of the filtered products.
    pub fn visible_products(&self) -> Vec<&Product> {
        let n = self.revealed();
        match self.view() {
            Some(v) => v.take(n).collect(),
            None => Vec::new(),
        }
    }

    /// One intersection event, no geometry (CLI, tests).
    pub fn reveal_more(&mut self) -> bool {
        let total = self.filtered_len();
        self.window.on_sentinel_visible(total)
    }

    /// Per-frame sentinel check through the visibility capability.
    pub fn observe_sentinel(&mut self, vis: &dyn Visibility, sentinel: Span) -> bool {
        let total = self.filtered_len();
        self.observe_sentinel_for(vis, sentinel, total)
    }

    /// Same as `observe_sentinel`, reusing this frame's filtered length.
    pub fn observe_sentinel_for(&mut self, vis: &dyn Visibility, sentinel: Span, total: usize) -> bool {
        self.window.observe_sentinel(vis, sentinel, self.margin, total)
    }
}
