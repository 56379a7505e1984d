// src/catalog/window.rs
//
// Reveal window over the filtered list.
//
// The list shows a prefix of the filtered products. A sentinel sits after the
// prefix; each time it comes within reach of the viewport, the prefix grows by
// one page. The sentinel fires once per position: after it fires it must
// either move (new rows pushed it down) or leave the viewport before it fires
// again.

use super::visibility::{Span, Visibility};

/// What the list area should show under the revealed rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListState {
    /// Nothing matches: empty-state message, no sentinel.
    Empty,
    /// More to come: render the sentinel.
    Partial { shown: usize, total: usize },
    /// Everything is on screen: summary instead of the sentinel.
    Complete { total: usize },
}

impl ListState {
    pub fn has_sentinel(&self) -> bool { matches!(self, ListState::Partial { .. }) }

    /// "`shown` of `total`"
    pub fn summary(&self) -> String {
        match *self {
            ListState::Empty => s!("0 of 0"),
            ListState::Partial { shown, total } => format!("{shown} of {total}"),
            ListState::Complete { total } => format!("{total} of {total}"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RevealWindow {
    page_size: usize,
    /// Requested prefix length; may exceed the filtered length.
    requested: usize,
    query: String,
    /// Where the sentinel sat (its top edge) when it last fired, while it stays in reach.
    fired_top: Option<f32>,
}

impl RevealWindow {
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self { page_size, requested: page_size, query: s!(), fired_top: None }
    }

    #[inline]
    pub fn query(&self) -> &str { &self.query }

    /// Update the search text. A different text resets the window.
    /// Returns true if it was a change.
    pub fn set_query(&mut self, text: &str) -> bool {
        if self.query == text {
            return false;
        }
        self.query = s!(text);
        self.requested = self.page_size;
        self.fired_top = None;
        logd!("Window: query={:?} → reset to {}", self.query, self.requested);
        true
    }

    /// Rows currently revealed out of `total` filtered ones.
    #[inline]
    pub fn revealed(&self, total: usize) -> usize { self.requested.min(total) }

    pub fn state(&self, total: usize) -> ListState {
        let shown = self.revealed(total);
        if total == 0 {
            ListState::Empty
        } else if shown < total {
            ListState::Partial { shown, total }
        } else {
            ListState::Complete { total }
        }
    }

    /// One sentinel intersection event. Grows by a page if rows remain.
    /// Returns true if the window grew.
    pub fn on_sentinel_visible(&mut self, total: usize) -> bool {
        let before = self.revealed(total);
        if before >= total {
            return false;
        }
        self.requested = (before + self.page_size).min(total);
        logd!("Window: sentinel → {}/{}", self.requested, total);
        true
    }

    /// Feed one frame's sentinel geometry through the visibility capability.
    /// Fires at most once per sentinel position while it stays in reach.
    pub fn observe_sentinel(
        &mut self,
        vis: &dyn Visibility,
        sentinel: Span,
        margin: f32,
        total: usize,
    ) -> bool {
        if !self.state(total).has_sentinel() {
            return false;
        }
        if !vis.is_within(sentinel, margin) {
            self.fired_top = None;
            return false;
        }
        if self.fired_top == Some(sentinel.top) {
            // Same spot as last time; wait for it to move or leave.
            return false;
        }
        let grew = self.on_sentinel_visible(total);
        if grew {
            self.fired_top = Some(sentinel.top);
        }
        grew
    }
}
