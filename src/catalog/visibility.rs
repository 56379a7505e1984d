// src/catalog/visibility.rs
//
// Viewport-proximity as a capability. The list controller and the lazy image
// loader ask "is this span near the visible area?" and never see egui.

/// Vertical extent of an element, in the same coordinates as the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub top: f32,
    pub bottom: f32,
}

impl Span {
    pub fn new(top: f32, bottom: f32) -> Self { Self { top, bottom } }
}

pub trait Visibility {
    /// True if `span` overlaps the visible area grown by `margin` on both ends.
    fn is_within(&self, span: Span, margin: f32) -> bool;
}

/// The visible vertical band of a scroll area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub top: f32,
    pub bottom: f32,
}

impl Viewport {
    pub fn new(top: f32, bottom: f32) -> Self { Self { top, bottom } }

    /// Same band moved down by `dy` (scrolling).
    pub fn scrolled(self, dy: f32) -> Self {
        Self { top: self.top + dy, bottom: self.bottom + dy }
    }
}

impl Visibility for Viewport {
    fn is_within(&self, span: Span, margin: f32) -> bool {
        span.bottom >= self.top - margin && span.top <= self.bottom + margin
    }
}

/// Always / never visible. Handy for headless front ends.
impl Visibility for bool {
    fn is_within(&self, _span: Span, _margin: f32) -> bool { *self }
}
