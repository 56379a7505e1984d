// src/catalog/mod.rs
//
// Incremental list logic: search text, reveal window, sentinel visibility.

mod controller;
pub mod visibility;
mod window;

pub use controller::{CatalogController, ListSlice};
pub use visibility::{Span, Viewport, Visibility};
pub use window::{ListState, RevealWindow};
