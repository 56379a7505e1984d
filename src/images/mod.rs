// src/images/mod.rs
//
// Bundled image resolution and the per-placeholder lazy loader.

mod lazy;
mod resolver;

pub use lazy::{ImagePhase, LazyImage};
pub use resolver::{BundledImages, DecodedImage, ImageError, ImageResolver};
