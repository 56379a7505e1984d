// src/images/resolver.rs
use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use thiserror::Error;

/// RGBA8 pixels ready for upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("image not found: {0}")]
    NotFound(String),

    #[error("read {id}: {source}")]
    Io {
        id: String,
        #[source]
        source: std::io::Error,
    },

    #[error("decode {id}: {source}")]
    Decode {
        id: String,
        #[source]
        source: image::ImageError,
    },
}

/// Turns a logical image id (`"1042.jpeg"`, `"logo.jpg"`) into pixels.
/// Called from worker threads.
pub trait ImageResolver: Send + Sync {
    fn resolve(&self, id: &str) -> Result<DecodedImage, ImageError>;
}

/// Images shipped next to the binary, in one flat-or-nested directory.
#[derive(Clone, Debug)]
pub struct BundledImages {
    root: PathBuf,
}

impl BundledImages {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Only plain relative names inside the bundle.
    fn path_for(&self, id: &str) -> Option<PathBuf> {
        let rel = Path::new(id);
        if id.is_empty() || !rel.components().all(|c| matches!(c, Component::Normal(_))) {
            return None;
        }
        Some(self.root.join(rel))
    }
}

impl ImageResolver for BundledImages {
    fn resolve(&self, id: &str) -> Result<DecodedImage, ImageError> {
        let path = self.path_for(id).ok_or_else(|| ImageError::NotFound(s!(id)))?;

        let bytes = fs::read(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ImageError::NotFound(s!(id)),
            _ => ImageError::Io { id: s!(id), source: e },
        })?;

        let rgba = image::load_from_memory(&bytes)
            .map_err(|e| ImageError::Decode { id: s!(id), source: e })?
            .to_rgba8();

        let (width, height) = rgba.dimensions();
        Ok(DecodedImage { width, height, rgba: rgba.into_raw() })
    }
}
