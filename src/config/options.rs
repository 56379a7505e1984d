// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;
use crate::feed::{InclusionRule, ProductColumns};

#[derive(Clone, Debug, PartialEq, Default)]
pub struct AppOptions {
    pub feed: FeedOptions,
    pub catalog: CatalogOptions,
    pub images: ImageOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedOptions {
    pub url: String,
    pub rule: InclusionRule,
    pub columns: ProductColumns,
    /// Reverse feed order so the latest sheet rows come first.
    pub newest_first: bool,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            url: FeedOptions::url_for(SPREADSHEET_ID),
            rule: InclusionRule::default(),
            columns: ProductColumns::default(),
            newest_first: true,
        }
    }
}

impl FeedOptions {
    /// Published-sheet gviz endpoint for a spreadsheet id.
    pub fn url_for(spreadsheet_id: &str) -> String {
        join!(FEED_URL_PREFIX, spreadsheet_id, FEED_URL_SUFFIX)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogOptions {
    pub page_size: usize,
    /// Distance (px) from the viewport at which the sentinel and images count as visible.
    pub proximity: f32,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self { page_size: PAGE_SIZE, proximity: PROXIMITY_PX }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageOptions {
    pub dir: PathBuf,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self { dir: PathBuf::from(IMAGE_DIR) }
    }
}
