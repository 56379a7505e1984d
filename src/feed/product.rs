// src/feed/product.rs
use crate::config::consts::*;

use super::row::Row;

/// Where each product field lives in the sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductColumns {
    pub key: String,
    pub artist: String,
    pub title: String,
    pub price: String,
    pub note: String,
}

impl Default for ProductColumns {
    fn default() -> Self {
        Self {
            key: s!(COL_KEY),
            artist: s!(COL_ARTIST),
            title: s!(COL_TITLE),
            price: s!(COL_PRICE),
            note: s!(COL_NOTE),
        }
    }
}

/// A catalog entry read from a feed row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Product {
    /// Sheet key; also names the product photo.
    pub key: String,
    pub artist: String,
    pub title: Option<String>,
    pub price: Option<String>,
    pub note: Option<String>,
}

impl Product {
    /// `None` unless both key and artist are present and non-empty.
    pub fn from_row(row: &Row, cols: &ProductColumns) -> Option<Self> {
        let truthy = |c: &str| row.get(c).filter(|v| v.is_truthy()).map(|v| v.to_string());

        Some(Self {
            key: truthy(&cols.key)?,
            artist: truthy(&cols.artist)?,
            title: row.text(&cols.title),
            price: row.text(&cols.price),
            note: truthy(&cols.note),
        })
    }

    /// Bundled photo identifier, e.g. `"1042.jpeg"`.
    pub fn image_id(&self) -> String {
        join!(&self.key, PRODUCT_IMAGE_EXT)
    }

    /// Card heading: `artist – title`.
    pub fn display_name(&self) -> String {
        match &self.title {
            Some(t) => format!("{} – {}", self.artist, t),
            None => self.artist.clone(),
        }
    }

    pub fn price_line(&self) -> String {
        join!(TXT_PRICE_PREFIX, self.price.as_deref().unwrap_or(""), TXT_CURRENCY)
    }

    /// Case-insensitive substring match on title or artist.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let hit = |s: &str| s.to_lowercase().contains(needle);
        self.title.as_deref().is_some_and(hit) || hit(&self.artist)
    }
}
