// src/feed/mod.rs
//! # Feed
//!
//! Everything between the published spreadsheet and an in-memory catalog:
//! HTTP fetch, `setResponse(...)` envelope stripping, gviz table parsing,
//! row normalization, the inclusion rule, and product extraction.
//!
//! ```text
//! GUI / CLI → feed::load_catalog → core::net::http_get
//!                               ↘ gviz::parse_feed → InclusionRule → Product
//! ```
//!
//! Nothing here touches the UI. Failures come back as `FeedError`; the GUI
//! decides how (little) to show them.

mod error;
mod gviz;
mod loader;
mod product;
mod row;
mod rules;
mod value;

pub use error::FeedError;
pub use gviz::{normalize, parse_feed, parse_table, strip_envelope, Table};
pub use loader::{catalog_from_text, filter_rows, into_products, load_catalog, load_rows};
pub use product::{Product, ProductColumns};
pub use row::Row;
pub use rules::InclusionRule;
pub use value::Value;
