// src/feed/loader.rs
//
// The whole fetch → normalize → filter pipeline. No caching: every call is a
// fresh request.

use crate::{
    config::options::FeedOptions,
    core::net,
    progress::Progress,
};

use super::{error::FeedError, gviz, product::Product, row::Row};

/// Fetch the feed and return the accepted rows in feed order.
pub fn load_rows(
    opts: &FeedOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<Row>, FeedError> {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Fetching catalog feed…");
    }
    logf!("Feed: GET {}", opts.url);

    let text = net::http_get(&opts.url)?;
    let rows = gviz::parse_feed(&text)?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(rows.len());
    }

    let total = rows.len();
    let kept = filter_rows(&opts.rule, rows);
    logf!("Feed: {} rows, {} accepted (rule={:?})", total, kept.len(), opts.rule);

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(kept)
}

/// Keep rows passing the inclusion rule.
pub fn filter_rows(rule: &super::InclusionRule, rows: Vec<Row>) -> Vec<Row> {
    rows.into_iter().filter(|r| rule.accepts(r)).collect()
}

/// Turn accepted rows into products, newest first if configured.
pub fn into_products(opts: &FeedOptions, rows: &[Row]) -> Vec<Product> {
    let mut products: Vec<Product> = rows
        .iter()
        .filter_map(|r| Product::from_row(r, &opts.columns))
        .collect();

    if opts.newest_first {
        products.reverse();
    }
    products
}

/// Parse an already-fetched feed body. Shared by `load_catalog` and tests.
pub fn catalog_from_text(opts: &FeedOptions, text: &str) -> Result<Vec<Product>, FeedError> {
    let rows = filter_rows(&opts.rule, gviz::parse_feed(text)?);
    Ok(into_products(opts, &rows))
}

/// Fetch the feed and build the catalog.
pub fn load_catalog(
    opts: &FeedOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<Vec<Product>, FeedError> {
    let rows = load_rows(opts, progress)?;
    Ok(into_products(opts, &rows))
}
