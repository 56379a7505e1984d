// src/data.rs
//
// Light wrappers around the loaded catalog and its search projection.
//
// - Catalog: read-only holder for the products of one feed load. Built once
//            per catalog mount; never mutated afterwards.
// - SearchView: derived (view) data: indexes of the products matching the
//               current search text, in catalog order.

use crate::feed::Product;

/// Products of one feed load, in display order.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self { Self { products } }

    /// Read-only view of the products.
    pub fn products(&self) -> &[Product] { &self.products }

    pub fn len(&self) -> usize { self.products.len() }
    pub fn is_empty(&self) -> bool { self.products.is_empty() }
}

/// Zero-copy filtered view for display.
/// Holds the positions of matching products in the catalog.
#[derive(Clone, Debug)]
pub struct SearchView<'a> {
    pub row_ix: Vec<usize>,
    raw: &'a Catalog,
}

impl<'a> SearchView<'a> {
    /// Case-insensitive substring match of `query` against title and artist.
    /// An empty query keeps everything.
    pub fn from_query(raw: &'a Catalog, query: &str) -> Self {
        let needle = query.to_lowercase();
        let row_ix = raw
            .products
            .iter()
            .enumerate()
            .filter(|(_, p)| p.matches(&needle))
            .map(|(i, _)| i)
            .collect();

        Self { row_ix, raw }
    }

    /// Number of matching products.
    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Borrow a product by projected index.
    pub fn get(&self, i: usize) -> Option<&'a Product> {
        self.row_ix.get(i).and_then(|&ix| self.raw.products.get(ix))
    }

    /// The first `n` matches.
    pub fn take(&self, n: usize) -> impl Iterator<Item = &'a Product> + '_ {
        self.row_ix.iter().take(n).map(|&ix| &self.raw.products[ix])
    }
}
