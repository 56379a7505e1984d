// src/feed/row.rs
use std::collections::BTreeMap;

use super::value::Value;

/// One feed row: column id ("A", "B", …) → value. Absent cells have no key.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    cells: BTreeMap<String, Value>,
}

impl Row {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, col: impl Into<String>, v: Value) {
        self.cells.insert(col.into(), v);
    }

    #[inline]
    pub fn get(&self, col: &str) -> Option<&Value> { self.cells.get(col) }

    /// Display text of a cell, if present.
    pub fn text(&self, col: &str) -> Option<String> {
        self.get(col).map(|v| v.to_string())
    }

    /// Number of present cells.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.cells.len() }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}
