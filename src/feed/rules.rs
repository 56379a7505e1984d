// src/feed/rules.rs
use crate::config::consts::{COL_ARTIST, COL_KEY, COL_STOCK};

use super::row::Row;

/// Which feed rows make it into the catalog.
///
/// Every `required` column must hold a truthy value. If `positive` names a
/// column, that column must also coerce to a number strictly above zero.
/// Sheets differ on which column carries the stock count (G in the current
/// sheet, F in older ones), so it is configuration rather than a constant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InclusionRule {
    pub required: Vec<String>,
    pub positive: Option<String>,
}

impl Default for InclusionRule {
    fn default() -> Self {
        Self {
            required: vec![s!(COL_KEY), s!(COL_ARTIST)],
            positive: Some(s!(COL_STOCK)),
        }
    }
}

impl InclusionRule {
    /// Identifying fields only, no numeric check.
    pub fn identifying_only() -> Self {
        Self { positive: None, ..Self::default() }
    }

    pub fn with_positive(mut self, col: impl Into<String>) -> Self {
        self.positive = Some(col.into());
        self
    }

    pub fn accepts(&self, row: &Row) -> bool {
        let identified = self
            .required
            .iter()
            .all(|c| row.get(c).is_some_and(|v| v.is_truthy()));

        if !identified {
            return false;
        }

        match &self.positive {
            // NaN > 0 is false, absent is false
            Some(col) => row.get(col).is_some_and(|v| v.as_number() > 0.0),
            None => true,
        }
    }
}
