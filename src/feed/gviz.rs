// src/feed/gviz.rs
//
// Google Visualization ("gviz") response handling.
//
// The published-sheet endpoint answers with JavaScript, not JSON:
//
//   /*O_o*/
//   google.visualization.Query.setResponse({"version":"0.6",…,"table":{…}});
//
// We cut the object out of the call, deserialize the table, and zip each
// row's cells against the column ids.

use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

use super::{error::FeedError, row::Row, value::Value};

fn envelope_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Greedy body: runs to the last `})` so braces inside strings are fine.
        Regex::new(r"(?s)google\.visualization\.Query\.setResponse\((\{.*\})\);?")
            .expect("static envelope pattern")
    })
}

/// Extract the JSON object from the `setResponse(...)` wrapper.
pub fn strip_envelope(text: &str) -> Result<&str, FeedError> {
    envelope_re()
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .ok_or(FeedError::Envelope)
}

#[derive(Debug, Deserialize)]
struct Response {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    table: Option<Table>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub cols: Vec<ColumnDesc>,
    #[serde(default)]
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Deserialize)]
pub struct ColumnDesc {
    pub id: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct TableRow {
    #[serde(default)]
    pub c: Vec<Option<Cell>>,
}

#[derive(Debug, Deserialize)]
pub struct Cell {
    #[serde(default)]
    pub v: serde_json::Value,
}

/// Parse the JSON body (already stripped of its envelope).
pub fn parse_table(json: &str) -> Result<Table, FeedError> {
    let resp: Response = serde_json::from_str(json)?;
    resp.table.ok_or_else(|| FeedError::MissingTable {
        status: resp.status.unwrap_or_else(|| s!("unknown")),
    })
}

/// Zip each row's cells against the column ids.
/// Null cells and null values are left out; surplus cells are ignored.
pub fn normalize(table: &Table) -> Vec<Row> {
    let headings: Vec<&str> = table.cols.iter().map(|c| c.id.as_str()).collect();

    table
        .rows
        .iter()
        .map(|tr| {
            tr.c.iter()
                .zip(headings.iter())
                .filter_map(|(cell, &col)| {
                    let v = Value::from_json(&cell.as_ref()?.v)?;
                    Some((col, v))
                })
                .collect::<Row>()
        })
        .collect()
}

/// Envelope → table → rows, all in feed order.
pub fn parse_feed(text: &str) -> Result<Vec<Row>, FeedError> {
    let json = strip_envelope(text)?;
    let table = parse_table(json)?;
    Ok(normalize(&table))
}
