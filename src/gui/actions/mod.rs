// src/gui/actions/mod.rs
//
// Folder module facade: background work started by pages.

mod fetch;

pub use fetch::{FeedTask, TaskPoll, fetch_catalog};
