// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod catalog;
pub mod config;
pub mod core;
pub mod data;
pub mod feed;
pub mod gui;
pub mod images;
pub mod progress;
