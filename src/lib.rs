// File: src/lib.rs
pub mod action;
pub mod app;
pub mod color_utils;
pub mod config;
pub mod error;
pub mod form;
pub mod grid;
pub mod logging;
pub mod model;
pub mod paths;
pub mod store;

#[cfg(feature = "tui")]
pub mod tui;
