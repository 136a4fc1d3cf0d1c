//! Terminal word-guessing puzzle.
//!
//! The binary in `main.rs` owns the terminal; everything it drives lives
//! here so integration tests and benches can reach it.

pub mod app;
pub mod config;
pub mod event;
pub mod game;
pub mod input;
pub mod keyboard;
pub mod logging;
pub mod ui;
