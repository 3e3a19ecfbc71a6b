//! Presentation glue around the gridpath algorithms.
//!
//! [`Board`] keeps the editing state a front end needs between user actions
//! and calls into the path finder and maze generator; [`render`] draws it.

pub mod board;
pub mod config;
pub mod logger;
pub mod render;

pub use board::{Board, CellState, Mode};
pub use config::{ConfigError, DemoConfig};
