//! Board engine of a minefield game: mine placement, adjacency counts, reveal with flood fill and win detection.

pub use board::*;
pub use cell::*;
pub use config::*;
pub use error::*;
pub use render::*;
pub use types::*;

mod board;
mod cell;
mod config;
mod error;
mod generator;
mod render;
mod types;
