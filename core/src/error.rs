use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board size must be positive")]
    InvalidDimension,
    #[error("Total mines must be between 0 and {max}, got {requested}")]
    InvalidMineCount { requested: CellCount, max: CellCount },
    #[error("Invalid cell coordinates ({row}, {col})")]
    OutOfBounds { row: Coord, col: Coord },
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Board declares {declared} mines but holds {actual}")]
    MineCountMismatch { declared: CellCount, actual: usize },
}

pub type Result<T> = core::result::Result<T, GameError>;
