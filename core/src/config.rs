use serde::{Deserialize, Serialize};

use crate::*;

/// Percentage of the grid that may hold mines.
pub const MINE_DENSITY_PERCENT: CellCount = 35;

/// Validated construction parameters of a board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(size: Coord, mines: CellCount) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidDimension);
        }

        let max = Self::max_mines(size);
        if mines > max {
            return Err(GameError::InvalidMineCount {
                requested: mines,
                max,
            });
        }

        Ok(Self::new_unchecked(size, mines))
    }

    /// Density cap for a `size`x`size` grid, rounded down.
    pub const fn max_mines(size: Coord) -> CellCount {
        // widened, 255 * 255 * 35 overflows u16
        (mult(size, size) as u32 * MINE_DENSITY_PERCENT as u32 / 100) as CellCount
    }
}
