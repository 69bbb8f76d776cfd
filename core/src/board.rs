use std::collections::VecDeque;

use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::generator::place_mines;
use crate::*;

/// Square minefield and the reveal state of each of its cells.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardSnapshot")]
pub struct Board {
    size: Coord,
    total_mines: CellCount,
    grid: Array2<Cell>,
}

/// Serialized form of a [`Board`], only turned into one after validation.
#[derive(Deserialize)]
struct BoardSnapshot {
    size: Coord,
    total_mines: CellCount,
    grid: Array2<Cell>,
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = GameError;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self> {
        let config = GameConfig::new(snapshot.size, snapshot.total_mines)?;
        if snapshot.grid.dim() != (usize::from(config.size), usize::from(config.size)) {
            return Err(GameError::InvalidBoardShape);
        }

        let actual = snapshot.grid.iter().filter(|cell| cell.is_mine()).count();
        if actual != usize::from(config.mines) {
            return Err(GameError::MineCountMismatch {
                declared: config.mines,
                actual,
            });
        }

        let mut board = Self {
            size: config.size,
            total_mines: config.mines,
            grid: snapshot.grid,
        };
        board.recalculate_adjacent_mines();
        Ok(board)
    }
}

impl Board {
    /// Builds a board with mines placed by the thread-local generator.
    pub fn new(size: Coord, total_mines: CellCount) -> Result<Self> {
        Self::with_rng(size, total_mines, &mut rand::rng())
    }

    /// Builds a board with mines placed by `rng`.
    pub fn with_rng<R: Rng + ?Sized>(size: Coord, total_mines: CellCount, rng: &mut R) -> Result<Self> {
        Self::from_config(GameConfig::new(size, total_mines)?, rng)
    }

    pub fn from_config<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self> {
        let config = GameConfig::new(config.size, config.mines)?;
        let mut grid = Array2::default((config.size, config.size).to_nd_index());
        place_mines(&mut grid, config.mines, rng);

        let mut board = Self {
            size: config.size,
            total_mines: config.mines,
            grid,
        };
        board.recalculate_adjacent_mines();
        log::debug!(
            "Created {}x{} board with {} mines",
            board.size,
            board.size,
            board.total_mines
        );
        Ok(board)
    }

    pub fn size(&self) -> Coord {
        self.size
    }

    pub fn total_mines(&self) -> CellCount {
        self.total_mines
    }

    pub fn config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size, self.total_mines)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (row, col) = coords;
        if row < self.size && col < self.size {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds { row, col })
        }
    }

    pub fn cell(&self, row: Coord, col: Coord) -> Result<Cell> {
        let coords = self.validate_coords((row, col))?;
        Ok(self.grid[coords.to_nd_index()])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.grid
            .indexed_iter()
            .map(|((row, col), cell)| ((row as Coord, col as Coord), cell))
    }

    pub fn revealed_count(&self) -> CellCount {
        self.grid.iter().filter(|cell| cell.is_revealed()).count() as CellCount
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size)
    }

    /// Reveals the cell at `(row, col)`, returns whether it was a mine.
    ///
    /// Revealing an already revealed cell changes nothing and reports `false`, even if that cell is a mine. A safe
    /// cell without adjacent mines also opens the surrounding region.
    pub fn reveal_cell(&mut self, row: Coord, col: Coord) -> Result<bool> {
        let coords = self.validate_coords((row, col))?;
        let cell = &mut self.grid[coords.to_nd_index()];

        if cell.is_revealed() {
            return Ok(false);
        }

        cell.reveal();
        if cell.is_mine() {
            log::debug!("Mine hit at {:?}", coords);
            return Ok(true);
        }

        if cell.adjacent_mines() == 0 {
            self.flood_fill(coords);
        }
        Ok(false)
    }

    /// Opens every safe cell reachable from `start` through cells without adjacent mines.
    ///
    /// Breadth-first with an explicit queue. A cell is marked revealed before it is queued, so none is queued twice
    /// and the border cells with a non-zero count get revealed but not expanded.
    fn flood_fill(&mut self, start: Coord2) {
        let mut to_visit = VecDeque::from([start]);
        let mut opened = 0usize;

        while let Some(visit_coords) = to_visit.pop_front() {
            for pos in self.iter_neighbors(visit_coords) {
                let neighbor = &mut self.grid[pos.to_nd_index()];
                if !neighbor.is_pending() {
                    continue;
                }

                neighbor.reveal();
                opened += 1;
                if neighbor.adjacent_mines() == 0 {
                    to_visit.push_back(pos);
                }
            }
        }

        log::trace!("Flood fill from {:?} opened {} cells", start, opened);
    }

    /// Whether every safe cell is revealed, mines may be in any state.
    pub fn is_game_won(&self) -> bool {
        !self.grid.iter().any(|cell| cell.is_pending())
    }

    /// Overwrites the mine flag at `(row, col)`.
    ///
    /// Reveal state, `total_mines` and adjacency counts are left alone, call
    /// [`Board::recalculate_adjacent_mines`] once the layout is final.
    pub fn set_mine_at(&mut self, row: Coord, col: Coord, is_mine: bool) -> Result<()> {
        let coords = self.validate_coords((row, col))?;
        self.grid[coords.to_nd_index()].set_mine(is_mine);
        Ok(())
    }

    /// Recomputes the adjacency count of every cell from the current mine layout.
    pub fn recalculate_adjacent_mines(&mut self) {
        for row in 0..self.size {
            for col in 0..self.size {
                let count = if self.grid[(row, col).to_nd_index()].is_mine() {
                    0
                } else {
                    self.count_adjacent_mines((row, col))
                };
                self.grid[(row, col).to_nd_index()].set_adjacent_mines(count);
            }
        }
    }

    fn count_adjacent_mines(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| self.grid[pos.to_nd_index()].is_mine())
            .count() as u8
    }
}
