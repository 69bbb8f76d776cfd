use ndarray::Array2;
use rand::Rng;

use crate::*;

/// Rejection attempts allowed per cell of the grid before switching to exact placement.
const ATTEMPTS_PER_CELL: u32 = 16;

/// Mines `count` distinct, uniformly random cells of `grid`.
///
/// Picks random coordinates and skips the ones already mined. The density cap keeps the expected number of retries
/// small, still the loop is bounded: after `ATTEMPTS_PER_CELL` tries per cell the remaining mines are placed by
/// choosing among the free cells directly, which cannot miss.
pub(crate) fn place_mines<R: Rng + ?Sized>(grid: &mut Array2<Cell>, count: CellCount, rng: &mut R) {
    let total_cells = grid.len();
    let (rows, cols) = grid.dim();
    let mut mines_placed: CellCount = 0;
    let mut attempts_left = u32::try_from(total_cells)
        .unwrap_or(u32::MAX)
        .saturating_mul(ATTEMPTS_PER_CELL);

    while mines_placed < count && attempts_left > 0 {
        attempts_left -= 1;
        let cell = &mut grid[(rng.random_range(0..rows), rng.random_range(0..cols))];
        if !cell.is_mine() {
            cell.set_mine(true);
            mines_placed += 1;
        }
    }

    if mines_placed < count {
        log::warn!(
            "Rejection sampling gave up after {} placements out of {}, placing the rest directly",
            mines_placed,
            count
        );
        place_among_free(grid, count - mines_placed, rng);
    }
}

fn place_among_free<R: Rng + ?Sized>(grid: &mut Array2<Cell>, count: CellCount, rng: &mut R) {
    let mut free_cells = grid.iter().filter(|cell| !cell.is_mine()).count();

    for _ in 0..count {
        if free_cells == 0 {
            log::warn!("Minefield already full, no free cell left for another mine");
            return;
        }

        let place = rng.random_range(0..free_cells);
        if let Some(cell) = grid.iter_mut().filter(|cell| !cell.is_mine()).nth(place) {
            cell.set_mine(true);
            free_cells -= 1;
        }
    }
}
