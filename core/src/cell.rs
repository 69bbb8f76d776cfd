use serde::{Deserialize, Serialize};

/// State of a single grid square as owned by the [`Board`](crate::Board).
///
/// `adjacent_mines` only carries meaning for safe cells, mined cells keep it at 0.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    is_mine: bool,
    is_revealed: bool,
    adjacent_mines: u8,
}

impl Cell {
    pub const fn new() -> Self {
        Self {
            is_mine: false,
            is_revealed: false,
            adjacent_mines: 0,
        }
    }

    pub const fn is_mine(self) -> bool {
        self.is_mine
    }

    pub fn set_mine(&mut self, is_mine: bool) {
        self.is_mine = is_mine;
    }

    pub const fn is_revealed(self) -> bool {
        self.is_revealed
    }

    pub fn reveal(&mut self) {
        self.is_revealed = true;
    }

    pub const fn adjacent_mines(self) -> u8 {
        self.adjacent_mines
    }

    pub fn set_adjacent_mines(&mut self, count: u8) {
        self.adjacent_mines = count;
    }

    /// Safe and still hidden.
    pub const fn is_pending(self) -> bool {
        !self.is_mine && !self.is_revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_hidden_safe_and_zero() {
        let cell = Cell::new();

        assert!(!cell.is_mine());
        assert!(!cell.is_revealed());
        assert_eq!(cell.adjacent_mines(), 0);
        assert_eq!(cell, Cell::default());
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut cell = Cell::new();

        cell.reveal();
        cell.reveal();

        assert!(cell.is_revealed());
        assert!(!cell.is_pending());
    }
}
