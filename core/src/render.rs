use core::fmt;

use serde::{Deserialize, Serialize};

use crate::*;

/// What a player gets to see of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Glyph {
    Hidden,
    Open(u8),
    Mine,
}

impl Glyph {
    /// `reveal_mines` discloses hidden mines, used once the game is over.
    pub const fn of(cell: Cell, reveal_mines: bool) -> Self {
        match (cell.is_revealed(), cell.is_mine()) {
            (true, true) => Self::Mine,
            (true, false) => Self::Open(cell.adjacent_mines()),
            (false, true) if reveal_mines => Self::Mine,
            (false, _) => Self::Hidden,
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hidden => f.write_str("_"),
            Self::Open(count) => write!(f, "{count}"),
            Self::Mine => f.write_str("*"),
        }
    }
}

/// Letter labelling `row` in rendered output and in typed coordinates, `None` past `Z`.
pub fn row_label(row: Coord) -> Option<char> {
    (row < 26).then(|| char::from(b'A' + row))
}

/// Text grid view of a [`Board`], rows labelled with letters and columns with 1-based numbers.
///
/// ```text
///    1 2 3
/// A  _ 1 _
/// B  _ 1 0
/// C  * 1 0
/// ```
#[derive(Copy, Clone, Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    reveal_mines: bool,
}

impl fmt::Display for BoardDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.board.size();

        f.write_str("  ")?;
        for col in 0..size {
            write!(f, " {}", u16::from(col) + 1)?;
        }
        writeln!(f)?;

        let mut cells = self.board.cells();
        for row in 0..size {
            write!(f, "{} ", row_label(row).unwrap_or('?'))?;
            for (_, &cell) in cells.by_ref().take(size.into()) {
                write!(f, " {}", Glyph::of(cell, self.reveal_mines))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Board {
    pub fn display(&self, reveal_mines: bool) -> BoardDisplay<'_> {
        BoardDisplay {
            board: self,
            reveal_mines,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(false), f)
    }
}
