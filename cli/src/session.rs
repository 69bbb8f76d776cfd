use std::io::{BufRead, Write};

use anyhow::Result;
use sweeper_core::Board;

use crate::console::Console;
use crate::coords::parse_coordinate;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    Won,
    Lost,
    /// Input ended before the game did.
    Abandoned,
}

/// Plays one game on `board` until a mine goes off, every safe square is open or input runs out.
pub fn play<R: BufRead, W: Write>(board: &mut Board, console: &mut Console<R, W>) -> Result<SessionOutcome> {
    console.say("Here is your minefield:")?;
    console.say(board.display(false))?;

    loop {
        let Some(input) = console.ask("Select a square to reveal (e.g. A1): ")? else {
            log::info!("Input closed, abandoning game");
            return Ok(SessionOutcome::Abandoned);
        };

        let (row, col) = match parse_coordinate(&input, board.size()) {
            Ok(coords) => coords,
            Err(err) => {
                log::debug!("Rejected square {:?}: {}", input, err);
                console.say(format!("Invalid input: {err}"))?;
                continue;
            }
        };

        if board.reveal_cell(row, col)? {
            console.say("Oh no, you detonated a mine! Game over.")?;
            console.say(board.display(true))?;
            return Ok(SessionOutcome::Lost);
        }

        let adjacent = board.cell(row, col)?.adjacent_mines();
        console.say(format!("This square contains {adjacent} adjacent mines."))?;
        console.say("Here is your updated minefield:")?;
        console.say(board.display(false))?;

        if board.is_game_won() {
            console.say("Congratulations, you have won the game!")?;
            return Ok(SessionOutcome::Won);
        }
    }
}
