use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use rand::{RngCore, SeedableRng, rngs::SmallRng};
use sweeper_core::{Board, CellCount, Coord};

use crate::console::Console;
use crate::session::SessionOutcome;
use crate::setup::Preset;

mod console;
mod coords;
mod session;
mod setup;

/// Reveal every safe square of a minefield without setting off a mine.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Grid size, asked for when missing
    #[arg(short, long)]
    size: Option<Coord>,

    /// Number of mines, asked for when missing
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow!("Error initializing logger: {err}"))?;
    log::debug!("seed: {:?}", args.seed);

    let preset = Preset {
        size: args.size,
        mines: args.mines,
    }
    .validate()?;

    let mut rng: Box<dyn RngCore> = match args.seed {
        Some(seed) => Box::new(SmallRng::seed_from_u64(seed)),
        None => Box::new(rand::rng()),
    };

    let mut console = Console::new(io::stdin().lock(), io::stdout());
    run(&mut console, preset, &mut *rng)
}

/// Plays games back to back until the player types `exit` or input ends.
fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    preset: Preset,
    rng: &mut dyn RngCore,
) -> Result<()> {
    loop {
        console.say("Welcome to Minesweeper!")?;
        let Some(config) = setup::configure(console, preset)? else {
            return Ok(());
        };

        let mut board = Board::from_config(config, rng).context("Could not create board")?;
        let outcome = session::play(&mut board, console)?;
        log::info!("Game over: {:?} on {:?}", outcome, board.config());
        if outcome == SessionOutcome::Abandoned {
            return Ok(());
        }

        console.say("Press any key to play again...")?;
        match console.read_line()? {
            Some(choice) if !choice.trim().eq_ignore_ascii_case("exit") => continue,
            _ => return Ok(()),
        }
    }
}
