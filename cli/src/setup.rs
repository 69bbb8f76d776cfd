use std::io::{BufRead, Write};

use anyhow::{Context, Result, ensure};
use sweeper_core::{CellCount, Coord, GameConfig};

use crate::console::Console;

/// Largest grid whose rows can all be labelled with a single letter.
pub const MAX_LABELLED_SIZE: Coord = 26;

/// Game parameters fixed on the command line, anything missing is asked for.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Preset {
    pub size: Option<Coord>,
    pub mines: Option<CellCount>,
}

impl Preset {
    pub fn validate(self) -> Result<Self> {
        if let Some(size) = self.size {
            ensure!(
                (1..=MAX_LABELLED_SIZE).contains(&size),
                "grid size must be between 1 and {MAX_LABELLED_SIZE}, got {size}"
            );
            if let Some(mines) = self.mines {
                GameConfig::new(size, mines).context("invalid mine count")?;
            }
        }
        Ok(self)
    }
}

/// Settles the size and mine count of the next game, `None` if input ends first.
pub fn configure<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    preset: Preset,
) -> Result<Option<GameConfig>> {
    let size = match preset.size {
        Some(size) => size,
        None => match prompt_size(console)? {
            Some(size) => size,
            None => return Ok(None),
        },
    };

    let max_mines = GameConfig::max_mines(size);
    let mines = match preset.mines {
        Some(mines) if mines <= max_mines => mines,
        fixed => {
            if let Some(mines) = fixed {
                log::warn!("{} mines do not fit a {}x{} grid", mines, size, size);
                console.say(format!("Number of mines must be between 0 and {max_mines}."))?;
            }
            match prompt_mines(console, max_mines)? {
                Some(mines) => mines,
                None => return Ok(None),
            }
        }
    };

    let config = GameConfig::new(size, mines)?;
    log::debug!("Configured game {:?}", config);
    Ok(Some(config))
}

fn prompt_size<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Option<Coord>> {
    loop {
        let Some(answer) = console.ask("Enter the size of the grid (e.g. 4 for a 4x4 grid): ")? else {
            return Ok(None);
        };

        match answer.trim().parse::<i64>() {
            Ok(size) if size <= 0 => console.say("Grid size must be a positive integer.")?,
            Ok(size) if size > i64::from(MAX_LABELLED_SIZE) => {
                console.say(format!("Grid size must be at most {MAX_LABELLED_SIZE}."))?
            }
            Ok(size) => return Ok(Some(size as Coord)),
            Err(_) => console.say("Invalid number. Please enter a positive integer.")?,
        }
    }
}

fn prompt_mines<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    max_mines: CellCount,
) -> Result<Option<CellCount>> {
    loop {
        let Some(answer) = console.ask(
            "Enter the number of mines to place on the grid (maximum is 35% of the total squares): ",
        )?
        else {
            return Ok(None);
        };

        match answer.trim().parse::<i64>() {
            Ok(mines) if (0..=i64::from(max_mines)).contains(&mines) => {
                return Ok(Some(mines as CellCount));
            }
            Ok(_) => console.say(format!("Number of mines must be between 0 and {max_mines}."))?,
            Err(_) => console.say("Invalid number. Please enter an integer.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configure_with(input: &str, preset: Preset) -> (Option<GameConfig>, String) {
        let mut console = Console::new(input.as_bytes(), Vec::new());
        let config = configure(&mut console, preset).unwrap();
        (config, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn prompts_for_size_and_mines() {
        let (config, output) = configure_with("4\n3\n", Preset::default());

        assert_eq!(config, Some(GameConfig { size: 4, mines: 3 }));
        assert!(output.starts_with("Enter the size of the grid (e.g. 4 for a 4x4 grid): "));
        assert!(output.contains("maximum is 35% of the total squares"));
    }

    #[test]
    fn reprompts_on_bad_size() {
        let (config, output) = configure_with("abc\n0\n27\n3\n1\n", Preset::default());

        assert_eq!(config, Some(GameConfig { size: 3, mines: 1 }));
        assert!(output.contains("Invalid number. Please enter a positive integer."));
        assert!(output.contains("Grid size must be a positive integer."));
        assert!(output.contains("Grid size must be at most 26."));
    }

    #[test]
    fn reprompts_on_bad_mine_count() {
        let (config, output) = configure_with("4\nmany\n-1\n6\n5\n", Preset::default());

        assert_eq!(config, Some(GameConfig { size: 4, mines: 5 }));
        assert!(output.contains("Invalid number. Please enter an integer."));
        assert_eq!(output.matches("Number of mines must be between 0 and 5.").count(), 2);
    }

    #[test]
    fn preset_skips_prompts() {
        let preset = Preset {
            size: Some(5),
            mines: Some(4),
        };

        let (config, output) = configure_with("", preset);

        assert_eq!(config, Some(GameConfig { size: 5, mines: 4 }));
        assert!(output.is_empty());
    }

    #[test]
    fn preset_mines_too_many_for_prompted_size() {
        let preset = Preset {
            size: None,
            mines: Some(10),
        };

        let (config, output) = configure_with("3\n2\n", preset);

        assert_eq!(config, Some(GameConfig { size: 3, mines: 2 }));
        assert!(output.contains("Number of mines must be between 0 and 3."));
    }

    #[test]
    fn closed_input_gives_up() {
        assert_eq!(configure_with("", Preset::default()).0, None);
        assert_eq!(configure_with("4\n", Preset::default()).0, None);
    }

    #[test]
    fn validate_rejects_bad_presets() {
        let too_big = Preset {
            size: Some(30),
            mines: None,
        };
        let too_dense = Preset {
            size: Some(4),
            mines: Some(6),
        };

        assert!(too_big.validate().is_err());
        assert!(too_dense.validate().is_err());
        assert!(Preset::default().validate().is_ok());
    }
}
