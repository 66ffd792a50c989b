//! Start menu and difficulty menu.

use crate::config::CliConfig;
use crate::play::{GameEnd, new_session, play_game};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::time::Duration;
use tictactoe_engine::{Difficulty, GameMode};
use tracing::{debug, info, instrument};

/// Entry on the start menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Human against the computer.
    VsComputer,
    /// Two humans.
    VsPerson,
    /// Leave the program.
    Exit,
}

/// Entry on the difficulty menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyChoice {
    /// Play at this level.
    Level(Difficulty),
    /// Return to the start menu.
    Back,
}

/// Parses a start menu answer: its number or its first word.
pub fn parse_menu_choice(s: &str) -> Option<MenuChoice> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "computer" | "c" => Some(MenuChoice::VsComputer),
        "2" | "person" | "p" => Some(MenuChoice::VsPerson),
        "3" | "exit" | "q" | "quit" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// Parses a difficulty menu answer: its number or the level name.
pub fn parse_difficulty_choice(s: &str) -> Option<DifficultyChoice> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" => Some(DifficultyChoice::Level(Difficulty::Easy)),
        "2" => Some(DifficultyChoice::Level(Difficulty::Medium)),
        "3" => Some(DifficultyChoice::Level(Difficulty::Hard)),
        "4" | "back" | "b" => Some(DifficultyChoice::Back),
        other => other.parse().ok().map(DifficultyChoice::Level),
    }
}

/// Shows the start menu until Exit or end of input, playing one game
/// per selection.
#[instrument(skip_all)]
pub fn run_menu<R: BufRead, W: Write>(
    config: &CliConfig,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let delay = Duration::from_millis(*config.computer_delay_ms());

    loop {
        writeln!(output, "\nChoose Game Mode")?;
        writeln!(output, "  1) You vs Computer")?;
        writeln!(output, "  2) You vs Person")?;
        writeln!(output, "  3) Exit")?;

        let Some(answer) = prompt(input, output)? else {
            return Ok(());
        };
        let mode = match parse_menu_choice(&answer) {
            Some(MenuChoice::VsComputer) => match choose_difficulty(input, output)? {
                Some(DifficultyChoice::Level(difficulty)) => {
                    GameMode::HumanVsComputer(difficulty)
                }
                Some(DifficultyChoice::Back) => continue,
                None => return Ok(()),
            },
            Some(MenuChoice::VsPerson) => GameMode::HumanVsHuman,
            Some(MenuChoice::Exit) => {
                info!("Leaving from the start menu");
                return Ok(());
            }
            None => {
                writeln!(output, "Please pick 1, 2 or 3")?;
                continue;
            }
        };

        let mut session = new_session(mode, *config.seed());
        let end = play_game(&mut session, input, output, delay)?;
        debug!(?end, "Back to the start menu");
        if end == GameEnd::Quit && input.fill_buf()?.is_empty() {
            return Ok(());
        }
    }
}

/// Difficulty submenu. `None` on end of input.
fn choose_difficulty<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<DifficultyChoice>> {
    loop {
        writeln!(output, "\nSelect Difficulty")?;
        writeln!(output, "  1) Easy")?;
        writeln!(output, "  2) Medium")?;
        writeln!(output, "  3) Hard")?;
        writeln!(output, "  4) Back")?;

        let Some(answer) = prompt(input, output)? else {
            return Ok(None);
        };
        match parse_difficulty_choice(&answer) {
            Some(choice) => return Ok(Some(choice)),
            None => writeln!(output, "Please pick 1, 2, 3 or 4")?,
        }
    }
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<String>> {
    write!(output, "> ")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line).context("Failed to read menu choice")? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
