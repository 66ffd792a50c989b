//! Command-line interface for the tictactoe front end.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::{Board, Difficulty, Player};

/// Tic-tac-toe in the terminal against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe against a friend or an Easy, Medium or Hard computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run; the start menu when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a single game
    Play {
        /// Two humans at one keyboard instead of playing the computer
        #[arg(long)]
        pvp: bool,

        /// Computer difficulty (easy, medium, hard)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Pause before the computer replies, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Show the move a difficulty level would make on a given board
    Hint {
        /// Board as nine cells in row-major order, e.g. "XX./.O./..."
        board: Board,

        /// Player to move; inferred from the mark counts when omitted
        #[arg(short, long, value_parser = parse_player)]
        player: Option<Player>,

        /// Policy to ask (easy, medium, hard)
        #[arg(short, long, default_value = "hard")]
        difficulty: Difficulty,

        /// Seed for the Easy policy and the Medium fallback
        #[arg(long)]
        seed: Option<u64>,

        /// Print the hint as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parses `X` or `O`, case-insensitive.
pub fn parse_player(s: &str) -> Result<Player, String> {
    match s.trim() {
        "X" | "x" => Ok(Player::X),
        "O" | "o" => Ok(Player::O),
        other => Err(format!("expected X or O, got {:?}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_menu() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_play_flags() {
        let cli = Cli::parse_from([
            "tictactoe",
            "play",
            "--difficulty",
            "HARD",
            "--seed",
            "3",
            "--delay-ms",
            "0",
        ]);
        match cli.command {
            Some(Command::Play {
                pvp,
                difficulty,
                seed,
                delay_ms,
            }) => {
                assert!(!pvp);
                assert_eq!(difficulty, Some(Difficulty::Hard));
                assert_eq!(seed, Some(3));
                assert_eq!(delay_ms, Some(0));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_hint_parses_board() {
        let cli = Cli::parse_from(["tictactoe", "hint", "XX./.O./...", "-p", "o", "--json"]);
        match cli.command {
            Some(Command::Hint {
                board,
                player,
                difficulty,
                json,
                ..
            }) => {
                assert_eq!(board.empty_cells().len(), 6);
                assert_eq!(player, Some(Player::O));
                assert_eq!(difficulty, Difficulty::Hard);
                assert!(json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_bad_difficulty_is_rejected() {
        assert!(Cli::try_parse_from(["tictactoe", "play", "-d", "insane"]).is_err());
    }

    #[test]
    fn test_parse_player() {
        assert_eq!(parse_player("x"), Ok(Player::X));
        assert!(parse_player("Z").is_err());
    }
}
