//! Results of applying a move and the recorded state of a game.

use super::rules::Line;
use super::types::Player;
use serde::{Deserialize, Serialize};

/// What happened after an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The game goes on; the contained player moves next.
    Continue(Player),
    /// The mover completed a line.
    Win {
        /// The winning player.
        player: Player,
        /// The completed line, for highlighting.
        line: Line,
    },
    /// The board filled up without a line.
    Draw,
}

impl Outcome {
    /// True for `Win` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Continue(_))
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Continue(player) => write!(f, "Player {} to move", player),
            Outcome::Win { player, .. } => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// True once the game has been won or drawn.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}
