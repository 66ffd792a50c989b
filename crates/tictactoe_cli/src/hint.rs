//! One-shot move suggestions for a given board.

use anyhow::{Result, bail};
use serde::Serialize;
use std::io::Write;
use tictactoe_engine::ai::{Rule, decide, minimax, random_move};
use tictactoe_engine::{Board, Difficulty, MoveRng, Player, Position};
use tracing::{debug, instrument};

/// The move a policy would make, with the reasoning it can report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hint {
    /// Player the move is for.
    pub player: Player,
    /// Policy that was asked.
    pub difficulty: Difficulty,
    /// Suggested cell.
    pub position: Position,
    /// Row of the suggested cell.
    pub row: usize,
    /// Column of the suggested cell.
    pub col: usize,
    /// Medium only: which rule fired.
    pub rule: Option<Rule>,
    /// Hard only: minimax value, +1 O wins, -1 X wins, 0 draw.
    pub score: Option<i8>,
}

/// Whose turn it is on a board reached by legal play.
pub fn infer_player(board: &Board) -> Result<Player> {
    let (x, o) = (board.count(Player::X), board.count(Player::O));
    match x.checked_sub(o) {
        Some(0) => Ok(Player::X),
        Some(1) => Ok(Player::O),
        _ => bail!("Board has {} X and {} O marks; X moves first and players alternate", x, o),
    }
}

/// Asks `difficulty`'s policy for `player`'s move on `board`.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn compute_hint(
    board: &Board,
    player: Player,
    difficulty: Difficulty,
    rng: &mut MoveRng,
) -> Result<Hint> {
    if board.winner(Player::X) || board.winner(Player::O) || board.is_full() {
        bail!("The game on this board is already over");
    }

    let (position, rule, score) = match difficulty {
        Difficulty::Easy => (random_move(board, rng), None, None),
        Difficulty::Medium => match decide(board, player, rng) {
            Some(decision) => (Some(decision.position), Some(decision.rule), None),
            None => (None, None, None),
        },
        Difficulty::Hard => {
            let result = minimax(board, player);
            (result.best_move, None, Some(result.score))
        }
    };

    let Some(position) = position else {
        bail!("No empty cell left");
    };
    debug!(?position, ?rule, ?score, "Hint computed");
    Ok(Hint {
        player,
        difficulty,
        position,
        row: position.row(),
        col: position.col(),
        rule,
        score,
    })
}

fn describe_score(score: i8) -> &'static str {
    match score {
        s if s > 0 => "O wins with best play",
        s if s < 0 => "X wins with best play",
        _ => "draw with best play",
    }
}

/// Writes `hint` as one line of text or as JSON.
pub fn write_hint<W: Write>(hint: &Hint, json: bool, output: &mut W) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *output, hint)?;
        writeln!(output)?;
        return Ok(());
    }

    write!(
        output,
        "{} plays {} at {}",
        hint.difficulty, hint.player, hint.position
    )?;
    if let Some(rule) = hint.rule {
        write!(output, " [{}]", rule)?;
    }
    if let Some(score) = hint.score {
        write!(output, " [score {}: {}]", score, describe_score(score))?;
    }
    writeln!(output)?;
    Ok(())
}
