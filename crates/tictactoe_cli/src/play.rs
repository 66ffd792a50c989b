//! Line-oriented game loop.
//!
//! The loop reads moves from any `BufRead` and writes the board and
//! prompts to any `Write`, so stdin/stdout in the binary and byte
//! buffers in tests drive the same code.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::time::Duration;
use tictactoe_engine::{
    Cell, GameMode, GameSession, GameStatus, MoveError, MoveRng, Outcome, Player, Position,
};
use tracing::{debug, info, instrument, warn};

/// How a game loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    /// The game reached a win or a draw.
    Finished(GameStatus),
    /// The player typed `q` or the input ran out.
    Quit,
}

/// Starts a session, seeded when `seed` is given.
pub fn new_session(mode: GameMode, seed: Option<u64>) -> GameSession {
    match seed {
        Some(seed) => GameSession::with_seed(mode, seed),
        None => GameSession::with_rng(mode, MoveRng::from_random()),
    }
}

/// Renders the board with the index of every empty cell.
pub fn render_board(session: &GameSession) -> String {
    let grid = session.board_snapshot();
    let rows: Vec<String> = grid
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            let cells: Vec<String> = cells
                .iter()
                .enumerate()
                .map(|(col, cell)| match cell {
                    Cell::Occupied(player) => player.to_string(),
                    Cell::Empty => (row * 3 + col).to_string(),
                })
                .collect();
            format!(" {} ", cells.join(" | "))
        })
        .collect();
    rows.join("\n---+---+---\n")
}

/// Title line shown above the board.
pub fn title(mode: GameMode) -> String {
    match mode {
        GameMode::HumanVsHuman => "Tic-Tac-Toe: You vs Person".to_string(),
        GameMode::HumanVsComputer(difficulty) => {
            format!("Tic-Tac-Toe: You vs Computer - {}", difficulty)
        }
    }
}

fn announce(mode: GameMode, status: GameStatus) -> String {
    match (mode, status) {
        (GameMode::HumanVsComputer(_), GameStatus::Won(Player::O)) => {
            "Computer wins!".to_string()
        }
        (_, GameStatus::Won(player)) => format!("Player {} wins!", player),
        (_, GameStatus::Draw) => "It's a draw!".to_string(),
        (_, GameStatus::InProgress) => "Game in progress".to_string(),
    }
}

/// Plays `session` to the end.
///
/// Human moves are read one per line as `0`-`8`, `row,col` or a cell
/// label. Unknown and occupied cells are reported and asked for again.
/// In human-vs-computer games the computer replies after `delay`.
#[instrument(skip_all, fields(mode = ?session.mode()))]
pub fn play_game<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: &mut R,
    output: &mut W,
    delay: Duration,
) -> Result<GameEnd> {
    writeln!(output, "{}", title(session.mode()))?;

    while !session.is_terminal() {
        writeln!(output, "\n{}\n", render_board(session))?;

        if session.is_computer_turn() {
            if !delay.is_zero() {
                std::thread::sleep(delay);
            }
            let (pos, _) = session
                .play_computer_turn()
                .context("Computer failed to move")?;
            writeln!(output, "Computer plays {}", pos)?;
            continue;
        }

        let Some(pos) = read_move(session, input, output)? else {
            info!("Player left the game");
            return Ok(GameEnd::Quit);
        };

        match session.apply_position(pos) {
            Ok(Outcome::Continue(next)) => debug!(%next, "Turn passes"),
            Ok(outcome) => debug!(%outcome, "Game over"),
            Err(e) => {
                warn!(error = %e, "Move refused");
                writeln!(output, "{}", e)?;
            }
        }
    }

    let status = session.status();
    writeln!(output, "\n{}\n", render_board(session))?;
    writeln!(output, "{}", announce(session.mode(), status))?;
    Ok(GameEnd::Finished(status))
}

/// Prompts until a free cell is named. `None` on quit or end of input.
fn read_move<R: BufRead, W: Write>(
    session: &GameSession,
    input: &mut R,
    output: &mut W,
) -> Result<Option<Position>> {
    loop {
        write!(output, "Player {}, your move: ", session.to_move())?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("Failed to read move")? == 0 {
            return Ok(None);
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }

        match Position::from_label_or_number(line) {
            Some(pos) if session.board().is_empty(pos) => return Ok(Some(pos)),
            Some(pos) => writeln!(output, "{}", MoveError::CellOccupied(pos))?,
            None => writeln!(
                output,
                "Unknown cell {:?}: enter 0-8, row,col or a name like top-left",
                line
            )?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tictactoe_engine::Difficulty;

    fn run(session: &mut GameSession, script: &str) -> (GameEnd, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let end = play_game(session, &mut input, &mut output, Duration::ZERO).unwrap();
        (end, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_render_shows_indices_for_empty_cells() {
        let mut session = GameSession::human_vs_human();
        session.apply_move(1, 1).unwrap();
        assert_eq!(
            render_board(&session),
            " 0 | 1 | 2 \n---+---+---\n 3 | X | 5 \n---+---+---\n 6 | 7 | 8 "
        );
    }

    #[test]
    fn test_pvp_win() {
        let mut session = GameSession::human_vs_human();
        let (end, out) = run(&mut session, "0\n3\n1\n4\n2\n");
        assert_eq!(end, GameEnd::Finished(GameStatus::Won(Player::X)));
        assert!(out.ends_with("Player X wins!\n"));
    }

    #[test]
    fn test_reprompts_on_bad_input() {
        let mut session = GameSession::human_vs_human();
        let (end, out) = run(&mut session, "4\n4\nnine\n1,1\n");
        assert_eq!(end, GameEnd::Quit);
        assert!(out.contains("occupied"));
        assert!(out.contains("Unknown cell \"nine\""));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_quit() {
        let mut session = GameSession::human_vs_human();
        let (end, _) = run(&mut session, "center\nq\n");
        assert_eq!(end, GameEnd::Quit);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_computer_replies() {
        let mut session =
            GameSession::with_seed(GameMode::HumanVsComputer(Difficulty::Hard), 0);
        let (_, out) = run(&mut session, "top-left\n");
        assert!(out.contains("Computer plays Center (1, 1)"));
        assert_eq!(session.history().len(), 2);
    }
}
