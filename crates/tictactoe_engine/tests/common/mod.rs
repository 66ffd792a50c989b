//! Helpers shared by the engine integration tests.

#![allow(dead_code)]

use tictactoe_engine::{Board, GameMode, GameSession, Position};

/// Parses a board literal, panicking on malformed test input.
pub fn board(s: &str) -> Board {
    s.parse().expect("valid board literal")
}

/// Every session reachable by legal play from the empty board,
/// finished games included.
pub fn reachable_sessions() -> Vec<GameSession> {
    let mut out = Vec::new();
    let mut seen = std::collections::HashSet::new();
    let root = GameSession::with_seed(GameMode::HumanVsHuman, 0);
    walk(root, &mut seen, &mut out);
    out
}

fn walk(
    session: GameSession,
    seen: &mut std::collections::HashSet<Board>,
    out: &mut Vec<GameSession>,
) {
    if !seen.insert(*session.board()) {
        return;
    }
    if !session.is_terminal() {
        for pos in session.board().empty_cells() {
            let mut next = session.clone();
            next.apply_position(pos).expect("empty cell of a running game");
            walk(next, seen, out);
        }
    }
    out.push(session);
}

/// Plays `positions` in a human-vs-human session.
pub fn play(positions: &[Position]) -> GameSession {
    GameSession::replay(GameMode::HumanVsHuman, positions).expect("legal moves")
}
