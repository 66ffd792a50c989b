//! Move selector and heuristic policy scenarios.

mod common;

use common::{board, play};
use tictactoe_engine::ai::{Rule, decide, heuristic_move};
use tictactoe_engine::{
    Difficulty, GameMode, GameSession, GameStatus, MoveError, MoveRng, Player, Position,
    select_move,
};

#[test]
fn test_medium_blocks_row() {
    let mut rng = MoveRng::new(0);
    let b = board("XX./.O./...");
    assert_eq!(heuristic_move(&b, Player::O, &mut rng), Some(Position::TopRight));
    assert_eq!(
        select_move(&b, Player::O, Difficulty::Medium, &mut rng),
        Some(Position::TopRight)
    );
}

#[test]
fn test_medium_prefers_win_over_block() {
    let mut rng = MoveRng::new(0);
    let b = board("OO./XX./..X");
    let d = decide(&b, Player::O, &mut rng).unwrap();
    assert_eq!((d.position.row(), d.position.col()), (0, 2));
    assert_eq!(d.rule, Rule::Win);
}

#[test]
fn test_medium_can_be_forked() {
    let mut session = GameSession::with_seed(GameMode::HumanVsComputer(Difficulty::Medium), 9);
    let mut replies = Vec::new();
    for (row, col) in [(0, 0), (2, 2), (2, 0), (2, 1)] {
        session.apply_move(row, col).unwrap();
        if session.is_computer_turn() {
            replies.push(session.play_computer_turn().unwrap().0);
        }
    }
    assert_eq!(
        replies,
        vec![Position::Center, Position::TopRight, Position::MiddleLeft]
    );
    assert_eq!(session.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_easy_picks_empty_cells() {
    let b = board("XO./.X./O..");
    let mut rng = MoveRng::new(17);
    for _ in 0..100 {
        let pos = select_move(&b, Player::O, Difficulty::Easy, &mut rng).unwrap();
        assert!(b.is_empty(pos));
    }
}

#[test]
fn test_seeded_sessions_repeat() {
    let run = |seed| {
        let mut session = GameSession::with_seed(GameMode::HumanVsComputer(Difficulty::Easy), seed);
        session.apply_move(1, 1).unwrap();
        session.select_computer_move().unwrap()
    };
    assert_eq!(run(123), run(123));
}

#[test]
fn test_every_difficulty_returns_none_on_full_board() {
    let b = board("XOX/XOO/OXX");
    assert!(b.empty_cells().is_empty());
    let mut rng = MoveRng::new(0);
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        assert_eq!(select_move(&b, Player::O, difficulty, &mut rng), None);
    }
}

#[test]
fn test_selector_refused_after_game_end() {
    let mut session = GameSession::with_seed(GameMode::HumanVsComputer(Difficulty::Hard), 0);
    for (row, col) in [(0, 0), (0, 1), (1, 0)] {
        session.apply_move(row, col).unwrap();
        if session.is_computer_turn() {
            session.play_computer_turn().unwrap();
        }
    }
    // Hard has won or is about to; finish the game whichever way it goes.
    while !session.is_terminal() {
        let pos = session.board().empty_cells()[0];
        session.apply_position(pos).unwrap();
        if session.is_computer_turn() {
            session.play_computer_turn().unwrap();
        }
    }
    assert_eq!(session.select_computer_move(), Err(MoveError::GameOver));
}

#[test]
fn test_replayed_draw_blocks_selector() {
    let session = play(&[
        Position::TopLeft,
        Position::Center,
        Position::TopRight,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::BottomRight,
    ]);
    assert_eq!(session.status(), GameStatus::Draw);
    let mut session = session;
    assert_eq!(session.select_computer_move(), Err(MoveError::GameOver));
}
