//! Tic-tac-toe engine with three computer opponents.
//!
//! The engine owns the rules and the decision making; rendering, menus
//! and input belong to the front end that drives it.
//!
//! # Architecture
//!
//! - **Board model**: `Board`, `Cell`, `Position`, win and draw rules
//! - **Rule engine**: `GameSession::apply_move` with contract checks
//! - **Search engine**: exhaustive minimax (`ai::minimax`)
//! - **Heuristic policy**: win / block / center / corner (`ai::heuristic`)
//! - **Move selector**: `ai::select_move`, dispatching on `Difficulty`
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Difficulty, GameSession, Outcome, Player};
//!
//! let mut session = GameSession::new(Difficulty::Hard);
//! assert_eq!(session.apply_move(0, 0)?, Outcome::Continue(Player::O));
//!
//! let reply = session.select_computer_move()?;
//! assert_eq!((reply.row(), reply.col()), (1, 1));
//! session.apply_move(reply.row(), reply.col())?;
//! # Ok::<(), tictactoe_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod outcome;
mod position;
mod session;
mod types;

pub mod ai;
pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use ai::{Difficulty, DifficultyError, MoveRng, select_move};
pub use contracts::{CellIsEmpty, Contract, GameNotOver, LegalMove, MoveContract};
pub use outcome::{GameStatus, Outcome};
pub use position::Position;
pub use rules::Line;
pub use session::{GameMode, GameSession};
pub use types::{Board, BoardParseError, Cell, Grid, Player};
