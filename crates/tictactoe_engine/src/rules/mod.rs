//! Game rules for tic-tac-toe.
//!
//! Pure functions over a `Board`. Kept apart from board storage so the
//! session, the contracts and the search engine share one definition of
//! a win and a draw.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, check_winner, has_line, winning_line};
