//! Terminal front end for `tictactoe_engine`.
//!
//! Menus, the game loop and hints are written against `BufRead` and
//! `Write` so the binary and the tests share them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod hint;
pub mod menu;
pub mod play;

pub use cli::{Cli, Command};
pub use config::{CliConfig, ConfigError, DEFAULT_CONFIG_FILE};
pub use hint::{Hint, compute_hint, infer_player, write_hint};
pub use menu::run_menu;
pub use play::{GameEnd, new_session, play_game, render_board};
