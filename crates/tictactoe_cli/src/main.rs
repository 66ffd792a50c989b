//! tictactoe - terminal tic-tac-toe
//!
//! Start menu by default, or a single game or hint via subcommands.

use anyhow::{Context, Result};
use clap::Parser;
use std::time::Duration;
use tictactoe_cli::{
    Cli, CliConfig, Command, DEFAULT_CONFIG_FILE, compute_hint, infer_player, new_session,
    play_game, run_menu, write_hint,
};
use tictactoe_engine::{GameMode, MoveRng};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::load_or_default(DEFAULT_CONFIG_FILE)?,
    };

    let filter = EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(config.log_filter().as_deref().unwrap_or("warn"))
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(?config, "Starting tictactoe");

    match cli.command {
        None => {
            let stdin = std::io::stdin();
            run_menu(&config, &mut stdin.lock(), &mut std::io::stdout())
        }
        Some(Command::Play {
            pvp,
            difficulty,
            seed,
            delay_ms,
        }) => run_play(config.with_overrides(difficulty, seed, delay_ms), pvp),
        Some(Command::Hint {
            board,
            player,
            difficulty,
            seed,
            json,
        }) => {
            let player = match player {
                Some(player) => player,
                None => infer_player(&board)?,
            };
            let mut rng = match seed.or(*config.seed()) {
                Some(seed) => MoveRng::new(seed),
                None => MoveRng::from_random(),
            };
            let hint = compute_hint(&board, player, difficulty, &mut rng)?;
            write_hint(&hint, json, &mut std::io::stdout())
        }
    }
}

/// Run a single game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: CliConfig, pvp: bool) -> Result<()> {
    let mode = if pvp {
        GameMode::HumanVsHuman
    } else {
        GameMode::HumanVsComputer(*config.difficulty())
    };
    let mut session = new_session(mode, *config.seed());
    let stdin = std::io::stdin();
    let end = play_game(
        &mut session,
        &mut stdin.lock(),
        &mut std::io::stdout(),
        Duration::from_millis(*config.computer_delay_ms()),
    )
    .context("Game aborted")?;
    info!(?end, "Game ended");
    Ok(())
}
