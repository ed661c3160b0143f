//! Strictly Games - orbiting board game CLI
//!
//! Thin driver over `strictly_orbit`: loads configuration, feeds moves to a
//! `GameState` and prints the board after every accepted move.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, parse_coord};
use std::io::BufRead;
use strictly_orbit::{GameConfig, GameState, Outcome};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;
    let game = GameState::new(config).context("Unsupported board configuration")?;

    match cli.command {
        Command::Play { moves } => run_play(game, &moves),
        Command::Interactive => run_interactive(game),
        Command::Rings => run_rings(&game),
    }
}

/// Resolves the config file (if any) and applies command-line overrides.
#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(size) = cli.size {
        config = config.with_board_size(size);
    }
    if let Some(steps) = cli.steps {
        config = config.with_rotation_steps(steps);
    }
    debug!(?config, "Resolved configuration");
    Ok(config)
}

/// Plays a scripted list of moves, skipping refused ones.
#[instrument(skip(game, moves), fields(count = moves.len()))]
fn run_play(mut game: GameState, moves: &[(usize, usize)]) -> Result<()> {
    info!("Playing scripted game");
    for &(row, col) in moves {
        let player = game.current_player();
        match game.play_at(row, col) {
            Ok(outcome) => {
                println!("{} plays ({}, {}):\n{}\n", player, row, col, game.grid());
                if outcome.is_terminal() {
                    break;
                }
            }
            Err(e) => {
                warn!(row, col, error = %e, "Move refused");
                println!("Refused ({}, {}): {}", row, col, e);
            }
        }
    }
    print_outcome(&game);
    Ok(())
}

/// Reads moves from stdin until the game ends or input runs out.
///
/// Besides `ROW,COL`, accepts `reset` and `quit`.
#[instrument(skip(game))]
fn run_interactive(mut game: GameState) -> Result<()> {
    println!("{}\n", game.grid());
    println!("{} to move (ROW,COL, 'reset' or 'quit')", game.current_player());

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        let input = line.trim();
        match input {
            "" => continue,
            "quit" => break,
            "reset" => game.reset(),
            _ => match parse_coord(input) {
                Ok((row, col)) => {
                    if let Err(e) = game.play_at(row, col) {
                        warn!(row, col, error = %e, "Move refused");
                        println!("Refused: {}", e);
                    }
                }
                Err(e) => println!("Could not read move: {}", e),
            },
        }

        println!("{}\n", game.grid());
        match game.outcome() {
            Outcome::InProgress => println!("{} to move", game.current_player()),
            outcome => println!("{} ('reset' to play again, 'quit' to exit)", outcome),
        }
    }
    Ok(())
}

/// Prints each ring's traversal order.
#[instrument(skip(game))]
fn run_rings(game: &GameState) -> Result<()> {
    let engine = game.engine();
    println!(
        "{}x{} board, {} rings, period {}",
        engine.size(),
        engine.size(),
        engine.rings().len(),
        engine.period()
    );
    for ring in engine.rings() {
        let path = ring
            .coords()
            .iter()
            .map(|(r, c)| format!("({},{})", r, c))
            .collect::<Vec<_>>()
            .join(" ");
        println!("ring {} [{} cells]: {}", ring.depth(), ring.len(), path);
    }
    Ok(())
}

fn print_outcome(game: &GameState) {
    match game.outcome() {
        Outcome::InProgress => println!("Game in progress, {} to move", game.current_player()),
        outcome => println!("{}", outcome),
    }
}
