//! Command-line interface for strictly_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Games - orbiting board game driver
#[derive(Parser, Debug)]
#[command(name = "strictly_games")]
#[command(about = "Play the orbiting board game from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML game config (board_size, rotation_steps)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the board size from the config
    #[arg(long, global = true)]
    pub size: Option<usize>,

    /// Override the rotation steps from the config
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub steps: Option<i64>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a scripted game from a list of moves
    Play {
        /// Moves as ROW,COL pairs, played alternately starting with player one
        #[arg(value_parser = parse_coord)]
        moves: Vec<(usize, usize)>,
    },

    /// Play interactively, reading one ROW,COL move per line from stdin
    Interactive,

    /// Print the ring decomposition of the board
    Rings,
}

/// Parses `ROW,COL` (whitespace around either number is allowed).
pub fn parse_coord(s: &str) -> Result<(usize, usize), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL but got '{}'", s))?;
    let row = row
        .trim()
        .parse()
        .map_err(|e| format!("invalid row '{}': {}", row.trim(), e))?;
    let col = col
        .trim()
        .parse()
        .map_err(|e| format!("invalid column '{}': {}", col.trim(), e))?;
    Ok((row, col))
}
