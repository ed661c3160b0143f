//! Pure game logic for an orbiting two-player board game.
//!
//! Players take turns placing a piece on an empty cell of a square board.
//! After every placement the whole board orbits: each concentric ring shifts
//! its pieces clockwise by a fixed number of positions. A player wins by
//! owning a full row, column or diagonal once the board has settled.
//!
//! # Architecture
//!
//! - **Rings**: board geometry as data (`rings_for`)
//! - **Rotation**: pure grid-in, grid-out orbit (`RotationEngine`, `rotate`)
//! - **Rules**: win and draw detection over any grid
//! - **Game**: the turn state machine (`GameState::play_at`, `GameState::reset`)
//!
//! # Example
//!
//! ```
//! use strictly_orbit::{Cell, GameState, Outcome, Player};
//!
//! let mut game = GameState::default();
//! assert_eq!(game.play_at(0, 0), Ok(Outcome::InProgress));
//!
//! // The piece orbited one step along the top row.
//! assert_eq!(game.grid().get(0, 1), Some(Cell::Occupied(Player::One)));
//! assert_eq!(game.current_player(), Player::Two);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod game;
mod rings;
mod rotation;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError, MoveRecord};
pub use config::{ConfigError, GameConfig};
pub use game::GameState;
pub use rings::{Coord, MAX_BOARD_SIZE, RingSpec, RotationError, rings_for};
pub use rotation::{RotationEngine, rotate};
pub use types::{Cell, Grid, GridParseError, Outcome, Player};
