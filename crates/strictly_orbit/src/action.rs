//! First-class move types.
//!
//! A move is a domain event: the player whose turn it is places a piece on
//! a cell. Moves are validated before anything is applied, and the game keeps
//! the last accepted move together with the board it produced.

use super::rings::RotationError;
use super::types::{Grid, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player placing a piece at `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Target row.
    pub row: usize,
    /// Target column.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, row: usize, col: usize) -> Self {
        Self { player, row, col }
    }

    /// Target cell as `(row, col)`.
    pub fn coord(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({}, {})", self.player, self.row, self.col)
    }
}

/// The last accepted move and the board after its rotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The accepted move.
    pub action: Move,
    /// Board snapshot after placement and rotation.
    pub grid_after: Grid,
}

/// Reasons a move is refused.
///
/// Every variant is raised before the board is touched, so a refused move
/// leaves the game exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The target cell is off the board.
    #[display("Cell ({}, {}) is outside the {}x{} board", row, col, size, size)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board side length.
        size: usize,
    },

    /// The target cell already holds a piece.
    #[display("Cell ({}, {}) is already occupied", row, col)]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The board could not be rotated.
    #[display("Rotation failed: {}", _0)]
    Rotation(RotationError),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Rotation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RotationError> for MoveError {
    fn from(err: RotationError) -> Self {
        MoveError::Rotation(err)
    }
}
