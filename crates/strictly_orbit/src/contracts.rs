//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::game::GameState;
use super::invariants::{InvariantSet, OrbitInvariants};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(action, after)} - must hold once the action is applied
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions on the state the action produced.
    fn post(action: &A, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game has not been decided.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with `GameOver` once the outcome is terminal.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        if game.outcome().is_terminal() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The target cell lies on the board.
pub struct InBounds;

impl InBounds {
    /// Fails with `OutOfBounds` for coordinates off the board.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        let size = game.grid().size();
        if game.grid().contains(mov.row, mov.col) {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds {
                row: mov.row,
                col: mov.col,
                size,
            })
        }
    }
}

/// Precondition: The target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with `CellOccupied` when a piece already sits on the cell.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if game.grid().is_empty(mov.row, mov.col) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied {
                row: mov.row,
                col: mov.col,
            })
        }
    }
}

/// Composite precondition, checked in order; the first failure wins.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        InBounds::check(mov, game)?;
        CellIsEmpty::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Play Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for `GameState::play_at`.
///
/// Preconditions:
/// - Game not over
/// - Target on the board
/// - Target empty
///
/// Postconditions:
/// - The move is the newest history entry
/// - All `OrbitInvariants` hold
pub struct PlayContract;

impl Contract<GameState, Move> for PlayContract {
    fn pre(game: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(action: &Move, after: &GameState) -> Result<(), MoveError> {
        if after.history().last() != Some(action) {
            warn!(%action, "Accepted move missing from history");
            return Err(MoveError::InvariantViolation(format!(
                "Move {} was not recorded",
                action
            )));
        }
        OrbitInvariants::check_all(after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Player};

    #[test]
    fn test_precondition_empty_cell() {
        let game = GameState::default();
        let action = Move::new(Player::One, 2, 2);
        assert!(PlayContract::pre(&game, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let mut game = GameState::default();
        game.play_at(0, 0).unwrap();

        // The piece orbited to (0, 1).
        let action = Move::new(Player::Two, 0, 1);
        assert_eq!(
            PlayContract::pre(&game, &action),
            Err(MoveError::CellOccupied { row: 0, col: 1 })
        );
    }

    #[test]
    fn test_precondition_order_bounds_before_occupancy() {
        let game = GameState::default();
        let action = Move::new(Player::One, 7, 0);
        assert_eq!(
            PlayContract::pre(&game, &action),
            Err(MoveError::OutOfBounds {
                row: 7,
                col: 0,
                size: 4
            })
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let mut game = GameState::default();
        game.play_at(1, 1).unwrap();
        let action = Move::new(Player::One, 1, 1);
        assert_eq!(PlayContract::post(&action, &game), Ok(()));
    }

    #[test]
    fn test_postcondition_requires_recorded_move() {
        let mut game = GameState::default();
        game.play_at(1, 1).unwrap();
        let other = Move::new(Player::One, 2, 2);
        assert!(matches!(
            PlayContract::post(&other, &game),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let mut game = GameState::default();
        game.play_at(1, 1).unwrap();

        // Smuggle in an extra piece.
        game.grid.set(3, 3, Cell::Occupied(Player::Two));
        let action = Move::new(Player::One, 1, 1);
        assert!(matches!(
            PlayContract::post(&action, &game),
            Err(MoveError::InvariantViolation(_))
        ));
    }
}
