//! Properties of every reachable game state.
//!
//! A move places one piece and then only permutes cells ring by ring, so the
//! counts fixed by placement survive the orbit. `play_at` checks the whole
//! set after each move through [`InvariantSet::check_all`].

use super::action::MoveError;
use super::game::GameState;
use derive_more::Display;
use tracing::warn;

pub mod alternating_turn;
pub mod history_consistent;
pub mod last_move;
pub mod piece_balance;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use last_move::LastMoveInvariant;
pub use piece_balance::PieceBalanceInvariant;

/// A property of a `GameState` that every accepted move preserves.
pub trait Invariant {
    /// One-line statement of the property, used in violation reports.
    const DESCRIPTION: &'static str;

    /// True when `game` satisfies the property.
    fn holds(game: &GameState) -> bool;
}

/// A broken invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Statement of the invariant that failed.
    pub description: &'static str,
}

/// Invariants checked together after each move.
pub trait InvariantSet {
    /// The broken invariants, in the order the set lists them.
    fn violations(game: &GameState) -> Vec<InvariantViolation>;

    /// Fails with `MoveError::InvariantViolation` naming every broken
    /// invariant.
    fn check_all(game: &GameState) -> Result<(), MoveError> {
        let violations = Self::violations(game);
        if violations.is_empty() {
            return Ok(());
        }

        let broken = violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        warn!(count = violations.len(), %broken, "Board left in an impossible state");
        Err(MoveError::InvariantViolation(format!(
            "Orbit invariant broken: {}",
            broken
        )))
    }
}

impl<A, B, C, D> InvariantSet for (A, B, C, D)
where
    A: Invariant,
    B: Invariant,
    C: Invariant,
    D: Invariant,
{
    fn violations(game: &GameState) -> Vec<InvariantViolation> {
        [
            (A::holds(game), A::DESCRIPTION),
            (B::holds(game), B::DESCRIPTION),
            (C::holds(game), C::DESCRIPTION),
            (D::holds(game), D::DESCRIPTION),
        ]
        .into_iter()
        .filter(|&(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation { description })
        .collect()
    }
}

/// Everything `play_at` guarantees about the state it leaves behind.
pub type OrbitInvariants = (
    PieceBalanceInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
    LastMoveInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, GameConfig, GameState, Player};

    #[test]
    fn test_empty_game_holds() {
        let game = GameState::default();
        assert!(OrbitInvariants::violations(&game).is_empty());
        assert_eq!(OrbitInvariants::check_all(&game), Ok(()));
    }

    #[test]
    fn test_holds_after_moves() {
        let game = GameState::replay(GameConfig::default(), &[(0, 0), (2, 2), (3, 0)]).unwrap();
        assert_eq!(OrbitInvariants::check_all(&game), Ok(()));
    }

    #[test]
    fn test_holds_on_larger_board() {
        let config = GameConfig::new(6, -2);
        let game = GameState::replay(config, &[(0, 0), (5, 5), (2, 3), (4, 1)]).unwrap();
        assert_eq!(OrbitInvariants::check_all(&game), Ok(()));
    }

    #[test]
    fn test_extra_piece_reports_every_broken_invariant() {
        let mut game = GameState::default();
        game.play_at(1, 1).unwrap();
        game.grid.set(0, 0, Cell::Occupied(Player::One));

        // Two pieces for one, none for two, one move recorded, board drifted.
        let violations = OrbitInvariants::violations(&game);
        assert_eq!(
            violations,
            vec![
                InvariantViolation {
                    description: PieceBalanceInvariant::DESCRIPTION
                },
                InvariantViolation {
                    description: HistoryConsistentInvariant::DESCRIPTION
                },
                InvariantViolation {
                    description: LastMoveInvariant::DESCRIPTION
                },
            ]
        );
    }

    #[test]
    fn test_check_all_names_broken_invariants() {
        let mut game = GameState::default();
        game.play_at(1, 1).unwrap();
        game.current_player = Player::One;

        let Err(MoveError::InvariantViolation(message)) = OrbitInvariants::check_all(&game) else {
            panic!("expected an invariant violation");
        };
        assert!(message.starts_with("Orbit invariant broken"), "{message}");
        assert!(message.contains(AlternatingTurnInvariant::DESCRIPTION), "{message}");
        assert!(!message.contains(PieceBalanceInvariant::DESCRIPTION), "{message}");
    }
}
