//! Piece balance invariant: player one leads by at most one piece.

use super::super::game::GameState;
use super::super::types::Player;
use super::Invariant;

/// Invariant: Player one has the same number of pieces as player two, or
/// exactly one more.
pub struct PieceBalanceInvariant;

impl Invariant for PieceBalanceInvariant {
    const DESCRIPTION: &'static str = "Player one has as many pieces as player two, or one more";

    fn holds(game: &GameState) -> bool {
        let ones = game.grid().count(Player::One);
        let twos = game.grid().count(Player::Two);
        ones == twos || ones == twos + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_empty_game_holds() {
        assert!(PieceBalanceInvariant::holds(&GameState::default()));
    }

    #[test]
    fn test_holds_through_turns() {
        let mut game = GameState::default();
        game.play_at(0, 0).unwrap();
        assert!(PieceBalanceInvariant::holds(&game));
        game.play_at(2, 2).unwrap();
        assert!(PieceBalanceInvariant::holds(&game));
    }

    #[test]
    fn test_two_ahead_violates() {
        let mut game = GameState::default();
        game.grid.set(0, 0, Cell::Occupied(Player::Two));
        assert!(!PieceBalanceInvariant::holds(&game));
    }
}
