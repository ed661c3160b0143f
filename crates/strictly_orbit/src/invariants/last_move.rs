//! Last move invariant: the move snapshot describes the board on display.

use super::super::game::GameState;
use super::Invariant;

/// Invariant: `last_move` is the tail of the history and its `grid_after`
/// is the current board.
///
/// The snapshot is taken after the orbit, so a board that drifted from it
/// was changed outside `play_at`.
pub struct LastMoveInvariant;

impl Invariant for LastMoveInvariant {
    const DESCRIPTION: &'static str = "Last move snapshot matches the history tail and the settled board";

    fn holds(game: &GameState) -> bool {
        match (game.last_move(), game.history().last()) {
            (None, None) => true,
            (Some(record), Some(last)) => record.action == *last && record.grid_after == *game.grid(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Player};

    #[test]
    fn test_empty_game_holds() {
        assert!(LastMoveInvariant::holds(&GameState::default()));
    }

    #[test]
    fn test_holds_after_orbit() {
        let mut game = GameState::default();
        game.play_at(0, 0).unwrap();
        game.play_at(1, 1).unwrap();
        assert!(LastMoveInvariant::holds(&game));
    }

    #[test]
    fn test_board_drift_violates() {
        let mut game = GameState::default();
        game.play_at(0, 0).unwrap();
        game.grid.set(0, 1, Cell::Empty);
        game.grid.set(0, 0, Cell::Occupied(Player::One));
        assert!(!LastMoveInvariant::holds(&game));
    }

    #[test]
    fn test_missing_snapshot_violates() {
        let mut game = GameState::default();
        game.play_at(0, 0).unwrap();
        game.last_move = None;
        assert!(!LastMoveInvariant::holds(&game));
    }
}
