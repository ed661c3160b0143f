//! Alternating turn invariant: players alternate one, two, one, two, ...

use super::super::game::GameState;
use super::super::types::Player;
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show one, two, one, ... starting with player one.
/// While the game runs, the player to move is the one after the last move;
/// once decided, the player to move stays on whoever made the final move.
pub struct AlternatingTurnInvariant;

impl Invariant for AlternatingTurnInvariant {
    const DESCRIPTION: &'static str = "Players alternate turns (one, two, one, ...)";

    fn holds(game: &GameState) -> bool {
        let history = game.history();

        if history.first().is_some_and(|m| m.player != Player::One) {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        match history.last() {
            None => game.current_player() == Player::One,
            Some(last) if game.outcome().is_terminal() => game.current_player() == last.player,
            Some(last) => game.current_player() == last.player.opponent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameConfig;

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::default()));
    }

    #[test]
    fn test_single_move_holds() {
        let mut game = GameState::default();
        game.play_at(3, 3).unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.current_player(), Player::Two);
    }

    #[test]
    fn test_finished_game_holds() {
        let moves = [(1, 0), (3, 0), (0, 3), (1, 1), (3, 3), (1, 2), (3, 3)];
        let game = GameState::replay(GameConfig::default(), &moves).unwrap();
        assert!(game.outcome().is_terminal());
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_player_to_move_violates() {
        let mut game = GameState::default();
        game.play_at(3, 3).unwrap();
        game.current_player = Player::One;
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
