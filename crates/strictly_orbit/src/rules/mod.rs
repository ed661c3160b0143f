//! Game rules for the orbiting board.
//!
//! Pure functions over a `Grid`. Rules are kept apart from the game state so
//! they can be checked on any board, including hand-built fixtures.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, check_winner, winning_line};

use super::types::{Grid, Outcome};
use tracing::{debug, instrument};

/// Evaluates a board after rotation.
///
/// A winning line takes priority over a full board; see `winning_line` for
/// the order lines are scanned in.
#[instrument(skip(grid))]
pub fn evaluate(grid: &Grid) -> Outcome {
    if let Some((line, player)) = winning_line(grid) {
        debug!(?line, %player, "Winning line found");
        Outcome::Won(player)
    } else if is_full(grid) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn test_evaluate_empty_in_progress() {
        assert_eq!(evaluate(&Grid::new(4)), Outcome::InProgress);
    }

    #[test]
    fn test_evaluate_win_beats_full_board() {
        let grid: Grid = "1111\n2212\n2122\n1221".parse().unwrap();
        assert_eq!(evaluate(&grid), Outcome::Won(Player::One));
    }

    #[test]
    fn test_evaluate_full_board_draw() {
        let grid: Grid = "1112\n2211\n2221\n2121".parse().unwrap();
        assert_eq!(evaluate(&grid), Outcome::Draw);
    }
}
