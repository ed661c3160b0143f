//! History consistency invariant: one piece on the board per accepted move.

use super::super::game::GameState;
use super::Invariant;

/// Invariant: History length equals number of occupied cells.
///
/// Rotation only moves pieces, so every occupied cell traces back to
/// exactly one accepted move.
pub struct HistoryConsistentInvariant;

impl Invariant for HistoryConsistentInvariant {
    const DESCRIPTION: &'static str = "History length matches number of occupied cells";

    fn holds(game: &GameState) -> bool {
        let grid = game.grid();
        let occupied = grid.cells().len() - grid.empty_cells().len();
        game.history().len() == occupied
    }
}
