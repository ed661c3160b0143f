//! Draw detection.

use super::super::types::{Cell, Grid};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (no empty cell).
#[instrument(skip(grid))]
pub fn is_full(grid: &Grid) -> bool {
    grid.cells().iter().all(|c| *c != Cell::Empty)
}

/// A full board with no winning line.
pub fn is_draw(grid: &Grid) -> bool {
    is_full(grid) && check_winner(grid).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Grid::new(4)));
    }

    #[test]
    fn test_partial_board_not_full() {
        let grid: Grid = "1212\n2121\n1.12\n2121".parse().unwrap();
        assert!(!is_full(&grid));
        assert!(!is_draw(&grid));
    }

    #[test]
    fn test_draw_detection() {
        let grid: Grid = "1112\n2211\n2221\n2121".parse().unwrap();
        assert!(is_full(&grid));
        assert!(is_draw(&grid));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let grid: Grid = "1111\n2212\n2122\n1221".parse().unwrap();
        assert!(is_full(&grid));
        assert!(!is_draw(&grid));
    }
}
