//! Win detection.

use super::super::types::{Cell, Grid, Player};
use crate::rings::Coord;
use strum::IntoEnumIterator;
use tracing::instrument;

/// A line of N cells that wins when one player owns all of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// Row by index, top to bottom.
    Row(usize),
    /// Column by index, left to right.
    Column(usize),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// All lines of a `size` board in scan order: rows, columns, diagonal,
    /// anti-diagonal.
    pub fn all(size: usize) -> impl Iterator<Item = Line> {
        (0..size)
            .map(Line::Row)
            .chain((0..size).map(Line::Column))
            .chain([Line::Diagonal, Line::AntiDiagonal])
    }

    /// Coordinates covered by this line on a `size` board.
    pub fn coords(self, size: usize) -> impl Iterator<Item = Coord> {
        (0..size).map(move |i| match self {
            Line::Row(r) => (r, i),
            Line::Column(c) => (i, c),
            Line::Diagonal => (i, i),
            Line::AntiDiagonal => (i, size - 1 - i),
        })
    }

    fn owned_by(self, grid: &Grid, player: Player) -> bool {
        self.coords(grid.size())
            .all(|(r, c)| grid.get(r, c) == Some(Cell::Occupied(player)))
    }
}

/// Finds the first line fully owned by one player.
///
/// Rotation moves both players' pieces at once, so both may complete a line
/// on the same turn. The first line found wins: rows top to bottom, then
/// columns left to right, then the diagonal and the anti-diagonal, with
/// player one checked before player two on each line.
#[instrument(skip(grid))]
pub fn winning_line(grid: &Grid) -> Option<(Line, Player)> {
    if grid.size() == 0 {
        return None;
    }
    Line::all(grid.size()).find_map(|line| {
        Player::iter()
            .find(|player| line.owned_by(grid, *player))
            .map(|player| (line, player))
    })
}

/// Returns the winner, if any line is complete.
pub fn check_winner(grid: &Grid) -> Option<Player> {
    winning_line(grid).map(|(_, player)| player)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Grid::new(4)), None);
    }

    #[test]
    fn test_winner_bottom_row() {
        let grid: Grid = "...2\n.2..\n.2..\n1111".parse().unwrap();
        assert_eq!(winning_line(&grid), Some((Line::Row(3), Player::One)));
    }

    #[test]
    fn test_winner_column() {
        let grid: Grid = ".2..\n12..\n.2..\n12..".parse().unwrap();
        assert_eq!(winning_line(&grid), Some((Line::Column(1), Player::Two)));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let grid: Grid = "...2\n..2.\n.2..\n2...".parse().unwrap();
        assert_eq!(winning_line(&grid), Some((Line::AntiDiagonal, Player::Two)));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let grid: Grid = "111.\n....\n....\n....".parse().unwrap();
        assert_eq!(check_winner(&grid), None);
    }

    #[test]
    fn test_row_beats_later_row() {
        let grid: Grid = "....\n2222\n....\n1111".parse().unwrap();
        assert_eq!(winning_line(&grid), Some((Line::Row(1), Player::Two)));
    }

    #[test]
    fn test_column_beats_later_column() {
        let grid: Grid = "1.2.\n1.2.\n1.2.\n1.2.".parse().unwrap();
        assert_eq!(winning_line(&grid), Some((Line::Column(0), Player::One)));

        let grid: Grid = "2.1.\n2.1.\n2.1.\n2.1.".parse().unwrap();
        assert_eq!(winning_line(&grid), Some((Line::Column(0), Player::Two)));
    }

    #[test]
    fn test_diagonal_beats_anti_diagonal() {
        // On an even board the two diagonals share no cell.
        let grid: Grid = "2..1\n.21.\n.12.\n1..2".parse().unwrap();
        assert_eq!(winning_line(&grid), Some((Line::Diagonal, Player::Two)));
    }
}
