//! Core domain types for the orbiting board.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::EnumIter;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Player {
    /// First player (moves first).
    One,
    /// Second player.
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Single-character symbol used in board text.
    pub fn symbol(self) -> char {
        match self {
            Player::One => '1',
            Player::Two => '2',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player one"),
            Player::Two => write!(f, "Player two"),
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's piece.
    Occupied(Player),
}

impl Cell {
    /// Text symbol for the cell (`.`, `1` or `2`).
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(player) => player.symbol(),
        }
    }

    /// Parses a text symbol back into a cell.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '.' => Some(Cell::Empty),
            '1' => Some(Cell::Occupied(Player::One)),
            '2' => Some(Cell::Occupied(Player::Two)),
            _ => None,
        }
    }
}

/// Error building a grid from rows or text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GridParseError {
    /// No rows were supplied.
    #[display("Grid has no rows")]
    Empty,
    /// A row length differs from the number of rows.
    #[display("Row {row} has {len} cells, expected {expected}")]
    NotSquare {
        /// Offending row index.
        row: usize,
        /// Cells found in the row.
        len: usize,
        /// Cells required for a square grid.
        expected: usize,
    },
    /// A character is not a known cell symbol.
    #[display("Unknown cell symbol {symbol:?} in row {row}")]
    UnknownSymbol {
        /// Offending row index.
        row: usize,
        /// The character that failed to parse.
        symbol: char,
    },
}

/// Square N×N board stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an all-empty grid of the given side length.
    ///
    /// # Panics
    ///
    /// Panics if `size * size` overflows `usize`. Use [`Grid::try_new`] for
    /// sizes that come from outside the program.
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Some(grid) => grid,
            None => panic!("grid side length {size} overflows the cell count"),
        }
    }

    /// Creates an all-empty grid, or `None` when `size * size` overflows.
    pub fn try_new(size: usize) -> Option<Self> {
        let cells = size.checked_mul(size)?;
        Some(Self {
            size,
            cells: vec![Cell::Empty; cells],
        })
    }

    /// Builds a grid from explicit rows; every row must have one cell per row.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GridParseError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridParseError::Empty);
        }
        let mut cells = Vec::with_capacity(size * size);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != size {
                return Err(GridParseError::NotSquare {
                    row,
                    len: line.len(),
                    expected: size,
                });
            }
            cells.extend(line);
        }
        Ok(Self { size, cells })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the cell at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Sets the cell at `(row, col)`. Returns `false` when out of bounds.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Checks whether `(row, col)` lies on the board.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Checks if a cell is empty. Out-of-bounds cells are not empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks(0) panics; an empty grid has no rows anyway.
        self.cells.chunks(self.size.max(1))
    }

    /// Counts cells holding the given player's piece.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(player))
            .count()
    }

    /// Coordinates of every empty cell, row-major.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Empty)
            .map(|(i, _)| (i / self.size, i % self.size))
            .collect()
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        self.contains(row, col).then(|| row * self.size + col)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(4)
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridParseError;

    /// Parses the text produced by `Display`; blank lines and surrounding
    /// whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .map(|symbol| {
                        Cell::from_symbol(symbol)
                            .ok_or(GridParseError::UnknownSymbol { row, symbol })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Grid {
    type Error = GridParseError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<Cell>> {
    fn from(grid: Grid) -> Self {
        grid.rows().map(<[Cell]>::to_vec).collect()
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Board filled with no winning line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            _ => None,
        }
    }

    /// True once the game has been decided.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
