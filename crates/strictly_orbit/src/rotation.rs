//! Ring rotation ("orbit") of a board.
//!
//! Rotation is a pure transformation: the input grid is read, a new grid is
//! returned. The value at traversal position `i` of a ring lands on position
//! `(i + steps) mod L`, so positive steps move pieces clockwise.

use super::rings::{RingSpec, RotationError, rings_for};
use super::types::Grid;
use tracing::{instrument, trace};

/// Rotates boards of one fixed size using a precomputed ring decomposition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationEngine {
    size: usize,
    rings: Vec<RingSpec>,
}

impl RotationEngine {
    /// Builds an engine for `size`×`size` boards.
    ///
    /// # Errors
    ///
    /// Returns `RotationError::UnsupportedSize` when the size has no ring
    /// decomposition.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, RotationError> {
        let rings = rings_for(size)?;
        Ok(Self { size, rings })
    }

    /// Board size this engine handles.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The ring decomposition, outermost first.
    pub fn rings(&self) -> &[RingSpec] {
        &self.rings
    }

    /// Smallest positive step count that maps every ring onto itself.
    pub fn period(&self) -> usize {
        self.rings.iter().map(RingSpec::len).fold(1, lcm)
    }

    /// Returns a new grid with every ring rotated clockwise by `steps`.
    ///
    /// Negative steps rotate counter-clockwise. The input is never modified.
    ///
    /// # Errors
    ///
    /// Returns `RotationError::SizeMismatch` if `grid` is not the size this
    /// engine was built for.
    #[instrument(skip(self, grid), fields(size = self.size))]
    pub fn rotate(&self, grid: &Grid, steps: i64) -> Result<Grid, RotationError> {
        if grid.size() != self.size {
            return Err(RotationError::SizeMismatch {
                expected: self.size,
                actual: grid.size(),
            });
        }

        let mut rotated = grid.clone();
        for ring in &self.rings {
            rotate_ring(grid, &mut rotated, ring, steps);
        }
        Ok(rotated)
    }
}

impl Default for RotationEngine {
    /// Engine for the standard 4×4 board.
    fn default() -> Self {
        Self {
            size: 4,
            rings: (0..2).map(|depth| RingSpec::walk(4, depth)).collect(),
        }
    }
}

/// Rotates `grid` using a decomposition computed for its own size.
///
/// # Errors
///
/// Returns `RotationError::UnsupportedSize` for odd sizes or sizes below 2.
pub fn rotate(grid: &Grid, steps: i64) -> Result<Grid, RotationError> {
    RotationEngine::new(grid.size())?.rotate(grid, steps)
}

fn rotate_ring(source: &Grid, target: &mut Grid, ring: &RingSpec, steps: i64) {
    let len = ring.len();
    if len == 0 {
        return;
    }
    let shift = normalize(steps, len);
    trace!(depth = ring.depth(), len, shift, "Rotating ring");

    let coords = ring.coords();
    for (i, &(row, col)) in coords.iter().enumerate() {
        let (to_row, to_col) = coords[(i + shift) % len];
        if let Some(cell) = source.get(row, col) {
            target.set(to_row, to_col, cell);
        }
    }
}

/// Maps any step count into `[0, len)`.
fn normalize(steps: i64, len: usize) -> usize {
    // Ring lengths are bounded by the board, far below i64::MAX.
    steps.rem_euclid(len as i64) as usize
}

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 { a } else { gcd(b, a % b) }
}

fn lcm(a: usize, b: usize) -> usize {
    a / gcd(a, b) * b
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Player};

    fn one() -> Cell {
        Cell::Occupied(Player::One)
    }

    #[test]
    fn test_corner_moves_along_top_row() {
        let mut grid = Grid::new(4);
        grid.set(0, 0, one());

        let rotated = rotate(&grid, 1).unwrap();
        assert_eq!(rotated.get(0, 0), Some(Cell::Empty));
        assert_eq!(rotated.get(0, 1), Some(one()));
        assert_eq!(rotated.count(Player::One), 1);
    }

    #[test]
    fn test_outer_ring_wraps_from_left_column_to_corner() {
        let mut grid = Grid::new(4);
        grid.set(1, 0, one());

        let rotated = rotate(&grid, 1).unwrap();
        assert_eq!(rotated.get(0, 0), Some(one()));
    }

    #[test]
    fn test_center_ring_rotates_clockwise() {
        let grid: Grid = "....\n.12.\n....\n....".parse().unwrap();
        let rotated = rotate(&grid, 1).unwrap();
        assert_eq!(rotated.to_string(), "....\n..1.\n..2.\n....");
    }

    #[test]
    fn test_negative_steps_rotate_counter_clockwise() {
        let mut grid = Grid::new(4);
        grid.set(0, 1, one());

        let rotated = rotate(&grid, -1).unwrap();
        assert_eq!(rotated.get(0, 0), Some(one()));

        let wrapped = rotate(&grid, -13).unwrap();
        assert_eq!(wrapped, rotated);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let grid: Grid = "1..2\n.1..\n..2.\n2..1".parse().unwrap();
        let before = grid.clone();
        let _ = rotate(&grid, 5).unwrap();
        assert_eq!(grid, before);
    }

    #[test]
    fn test_period_is_lcm_of_ring_lengths() {
        assert_eq!(RotationEngine::new(4).unwrap().period(), 12);
        assert_eq!(RotationEngine::new(2).unwrap().period(), 4);
        // 20, 12, 4
        assert_eq!(RotationEngine::new(6).unwrap().period(), 60);
    }

    #[test]
    fn test_default_engine_is_four_by_four() {
        assert_eq!(RotationEngine::default(), RotationEngine::new(4).unwrap());
    }

    #[test]
    fn test_odd_size_rejected() {
        let grid = Grid::new(3);
        assert_eq!(
            rotate(&grid, 1),
            Err(RotationError::UnsupportedSize { size: 3 })
        );
    }

    #[test]
    fn test_size_mismatch_rejected() {
        let engine = RotationEngine::new(4).unwrap();
        assert_eq!(
            engine.rotate(&Grid::new(6), 1),
            Err(RotationError::SizeMismatch {
                expected: 4,
                actual: 6
            })
        );
    }
}
