//! Ring decomposition of a square board.
//!
//! A board of even side length N splits into N/2 concentric rings. Each
//! ring is described as data: the ordered list of coordinates visited by a
//! clockwise walk starting at the ring's top-left corner. Rotation and win
//! detection never special-case a board size; they only consume these lists.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A board coordinate as `(row, col)`.
pub type Coord = (usize, usize);

/// Largest supported side length.
///
/// Ring tables and grids hold `size * size` entries, so sizes above this are
/// refused up front instead of overflowing an allocation.
pub const MAX_BOARD_SIZE: usize = 256;

/// Errors raised by the rotation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum RotationError {
    /// The board size has no ring decomposition.
    #[display(
        "Board size {size} is not supported (must be even, between 2 and {})",
        MAX_BOARD_SIZE
    )]
    UnsupportedSize {
        /// The rejected side length.
        size: usize,
    },
    /// A grid was handed to an engine built for another size.
    #[display("Grid of size {actual} does not match ring geometry for size {expected}")]
    SizeMismatch {
        /// Size the engine was built for.
        expected: usize,
        /// Size of the grid supplied.
        actual: usize,
    },
}

/// One concentric ring in clockwise traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RingSpec {
    depth: usize,
    coords: Vec<Coord>,
}

impl RingSpec {
    /// Builds the ring `depth` layers in from the edge of a `size` board.
    ///
    /// Walk order: top row left to right, right column downward, bottom row
    /// right to left, left column upward. Corners are visited once.
    pub(crate) fn walk(size: usize, depth: usize) -> Self {
        let lo = depth;
        let hi = size - 1 - depth;

        let top = (lo..=hi).map(|c| (lo, c));
        let right = (lo + 1..=hi).map(|r| (r, hi));
        let bottom = (lo..hi).rev().map(|c| (hi, c));
        let left = (lo + 1..hi).rev().map(|r| (r, lo));

        Self {
            depth,
            coords: top.chain(right).chain(bottom).chain(left).collect(),
        }
    }

    /// Layer index, 0 for the outermost ring.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Coordinates in traversal order.
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Number of cells in the ring.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// True for a ring with no cells (never produced by `rings_for`).
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

/// Returns the rings of a `size`×`size` board, outermost first.
///
/// The rings are disjoint and together cover every cell exactly once.
/// Odd sizes, sizes below 2 and sizes above [`MAX_BOARD_SIZE`] have no
/// decomposition.
#[instrument]
pub fn rings_for(size: usize) -> Result<Vec<RingSpec>, RotationError> {
    let fits = size <= MAX_BOARD_SIZE && size.checked_mul(size).is_some();
    if size < 2 || size % 2 != 0 || !fits {
        return Err(RotationError::UnsupportedSize { size });
    }
    Ok((0..size / 2).map(|depth| RingSpec::walk(size, depth)).collect())
}
