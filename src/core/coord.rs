//! Grid coordinates and the position rules derived from them.
//!
//! ## Capacity
//!
//! A cell's capacity is the number of orthogonal in-bounds neighbors:
//! 2 in a corner, 3 on an edge, 4 in the interior. Everything here is a
//! pure function of the position and the board dimensions, so nothing is
//! cached across boards of different sizes.
//!
//! ## Neighbor Order
//!
//! Neighbors are always listed up, down, left, right. The final state of a
//! round does not depend on this order, but events and tests do.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Up to four orthogonal neighbors, stored inline.
pub type Neighbors = SmallVec<[Coord; 4]>;

/// A cell position on the board (0-based, row-major).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Flat row-major index on a board with `cols` columns.
    #[must_use]
    pub const fn index(self, cols: usize) -> usize {
        self.row * cols + self.col
    }

    /// Inverse of [`Coord::index`].
    ///
    /// ```
    /// use chain_reaction::core::Coord;
    ///
    /// let c = Coord::new(2, 5);
    /// assert_eq!(Coord::from_index(c.index(6), 6), c);
    /// ```
    #[must_use]
    pub const fn from_index(index: usize, cols: usize) -> Self {
        Self {
            row: index / cols,
            col: index % cols,
        }
    }

    /// Check whether this coordinate lies on a `rows × cols` board.
    #[must_use]
    pub const fn in_bounds(self, rows: usize, cols: usize) -> bool {
        self.row < rows && self.col < cols
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Number of units at which the cell at `(row, col)` explodes.
///
/// Equal to the count of orthogonal in-bounds neighbors.
///
/// ```
/// use chain_reaction::core::capacity;
///
/// assert_eq!(capacity(0, 0, 8, 8), 2); // corner
/// assert_eq!(capacity(0, 3, 8, 8), 3); // edge
/// assert_eq!(capacity(4, 4, 8, 8), 4); // interior
/// ```
#[must_use]
pub fn capacity(row: usize, col: usize, rows: usize, cols: usize) -> u32 {
    let mut n = 4;
    if row == 0 {
        n -= 1;
    }
    if row + 1 >= rows {
        n -= 1;
    }
    if col == 0 {
        n -= 1;
    }
    if col + 1 >= cols {
        n -= 1;
    }
    n
}

/// Orthogonal in-bounds neighbors of `(row, col)`, ordered up, down, left, right.
#[must_use]
pub fn neighbors(row: usize, col: usize, rows: usize, cols: usize) -> Neighbors {
    let mut out = Neighbors::new();
    if row > 0 {
        out.push(Coord::new(row - 1, col));
    }
    if row + 1 < rows {
        out.push(Coord::new(row + 1, col));
    }
    if col > 0 {
        out.push(Coord::new(row, col - 1));
    }
    if col + 1 < cols {
        out.push(Coord::new(row, col + 1));
    }
    out
}
