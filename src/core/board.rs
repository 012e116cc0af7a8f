//! The board: a fixed `rows × cols` grid of cells.
//!
//! Cells are stored row-major in an `im::Vector`, so cloning a board is O(1)
//! and the cascade can keep the pre-round snapshot alive while it writes the
//! next one.
//!
//! ## Invariant
//!
//! `count == 0` if and only if `owner == None`. Only the cascade and accepted
//! placements mutate cells, and both go through [`Board::normalize_cell`].

use im::Vector;
use serde::{Deserialize, Serialize};

use super::color::PlayerColor;
use super::coord::{capacity, neighbors, Coord, Neighbors};
use super::error::{BoardSnapshotError, ConfigError};

/// A single grid position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    /// Units currently on the cell.
    pub count: u32,
    /// Owning color, `None` exactly when `count == 0`.
    pub owner: Option<PlayerColor>,
}

impl Cell {
    /// An empty, unowned cell.
    #[must_use]
    pub const fn empty(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            count: 0,
            owner: None,
        }
    }

    /// Position of this cell.
    #[must_use]
    pub const fn coord(&self) -> Coord {
        Coord::new(self.row, self.col)
    }

    /// Check if the cell holds no units.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Rectangular grid of cells with fixed dimensions.
///
/// Deserialization checks the snapshot's shape and the ownership invariant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vector<Cell>,
}

/// Wire shape of a [`Board`], before validation.
#[derive(Deserialize)]
struct RawBoard {
    rows: usize,
    cols: usize,
    cells: Vector<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardSnapshotError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let RawBoard { rows, cols, cells } = raw;

        let expected = match rows.checked_mul(cols) {
            Some(n) if n > 0 => n,
            _ => return Err(BoardSnapshotError::Dimensions { rows, cols }),
        };
        if cells.len() != expected {
            return Err(BoardSnapshotError::CellCount {
                expected,
                got: cells.len(),
            });
        }

        for (index, cell) in cells.iter().enumerate() {
            if cell.coord() != Coord::from_index(index, cols) {
                return Err(BoardSnapshotError::Misplaced {
                    index,
                    row: cell.row,
                    col: cell.col,
                });
            }
            if cell.is_empty() != cell.owner.is_none() {
                return Err(BoardSnapshotError::Ownership {
                    row: cell.row,
                    col: cell.col,
                });
            }
        }

        Ok(Self { rows, cols, cells })
    }
}

impl Board {
    /// Create an empty board.
    ///
    /// Fails only when a dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyBoard { rows, cols });
        }

        let cells = (0..rows * cols)
            .map(|i| {
                let c = Coord::from_index(i, cols);
                Cell::empty(c.row, c.col)
            })
            .collect();

        Ok(Self { rows, cols, cells })
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; boards have at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check whether `coord` lies on this board.
    #[must_use]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.in_bounds(self.rows, self.cols)
    }

    /// Get a cell, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        if self.in_bounds(coord) {
            self.cells.get(coord.index(self.cols))
        } else {
            None
        }
    }

    /// Get a cell by row and column.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is off the board.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) is off a {}x{} board",
            self.rows,
            self.cols
        );
        &self.cells[row * self.cols + col]
    }

    /// Capacity of the cell at `coord` on this board.
    #[must_use]
    pub fn capacity(&self, coord: Coord) -> u32 {
        capacity(coord.row, coord.col, self.rows, self.cols)
    }

    /// Orthogonal neighbors of `coord` on this board (up, down, left, right).
    #[must_use]
    pub fn neighbors(&self, coord: Coord) -> Neighbors {
        neighbors(coord.row, coord.col, self.rows, self.cols)
    }

    /// Iterate over cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Sum of units on every cell.
    #[must_use]
    pub fn total_units(&self) -> u32 {
        self.cells.iter().map(|c| c.count).sum()
    }

    /// Cells whose count has reached capacity, in row-major order.
    #[must_use]
    pub fn unstable_cells(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .filter(|c| c.count >= self.capacity(c.coord()))
            .map(Cell::coord)
            .collect()
    }

    /// Check if no cell has reached capacity.
    #[must_use]
    pub fn is_stable(&self) -> bool {
        self.cells
            .iter()
            .all(|c| c.count < self.capacity(c.coord()))
    }

    /// Check the `count == 0 ⟺ owner == None` invariant on every cell.
    #[must_use]
    pub fn ownership_consistent(&self) -> bool {
        self.cells
            .iter()
            .all(|c| c.is_empty() == c.owner.is_none())
    }

    // === Mutation (crate-internal) ===

    /// Add one unit of `color` to the cell and take ownership of it.
    ///
    /// Returns the previous owner.
    pub(crate) fn add_unit(&mut self, coord: Coord, color: PlayerColor) -> Option<PlayerColor> {
        let idx = coord.index(self.cols);
        let cell = &mut self.cells[idx];
        let previous = cell.owner;
        cell.count += 1;
        cell.owner = Some(color);
        previous
    }

    /// Remove `amount` units from the cell, saturating at zero.
    pub(crate) fn remove_units(&mut self, coord: Coord, amount: u32) {
        let idx = coord.index(self.cols);
        let cell = &mut self.cells[idx];
        cell.count = cell.count.saturating_sub(amount);
    }

    /// Clear ownership of the cell if it is empty.
    pub(crate) fn normalize_cell(&mut self, coord: Coord) {
        let idx = coord.index(self.cols);
        let cell = &mut self.cells[idx];
        if cell.is_empty() {
            cell.owner = None;
        }
    }

    /// Overwrite a cell. Used by tests and scenario setup.
    ///
    /// Ownership is normalized: a zero count always clears the owner, and a
    /// positive count with no owner is rejected by returning `false`.
    pub fn set_cell(&mut self, coord: Coord, count: u32, owner: Option<PlayerColor>) -> bool {
        if !self.in_bounds(coord) || (count > 0 && owner.is_none()) {
            return false;
        }
        let idx = coord.index(self.cols);
        let cell = &mut self.cells[idx];
        cell.count = count;
        cell.owner = if count == 0 { None } else { owner };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(9, 6).unwrap();

        assert_eq!(board.rows(), 9);
        assert_eq!(board.cols(), 6);
        assert_eq!(board.len(), 54);
        assert_eq!(board.total_units(), 0);
        assert!(board.is_stable());
        assert!(board.ownership_consistent());

        for cell in board.iter() {
            assert_eq!(cell.count, 0);
            assert_eq!(cell.owner, None);
        }
    }

    #[test]
    fn test_cells_know_their_position() {
        let board = Board::new(3, 4).unwrap();
        let cell = board.cell(2, 1);
        assert_eq!((cell.row, cell.col), (2, 1));
        assert_eq!(board.get(Coord::new(2, 1)), Some(cell));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert_eq!(
            Board::new(0, 5),
            Err(ConfigError::EmptyBoard { rows: 0, cols: 5 })
        );
        assert!(Board::new(4, 0).is_err());
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::new(2, 2).unwrap();
        assert!(board.get(Coord::new(2, 0)).is_none());
        assert!(board.get(Coord::new(0, 2)).is_none());
    }

    #[test]
    #[should_panic(expected = "off a 2x2 board")]
    fn test_cell_out_of_bounds_panics() {
        let board = Board::new(2, 2).unwrap();
        let _ = board.cell(5, 0);
    }

    #[test]
    fn test_add_unit_takes_ownership() {
        let mut board = Board::new(4, 4).unwrap();
        let at = Coord::new(1, 1);

        assert_eq!(board.add_unit(at, PlayerColor::Red), None);
        assert_eq!(board.add_unit(at, PlayerColor::Blue), Some(PlayerColor::Red));

        let cell = board.cell(1, 1);
        assert_eq!(cell.count, 2);
        assert_eq!(cell.owner, Some(PlayerColor::Blue));
    }

    #[test]
    fn test_unstable_cells_row_major() {
        let mut board = Board::new(3, 3).unwrap();
        board.set_cell(Coord::new(2, 2), 2, Some(PlayerColor::Red));
        board.set_cell(Coord::new(0, 0), 2, Some(PlayerColor::Red));
        board.set_cell(Coord::new(1, 1), 3, Some(PlayerColor::Red));

        assert_eq!(
            board.unstable_cells(),
            vec![Coord::new(0, 0), Coord::new(2, 2)]
        );
        assert!(!board.is_stable());
    }

    #[test]
    fn test_set_cell_normalizes() {
        let mut board = Board::new(3, 3).unwrap();
        assert!(board.set_cell(Coord::new(0, 0), 0, Some(PlayerColor::Red)));
        assert_eq!(board.cell(0, 0).owner, None);

        assert!(!board.set_cell(Coord::new(0, 0), 2, None));
        assert!(!board.set_cell(Coord::new(3, 0), 1, Some(PlayerColor::Red)));
        assert!(board.ownership_consistent());
    }

    #[test]
    fn test_remove_and_normalize() {
        let mut board = Board::new(3, 3).unwrap();
        let at = Coord::new(0, 0);
        board.set_cell(at, 2, Some(PlayerColor::Green));

        board.remove_units(at, 2);
        assert_eq!(board.cell(0, 0).count, 0);
        assert_eq!(board.cell(0, 0).owner, Some(PlayerColor::Green));

        board.normalize_cell(at);
        assert_eq!(board.cell(0, 0).owner, None);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut a = Board::new(3, 3).unwrap();
        let snapshot = a.clone();
        a.add_unit(Coord::new(1, 1), PlayerColor::Red);

        assert_eq!(snapshot.total_units(), 0);
        assert_eq!(a.total_units(), 1);
    }

    #[test]
    fn test_serialization() {
        let mut board = Board::new(2, 2).unwrap();
        board.add_unit(Coord::new(0, 1), PlayerColor::Cyan);

        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, back);
    }

    #[test]
    fn test_malformed_snapshots_rejected() {
        let empty = r#"{"row":0,"col":0,"count":0,"owner":null}"#;

        let short = format!(r#"{{"rows":2,"cols":2,"cells":[{empty}]}}"#);
        let err = serde_json::from_str::<Board>(&short).unwrap_err();
        assert!(err.to_string().contains("board has 1 cells, expected 4"));

        let zero = r#"{"rows":0,"cols":3,"cells":[]}"#;
        assert!(serde_json::from_str::<Board>(zero).is_err());

        let misplaced = format!(r#"{{"rows":1,"cols":2,"cells":[{empty},{empty}]}}"#);
        let err = serde_json::from_str::<Board>(&misplaced).unwrap_err();
        assert!(err.to_string().contains("cell 1 claims position (0, 0)"));

        let ownerless = r#"{"rows":1,"cols":2,"cells":[
            {"row":0,"col":0,"count":2,"owner":null},
            {"row":0,"col":1,"count":0,"owner":null}]}"#;
        let err = serde_json::from_str::<Board>(ownerless).unwrap_err();
        assert!(err.to_string().contains("count/owner invariant"));
    }

    #[test]
    fn test_snapshot_error_from_try_from() {
        let raw = RawBoard {
            rows: 3,
            cols: 3,
            cells: Board::new(2, 2).unwrap().cells,
        };
        assert_eq!(
            Board::try_from(raw),
            Err(BoardSnapshotError::CellCount { expected: 9, got: 4 })
        );
    }
}
