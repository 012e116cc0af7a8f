//! Unit tallies.
//!
//! Every question about who is still in the game (win detection, turn
//! skipping, `is_alive`) is answered from a single [`UnitTally`] so the
//! elimination logic cannot drift between call sites.

use rustc_hash::FxHashMap;

use crate::core::{Board, PlayerColor};

/// Units on the board, in total and per owning color.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnitTally {
    total: u32,
    by_color: FxHashMap<PlayerColor, u32>,
}

impl UnitTally {
    /// Count every owned unit on the board.
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        let mut tally = Self::default();
        for cell in board.iter() {
            if let Some(owner) = cell.owner {
                *tally.by_color.entry(owner).or_insert(0) += cell.count;
                tally.total += cell.count;
            }
        }
        tally
    }

    /// Total units on the board.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Units owned by `color`.
    #[must_use]
    pub fn units(&self, color: PlayerColor) -> u32 {
        self.by_color.get(&color).copied().unwrap_or(0)
    }

    /// Check whether `color` owns at least one unit.
    #[must_use]
    pub fn holds_units(&self, color: PlayerColor) -> bool {
        self.units(color) > 0
    }

    /// Number of distinct colors owning units.
    #[must_use]
    pub fn colors_present(&self) -> usize {
        self.by_color.values().filter(|&&n| n > 0).count()
    }
}
