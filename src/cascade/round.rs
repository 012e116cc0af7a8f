//! A single explosion round.
//!
//! [`apply_round`] is a pure function: it reads one board snapshot and
//! produces the next one. Every cell at or over capacity in the snapshot
//! explodes at once; units landing on a cell during the round never make it
//! explode in the same round, they are picked up by the next one.
//!
//! ## Per-Exploding Cell
//!
//! - its count drops by exactly one capacity (any excess stays on the cell
//!   and is re-evaluated next round)
//! - each orthogonal neighbor gains one unit and is taken by the acting color
//!
//! Cells left with zero units lose their owner once all writes are done, so
//! the result does not depend on the order explosions are applied in.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Coord, PlayerColor};

/// A cell that changed hands during a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    pub coord: Coord,
    /// Owner in the pre-round snapshot; `None` for a neutral cell.
    pub from: Option<PlayerColor>,
}

/// Outcome of [`apply_round`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundResult {
    /// The post-round board (equal to the input when stabilized).
    pub board: Board,
    /// Cells that exploded this round, in row-major order.
    pub exploded: Vec<Coord>,
    /// Cells taken from another owner, in order of first capture.
    pub captures: Vec<Capture>,
    /// True if nothing was at capacity, so nothing happened.
    pub stabilized: bool,
}

/// Run one synchronous round of explosions on behalf of `color`.
///
/// The input board is not modified.
#[must_use]
pub fn apply_round(snapshot: &Board, color: PlayerColor) -> RoundResult {
    let exploded = snapshot.unstable_cells();
    if exploded.is_empty() {
        return RoundResult {
            board: snapshot.clone(),
            exploded,
            captures: Vec::new(),
            stabilized: true,
        };
    }

    let mut next = snapshot.clone();
    let mut captures: Vec<Capture> = Vec::new();
    let mut touched: Vec<Coord> = Vec::with_capacity(exploded.len() * 5);

    for &at in &exploded {
        next.remove_units(at, snapshot.capacity(at));
        touched.push(at);

        for n in snapshot.neighbors(at) {
            next.add_unit(n, color);
            touched.push(n);

            let before = snapshot.get(n).and_then(|c| c.owner);
            if before != Some(color) && !captures.iter().any(|c| c.coord == n) {
                captures.push(Capture { coord: n, from: before });
            }
        }
    }

    for at in touched {
        next.normalize_cell(at);
    }

    RoundResult {
        board: next,
        exploded,
        captures,
        stabilized: false,
    }
}
