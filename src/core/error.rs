//! Error types.
//!
//! Only configuration can fail. Rejected moves are reported through
//! `MoveOutcome` instead, since they never leave the session in a bad state.

use super::color::PlayerColor;

/// Invalid session configuration, caught before any board is created.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("player count must be between 2 and 8, got {got}")]
    PlayerCount { got: usize },

    #[error("board dimensions must be positive, got {rows}x{cols}")]
    EmptyBoard { rows: usize, cols: usize },

    #[error("board must be at least 2x2, got {rows}x{cols}")]
    BoardTooSmall { rows: usize, cols: usize },

    #[error("{players} players cannot fit on a {rows}x{cols} board")]
    TooManyPlayers {
        players: usize,
        rows: usize,
        cols: usize,
    },

    #[error("color {0} is assigned to more than one player")]
    DuplicateColor(PlayerColor),

    #[error("{given} colors given for {players} players")]
    TooManyColors { given: usize, players: usize },
}

/// A deserialized board that does not describe a well-formed grid.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardSnapshotError {
    #[error("board dimensions {rows}x{cols} are not usable")]
    Dimensions { rows: usize, cols: usize },

    #[error("board has {got} cells, expected {expected}")]
    CellCount { expected: usize, got: usize },

    #[error("cell {index} claims position ({row}, {col})")]
    Misplaced { index: usize, row: usize, col: usize },

    #[error("cell ({row}, {col}) breaks the count/owner invariant")]
    Ownership { row: usize, col: usize },
}

/// A color name outside the palette.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown player color: {0}")]
pub struct ParseColorError(pub String);
