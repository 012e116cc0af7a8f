//! Core value types: coordinates, colors, players, cells, the board and
//! session configuration.
//!
//! Nothing in this module knows about turns or cascades; it only describes
//! what a board looks like and how positions relate to each other.

pub mod board;
pub mod color;
pub mod config;
pub mod coord;
pub mod error;
pub mod player;

pub use board::{Board, Cell};
pub use color::PlayerColor;
pub use config::{recommended_board_size, SessionConfig, DEFAULT_COLS, DEFAULT_ROWS, MAX_PLAYERS, MIN_PLAYERS};
pub use coord::{capacity, neighbors, Coord, Neighbors};
pub use error::{BoardSnapshotError, ConfigError, ParseColorError};
pub use player::{Player, PlayerMap};
