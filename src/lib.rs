//! # chain-reaction
//!
//! Deterministic rules engine for the chain-reaction grid capture game.
//!
//! Players take turns placing a unit on an empty cell or one they own. A cell
//! whose unit count reaches its capacity (the number of orthogonal neighbors)
//! explodes: it gives one unit to each neighbor and converts them to the
//! exploding player's color, which may push those neighbors over capacity in
//! turn. The last color left on the board wins.
//!
//! ## Design Principles
//!
//! 1. **Headless**: No rendering, input or timing. Presentation layers pace
//!    cascades themselves by stepping rounds and listening for events.
//!
//! 2. **Pure rounds**: A round is computed from one board snapshot into a new
//!    board. Boards are persistent (`im-rs`), so snapshots are O(1).
//!
//! 3. **One source of truth for elimination**: Winner, turn skipping and
//!    `is_alive` all derive from the same unit tally.
//!
//! ## Modules
//!
//! - `core`: Coordinates, colors, players, cells, board, configuration
//! - `rules`: Move legality, unit tallies, win detection, turn order
//! - `cascade`: Explosion rounds and the stepwise cascade driver
//! - `events`: Presentation events and the `EffectsSink` port
//! - `session`: `GameSession` and the `GameState` snapshot

pub mod cascade;
pub mod core;
pub mod events;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    capacity, neighbors, Board, Cell, ConfigError, Coord, Player, PlayerColor, SessionConfig,
};

pub use crate::rules::{advance_turn, check_winner, is_valid_move, legal_moves, UnitTally};

pub use crate::cascade::{apply_round, Cascade, CascadeEnd, CascadeStep, RoundReport, RoundResult};

pub use crate::events::{CascadeEvent, EffectsSink, NullSink, RecordingSink};

pub use crate::session::{GameSession, GameState, MoveOutcome, Rejection, Settlement, StepOutcome};
