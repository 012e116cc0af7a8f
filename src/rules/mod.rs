//! Game rules: move legality, unit tallies, win detection and turn order.
//!
//! All functions here are pure reads of a `Board` and the player roster.
//! The session calls into them; they never hold state of their own.

pub mod tally;
pub mod turn;
pub mod validator;

pub use tally::UnitTally;
pub use turn::{advance_turn, check_winner, refresh_alive};
pub use validator::{is_valid_move, legal_moves};
