//! Game sessions.
//!
//! A [`GameSession`] composes the board, the rules and the cascade driver
//! into one game. It accepts move intents, runs their cascades, hands the
//! turn on and publishes a [`GameState`] snapshot plus the cells exploding
//! in the latest round.
//!
//! ## Example
//!
//! ```
//! use chain_reaction::core::{PlayerColor, SessionConfig};
//! use chain_reaction::session::{GameSession, MoveOutcome};
//!
//! let mut session = GameSession::new(SessionConfig::default()).unwrap();
//!
//! assert!(session.make_move(0, 0).is_accepted());
//! assert_eq!(session.current_player().color, PlayerColor::Blue);
//!
//! // Red owns (0, 0) now
//! assert!(matches!(session.make_move(0, 0), MoveOutcome::Rejected(_)));
//! ```

mod game;
mod state;

pub use game::{GameSession, MoveOutcome, Rejection, Settlement, StepOutcome};
pub use state::GameState;
