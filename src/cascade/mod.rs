//! Chain-reaction processing.
//!
//! - [`apply_round`]: one pure, synchronous wave of explosions
//! - [`Cascade`]: drives rounds until the board stabilizes or a winner appears
//!
//! ## Example
//!
//! ```
//! use chain_reaction::cascade::{Cascade, CascadeEnd};
//! use chain_reaction::core::{Board, Coord, Player, PlayerColor};
//!
//! let players = Player::roster(&[PlayerColor::Red, PlayerColor::Blue]);
//!
//! let mut board = Board::new(8, 8).unwrap();
//! board.set_cell(Coord::new(0, 0), 2, Some(PlayerColor::Red));
//! board.set_cell(Coord::new(5, 5), 1, Some(PlayerColor::Blue));
//!
//! let mut cascade = Cascade::new(board, PlayerColor::Red);
//! let rounds = cascade.run(&players);
//!
//! assert_eq!(rounds.len(), 1);
//! assert_eq!(cascade.end(), Some(CascadeEnd::Stabilized));
//! assert_eq!(cascade.board().cell(0, 1).owner, Some(PlayerColor::Red));
//! ```

mod processor;
mod round;

pub use processor::{Cascade, CascadeEnd, CascadeStep, RoundReport};
pub use round::{apply_round, Capture, RoundResult};
