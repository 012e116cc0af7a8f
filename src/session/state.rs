//! Game state snapshot.
//!
//! `GameState` is what collaborators render: the board, the roster, whose
//! turn it is, and how the game ended. It is only mutated by `GameSession`.
//!
//! ## Invariants
//!
//! - the game is over exactly when `winner` is set
//! - once everyone has placed, `current_player_index` names a player who
//!   owns units (see `rules::advance_turn` for the opening-phase policy)

use serde::{Deserialize, Serialize};

use crate::core::{Board, Player};

/// Complete observable state of one game.
///
/// There is no separate game-over field: `winner` is the flag, and a
/// serialized snapshot of a finished game carries the winning player there.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The grid.
    pub board: Board,

    /// Players in seating order.
    pub players: Vec<Player>,

    /// Seat of the player to move (or moving, during a cascade).
    pub current_player_index: usize,

    /// Set once a single color holds every unit; `Some` means game over.
    pub winner: Option<Player>,

    /// True while a cascade is in flight; moves are rejected meanwhile.
    pub is_animating: bool,

    /// Accepted placements since the game started.
    pub move_count: u32,
}

impl GameState {
    /// Fresh state: empty board, full roster, seat 0 to move.
    #[must_use]
    pub fn new(board: Board, players: Vec<Player>) -> Self {
        Self {
            board,
            players,
            current_player_index: 0,
            winner: None,
            is_animating: false,
            move_count: 0,
        }
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    /// Players still in the game.
    pub fn alive_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_alive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerColor;

    fn fresh(n: usize) -> GameState {
        GameState::new(
            Board::new(9, 6).unwrap(),
            Player::roster(&PlayerColor::PALETTE[..n]),
        )
    }

    #[test]
    fn test_new_state() {
        let state = fresh(3);

        assert_eq!(state.player_count(), 3);
        assert_eq!(state.current_player_index, 0);
        assert_eq!(state.current_player().color, PlayerColor::Red);
        assert!(!state.is_game_over());
        assert!(!state.is_animating);
        assert_eq!(state.move_count, 0);
        assert_eq!(state.alive_players().count(), 3);
    }

    #[test]
    fn test_game_over_follows_winner() {
        let mut state = fresh(2);
        state.winner = Some(state.players[1].clone());
        assert!(state.is_game_over());
    }

    #[test]
    fn test_finished_snapshot_carries_winner() {
        let mut state = fresh(2);
        let open: serde_json::Value = serde_json::to_value(&state).unwrap();
        assert!(open["winner"].is_null());

        state.winner = Some(state.players[0].clone());
        let done: serde_json::Value = serde_json::to_value(&state).unwrap();
        assert_eq!(done["winner"]["color"], "red");
        assert_eq!(done["winner"]["id"], "p0");
    }

    #[test]
    fn test_serialization() {
        let state = fresh(2);
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
