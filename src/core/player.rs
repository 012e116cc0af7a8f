//! Players and per-player data storage.
//!
//! ## Player
//!
//! A seat at the table. The color is the identity used by game logic; `id`
//! and `name` are for collaborators. Only `is_alive` changes after creation,
//! and it is always recomputed from the board by `rules::refresh_alive`.
//!
//! ## PlayerMap
//!
//! Per-seat data backed by a `Vec`, indexed by seat position.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::color::PlayerColor;

/// A player in a session.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Stable identifier, `"p0"`, `"p1"`, ...
    pub id: String,
    /// Color, unique within a session.
    pub color: PlayerColor,
    /// Derived: owns units, or has not placed yet.
    pub is_alive: bool,
    /// Display name, `"Player 1"`, `"Player 2"`, ...
    pub name: String,
}

impl Player {
    /// Create the player for seat `index` (0-based).
    #[must_use]
    pub fn seated(index: usize, color: PlayerColor) -> Self {
        Self {
            id: format!("p{index}"),
            color,
            is_alive: true,
            name: format!("Player {}", index + 1),
        }
    }

    /// Build the full roster from an ordered list of colors.
    #[must_use]
    pub fn roster(colors: &[PlayerColor]) -> Vec<Player> {
        colors
            .iter()
            .enumerate()
            .map(|(i, &color)| Player::seated(i, color))
            .collect()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.color)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ```
/// use chain_reaction::core::PlayerMap;
///
/// let mut placed: PlayerMap<u32> = PlayerMap::with_value(3, 0);
/// placed[1] += 1;
/// assert_eq!(placed[1], 1);
/// assert_eq!(placed.player_count(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the seat index.
    pub fn new(player_count: usize, factory: impl Fn(usize) -> T) -> Self {
        Self {
            data: (0..player_count).map(factory).collect(),
        }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Iterate over (seat, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.data.iter().enumerate()
    }
}

impl<T> Index<usize> for PlayerMap<T> {
    type Output = T;

    fn index(&self, seat: usize) -> &Self::Output {
        &self.data[seat]
    }
}

impl<T> IndexMut<usize> for PlayerMap<T> {
    fn index_mut(&mut self, seat: usize) -> &mut Self::Output {
        &mut self.data[seat]
    }
}
