//! Session configuration.
//!
//! A session is configured once, at creation, with a player count, an
//! optional explicit color assignment and the board dimensions. Validation
//! happens here so that a bad configuration never reaches move handling.

use serde::{Deserialize, Serialize};

use super::color::PlayerColor;
use super::error::ConfigError;

/// Fewest players a session accepts.
pub const MIN_PLAYERS: usize = 2;

/// Most players a session accepts (one per palette color).
pub const MAX_PLAYERS: usize = PlayerColor::PALETTE.len();

/// Reference board height.
pub const DEFAULT_ROWS: usize = 8;

/// Reference board width.
pub const DEFAULT_COLS: usize = 8;

/// Board size recommended for a player count, as `(rows, cols)`.
///
/// Every player count currently plays on a 9×6 board.
#[must_use]
pub fn recommended_board_size(_player_count: usize) -> (usize, usize) {
    (9, 6)
}

/// Configuration for a game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Number of players (2-8).
    pub player_count: usize,

    /// Explicit colors by seat. Seats without an entry get the first unused
    /// palette colors.
    pub colors: Option<Vec<PlayerColor>>,

    /// Board height (at least 2).
    pub rows: usize,

    /// Board width (at least 2).
    pub cols: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            player_count: MIN_PLAYERS,
            colors: None,
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

impl SessionConfig {
    /// Config for `player_count` players on the recommended board.
    #[must_use]
    pub fn for_players(player_count: usize) -> Self {
        let (rows, cols) = recommended_board_size(player_count);
        Self {
            player_count,
            colors: None,
            rows,
            cols,
        }
    }

    /// Set the player count.
    #[must_use]
    pub fn with_players(mut self, player_count: usize) -> Self {
        self.player_count = player_count;
        self
    }

    /// Set explicit seat colors.
    #[must_use]
    pub fn with_colors(mut self, colors: Vec<PlayerColor>) -> Self {
        self.colors = Some(colors);
        self
    }

    /// Set the board dimensions.
    #[must_use]
    pub fn with_board(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Check the configuration without building anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(ConfigError::PlayerCount {
                got: self.player_count,
            });
        }

        if self.rows < 2 || self.cols < 2 {
            return Err(ConfigError::BoardTooSmall {
                rows: self.rows,
                cols: self.cols,
            });
        }

        // every player needs an empty cell for their first placement
        if self.player_count > self.rows * self.cols {
            return Err(ConfigError::TooManyPlayers {
                players: self.player_count,
                rows: self.rows,
                cols: self.cols,
            });
        }

        if let Some(colors) = &self.colors {
            if colors.len() > self.player_count {
                return Err(ConfigError::TooManyColors {
                    given: colors.len(),
                    players: self.player_count,
                });
            }
            for (i, color) in colors.iter().enumerate() {
                if colors[..i].contains(color) {
                    return Err(ConfigError::DuplicateColor(*color));
                }
            }
        }

        Ok(())
    }

    /// Validate and produce one distinct color per seat.
    pub fn resolve_colors(&self) -> Result<Vec<PlayerColor>, ConfigError> {
        self.validate()?;

        let mut resolved = self.colors.clone().unwrap_or_default();
        let spare: Vec<PlayerColor> = PlayerColor::PALETTE
            .into_iter()
            .filter(|c| !resolved.contains(c))
            .collect();

        // validate() caps player_count at the palette size, so this always fills
        let missing = self.player_count - resolved.len();
        resolved.extend(spare.into_iter().take(missing));

        Ok(resolved)
    }
}
