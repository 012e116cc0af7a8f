//! Player colors.
//!
//! A color is both a player's identity in game logic and the ownership tag
//! stored on cells. The palette is fixed at eight colors, so at most eight
//! players can share a board.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseColorError;

/// One of the eight palette colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
    Pink,
    Cyan,
}

impl PlayerColor {
    /// The full palette, in default seating order.
    pub const PALETTE: [PlayerColor; 8] = [
        PlayerColor::Red,
        PlayerColor::Blue,
        PlayerColor::Green,
        PlayerColor::Yellow,
        PlayerColor::Purple,
        PlayerColor::Orange,
        PlayerColor::Pink,
        PlayerColor::Cyan,
    ];

    /// Lowercase name of the color.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PlayerColor::Red => "red",
            PlayerColor::Blue => "blue",
            PlayerColor::Green => "green",
            PlayerColor::Yellow => "yellow",
            PlayerColor::Purple => "purple",
            PlayerColor::Orange => "orange",
            PlayerColor::Pink => "pink",
            PlayerColor::Cyan => "cyan",
        }
    }
}

impl std::fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlayerColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::PALETTE
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}
