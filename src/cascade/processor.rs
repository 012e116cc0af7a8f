//! Stepwise cascade driver.
//!
//! A [`Cascade`] owns the board for the duration of one move's chain
//! reaction and advances it one round per [`Cascade::step`]. Timing between
//! rounds belongs to the caller; stepping in a tight loop gives the same
//! final board as stepping once per animation frame.
//!
//! ## Termination
//!
//! The cascade ends when the board is stable, or right after a round that
//! leaves a single color holding every unit. Stopping on a winner is what
//! guarantees termination: a board owned by one color can hold more units
//! than it can ever stabilize with.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{Board, Coord, Player, PlayerColor};
use crate::rules::turn::winner_from_tally;
use crate::rules::UnitTally;

use super::round::{apply_round, Capture};

/// What one round did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundReport {
    /// Round number within this cascade, starting at 1.
    pub round: u32,
    /// Cells that exploded, row-major.
    pub exploded: Vec<Coord>,
    /// Cells taken from another owner.
    pub captures: Vec<Capture>,
    /// Set when this round ended the game.
    pub winner: Option<PlayerColor>,
}

/// Why a cascade stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CascadeEnd {
    /// No cell is at capacity.
    Stabilized,
    /// A round left only this color on the board.
    Won(PlayerColor),
}

/// Result of a single [`Cascade::step`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CascadeStep {
    /// A round ran. Check `report.winner` to see whether it was the last one.
    Round(RoundReport),
    /// Nothing left to run.
    Done(CascadeEnd),
}

/// An in-flight chain reaction for one move.
#[derive(Clone, Debug)]
pub struct Cascade {
    board: Board,
    color: PlayerColor,
    rounds: u32,
    end: Option<CascadeEnd>,
}

impl Cascade {
    /// Start a cascade on a board where `color` has just placed a unit.
    #[must_use]
    pub fn new(board: Board, color: PlayerColor) -> Self {
        Self {
            board,
            color,
            rounds: 0,
            end: None,
        }
    }

    /// Current board (post-round after each step).
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consume the cascade, returning its board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// The acting color.
    #[must_use]
    pub fn color(&self) -> PlayerColor {
        self.color
    }

    /// Rounds run so far.
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// How the cascade ended, once it has.
    #[must_use]
    pub fn end(&self) -> Option<CascadeEnd> {
        self.end
    }

    /// Check if there is nothing left to run.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.end.is_some()
    }

    /// Run one round. `players` is the roster used for the win check.
    pub fn step(&mut self, players: &[Player]) -> CascadeStep {
        if let Some(end) = self.end {
            return CascadeStep::Done(end);
        }

        let result = apply_round(&self.board, self.color);
        if result.stabilized {
            debug!(rounds = self.rounds, "cascade stabilized");
            self.end = Some(CascadeEnd::Stabilized);
            return CascadeStep::Done(CascadeEnd::Stabilized);
        }

        self.rounds += 1;
        self.board = result.board;
        trace!(
            round = self.rounds,
            exploded = result.exploded.len(),
            captured = result.captures.len(),
            "round applied"
        );

        let tally = UnitTally::from_board(&self.board);
        let winner = winner_from_tally(&tally, players).map(|p| p.color);
        if let Some(color) = winner {
            debug!(round = self.rounds, winner = %color, "cascade ended the game");
            self.end = Some(CascadeEnd::Won(color));
        }

        CascadeStep::Round(RoundReport {
            round: self.rounds,
            exploded: result.exploded,
            captures: result.captures,
            winner,
        })
    }

    /// Step until finished, returning every round's report.
    pub fn run(&mut self, players: &[Player]) -> Vec<RoundReport> {
        let mut reports = Vec::new();
        while let CascadeStep::Round(report) = self.step(players) {
            reports.push(report);
        }
        reports
    }
}
