//! Game session: validated moves, cascade driving and turn handoff.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};

use crate::cascade::{Cascade, CascadeEnd, CascadeStep, RoundReport};
use crate::core::{Board, ConfigError, Coord, Player, PlayerColor, PlayerMap, SessionConfig};
use crate::events::{CascadeEvent, EffectsSink, NullSink};
use crate::rules::{advance_turn, check_winner, is_valid_move, legal_moves, refresh_alive};

use super::state::GameState;

/// Why a move was ignored. The session is unchanged after a rejection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// A cascade is still in flight.
    Animating,
    /// The game already has a winner.
    GameOver,
    /// The coordinate is off the board.
    OutOfBounds,
    /// The cell belongs to another player.
    CellOwnedByOpponent,
}

/// How a settled move ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Explosion rounds the move caused.
    pub rounds: u32,
    /// Winning color, if the move ended the game.
    pub winner: Option<PlayerColor>,
    /// Seat to move next (unchanged when the game is over).
    pub next_player: usize,
}

/// Result of `start_move` / `make_move`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Nothing happened.
    Rejected(Rejection),
    /// The unit was placed and a cascade is in flight; call `step`.
    Cascading,
    /// The move's cascade has finished.
    Settled(Settlement),
}

impl MoveOutcome {
    /// Check if the move was accepted.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, MoveOutcome::Rejected(_))
    }
}

/// Result of a single `step`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// No cascade in flight.
    Idle,
    /// A round ran and more may follow.
    Round { round: u32, exploded: Vec<Coord> },
    /// The cascade finished and the move is settled.
    Settled(Settlement),
}

/// One game, from empty board to winner.
///
/// Moves can be made synchronously with [`GameSession::make_move`], or driven
/// one round at a time with [`GameSession::start_move`] and
/// [`GameSession::step`] when a presentation layer wants to pace the cascade.
/// Only one cascade runs at a time; moves are rejected while it does.
#[derive(Debug)]
pub struct GameSession<S = NullSink> {
    config: SessionConfig,
    colors: Vec<PlayerColor>,
    empty_board: Board,
    state: GameState,
    placements: PlayerMap<u32>,
    cascade: Option<Cascade>,
    explosion_queue: Vec<Coord>,
    sink: S,
}

impl GameSession<NullSink> {
    /// Create a session that reports to no one.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        Self::with_sink(config, NullSink)
    }
}

impl<S: EffectsSink> GameSession<S> {
    /// Create a session reporting presentation events to `sink`.
    pub fn with_sink(config: SessionConfig, sink: S) -> Result<Self, ConfigError> {
        let colors = config.resolve_colors()?;
        let empty_board = Board::new(config.rows, config.cols)?;
        let state = GameState::new(empty_board.clone(), Player::roster(&colors));

        info!(
            players = colors.len(),
            rows = config.rows,
            cols = config.cols,
            "session created"
        );

        Ok(Self {
            placements: PlayerMap::with_value(colors.len(), 0),
            config,
            colors,
            empty_board,
            state,
            cascade: None,
            explosion_queue: Vec::new(),
            sink,
        })
    }

    // === Accessors ===

    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The configuration this session was created with.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        self.state.current_player()
    }

    /// Check if a cascade is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.state.is_animating
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Cells the current player may place on. Empty while animating or
    /// after the game ends.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Coord> {
        if self.state.is_animating || self.state.is_game_over() {
            return Vec::new();
        }
        legal_moves(&self.state.board, self.current_player().color)
    }

    /// The presentation sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The presentation sink, mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    // === Explosion Queue ===

    /// Cells exploded since the queue was last cleared, round after round.
    #[must_use]
    pub fn explosion_queue(&self) -> &[Coord] {
        &self.explosion_queue
    }

    /// Forget the queued cells once they have been shown.
    pub fn clear_explosion_queue(&mut self) {
        self.explosion_queue.clear();
    }

    /// Read and clear the queued cells.
    pub fn take_explosions(&mut self) -> Vec<Coord> {
        std::mem::take(&mut self.explosion_queue)
    }

    // === Moves ===

    /// Place a unit for the current player and run its cascade to the end.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, row: usize, col: usize) -> MoveOutcome {
        match self.start_move(row, col) {
            MoveOutcome::Cascading => match self.finish_cascade() {
                Some(settlement) => MoveOutcome::Settled(settlement),
                None => MoveOutcome::Cascading,
            },
            other => other,
        }
    }

    /// Place a unit for the current player and leave its cascade in flight.
    ///
    /// Drive the cascade with [`GameSession::step`].
    #[instrument(skip(self))]
    pub fn start_move(&mut self, row: usize, col: usize) -> MoveOutcome {
        if let Err(rejection) = self.check_move(row, col) {
            debug!(?rejection, "move rejected");
            return MoveOutcome::Rejected(rejection);
        }

        let seat = self.state.current_player_index;
        let color = self.colors[seat];
        let at = Coord::new(row, col);

        self.state.board.add_unit(at, color);
        self.placements[seat] += 1;
        self.state.move_count += 1;
        self.state.is_animating = true;
        self.cascade = Some(Cascade::new(self.state.board.clone(), color));

        trace!(%at, %color, "unit placed");
        self.sink.notify(&CascadeEvent::Placed { coord: at, color });

        MoveOutcome::Cascading
    }

    /// Run one round of the in-flight cascade.
    pub fn step(&mut self) -> StepOutcome {
        let Some(cascade) = self.cascade.as_mut() else {
            return StepOutcome::Idle;
        };

        match cascade.step(&self.state.players) {
            CascadeStep::Round(report) => {
                self.state.board = cascade.board().clone();
                let winner = report.winner;
                let round = report.round;
                let exploded = self.publish_round(report);

                if winner.is_some() {
                    StepOutcome::Settled(self.settle())
                } else {
                    StepOutcome::Round { round, exploded }
                }
            }
            CascadeStep::Done(_) => StepOutcome::Settled(self.settle()),
        }
    }

    /// Run the in-flight cascade, if any, until the move settles.
    pub fn finish_cascade(&mut self) -> Option<Settlement> {
        loop {
            match self.step() {
                StepOutcome::Idle => return None,
                StepOutcome::Round { .. } => {}
                StepOutcome::Settled(settlement) => return Some(settlement),
            }
        }
    }

    /// Start a new game with the same configuration.
    ///
    /// Any in-flight cascade is dropped.
    pub fn reset(&mut self) {
        self.state = GameState::new(self.empty_board.clone(), Player::roster(&self.colors));
        self.placements = PlayerMap::with_value(self.colors.len(), 0);
        self.cascade = None;
        self.explosion_queue.clear();
        debug!("session reset");
    }

    // === Internals ===

    fn check_move(&self, row: usize, col: usize) -> Result<(), Rejection> {
        if self.state.is_animating {
            return Err(Rejection::Animating);
        }
        if self.state.is_game_over() {
            return Err(Rejection::GameOver);
        }
        if !self.state.board.in_bounds(Coord::new(row, col)) {
            return Err(Rejection::OutOfBounds);
        }
        if !is_valid_move(&self.state.board, row, col, self.current_player().color) {
            return Err(Rejection::CellOwnedByOpponent);
        }
        Ok(())
    }

    fn publish_round(&mut self, report: RoundReport) -> Vec<Coord> {
        self.explosion_queue.extend_from_slice(&report.exploded);

        self.sink.notify(&CascadeEvent::Exploded {
            round: report.round,
            cells: report.exploded.clone(),
        });

        let to = self
            .cascade
            .as_ref()
            .map_or(self.colors[self.state.current_player_index], Cascade::color);
        for capture in &report.captures {
            self.sink.notify(&CascadeEvent::Captured {
                coord: capture.coord,
                from: capture.from,
                to,
            });
        }

        report.exploded
    }

    fn settle(&mut self) -> Settlement {
        let (rounds, end) = match self.cascade.take() {
            Some(cascade) => {
                let rounds = cascade.rounds();
                let end = cascade.end();
                self.state.board = cascade.into_board();
                (rounds, end)
            }
            None => (0, None),
        };

        self.state.is_animating = false;
        refresh_alive(&mut self.state.players, &self.state.board, &self.placements);

        let winner = match end {
            Some(CascadeEnd::Won(color)) => self.state.players.iter().find(|p| p.color == color),
            _ => check_winner(&self.state.board, &self.state.players),
        }
        .cloned();

        if let Some(player) = winner {
            info!(winner = %player, moves = self.state.move_count, "game won");
            self.sink.notify(&CascadeEvent::GameWon { winner: player.color });
            let color = player.color;
            self.state.winner = Some(player);
            return Settlement {
                rounds,
                winner: Some(color),
                next_player: self.state.current_player_index,
            };
        }

        let from = self.state.current_player_index;
        let to = advance_turn(&self.state.players, from, &self.state.board);
        self.state.current_player_index = to;

        debug!(rounds, from, to, "move settled");
        self.sink.notify(&CascadeEvent::TurnPassed { from, to });

        Settlement {
            rounds,
            winner: None,
            next_player: to,
        }
    }
}
