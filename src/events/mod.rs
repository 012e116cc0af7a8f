//! Presentation events.
//!
//! The engine reports what happened during a move to an [`EffectsSink`]
//! owned by whoever drives the session (a renderer, a sound player, a test).
//! The engine never constructs or reaches for one itself; sessions default
//! to [`NullSink`].
//!
//! Events for one move arrive in order: `Placed`, then for each round an
//! `Exploded` followed by that round's `Captured` events, then either
//! `GameWon` or `TurnPassed`.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, PlayerColor};

/// Something a presentation layer may want to animate or play a sound for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CascadeEvent {
    /// A move's unit was placed.
    Placed { coord: Coord, color: PlayerColor },

    /// A round of explosions. `round` starts at 1 for each move.
    Exploded { round: u32, cells: Vec<Coord> },

    /// A unit landed on a cell previously owned by someone else (or nobody).
    Captured {
        coord: Coord,
        from: Option<PlayerColor>,
        to: PlayerColor,
    },

    /// The settled move handed the turn from one seat to another.
    TurnPassed { from: usize, to: usize },

    /// A single color holds every unit on the board.
    GameWon { winner: PlayerColor },
}

/// Receiver for presentation events.
///
/// Implementations must not assume any timing between events; a headless
/// session delivers a whole cascade in one call to `make_move`.
pub trait EffectsSink {
    /// Called once per event, in order.
    fn notify(&mut self, event: &CascadeEvent);
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EffectsSink for NullSink {
    fn notify(&mut self, _event: &CascadeEvent) {}
}

/// Keeps every event it receives.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    events: Vec<CascadeEvent>,
}

impl RecordingSink {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far.
    #[must_use]
    pub fn events(&self) -> &[CascadeEvent] {
        &self.events
    }

    /// Take all recorded events, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<CascadeEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EffectsSink for RecordingSink {
    fn notify(&mut self, event: &CascadeEvent) {
        self.events.push(event.clone());
    }
}

impl<S: EffectsSink + ?Sized> EffectsSink for &mut S {
    fn notify(&mut self, event: &CascadeEvent) {
        (**self).notify(event);
    }
}

impl<S: EffectsSink + ?Sized> EffectsSink for Box<S> {
    fn notify(&mut self, event: &CascadeEvent) {
        (**self).notify(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink() {
        let mut sink = RecordingSink::new();
        sink.notify(&CascadeEvent::Placed {
            coord: Coord::new(0, 0),
            color: PlayerColor::Red,
        });
        sink.notify(&CascadeEvent::Exploded {
            round: 1,
            cells: vec![Coord::new(0, 0)],
        });

        assert_eq!(sink.events().len(), 2);
        assert!(matches!(sink.events()[1], CascadeEvent::Exploded { round: 1, .. }));

        let taken = sink.take();
        assert_eq!(taken.len(), 2);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_sink_through_reference() {
        fn deliver<S: EffectsSink>(mut sink: S) {
            sink.notify(&CascadeEvent::TurnPassed { from: 0, to: 1 });
        }

        let mut sink = RecordingSink::new();
        deliver(&mut sink);
        assert_eq!(sink.events(), &[CascadeEvent::TurnPassed { from: 0, to: 1 }]);
    }

    #[test]
    fn test_event_serialization() {
        let event = CascadeEvent::Captured {
            coord: Coord::new(1, 2),
            from: None,
            to: PlayerColor::Blue,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: CascadeEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
