//! Win detection and turn advancement.
//!
//! ## Opening Phase
//!
//! Until the board holds at least one unit per player, nobody is skipped:
//! players who have not placed yet own nothing but are still in the game.
//! This is decided from the total unit count alone, so a player captured
//! before everyone has placed once is not skipped until the total catches up.

use tracing::trace;

use crate::core::{Board, Player, PlayerMap};

use super::tally::UnitTally;

/// The winner, if exactly one player owns units and the board holds at least two.
///
/// Re-evaluated after every cascade round, so a game can end mid-cascade.
#[must_use]
pub fn check_winner<'a>(board: &Board, players: &'a [Player]) -> Option<&'a Player> {
    winner_from_tally(&UnitTally::from_board(board), players)
}

pub(crate) fn winner_from_tally<'a>(tally: &UnitTally, players: &'a [Player]) -> Option<&'a Player> {
    if tally.total() < 2 {
        return None;
    }

    let mut holders = players.iter().filter(|p| tally.holds_units(p.color));
    match (holders.next(), holders.next()) {
        (Some(only), None) => Some(only),
        _ => None,
    }
}

/// Seat index of the next player to move after `current`.
///
/// Outside the opening phase, players owning no units are skipped. At most
/// `players.len()` seats are tried, so the search always terminates.
#[must_use]
pub fn advance_turn(players: &[Player], current: usize, board: &Board) -> usize {
    next_seat(players, current, &UnitTally::from_board(board))
}

pub(crate) fn next_seat(players: &[Player], current: usize, tally: &UnitTally) -> usize {
    let count = players.len();
    if count == 0 {
        return 0;
    }

    let mut next = (current + 1) % count;
    if (tally.total() as usize) < count {
        return next;
    }

    for _ in 0..count {
        if tally.holds_units(players[next].color) {
            break;
        }
        trace!(seat = next, color = %players[next].color, "skipping eliminated player");
        next = (next + 1) % count;
    }
    next
}

/// Recompute `is_alive` for every player.
///
/// A player is alive while they own units, or until they have placed for
/// the first time. `placements` counts accepted moves per seat.
pub fn refresh_alive(players: &mut [Player], board: &Board, placements: &PlayerMap<u32>) {
    let tally = UnitTally::from_board(board);
    for (seat, player) in players.iter_mut().enumerate() {
        player.is_alive = tally.holds_units(player.color) || placements[seat] == 0;
    }
}
