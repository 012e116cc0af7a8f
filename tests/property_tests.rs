//! Property tests for board geometry, move legality and explosion rounds.

use proptest::prelude::*;

use chain_reaction::cascade::apply_round;
use chain_reaction::core::{capacity, neighbors, Board, Coord, PlayerColor, SessionConfig};
use chain_reaction::rules::{is_valid_move, UnitTally};
use chain_reaction::session::{GameSession, MoveOutcome};

fn any_color() -> impl Strategy<Value = PlayerColor> {
    prop::sample::select(PlayerColor::PALETTE.to_vec())
}

/// A board of 2..=6 rows and columns with arbitrary contents, each cell
/// holding up to one unit more than it can keep.
fn any_board() -> impl Strategy<Value = Board> {
    (2usize..=6, 2usize..=6).prop_flat_map(|(rows, cols)| {
        prop::collection::vec((0u32..=4, any_color()), rows * cols).prop_map(move |cells| {
            let mut board = Board::new(rows, cols).unwrap();
            for (i, (count, color)) in cells.into_iter().enumerate() {
                let at = Coord::from_index(i, cols);
                let count = count.min(board.capacity(at));
                board.set_cell(at, count, Some(color));
            }
            board
        })
    })
}

proptest! {
    #[test]
    fn prop_capacity_is_neighbor_count(rows in 2usize..12, cols in 2usize..12, r in 0usize..12, c in 0usize..12) {
        prop_assume!(r < rows && c < cols);
        let n = neighbors(r, c, rows, cols);
        prop_assert_eq!(capacity(r, c, rows, cols) as usize, n.len());
        prop_assert!((2..=4).contains(&n.len()));
        for at in n {
            prop_assert!(at.in_bounds(rows, cols));
            prop_assert_eq!(at.row.abs_diff(r) + at.col.abs_diff(c), 1);
        }
    }

    #[test]
    fn prop_legality_follows_ownership(board in any_board(), color in any_color()) {
        for cell in board.iter() {
            let expected = cell.owner.map_or(true, |owner| owner == color);
            prop_assert_eq!(is_valid_move(&board, cell.row, cell.col, color), expected);
        }
    }

    #[test]
    fn prop_round_conserves_units(board in any_board(), color in any_color()) {
        let result = apply_round(&board, color);

        prop_assert_eq!(result.board.total_units(), board.total_units());
        prop_assert!(result.board.ownership_consistent());
        prop_assert_eq!(result.stabilized, board.is_stable());
        prop_assert_eq!(result.exploded, board.unstable_cells());
    }

    #[test]
    fn prop_round_captures_go_to_mover(board in any_board(), color in any_color()) {
        let result = apply_round(&board, color);

        for at in &result.exploded {
            for n in board.neighbors(*at) {
                prop_assert_eq!(result.board.get(n).and_then(|c| c.owner), Some(color));
            }
        }
        for capture in &result.captures {
            prop_assert_eq!(board.get(capture.coord).and_then(|c| c.owner), capture.from);
        }
    }

    #[test]
    fn prop_round_leaves_input_untouched(board in any_board(), color in any_color()) {
        let before = board.clone();
        let _ = apply_round(&board, color);
        prop_assert_eq!(board, before);
    }

    #[test]
    fn prop_random_moves_keep_invariants(
        players in 2usize..=4,
        rows in 2usize..=5,
        cols in 2usize..=5,
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..120),
    ) {
        let config = SessionConfig::default().with_players(players).with_board(rows, cols);
        let mut session = GameSession::new(config).unwrap();

        for pick in picks {
            if session.is_game_over() {
                prop_assert!(session.legal_moves().is_empty());
                break;
            }

            let moves = session.legal_moves();
            prop_assert!(!moves.is_empty());
            let at = moves[pick.index(moves.len())];

            let outcome = session.make_move(at.row, at.col);
            prop_assert!(matches!(outcome, MoveOutcome::Settled(_)));

            let state = session.state();
            let tally = UnitTally::from_board(&state.board);
            prop_assert!(state.board.ownership_consistent());
            prop_assert_eq!(tally.total(), state.move_count);

            match &state.winner {
                Some(winner) => {
                    prop_assert_eq!(tally.units(winner.color), tally.total());
                }
                None => {
                    prop_assert!(state.board.is_stable());
                    if tally.total() as usize >= players {
                        prop_assert!(tally.holds_units(session.current_player().color));
                    }
                }
            }
        }
    }
}
