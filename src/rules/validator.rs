//! Move legality.
//!
//! A player may place on an empty cell or on a cell they already own.
//! Bounds are the caller's responsibility here; `GameSession` checks them
//! before asking.

use crate::core::{Board, Coord, PlayerColor};

/// Check if `color` may place a unit at `(row, col)`.
///
/// # Panics
///
/// Panics if `(row, col)` is off the board.
#[must_use]
pub fn is_valid_move(board: &Board, row: usize, col: usize, color: PlayerColor) -> bool {
    match board.cell(row, col).owner {
        None => true,
        Some(owner) => owner == color,
    }
}

/// Every cell `color` may place on, in row-major order.
#[must_use]
pub fn legal_moves(board: &Board, color: PlayerColor) -> Vec<Coord> {
    board
        .iter()
        .filter(|cell| cell.owner.map_or(true, |owner| owner == color))
        .map(|cell| cell.coord())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_owners() -> Board {
        let mut board = Board::new(3, 3).unwrap();
        board.set_cell(Coord::new(0, 0), 1, Some(PlayerColor::Red));
        board.set_cell(Coord::new(1, 1), 2, Some(PlayerColor::Blue));
        board
    }

    #[test]
    fn test_empty_cell_is_valid() {
        let board = board_with_owners();
        assert!(is_valid_move(&board, 2, 2, PlayerColor::Red));
        assert!(is_valid_move(&board, 2, 2, PlayerColor::Blue));
    }

    #[test]
    fn test_own_cell_is_valid() {
        let board = board_with_owners();
        assert!(is_valid_move(&board, 0, 0, PlayerColor::Red));
        assert!(is_valid_move(&board, 1, 1, PlayerColor::Blue));
    }

    #[test]
    fn test_opponent_cell_is_invalid() {
        let board = board_with_owners();
        assert!(!is_valid_move(&board, 1, 1, PlayerColor::Red));
        assert!(!is_valid_move(&board, 0, 0, PlayerColor::Green));
    }

    #[test]
    fn test_legal_moves() {
        let board = board_with_owners();

        let red = legal_moves(&board, PlayerColor::Red);
        assert_eq!(red.len(), 8);
        assert!(red.contains(&Coord::new(0, 0)));
        assert!(!red.contains(&Coord::new(1, 1)));

        let green = legal_moves(&board, PlayerColor::Green);
        assert_eq!(green.len(), 7);
        assert_eq!(green[0], Coord::new(0, 1));
    }

    #[test]
    fn test_legal_moves_agree_with_validator() {
        let board = board_with_owners();
        for color in [PlayerColor::Red, PlayerColor::Blue, PlayerColor::Cyan] {
            let legal = legal_moves(&board, color);
            for cell in board.iter() {
                assert_eq!(
                    legal.contains(&cell.coord()),
                    is_valid_move(&board, cell.row, cell.col, color)
                );
            }
        }
    }
}
