//! Legal-move enumeration and terminal queries
//!
//! Enumeration is a brute-force scan over all origin/destination pairs,
//! `O(64 * 64)` per call. There is no search on top of these queries, so
//! the scan is never the hot path.

use crate::board::Board;
use crate::rules;
use crate::state::GameState;
use crate::types::{Color, Coord};

use arrayvec::ArrayVec;

/// Bounded list of destination squares; a single piece can never have more
/// than 63 of them
pub type DestList = ArrayVec<Coord, 63>;

/// Returns `true` if `color` has at least one fully legal move
///
/// Every own piece is probed against all 64 destinations with the
/// self-check simulation enabled, stopping at the first hit.
pub fn has_legal_moves(board: &Board, state: &GameState, color: Color) -> bool {
    Coord::iter()
        .filter(|&from| matches!(board.get(from), Some(p) if p.color == color))
        .any(|from| Coord::iter().any(|to| rules::is_valid_move(board, state, from, to)))
}

/// Collects every legal destination of the piece on `from`
///
/// Returns an empty list for an empty square. Turn order is not consulted;
/// this is a pure position query.
pub fn legal_destinations(board: &Board, state: &GameState, from: Coord) -> DestList {
    Coord::iter()
        .filter(|&to| rules::is_valid_move(board, state, from, to))
        .collect()
}

/// Returns `true` if the king of `color` is attacked
///
/// A board without that king yields `false`.
pub fn is_in_check(board: &Board, state: &GameState, color: Color) -> bool {
    match board.king_pos(color) {
        Some(king) => crate::attack::is_square_attacked(board, state, king, color),
        None => false,
    }
}

/// Checkmate: in check and without a legal move
pub fn is_checkmate(board: &Board, state: &GameState, color: Color) -> bool {
    is_in_check(board, state, color) && !has_legal_moves(board, state, color)
}

/// Stalemate: not in check, but without a legal move
pub fn is_stalemate(board: &Board, state: &GameState, color: Color) -> bool {
    !is_in_check(board, state, color) && !has_legal_moves(board, state, color)
}
