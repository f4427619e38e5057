//! Attack detection

use crate::board::Board;
use crate::rules;
use crate::state::GameState;
use crate::types::{Color, Coord};

/// Returns `true` if any piece opposing `victim` could pseudo-legally move
/// to `target`
///
/// Every square of the board is scanned; each opposing piece is probed with
/// the self-check simulation suppressed. The suppression is what keeps
/// attack detection and the self-check probe from recursing into each
/// other.
///
/// Note that a pawn's diagonal probe requires an occupied destination, so
/// an *empty* square is not reported as pawn-attacked (except for the
/// en-passant target square). King-safety queries are unaffected: the
/// king's own square is always occupied.
pub fn is_square_attacked(
    board: &Board,
    state: &GameState,
    target: Coord,
    victim: Color,
) -> bool {
    Coord::iter().any(|from| {
        matches!(board.get(from), Some(piece) if piece.color != victim)
            && rules::is_pseudo_legal(board, state, from, target)
    })
}
