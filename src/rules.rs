//! Move legality: piece rules, path blocking, castling and the
//! no-self-check rule

use crate::board::Board;
use crate::state::GameState;
use crate::types::{CastlingSide, Color, Coord, File, Piece, PieceKind};
use crate::{attack, geometry};

use thiserror::Error;

/// Reason a proposed move is rejected
///
/// All rejections are ordinary values reported to the caller; none of them
/// is fatal.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// The origin square holds no piece
    #[error("no piece on the origin square")]
    EmptySquare,
    /// The piece belongs to the side which is not to move
    #[error("piece belongs to the side not on move")]
    NotYourTurn,
    /// The game has already ended
    #[error("the game is already over")]
    GameOver,
    /// The destination holds a piece of the mover's own color
    #[error("destination square holds an own piece")]
    OwnPieceOccupied,
    /// The move does not match the piece's movement pattern
    #[error("the piece cannot move this way")]
    PieceRuleViolation,
    /// The movement pattern matches, but another piece is in the way
    #[error("the path is blocked by another piece")]
    PathBlocked,
    /// The move would leave the mover's own king attacked
    #[error("the move would expose the own king to attack")]
    WouldExposeOwnKing,
    /// A castling precondition (rights, empty squares, unattacked path)
    /// does not hold
    #[error("castling preconditions are not met")]
    CastlingPreconditionUnmet,
}

/// Validates a move fully: movement pattern, path, capture rules, castling
/// preconditions and the self-check simulation
///
/// Turn order and game-over state are *not* checked here, that is the job
/// of [`Game::attempt_move`](crate::game::Game::attempt_move).
pub fn validate_move(
    board: &Board,
    state: &GameState,
    from: Coord,
    to: Coord,
) -> Result<(), RejectReason> {
    check_move(board, state, from, to, false)
}

/// Boolean form of [`validate_move`]
pub fn is_valid_move(board: &Board, state: &GameState, from: Coord, to: Coord) -> bool {
    validate_move(board, state, from, to).is_ok()
}

/// Pseudo-legal probe used by attack detection: the self-check simulation
/// is suppressed, so this never recurses back into itself
pub(crate) fn is_pseudo_legal(
    board: &Board,
    state: &GameState,
    from: Coord,
    to: Coord,
) -> bool {
    check_move(board, state, from, to, true).is_ok()
}

fn check_move(
    board: &Board,
    state: &GameState,
    from: Coord,
    to: Coord,
    probe: bool,
) -> Result<(), RejectReason> {
    let piece = board.get(from).ok_or(RejectReason::EmptySquare)?;
    let target = board.get(to);

    // Covers `from == to` as well: the "target" is the piece itself.
    if target.map(|t| t.color) == Some(piece.color) {
        return Err(RejectReason::OwnPieceOccupied);
    }

    if !probe {
        // Apply the move on a throwaway copy of the board and reject if the
        // own king ends up attacked. Special-move side effects (rook
        // relocation, en passant removal) are not needed for this probe.
        let mut hypo = *board;
        hypo.put(to, Some(piece));
        hypo.put(from, None);
        if let Some(king) = hypo.king_pos(piece.color) {
            if attack::is_square_attacked(&hypo, state, king, piece.color) {
                return Err(RejectReason::WouldExposeOwnKing);
            }
        }
    }

    let row_diff = to.row().abs_diff(from.row());
    let col_diff = to.col().abs_diff(from.col());

    // Castling: a king moving exactly two columns on its home rank. The
    // branch is skipped for pseudo-legal probes, as castling can never
    // capture and therefore never attacks a square.
    if !probe
        && piece.kind == PieceKind::King
        && row_diff == 0
        && col_diff == 2
        && from.rank() == geometry::back_rank(piece.color)
    {
        return check_castling(board, state, piece.color, from, to);
    }

    let step = geometry::pawn_step(piece.color);
    let forward = to.row() as isize - from.row() as isize;

    let pattern_ok = match piece.kind {
        PieceKind::Pawn => {
            if col_diff == 1 && forward == step {
                // Diagonal: a capture of the piece on the destination, or an
                // en passant capture onto the empty target square.
                return if target.is_some() {
                    Ok(())
                } else if state.en_passant == Some(to) && en_passant_victim(board, piece.color, from, to) {
                    Ok(())
                } else {
                    Err(RejectReason::PieceRuleViolation)
                };
            }
            if col_diff == 0 && forward == step {
                return match target {
                    None => Ok(()),
                    Some(_) => Err(RejectReason::PathBlocked),
                };
            }
            if col_diff == 0
                && forward == 2 * step
                && from.rank() == geometry::pawn_home_rank(piece.color)
            {
                let mid = from.try_shift(0, step).ok_or(RejectReason::PieceRuleViolation)?;
                return if target.is_none() && board.get(mid).is_none() {
                    Ok(())
                } else {
                    Err(RejectReason::PathBlocked)
                };
            }
            return Err(RejectReason::PieceRuleViolation);
        }
        PieceKind::Knight => {
            // Never blocked.
            return if (row_diff == 2 && col_diff == 1) || (row_diff == 1 && col_diff == 2) {
                Ok(())
            } else {
                Err(RejectReason::PieceRuleViolation)
            };
        }
        PieceKind::Bishop => row_diff == col_diff && row_diff != 0,
        PieceKind::Rook => (row_diff == 0) != (col_diff == 0),
        PieceKind::Queen => {
            (row_diff != 0 || col_diff != 0) && (row_diff == 0 || col_diff == 0 || row_diff == col_diff)
        }
        PieceKind::King => {
            return if row_diff <= 1 && col_diff <= 1 && row_diff + col_diff != 0 {
                Ok(())
            } else {
                Err(RejectReason::PieceRuleViolation)
            };
        }
    };

    if !pattern_ok {
        return Err(RejectReason::PieceRuleViolation);
    }
    if !path_is_clear(board, from, to) {
        return Err(RejectReason::PathBlocked);
    }
    Ok(())
}

/// True if the square the en passant capture would remove (origin row,
/// destination column) holds an opposing pawn
fn en_passant_victim(board: &Board, color: Color, from: Coord, to: Coord) -> bool {
    let victim = Coord::from_parts(to.file(), from.rank());
    matches!(
        board.get(victim),
        Some(p) if p.kind == PieceKind::Pawn && p.color == color.inv()
    )
}

/// Checks every square strictly between `from` and `to` along a straight
/// or diagonal line
fn path_is_clear(board: &Board, from: Coord, to: Coord) -> bool {
    let d_row = (to.row() as isize - from.row() as isize).signum();
    let d_col = (to.col() as isize - from.col() as isize).signum();
    let mut cur = from;
    loop {
        // The caller guarantees `to` lies on the line, so the walk ends.
        cur = match cur.try_shift(d_col, d_row) {
            Some(c) => c,
            None => return true,
        };
        if cur == to {
            return true;
        }
        if board.get(cur).is_some() {
            return false;
        }
    }
}

fn check_castling(
    board: &Board,
    state: &GameState,
    color: Color,
    from: Coord,
    to: Coord,
) -> Result<(), RejectReason> {
    let rank = geometry::back_rank(color);
    let side = match to.file() {
        File::G => CastlingSide::King,
        File::C => CastlingSide::Queen,
        _ => return Err(RejectReason::CastlingPreconditionUnmet),
    };

    // The rights flag is the single source of truth for "neither the king
    // nor this rook has moved". The rook itself must still be on its home
    // square; retained rights do not resurrect a captured rook.
    if !state.castling.has(color, side) {
        return Err(RejectReason::CastlingPreconditionUnmet);
    }
    let rook_file = match side {
        CastlingSide::King => File::H,
        CastlingSide::Queen => File::A,
    };
    if board.get2(rook_file, rank) != Some(Piece::new(color, PieceKind::Rook)) {
        return Err(RejectReason::CastlingPreconditionUnmet);
    }

    let (between, transit) = match side {
        CastlingSide::King => (&[File::F, File::G][..], [File::F, File::G]),
        // Queenside: the b-file square must also be empty even though the
        // king does not pass through it.
        CastlingSide::Queen => (&[File::D, File::C, File::B][..], [File::D, File::C]),
    };
    if between
        .iter()
        .any(|&file| board.get2(file, rank).is_some())
    {
        return Err(RejectReason::CastlingPreconditionUnmet);
    }

    // Neither the king's current square nor any square it passes through or
    // lands on may be attacked.
    if attack::is_square_attacked(board, state, from, color) {
        return Err(RejectReason::CastlingPreconditionUnmet);
    }
    for file in transit {
        if attack::is_square_attacked(board, state, Coord::from_parts(file, rank), color) {
            return Err(RejectReason::CastlingPreconditionUnmet);
        }
    }
    Ok(())
}
