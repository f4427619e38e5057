//! Algebraic notation for executed moves

use crate::board::Board;
use crate::movegen;
use crate::state::GameState;
use crate::types::{Coord, Piece, PieceKind};
use crate::geometry;

use std::fmt::Write;

/// Notation output style
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Style {
    /// Capital Latin letters for pieces (`Nf3`)
    Letters,
    /// Color-specific Unicode figurines (`♘f3`)
    Figurine,
}

/// Derives the notation string for a move that has already been applied
///
/// `board` and `state` must describe the position *after* the move (rights
/// and en passant updated, turn not yet relevant); the check and checkmate
/// suffixes are computed against the mover's opponent on that position.
/// Castling short-circuits to `O-O`/`O-O-O`; a pawn reaching its last rank
/// gets the forced-promotion suffix `=Q`.
pub fn notate(
    piece: Piece,
    from: Coord,
    to: Coord,
    was_capture: bool,
    board: &Board,
    state: &GameState,
    style: Style,
) -> String {
    let mut notation = String::new();

    if piece.kind == PieceKind::King && to.col().abs_diff(from.col()) >= 2 {
        notation = if to.col() > from.col() {
            "O-O".to_string()
        } else {
            "O-O-O".to_string()
        };
    } else {
        if piece.kind != PieceKind::Pawn {
            match style {
                Style::Letters => notation.push(piece.kind.as_char()),
                Style::Figurine => notation.push(piece.as_utf8_char()),
            }
        }
        if was_capture {
            if piece.kind == PieceKind::Pawn {
                notation.push(from.file().as_char());
            }
            notation.push('x');
        }
        let _ = write!(notation, "{}", to);
        if piece.kind == PieceKind::Pawn && to.rank() == geometry::promotion_rank(piece.color) {
            notation.push_str("=Q");
        }
    }

    let opponent = piece.color.inv();
    if movegen::is_checkmate(board, state, opponent) {
        notation.push('#');
    } else if movegen::is_in_check(board, state, opponent) {
        notation.push('+');
    }
    notation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;
    use std::str::FromStr;

    fn sq(s: &str) -> Coord {
        Coord::from_str(s).unwrap()
    }

    fn plain(piece: Piece, from: &str, to: &str, capture: bool, board: &Board) -> String {
        notate(
            piece,
            sq(from),
            sq(to),
            capture,
            board,
            &GameState::new(),
            Style::Letters,
        )
    }

    #[test]
    fn test_quiet_moves() {
        // Post-move position after 1. Nf3.
        let board = Board::from_diagram(
            "rnbqkbnr\n\
             pppppppp\n\
             ........\n\
             ........\n\
             ........\n\
             .....N..\n\
             PPPPPPPP\n\
             RNBQKB.R",
        )
        .unwrap();
        let knight = Piece::new(Color::White, PieceKind::Knight);
        assert_eq!(plain(knight, "g1", "f3", false, &board), "Nf3");

        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        assert_eq!(plain(pawn, "e2", "e4", false, &board), "e4");
    }

    #[test]
    fn test_captures() {
        let board = Board::from_diagram(
            "........\n\
             ........\n\
             ........\n\
             ...P....\n\
             ........\n\
             ........\n\
             ........\n\
             K......k",
        )
        .unwrap();
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        assert_eq!(plain(pawn, "e4", "d5", true, &board), "exd5");

        let rook = Piece::new(Color::Black, PieceKind::Rook);
        assert_eq!(plain(rook, "d8", "d5", true, &board), "Rxd5");
    }

    #[test]
    fn test_castling() {
        let board = Board::from_diagram(
            "....k...\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             R....RK.",
        )
        .unwrap();
        let king = Piece::new(Color::White, PieceKind::King);
        assert_eq!(plain(king, "e1", "g1", false, &board), "O-O");
        assert_eq!(plain(king, "e1", "c1", false, &board), "O-O-O");
    }

    #[test]
    fn test_promotion() {
        // Post-move position after the a7 pawn became a queen on a8.
        let board = Board::from_diagram(
            "Q.......\n\
             ........\n\
             ........\n\
             .......k\n\
             ........\n\
             ........\n\
             .......K\n\
             ........",
        )
        .unwrap();
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        assert_eq!(plain(pawn, "a7", "a8", false, &board), "a8=Q");
    }

    #[test]
    fn test_check_and_mate_suffixes() {
        // Post-move position: Re8 delivers check, black king escapes to d7.
        let check_board = Board::from_diagram(
            "....R...\n\
             ...k....\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             .......K",
        )
        .unwrap();
        let rook = Piece::new(Color::White, PieceKind::Rook);
        assert_eq!(plain(rook, "e1", "e8", false, &check_board), "Re8");

        let check_board2 = Board::from_diagram(
            "...kR...\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             .......K",
        )
        .unwrap();
        assert_eq!(plain(rook, "e1", "e8", false, &check_board2), "Re8+");

        // Back-rank mate: the rook covers the eighth rank, the white king
        // covers the escape squares below.
        let mate_board = Board::from_diagram(
            "R......k\n\
             ........\n\
             ......K.\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             ........",
        )
        .unwrap();
        assert_eq!(plain(rook, "a1", "a8", false, &mate_board), "Ra8#");
    }

    #[test]
    fn test_figurine_style() {
        let board = Board::from_diagram(
            "....k...\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             .....N..\n\
             ........\n\
             ....K...",
        )
        .unwrap();
        let knight = Piece::new(Color::White, PieceKind::Knight);
        let s = notate(
            knight,
            sq("g1"),
            sq("f3"),
            false,
            &board,
            &GameState::new(),
            Style::Figurine,
        );
        assert_eq!(s, "♘f3");
    }
}
