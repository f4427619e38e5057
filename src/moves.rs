//! Executed-move records

use crate::state::GameStatus;
use crate::types::{Coord, Piece, PieceKind};

use std::fmt::{self, Display};

/// Everything there is to know about one executed move
///
/// Produced by [`Game::attempt_move`](crate::game::Game::attempt_move) after
/// a move has been applied; the presentation layer can render history,
/// captures and status from this value alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    /// The piece that moved (the pawn, for promotions)
    pub piece: Piece,
    pub from: Coord,
    pub to: Coord,
    /// Captured piece, including an en passant victim
    pub captured: Option<Piece>,
    pub is_castle: bool,
    pub is_en_passant: bool,
    /// Piece the pawn was replaced by, if the move promoted
    pub promoted: Option<PieceKind>,
    /// Algebraic notation, e.g. `Nf3`, `exd6`, `O-O`, `e8=Q#`
    pub notation: String,
    /// Game status after the move
    pub status: GameStatus,
}

impl MoveRecord {
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    pub fn is_promotion(&self) -> bool {
        self.promoted.is_some()
    }
}

impl Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.notation)
    }
}
