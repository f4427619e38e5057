//! Mutable game state: turn, rights, en passant, history and status

use crate::geometry;
use crate::types::{CastlingRights, CastlingSide, Color, Coord, Piece, PieceKind};

/// Status of the game, advanced only by executed moves
///
/// The transitions are `Ongoing → {Ongoing, Check} → Checkmate | Stalemate`;
/// the two last states are terminal and only
/// [`Game::restart`](crate::game::Game::restart) leaves them.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Game continues, side to move is not in check
    #[default]
    Ongoing,
    /// Game continues, side to move is in check
    Check,
    /// Side to move is checkmated; the previous mover wins
    Checkmate { winner: Color },
    /// Side to move has no legal move and is not in check
    Stalemate,
}

impl GameStatus {
    pub const fn is_game_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }

    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}

/// Mutable record of everything beyond piece placement
///
/// Owned by the engine instance and mutated only by move execution. The
/// castling rights are the single source of truth for "has the king or
/// rook moved"; no separate moved-flags are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Side to move
    pub turn: Color,
    /// Castling rights; monotonically go from set to unset
    pub castling: CastlingRights,
    /// En passant target square
    ///
    /// Set to the square passed over by the latest two-square pawn advance
    /// and cleared by the next executed move; valid for exactly one ply.
    pub en_passant: Option<Coord>,
    /// Algebraic notation of every executed move, in order
    pub history: Vec<String>,
    /// Pieces captured by White, in capture order
    pub captured_by_white: Vec<Piece>,
    /// Pieces captured by Black, in capture order
    pub captured_by_black: Vec<Piece>,
    /// Current game status
    pub status: GameStatus,
}

impl GameState {
    /// Returns the state of a fresh game: White to move, full rights
    pub fn new() -> GameState {
        GameState {
            turn: Color::White,
            castling: CastlingRights::FULL,
            en_passant: None,
            history: Vec::new(),
            captured_by_white: Vec::new(),
            captured_by_black: Vec::new(),
            status: GameStatus::Ongoing,
        }
    }

    /// Captured-piece ledger of `color`
    pub fn captured_by(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.captured_by_white,
            Color::Black => &self.captured_by_black,
        }
    }

    pub(crate) fn record_capture(&mut self, piece: Piece, by: Color) {
        match by {
            Color::White => self.captured_by_white.push(piece),
            Color::Black => self.captured_by_black.push(piece),
        }
    }

    /// Revokes castling rights after `piece` moved away from `from`
    ///
    /// A king move clears both of its color's rights; a rook move from
    /// column 0 or 7 clears the corresponding single right. Rights are
    /// *not* revoked when a rook is captured on its home square without
    /// ever moving; the later castling attempt fails only because the rook
    /// is gone.
    pub(crate) fn update_castling_rights(&mut self, piece: Piece, from: Coord) {
        match piece.kind {
            PieceKind::King => self.castling.unset_color(piece.color),
            PieceKind::Rook => match from.col() {
                0 => self.castling.unset(piece.color, CastlingSide::Queen),
                7 => self.castling.unset(piece.color, CastlingSide::King),
                _ => {}
            },
            _ => {}
        }
    }

    /// Recomputes the en passant target after `piece` moved `from` → `to`
    pub(crate) fn update_en_passant(&mut self, piece: Piece, from: Coord, to: Coord) {
        self.en_passant = if piece.kind == PieceKind::Pawn && to.row().abs_diff(from.row()) == 2 {
            from.try_shift(0, geometry::pawn_step(piece.color))
        } else {
            None
        };
    }

    pub(crate) fn switch_turn(&mut self) {
        self.turn = self.turn.inv();
    }
}

impl Default for GameState {
    fn default() -> GameState {
        GameState::new()
    }
}
