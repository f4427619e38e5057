//! The engine instance: owns the board and state, executes moves

use crate::board::Board;
use crate::movegen::{self, DestList};
use crate::moves::MoveRecord;
use crate::rules::{self, RejectReason};
use crate::san::{self, Style};
use crate::state::{GameState, GameStatus};
use crate::types::{CastlingRights, CastlingSide, Color, Coord, File, Piece, PieceKind};
use crate::geometry;

/// Observer for the events raised by move execution
///
/// All methods default to no-ops, so the engine runs fine with no
/// presentation layer attached. Events fire in execution order: captures
/// first, then castle/promotion, then the recorded move, the turn change
/// and finally, if the move ended the game, the terminal status.
pub trait GameObserver {
    fn capture(&mut self, _piece: Piece, _by: Color) {}
    fn castle(&mut self, _color: Color, _side: CastlingSide) {}
    fn promotion(&mut self, _color: Color, _at: Coord) {}
    fn move_recorded(&mut self, _notation: &str) {}
    fn turn_changed(&mut self, _turn: Color) {}
    fn game_over(&mut self, _status: GameStatus) {}
}

struct NullObserver;

impl GameObserver for NullObserver {}

/// A single game of chess
///
/// The instance exclusively owns its [`Board`] and [`GameState`]; callers
/// observe them through the query surface and mutate them only through
/// [`Game::attempt_move`]. Independent games are independent values.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    state: GameState,
    style: Style,
}

impl Game {
    /// Starts a fresh game from the standard initial layout
    pub fn new() -> Game {
        Game {
            board: Board::initial(),
            state: GameState::new(),
            style: Style::Letters,
        }
    }

    /// Builds a game from an arbitrary position
    ///
    /// Useful for tests and puzzles. The position is taken as-is; no
    /// validation beyond what the board itself guarantees is performed.
    pub fn from_parts(board: Board, state: GameState) -> Game {
        Game {
            board,
            state,
            style: Style::Letters,
        }
    }

    /// Sets the notation style used for history entries
    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    /// Read-only view of the board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Read-only view of the game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Side to move
    pub fn turn(&self) -> Color {
        self.state.turn
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.state.castling
    }

    /// Notation history of every executed move, in order
    pub fn history(&self) -> &[String] {
        &self.state.history
    }

    /// Pieces captured by `color`, in capture order
    pub fn captured_by(&self, color: Color) -> &[Piece] {
        self.state.captured_by(color)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        movegen::is_in_check(&self.board, &self.state, color)
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        movegen::is_checkmate(&self.board, &self.state, color)
    }

    pub fn is_stalemate(&self, color: Color) -> bool {
        movegen::is_stalemate(&self.board, &self.state, color)
    }

    /// Legal destinations of the piece on `from`, for move highlighting
    /// and the like
    pub fn legal_destinations(&self, from: Coord) -> DestList {
        movegen::legal_destinations(&self.board, &self.state, from)
    }

    /// Validates and, if legal, executes the move `from` → `to`
    ///
    /// On success the board and state are updated, the notation is appended
    /// to history and the returned record describes everything that
    /// happened, including the resulting [`GameStatus`]. On failure nothing
    /// changes and the rejection reason is returned. Once the game is over,
    /// every move is uniformly rejected with [`RejectReason::GameOver`].
    pub fn attempt_move(&mut self, from: Coord, to: Coord) -> Result<MoveRecord, RejectReason> {
        self.attempt_move_observed(from, to, &mut NullObserver)
    }

    /// Same as [`Game::attempt_move`], additionally raising events on `obs`
    pub fn attempt_move_observed(
        &mut self,
        from: Coord,
        to: Coord,
        obs: &mut dyn GameObserver,
    ) -> Result<MoveRecord, RejectReason> {
        if self.state.status.is_game_over() {
            return Err(RejectReason::GameOver);
        }
        let piece = self.board.get(from).ok_or(RejectReason::EmptySquare)?;
        if piece.color != self.state.turn {
            return Err(RejectReason::NotYourTurn);
        }
        rules::validate_move(&self.board, &self.state, from, to)?;
        Ok(self.execute(piece, from, to, obs))
    }

    /// Resets the game to the initial layout, discarding history, captures
    /// and status
    pub fn restart(&mut self) {
        self.board = Board::initial();
        self.state = GameState::new();
    }

    /// Applies an already-validated move; the only place board and state
    /// are mutated during play
    fn execute(
        &mut self,
        piece: Piece,
        from: Coord,
        to: Coord,
        obs: &mut dyn GameObserver,
    ) -> MoveRecord {
        let color = piece.color;
        let row_diff = to.row().abs_diff(from.row());
        let col_diff = to.col().abs_diff(from.col());

        // Plain capture on the destination square.
        let mut captured = self.board.get(to);
        if let Some(victim) = captured {
            self.state.record_capture(victim, color);
            obs.capture(victim, color);
        }

        // En passant: a pawn's diagonal step onto an empty square. The
        // victim pawn sits on the origin's row at the destination's column.
        let is_en_passant = piece.kind == PieceKind::Pawn
            && col_diff == 1
            && row_diff == 1
            && captured.is_none();
        if is_en_passant {
            let victim_sq = Coord::from_parts(to.file(), from.rank());
            if let Some(victim) = self.board.get(victim_sq) {
                self.board.put(victim_sq, None);
                self.state.record_capture(victim, color);
                obs.capture(victim, color);
                captured = Some(victim);
            }
        }

        // Castling: relocate the rook and drop both of this color's rights.
        let is_castle = piece.kind == PieceKind::King && (2..=3).contains(&col_diff);
        if is_castle {
            let (rook_from, side) = if to.col() > from.col() {
                (File::H, CastlingSide::King)
            } else {
                (File::A, CastlingSide::Queen)
            };
            let rook_to = match side {
                CastlingSide::King => File::from_index(to.col() - 1),
                CastlingSide::Queen => File::from_index(to.col() + 1),
            };
            let rook = self.board.get2(rook_from, to.rank());
            self.board.put2(rook_to, to.rank(), rook);
            self.board.put2(rook_from, to.rank(), None);
            self.state.castling.unset_color(color);
            obs.castle(color, side);
        }

        // Relocate the moving piece.
        self.board.put(to, Some(piece));
        self.board.put(from, None);

        self.state.update_castling_rights(piece, from);
        self.state.update_en_passant(piece, from, to);

        // Forced promotion to a queen on the last rank.
        let mut promoted = None;
        if piece.kind == PieceKind::Pawn && to.rank() == geometry::promotion_rank(color) {
            self.board
                .put(to, Some(Piece::new(color, PieceKind::Queen)));
            promoted = Some(PieceKind::Queen);
            obs.promotion(color, to);
        }

        // The notation consults the post-move position for check suffixes.
        let notation = san::notate(
            piece,
            from,
            to,
            captured.is_some(),
            &self.board,
            &self.state,
            self.style,
        );
        self.state.history.push(notation.clone());
        obs.move_recorded(&notation);

        self.state.switch_turn();
        obs.turn_changed(self.state.turn);

        // Terminal evaluation for the side now to move.
        let opponent = self.state.turn;
        self.state.status = if movegen::is_checkmate(&self.board, &self.state, opponent) {
            GameStatus::Checkmate { winner: color }
        } else if movegen::is_stalemate(&self.board, &self.state, opponent) {
            GameStatus::Stalemate
        } else if movegen::is_in_check(&self.board, &self.state, opponent) {
            GameStatus::Check
        } else {
            GameStatus::Ongoing
        };
        if self.state.status.is_game_over() {
            obs.game_over(self.state.status);
        }

        MoveRecord {
            piece,
            from,
            to,
            captured,
            is_castle,
            is_en_passant: is_en_passant && captured.is_some(),
            promoted,
            notation,
            status: self.state.status,
        }
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}
