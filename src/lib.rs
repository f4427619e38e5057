//! # rookery
//!
//! A rules engine for standard chess: it validates moves, applies them,
//! tracks game state and detects checkmate and stalemate, and records the
//! history in algebraic notation.
//!
//! The entry point is [`Game`]:
//!
//! ```
//! use rookery::{Game, GameStatus};
//!
//! let mut game = Game::new();
//! game.attempt_move("e2".parse().unwrap(), "e4".parse().unwrap()).unwrap();
//! game.attempt_move("e7".parse().unwrap(), "e5".parse().unwrap()).unwrap();
//! assert_eq!(game.history(), &["e4".to_string(), "e5".to_string()]);
//! assert_eq!(game.status(), GameStatus::Ongoing);
//! ```

pub mod attack;
pub mod board;
pub mod game;
pub mod geometry;
pub mod movegen;
pub mod moves;
pub mod rules;
pub mod san;
pub mod state;
pub mod types;

pub use board::{Board, PrettyStyle};
pub use game::{Game, GameObserver};
pub use moves::MoveRecord;
pub use rules::RejectReason;
pub use san::Style;
pub use state::{GameState, GameStatus};
pub use types::{CastlingRights, CastlingSide, Color, Coord, File, Piece, PieceKind, Rank};
