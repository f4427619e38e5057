//! Board and related things

use crate::geometry;
use crate::types::{Color, Coord, File, Piece, PieceKind, Rank};

use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;

/// Error parsing a [`Board`] from its diagram form
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum BoardParseError {
    /// Wrong number of non-empty lines
    #[error("expected 8 ranks, got {0}")]
    BadRankCount(usize),
    /// A line has the wrong number of squares
    #[error("expected 8 squares in rank {0}, got {1}")]
    BadRankLength(Rank, usize),
    /// Unexpected character
    #[error("unexpected square char {0:?}")]
    UnexpectedChar(char),
}

/// An 8×8 grid of optional pieces
///
/// The board is pure data: lookup and placement only. Move legality lives in
/// [`rules`](crate::rules), mutation during play in [`Game`](crate::game::Game).
/// Row 0 of the grid is Black's back rank (rank 8).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    /// Returns a board with no pieces on it
    pub const fn empty() -> Board {
        Board {
            squares: [None; 64],
        }
    }

    /// Returns a board with the standard starting layout
    pub fn initial() -> Board {
        let mut res = Board::empty();
        for file in File::iter() {
            res.put2(file, Rank::R2, Some(Piece::new(Color::White, PieceKind::Pawn)));
            res.put2(file, Rank::R7, Some(Piece::new(Color::Black, PieceKind::Pawn)));
        }
        for color in [Color::White, Color::Black] {
            let rank = geometry::back_rank(color);
            res.put2(File::A, rank, Some(Piece::new(color, PieceKind::Rook)));
            res.put2(File::B, rank, Some(Piece::new(color, PieceKind::Knight)));
            res.put2(File::C, rank, Some(Piece::new(color, PieceKind::Bishop)));
            res.put2(File::D, rank, Some(Piece::new(color, PieceKind::Queen)));
            res.put2(File::E, rank, Some(Piece::new(color, PieceKind::King)));
            res.put2(File::F, rank, Some(Piece::new(color, PieceKind::Bishop)));
            res.put2(File::G, rank, Some(Piece::new(color, PieceKind::Knight)));
            res.put2(File::H, rank, Some(Piece::new(color, PieceKind::Rook)));
        }
        res
    }

    /// Returns the contents of the square with coordinate `c`
    #[inline]
    pub fn get(&self, c: Coord) -> Option<Piece> {
        self.squares[c.index()]
    }

    /// Returns the contents of the square with file `file` and rank `rank`
    #[inline]
    pub fn get2(&self, file: File, rank: Rank) -> Option<Piece> {
        self.get(Coord::from_parts(file, rank))
    }

    /// Puts `piece` (or clears the square, for `None`) at coordinate `c`
    #[inline]
    pub fn put(&mut self, c: Coord, piece: Option<Piece>) {
        self.squares[c.index()] = piece;
    }

    /// Puts `piece` at the square with file `file` and rank `rank`
    #[inline]
    pub fn put2(&mut self, file: File, rank: Rank, piece: Option<Piece>) {
        self.put(Coord::from_parts(file, rank), piece);
    }

    /// Returns the position of the king of color `c`, scanning the board
    ///
    /// Returns `None` if there is no such king; the engine tolerates
    /// king-less boards and callers must treat `None` as "cannot be
    /// attacked".
    pub fn king_pos(&self, c: Color) -> Option<Coord> {
        let king = Piece::new(c, PieceKind::King);
        Coord::iter().find(|&coord| self.get(coord) == Some(king))
    }

    /// Parses a board from an 8-line diagram, one rank per line starting
    /// from rank 8, `.` for an empty square and a piece letter otherwise
    /// (uppercase White, lowercase Black)
    ///
    /// This is the inverse of the [`Display`] form and is mainly useful for
    /// setting up test positions:
    ///
    /// ```
    /// # use rookery::Board;
    /// let board = Board::from_diagram(
    ///     "........\n\
    ///      ........\n\
    ///      ........\n\
    ///      ...k....\n\
    ///      ........\n\
    ///      ........\n\
    ///      ........\n\
    ///      ....K...",
    /// )
    /// .unwrap();
    /// assert_eq!(board.to_string().lines().nth(3), Some("...k...."));
    /// ```
    pub fn from_diagram(s: &str) -> Result<Board, BoardParseError> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if lines.len() != 8 {
            return Err(BoardParseError::BadRankCount(lines.len()));
        }
        let mut res = Board::empty();
        for (row, line) in lines.iter().enumerate() {
            let rank = Rank::from_index(row);
            if line.chars().count() != 8 {
                return Err(BoardParseError::BadRankLength(rank, line.chars().count()));
            }
            for (col, c) in line.chars().enumerate() {
                let piece = match c {
                    '.' => None,
                    _ => Some(Piece::from_char(c).ok_or(BoardParseError::UnexpectedChar(c))?),
                };
                res.put2(File::from_index(col), rank, piece);
            }
        }
        Ok(res)
    }

    /// Wraps the board to allow pretty-printing with the given style
    ///
    /// The resulting wrapper implements [`Display`], so can be used with
    /// `write!()`, `println!()`, or `ToString::to_string`.
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        Pretty { board: self, style }
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::empty()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for rank in Rank::iter() {
            if rank.index() != 0 {
                writeln!(f)?;
            }
            for file in File::iter() {
                match self.get2(file, rank) {
                    Some(piece) => write!(f, "{}", piece.as_char())?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        writeln!(f, "Board(")?;
        Display::fmt(self, f)?;
        write!(f, "\n)")
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Board, Self::Err> {
        Board::from_diagram(s)
    }
}

/// Style for [`Board::pretty()`]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PrettyStyle {
    /// Print pieces and frames as ASCII characters
    Ascii,
    /// Print pieces and frames as fancy Unicode characters
    Utf8,
}

/// Wrapper to pretty-print the board with rank and file labels
pub struct Pretty<'a> {
    board: &'a Board,
    style: PrettyStyle,
}

impl<'a> Display for Pretty<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        let (horz, vert, angle) = match self.style {
            PrettyStyle::Ascii => ('-', '|', '+'),
            PrettyStyle::Utf8 => ('─', '│', '┼'),
        };
        for rank in Rank::iter() {
            write!(f, "{}{}", rank, vert)?;
            for file in File::iter() {
                match (self.board.get2(file, rank), self.style) {
                    (Some(piece), PrettyStyle::Ascii) => write!(f, "{}", piece.as_char())?,
                    (Some(piece), PrettyStyle::Utf8) => write!(f, "{}", piece.as_utf8_char())?,
                    (None, _) => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "{}{}", horz, angle)?;
        for _ in File::iter() {
            write!(f, "{}", horz)?;
        }
        writeln!(f)?;
        write!(f, " {}", vert)?;
        for file in File::iter() {
            write!(f, "{}", file)?;
        }
        writeln!(f)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const INITIAL_DIAGRAM: &str = "rnbqkbnr\n\
                                   pppppppp\n\
                                   ........\n\
                                   ........\n\
                                   ........\n\
                                   ........\n\
                                   PPPPPPPP\n\
                                   RNBQKBNR";

    #[test]
    fn test_initial() {
        let board = Board::initial();
        assert_eq!(board.to_string(), INITIAL_DIAGRAM);
        assert_eq!(Board::from_str(INITIAL_DIAGRAM), Ok(board));
        assert_eq!(
            board.get2(File::E, Rank::R1),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            board.get2(File::D, Rank::R8),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert_eq!(board.get2(File::E, Rank::R4), None);
    }

    #[test]
    fn test_put_get() {
        let mut board = Board::empty();
        let e4 = Coord::from_str("e4").unwrap();
        assert_eq!(board.get(e4), None);
        board.put(e4, Some(Piece::new(Color::White, PieceKind::Rook)));
        assert_eq!(
            board.get(e4),
            Some(Piece::new(Color::White, PieceKind::Rook))
        );
        board.put(e4, None);
        assert_eq!(board.get(e4), None);
    }

    #[test]
    fn test_king_pos() {
        let board = Board::initial();
        assert_eq!(
            board.king_pos(Color::White),
            Some(Coord::from_parts(File::E, Rank::R1))
        );
        assert_eq!(
            board.king_pos(Color::Black),
            Some(Coord::from_parts(File::E, Rank::R8))
        );
        assert_eq!(Board::empty().king_pos(Color::White), None);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Board::from_diagram("........"),
            Err(BoardParseError::BadRankCount(1))
        );
        let short = "........\n........\n........\n........\n\
                     ........\n........\n........\n.......";
        assert_eq!(
            Board::from_diagram(short),
            Err(BoardParseError::BadRankLength(Rank::R1, 7))
        );
        let bad = "........\n........\n........\n........\n\
                   ........\n........\n........\n...x....";
        assert_eq!(
            Board::from_diagram(bad),
            Err(BoardParseError::UnexpectedChar('x'))
        );
    }

    #[test]
    fn test_pretty() {
        let board = Board::initial();
        let res = r#"
8|rnbqkbnr
7|pppppppp
6|........
5|........
4|........
3|........
2|PPPPPPPP
1|RNBQKBNR
-+--------
 |abcdefgh
"#;
        assert_eq!(
            board.pretty(PrettyStyle::Ascii).to_string().trim(),
            res.trim()
        );
    }
}
