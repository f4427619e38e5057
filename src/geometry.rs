//! Color-dependent board geometry

use crate::types::{Color, Coord, File, Rank};

/// Home rank of the king and rooks
pub const fn back_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R1,
        Color::Black => Rank::R8,
    }
}

/// Rank from which a pawn may advance two squares
pub const fn pawn_home_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R2,
        Color::Black => Rank::R7,
    }
}

/// Rank on which a pawn is promoted
pub const fn promotion_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R8,
        Color::Black => Rank::R1,
    }
}

/// Row delta of a single pawn step
///
/// White pawns move toward decreasing row indices, Black pawns toward
/// increasing ones.
pub const fn pawn_step(c: Color) -> isize {
    match c {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// King's starting square
pub const fn king_home(c: Color) -> Coord {
    Coord::from_parts(File::E, back_rank(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation() {
        // Row 0 is Black's back rank, so White pawns walk "up" the array.
        assert_eq!(back_rank(Color::White).index(), 7);
        assert_eq!(back_rank(Color::Black).index(), 0);
        assert_eq!(pawn_home_rank(Color::White).index(), 6);
        assert_eq!(pawn_home_rank(Color::Black).index(), 1);
        assert_eq!(promotion_rank(Color::White).index(), 0);
        assert_eq!(promotion_rank(Color::Black).index(), 7);
        assert_eq!(pawn_step(Color::White), -1);
        assert_eq!(pawn_step(Color::Black), 1);
        assert_eq!(king_home(Color::White).to_string(), "e1");
    }
}
