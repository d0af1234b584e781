//! Move descriptors and the per-queen verdict.

use queenscan_core::{Coord, Piece, Side};
use std::fmt;

/// A single descriptor emitted while walking a ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// A move to an empty cell.
    Quiet(Coord),
    /// A capture of the opposing piece on the cell; the ray stops here.
    Capture(Coord, Piece),
    /// The ray reached the opposing king.
    Checkmate,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Quiet(to) => write!(f, "{}", to),
            Move::Capture(to, piece) => {
                write!(f, "{}x{}", to, piece.to_char(Side::Opponent))
            }
            Move::Checkmate => write!(f, "checkmate"),
        }
    }
}

/// The generator's verdict for one queen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveReport {
    /// Some ray reached the opposing king. Suppresses everything else the
    /// other rays produced.
    Checkmate,
    /// No ray produced a move. Distinct from an empty list so callers
    /// cannot confuse "nothing to say" with "nothing found".
    NoMoves,
    /// Quiet moves and captures in ray order. Never empty, and never
    /// contains [`Move::Checkmate`]; that collapses the whole report into
    /// [`MoveReport::Checkmate`].
    Moves(Vec<Move>),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(label: &str) -> Coord {
        Coord::from_algebraic(label).unwrap()
    }

    #[test]
    fn display_quiet() {
        assert_eq!(Move::Quiet(at("d5")).to_string(), "d5");
        assert_eq!(Move::Quiet(at("a1")).to_string(), "a1");
    }

    #[test]
    fn display_capture() {
        assert_eq!(Move::Capture(at("d7"), Piece::Rook).to_string(), "d7xR");
        assert_eq!(Move::Capture(at("g1"), Piece::Pawn).to_string(), "g1xP");
        assert_eq!(Move::Capture(at("b6"), Piece::Queen).to_string(), "b6xQ");
    }

    #[test]
    fn display_checkmate() {
        assert_eq!(Move::Checkmate.to_string(), "checkmate");
    }
}
