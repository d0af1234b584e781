//! Ray walking and whole-board scanning.

use crate::{Direction, Move, MoveReport};
use queenscan_core::{Board, Coord, Piece, Side};

/// The report for one discovered queen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueenReport {
    /// Where the queen stands.
    pub queen: Coord,
    /// The verdict for that queen.
    pub moves: MoveReport,
}

/// Walks one ray from `from`, appending a descriptor per reachable cell.
///
/// The walk ends at the board edge, after a capture or a checkmate, or
/// silently at the first own piece.
fn walk_ray(board: &Board, from: Coord, dir: Direction, out: &mut Vec<Move>) {
    let (drow, dcol) = dir.step();
    let mut at = from;
    while let Some(next) = at.offset(drow, dcol) {
        match board.piece_at(next) {
            None => out.push(Move::Quiet(next)),
            Some((Piece::King, Side::Opponent)) => {
                out.push(Move::Checkmate);
                return;
            }
            Some((piece, Side::Opponent)) => {
                out.push(Move::Capture(next, piece));
                return;
            }
            Some((_, Side::Own)) => return,
        }
        at = next;
    }
}

/// Generates the report for the queen standing on `from`.
///
/// The cell must hold the moving side's queen; calling this for any other
/// cell is a caller bug.
///
/// Rays are walked in [`Direction::ALL`] order and their descriptors
/// concatenated. A ray that reached the opposing king collapses the whole
/// report into [`MoveReport::Checkmate`]; an empty list becomes
/// [`MoveReport::NoMoves`].
pub fn queen_moves(board: &Board, from: Coord) -> MoveReport {
    debug_assert!(
        board.piece_at(from) == Some((Piece::Queen, Side::Own)),
        "queen_moves called for {} which holds {:?}",
        from,
        board.piece_at(from)
    );

    let mut moves = Vec::new();
    for dir in Direction::ALL {
        walk_ray(board, from, dir, &mut moves);
    }

    if moves.contains(&Move::Checkmate) {
        MoveReport::Checkmate
    } else if moves.is_empty() {
        MoveReport::NoMoves
    } else {
        MoveReport::Moves(moves)
    }
}

/// Scans the board and reports every queen of the moving side, in grid
/// order, topmost-leftmost first. Each queen gets its own verdict; one
/// queen's checkmate does not silence another's move list.
pub fn scan(board: &Board) -> Vec<QueenReport> {
    board
        .queens()
        .map(|queen| QueenReport {
            queen,
            moves: queen_moves(board, queen),
        })
        .collect()
}
