//! The 8x8 board snapshot and its textual grid format.

use crate::{Coord, Piece, Side};
use std::fmt;
use thiserror::Error;

/// Errors produced while parsing a textual board grid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The input ended before 8 rows were read.
    #[error("expected 8 rows, got {0}")]
    MissingRows(usize),

    /// A line inside the grid has fewer than 8 characters.
    #[error("line {line} has {len} cells, expected 8")]
    ShortRow { line: usize, len: usize },

    /// A character inside the 8x8 window is neither a piece letter nor a
    /// space.
    #[error("unrecognized occupant {occupant:?} at {label}")]
    UnknownOccupant { occupant: char, label: String },
}

/// A parsed 8x8 board snapshot.
///
/// Cells are stored in reading order, index `row * 8 + col`, with a8 at
/// index 0. A board is built once, by [`Board::parse`] or repeated
/// [`Board::place`] calls, and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<(Piece, Side)>; 64],
}

impl Board {
    /// Creates a board with every cell empty.
    pub const fn empty() -> Self {
        Board { cells: [None; 64] }
    }

    /// Parses a board from its textual grid.
    ///
    /// The first 8 lines are the board, top line first, and the first 8
    /// characters of each line are its cells. Anything beyond that window
    /// is ignored: extra columns, extra rows, and the trailing newline.
    /// A space is an empty cell; the twelve piece letters place a piece,
    /// lowercase for the moving side and uppercase for the opponent.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut board = Board::empty();
        let mut rows = 0;

        for (row, line) in text.lines().take(8).enumerate() {
            rows += 1;
            let width = line.chars().count();
            if width < 8 {
                return Err(GridError::ShortRow {
                    line: row + 1,
                    len: width,
                });
            }
            for (col, c) in line.chars().take(8).enumerate() {
                if c == ' ' {
                    continue;
                }
                let at = match Coord::new(row as u8, col as u8) {
                    Some(at) => at,
                    // take(8) bounds both axes
                    None => unreachable!(),
                };
                match Piece::from_char(c) {
                    Some((piece, side)) => board.place(at, piece, side),
                    None => {
                        return Err(GridError::UnknownOccupant {
                            occupant: c,
                            label: at.to_algebraic(),
                        });
                    }
                }
            }
        }

        if rows < 8 {
            return Err(GridError::MissingRows(rows));
        }
        Ok(board)
    }

    /// Puts a piece on a cell, replacing whatever occupied it.
    pub fn place(&mut self, at: Coord, piece: Piece, side: Side) {
        self.cells[at.index()] = Some((piece, side));
    }

    /// Returns the occupant of a cell, if any.
    #[inline]
    pub fn piece_at(&self, at: Coord) -> Option<(Piece, Side)> {
        self.cells[at.index()]
    }

    /// Iterates the coordinates of the moving side's queens in grid order,
    /// topmost-leftmost first.
    pub fn queens(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(|&at| self.piece_at(at) == Some((Piece::Queen, Side::Own)))
    }
}

/// Renders the framed diagram: rank digits down the left edge, file
/// letters along the bottom, one occupant letter per cell.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +-+-+-+-+-+-+-+-+")?;
        for at in Coord::all() {
            if at.col() == 0 {
                write!(f, "{} |", at.rank_char())?;
            }
            let c = match self.piece_at(at) {
                Some((piece, side)) => piece.to_char(side),
                None => ' ',
            };
            write!(f, "{}|", c)?;
            if at.col() == 7 {
                writeln!(f)?;
                writeln!(f, "  +-+-+-+-+-+-+-+-+")?;
            }
        }
        write!(f, "   a b c d e f g h")
    }
}
