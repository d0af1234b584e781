//! Grid coordinates and algebraic labels.

use std::fmt;

/// A cell on the 8x8 grid, stored as an index in the range 0-63.
///
/// Cells are numbered in reading order: row 0 is the topmost line of the
/// input, so index 0 is a8 and index 63 is h1. The algebraic label is
/// derived from the row and column on demand and never stored:
///
/// - file letter: `'a' + col`
/// - rank digit: `'8' - row`
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord(u8);

impl Coord {
    /// Creates a coordinate from row and column indices, both 0-7.
    ///
    /// Returns `None` when either index falls outside the grid.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Coord(row * 8 + col))
        } else {
            None
        }
    }

    /// Creates a coordinate from a grid index in the range 0-63.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Coord(index))
        } else {
            None
        }
    }

    /// Parses a two-character algebraic label such as `"d4"`.
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let col = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        if col >= 8 || rank >= 8 {
            return None;
        }
        Coord::new(7 - rank, col)
    }

    /// Returns the grid index, 0-63.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the row, 0-7, where row 0 is the topmost input line.
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Returns the column, 0-7, where column 0 is the a-file.
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Returns the file letter of the label, `'a'` through `'h'`.
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col()) as char
    }

    /// Returns the rank digit of the label, `'1'` through `'8'`.
    ///
    /// Row 0 is rank 8: the grid is read top line first, like a printed
    /// board with the moving side's back rank at the bottom.
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'8' - self.row()) as char
    }

    /// Returns the two-character algebraic label for this cell.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file_char(), self.rank_char())
    }

    /// Steps by `(drow, dcol)`, returning `None` if that leaves the grid.
    ///
    /// Ray walks are bounded by this check alone: once `offset` returns
    /// `None` the walk is over, so an out-of-range index is never built.
    #[inline]
    pub const fn offset(self, drow: i8, dcol: i8) -> Option<Self> {
        // row 7 plus i8::MAX does not fit in i8, so sum in i16
        let row = self.row() as i16 + drow as i16;
        let col = self.col() as i16 + dcol as i16;
        if row < 0 || row > 7 || col < 0 || col > 7 {
            return None;
        }
        Coord::new(row as u8, col as u8)
    }

    /// Iterates all 64 coordinates in grid order, a8 first and h1 last.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..64u8).map(Coord)
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({})", self.to_algebraic())
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
