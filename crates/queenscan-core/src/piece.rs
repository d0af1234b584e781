//! Cell occupants: piece kinds and the two sides.

/// Which army an occupant belongs to, under the case convention of the
/// input grid: lowercase letters are the moving side, uppercase letters
/// are the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The moving side, written in lowercase. Its queens are the ones
    /// scanned for moves.
    Own,
    /// The opposing side, written in uppercase.
    Opponent,
}

/// One of the six piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// All six piece kinds.
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    /// Parses an occupant letter into a piece and the side it belongs to.
    ///
    /// Returns `None` for anything outside the twelve recognized letters,
    /// including the space that marks an empty cell.
    pub const fn from_char(c: char) -> Option<(Piece, Side)> {
        let side = if c.is_ascii_uppercase() {
            Side::Opponent
        } else {
            Side::Own
        };
        let piece = match c.to_ascii_lowercase() {
            'p' => Piece::Pawn,
            'n' => Piece::Knight,
            'b' => Piece::Bishop,
            'r' => Piece::Rook,
            'q' => Piece::Queen,
            'k' => Piece::King,
            _ => return None,
        };
        Some((piece, side))
    }

    /// Returns the occupant letter for this piece on the given side.
    pub const fn to_char(self, side: Side) -> char {
        let c = match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        };
        match side {
            Side::Own => c,
            Side::Opponent => c.to_ascii_uppercase(),
        }
    }
}
