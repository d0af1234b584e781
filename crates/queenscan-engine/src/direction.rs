//! The eight ray directions.

/// A direction a queen's ray can travel.
///
/// `North` points toward rank 8, the top line of the parsed grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    West,
    East,
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Direction {
    /// All eight directions, in the order rays are walked and reported:
    /// the orthogonals first, then the diagonals.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthWest,
        Direction::SouthEast,
    ];

    /// The `(drow, dcol)` step applied once per cell along the ray.
    ///
    /// Rows grow downward, so north is a negative row step.
    #[inline]
    pub const fn step(self) -> (i8, i8) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::NorthWest => (-1, -1),
            Direction::NorthEast => (-1, 1),
            Direction::SouthWest => (1, -1),
            Direction::SouthEast => (1, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use queenscan_core::Coord;

    #[test]
    fn step_vectors() {
        for dir in Direction::ALL {
            let (drow, dcol) = dir.step();
            assert!(drow.abs() <= 1 && dcol.abs() <= 1);
            assert!((drow, dcol) != (0, 0), "{:?} does not move", dir);
        }
    }

    #[test]
    fn directions_distinct() {
        let steps: std::collections::HashSet<(i8, i8)> =
            Direction::ALL.iter().map(|d| d.step()).collect();
        assert_eq!(steps.len(), 8);
    }

    #[test]
    fn north_points_up() {
        let d4 = Coord::from_algebraic("d4").unwrap();
        let (drow, dcol) = Direction::North.step();
        assert_eq!(d4.offset(drow, dcol), Coord::from_algebraic("d5"));
    }
}
