//! Queen move generation for 8x8 board snapshots.
//!
//! Given a parsed [`Board`](queenscan_core::Board), this crate finds every
//! queen of the moving side and walks the eight rays from each one. Every
//! cell a ray reaches is classified:
//!
//! - an empty cell becomes a quiet move and the ray continues,
//! - an opposing piece becomes a capture and the ray stops,
//! - the opposing king collapses the whole report into a checkmate signal,
//! - an own piece stops the ray without emitting anything.
//!
//! # Example
//!
//! ```
//! use queenscan_core::Board;
//! use queenscan_engine::{scan, MoveReport};
//!
//! let board = Board::parse(concat!(
//!     "        \n",
//!     "        \n",
//!     "        \n",
//!     "        \n",
//!     "   q    \n",
//!     "        \n",
//!     "        \n",
//!     "        \n",
//! ))
//! .unwrap();
//!
//! let reports = scan(&board);
//! assert_eq!(reports.len(), 1);
//! assert_eq!(reports[0].queen.to_algebraic(), "d4");
//! match &reports[0].moves {
//!     MoveReport::Moves(moves) => assert_eq!(moves.len(), 27),
//!     other => panic!("unexpected report: {other:?}"),
//! }
//! ```

mod direction;
mod mov;
mod movegen;

pub use direction::Direction;
pub use mov::{Move, MoveReport};
pub use movegen::{queen_moves, scan, QueenReport};
