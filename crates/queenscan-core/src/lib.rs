//! Core board types for queenscan.
//!
//! This crate provides the foundation the move scanner is built on:
//!
//! - [`Coord`] for grid coordinates and their algebraic labels
//! - [`Piece`] and [`Side`] for cell occupants
//! - [`Board`] for the parsed 8x8 snapshot, including grid parsing and the
//!   framed text diagram

mod board;
mod coord;
mod piece;

pub use board::{Board, GridError};
pub use coord::Coord;
pub use piece::{Piece, Side};
