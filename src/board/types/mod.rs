//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - (row, col) board coordinate
//! - `Move` and `MoveList` - move representation

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveList};
pub use piece::{Color, Piece};
pub use square::{Square, BOARD_SIZE};
