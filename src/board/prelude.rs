//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use alphabeta_chess::board::prelude::*;
//! ```

pub use super::{
    best_move, find_best_move, Board, BoardBuilder, BoardError, Color, GameStatus, Move,
    MoveList, MoveParseError, Piece, SearchParams, Square,
};
