//! Chess board representation and game logic.
//!
//! An 8x8 grid of optional pieces with pseudo-legal move generation, check
//! and terminal-state detection, a material evaluator and a fixed-depth
//! alpha-beta search. The rule set is deliberately reduced: no castling,
//! en passant, promotion or double pawn step, and pawns of both colors
//! advance toward row 7. See [`rules`] for the capture asymmetries kept on
//! purpose.
//!
//! # Example
//! ```
//! use alphabeta_chess::board::{Board, Color, GameStatus};
//!
//! let board = Board::new();
//! let moves = board.generate_moves(Color::Black);
//! println!("Black has {} moves in the starting position", moves.len());
//! assert_eq!(board.classify(Color::Black), Ok(GameStatus::Ongoing));
//! ```

mod attacks;
mod builder;
mod display;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
pub mod prelude;
pub mod rules;
mod search;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{BoardError, FenError, MoveParseError, SquareError};
pub use make_unmake::UnmakeInfo;
pub use rules::{CaptureTable, SearchSides};
pub use state::{Board, Occupant};
pub use status::GameStatus;
pub use types::{Color, Move, MoveList, Piece, Square, BOARD_SIZE};

// Public API - search functions and configuration
pub use search::{
    best_move, find_best_move, minimax, LogLogger, SearchInfo, SearchLogger, SearchParams,
    SearchResult, StdoutLogger, DEFAULT_DEPTH, INFINITY,
};

#[cfg(test)]
pub(crate) use search::SearchContext;
