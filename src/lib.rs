pub mod board;
pub mod game;

pub use board::{best_move, Board, Color, GameStatus, Move, Piece, Square};
pub use game::{Game, GameOutcome, Player};
