//! Turn loop for playing a game between two [`Player`]s.
//!
//! Each turn renders the board, asks the side to move for a move, applies it
//! and classifies the position for the other side. Checkmate and stalemate
//! end the game; otherwise the sides swap.

mod options;
mod player;

use std::fmt;
use std::io::{self, Write};

pub use options::{GameOptions, OptionsError, PlayerKind, USAGE};
pub use player::{EnginePlayer, HumanPlayer, Player, RandomPlayer};

use crate::board::{Board, BoardError, Color, GameStatus};

/// Error type for a game that could not be played to the end
#[derive(Debug)]
pub enum GameError {
    /// The position could not be classified
    Board(BoardError),
    /// Reading a move or writing output failed
    Io(io::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "Board error: {e}"),
            GameError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Board(e) => Some(e),
            GameError::Io(e) => Some(e),
        }
    }
}

impl From<BoardError> for GameError {
    fn from(e: BoardError) -> Self {
        GameError::Board(e)
    }
}

impl From<io::Error> for GameError {
    fn from(e: io::Error) -> Self {
        GameError::Io(e)
    }
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate,
    /// A move took the opposing king; the reduced rules allow it.
    KingCaptured { winner: Color },
    /// The side to move produced no move.
    NoMove { side: Color },
    /// The configured ply limit was reached.
    PlyLimit,
}

/// The authoritative board plus whose turn it is.
pub struct Game<W> {
    board: Board,
    side_to_move: Color,
    plies: u32,
    max_plies: Option<u32>,
    out: W,
}

impl<W: Write> Game<W> {
    /// A game from the standard initial layout with White to move.
    pub fn new(out: W) -> Self {
        Game::from_position(Board::new(), Color::White, out)
    }

    pub fn from_position(board: Board, side_to_move: Color, out: W) -> Self {
        Game {
            board,
            side_to_move,
            plies: 0,
            max_plies: None,
            out,
        }
    }

    #[must_use]
    pub fn with_max_plies(mut self, max_plies: Option<u32>) -> Self {
        self.max_plies = max_plies;
        self
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Half-moves played so far.
    #[must_use]
    pub fn plies(&self) -> u32 {
        self.plies
    }

    /// Consume the game, returning its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Play until the game ends.
    pub fn play(
        &mut self,
        white: &mut dyn Player,
        black: &mut dyn Player,
    ) -> Result<GameOutcome, GameError> {
        loop {
            if self.max_plies.is_some_and(|limit| self.plies >= limit) {
                writeln!(self.out, "Ply limit of {} reached.", self.plies)?;
                return Ok(GameOutcome::PlyLimit);
            }

            let side = self.side_to_move;
            writeln!(self.out, "{}", self.board)?;
            writeln!(
                self.out,
                "Player ({})'s turn.",
                side.to_char().to_ascii_uppercase()
            )?;

            let player: &mut dyn Player = match side {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };
            let Some(mv) = player.choose_move(&self.board, side)? else {
                writeln!(self.out, "No move from {side} ({}).", player.name())?;
                return Ok(GameOutcome::NoMove { side });
            };

            self.board.apply_move(mv);
            self.plies += 1;
            writeln!(self.out, "{side} plays {mv}")?;

            if let Some(outcome) = self.check_game_over(side)? {
                writeln!(self.out, "{}", self.board)?;
                return Ok(outcome);
            }
            self.side_to_move = side.opponent();
        }
    }

    /// Classify the position for the side about to move, after `mover` moved.
    fn check_game_over(&mut self, mover: Color) -> Result<Option<GameOutcome>, GameError> {
        let next = mover.opponent();
        if self.board.find_king(next).is_none() {
            writeln!(
                self.out,
                "King captured! Player {} wins!",
                mover.to_char().to_ascii_uppercase()
            )?;
            return Ok(Some(GameOutcome::KingCaptured { winner: mover }));
        }

        match self.board.classify(next)? {
            GameStatus::Checkmate => {
                writeln!(
                    self.out,
                    "Checkmate! Player {} wins!",
                    mover.to_char().to_ascii_uppercase()
                )?;
                Ok(Some(GameOutcome::Checkmate { winner: mover }))
            }
            GameStatus::Stalemate => {
                writeln!(self.out, "Stalemate! The game is a draw.")?;
                Ok(Some(GameOutcome::Stalemate))
            }
            GameStatus::Ongoing => Ok(None),
        }
    }
}
