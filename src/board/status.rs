//! Checkmate and stalemate detection.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::rules::king_square_after_escape;
use super::{Board, BoardError, Color};

/// Outcome of classifying a position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Checkmate => write!(f, "checkmate"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

impl Board {
    /// Checkmate, stalemate or neither, for `color` to move.
    pub fn classify(&self, color: Color) -> Result<GameStatus, BoardError> {
        if self.is_checkmate(color)? {
            Ok(GameStatus::Checkmate)
        } else if self.is_stalemate(color)? {
            Ok(GameStatus::Stalemate)
        } else {
            Ok(GameStatus::Ongoing)
        }
    }

    /// `color` is in check and no generated move clears the king's square.
    pub fn is_checkmate(&self, color: Color) -> Result<bool, BoardError> {
        let king = self.king_square(color)?;
        let attacker = color.opponent();
        if !self.is_square_attacked(attacker, king) {
            return Ok(false);
        }

        let escaped = self.generate_moves(color).iter().any(|&mv| {
            let probe = king_square_after_escape(king, mv);
            !self.with_move(mv).is_square_attacked(attacker, probe)
        });
        Ok(!escaped)
    }

    /// `color` has no generated moves and is not in check.
    pub fn is_stalemate(&self, color: Color) -> Result<bool, BoardError> {
        if !self.generate_moves(color).is_empty() {
            return Ok(false);
        }
        Ok(!self.is_in_check(color)?)
    }
}
