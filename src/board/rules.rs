//! Rule tables for the simplified rule set.
//!
//! Sides are tracked with an explicit [`Color`], but the engine keeps the
//! capture and search-side behaviour of a ruleset that told sides apart by
//! letter case: uppercase (White) pieces are the only pawn prey, lowercase
//! (Black) pieces are the only prey of every other piece, and the search
//! always maximizes over White's moves and minimizes over Black's. These
//! asymmetries are collected here so that changing them touches one place.

use super::{Color, Move, Piece, Square};

/// Which color each kind of mover is allowed to capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CaptureTable {
    /// Color a pawn may take on its forward diagonals.
    pub pawn_prey: Color,
    /// Color knights, bishops, rooks, queens and kings may land on.
    pub piece_prey: Color,
}

impl CaptureTable {
    /// Uppercase pieces are pawn prey, lowercase pieces are prey for the rest,
    /// whichever side is moving.
    pub const CASE_CONVENTION: CaptureTable = CaptureTable {
        pawn_prey: Color::White,
        piece_prey: Color::Black,
    };

    /// The color `mover` may capture.
    #[inline]
    #[must_use]
    pub const fn prey(self, mover: Piece) -> Color {
        match mover {
            Piece::Pawn => self.pawn_prey,
            _ => self.piece_prey,
        }
    }

    #[inline]
    #[must_use]
    pub fn can_capture(self, mover: Piece, target: Color) -> bool {
        self.prey(mover) == target
    }
}

impl Default for CaptureTable {
    fn default() -> Self {
        CaptureTable::CASE_CONVENTION
    }
}

/// Whose moves a minimax node expands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SearchSides {
    pub maximizer: Color,
    pub minimizer: Color,
}

impl SearchSides {
    /// Maximizing nodes expand White, minimizing nodes expand Black,
    /// independent of the side the search was started for.
    pub const CASE_CONVENTION: SearchSides = SearchSides {
        maximizer: Color::White,
        minimizer: Color::Black,
    };

    #[inline]
    #[must_use]
    pub const fn mover(self, maximizing: bool) -> Color {
        if maximizing {
            self.maximizer
        } else {
            self.minimizer
        }
    }
}

impl Default for SearchSides {
    fn default() -> Self {
        SearchSides::CASE_CONVENTION
    }
}

/// Square whose safety decides whether `escape` gets the king out of check.
///
/// The king is not re-located after the move, so a king move is judged by
/// the square it left.
#[inline]
#[must_use]
pub(crate) fn king_square_after_escape(pre_move_king: Square, _escape: Move) -> Square {
    pre_move_king
}
