use super::{Board, Move, Occupant};

/// What `apply_move` overwrote, so the move can be taken back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnmakeInfo {
    pub(crate) captured: Occupant,
}

impl UnmakeInfo {
    /// The piece that stood on the destination square, if any.
    #[must_use]
    pub const fn captured(&self) -> Occupant {
        self.captured
    }
}

impl Board {
    /// Move the occupant of `mv.from` onto `mv.to`, replacing anything there,
    /// and leave `mv.from` empty.
    ///
    /// The move is not validated. Moving from an empty square clears the
    /// destination.
    pub fn apply_move(&mut self, mv: Move) -> UnmakeInfo {
        let mover = self.clear(mv.from);
        let captured = self.piece_at(mv.to);
        self.set_occupant(mv.to, mover);
        UnmakeInfo { captured }
    }

    /// Take back a move made by [`Board::apply_move`].
    pub fn unmake_move(&mut self, mv: Move, info: UnmakeInfo) {
        let mover = self.piece_at(mv.to);
        self.set_occupant(mv.from, mover);
        self.set_occupant(mv.to, info.captured);
    }

    /// A copy of this board with `mv` applied.
    #[must_use]
    pub fn with_move(&self, mv: Move) -> Board {
        let mut next = self.clone();
        next.apply_move(mv);
        next
    }
}
