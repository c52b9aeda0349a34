//! Pseudo-legal move generation.
//!
//! Moves are produced for every piece of the requested color, scanning origin
//! squares row by row, and for each piece in a fixed direction order. Nothing
//! here checks whether the mover's own king is left in check.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use sliders::SliderType;

use super::{Board, CaptureTable, Color, Move, MoveList, Piece, Square};

impl Board {
    /// Every pseudo-legal move for `color` under the default capture rules.
    #[must_use]
    pub fn generate_moves(&self, color: Color) -> MoveList {
        self.generate_moves_with(color, CaptureTable::CASE_CONVENTION)
    }

    /// Every pseudo-legal move for `color` under `rules`.
    #[must_use]
    pub fn generate_moves_with(&self, color: Color, rules: CaptureTable) -> MoveList {
        let mut moves = MoveList::new();
        for from in self.squares_of(color) {
            moves.extend_from(self.generate_piece_moves_with(from, rules));
        }
        moves
    }

    /// Moves for the piece standing on `from`; empty when the square is empty.
    #[must_use]
    pub fn generate_piece_moves(&self, from: Square) -> MoveList {
        self.generate_piece_moves_with(from, CaptureTable::CASE_CONVENTION)
    }

    fn generate_piece_moves_with(&self, from: Square, rules: CaptureTable) -> MoveList {
        match self.piece_on(from) {
            Some(Piece::Pawn) => self.generate_pawn_moves(from, rules),
            Some(Piece::Knight) => self.generate_knight_moves(from, rules),
            Some(Piece::Bishop) => self.generate_slider_moves(from, SliderType::Bishop, rules),
            Some(Piece::Rook) => self.generate_slider_moves(from, SliderType::Rook, rules),
            Some(Piece::Queen) => self.generate_slider_moves(from, SliderType::Queen, rules),
            Some(Piece::King) => self.generate_king_moves(from, rules),
            None => MoveList::new(),
        }
    }

    /// Single-step moves (knight, king): the target must be empty or hold the
    /// mover's prey.
    fn generate_step_moves(
        &self,
        from: Square,
        mover: Piece,
        offsets: &[(isize, isize)],
        rules: CaptureTable,
    ) -> MoveList {
        let mut moves = MoveList::new();
        for &(dr, dc) in offsets {
            let Some(to) = from.offset(dr, dc) else {
                continue;
            };
            let lands = match self.color_on(to) {
                None => true,
                Some(target) => rules.can_capture(mover, target),
            };
            if lands {
                moves.push(Move::new(from, to));
            }
        }
        moves
    }
}
