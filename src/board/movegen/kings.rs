use super::super::{Board, CaptureTable, MoveList, Piece, Square};

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Board {
    pub(crate) fn generate_king_moves(&self, from: Square, rules: CaptureTable) -> MoveList {
        self.generate_step_moves(from, Piece::King, &KING_OFFSETS, rules)
    }
}
