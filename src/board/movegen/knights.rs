use super::super::{Board, CaptureTable, MoveList, Piece, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, rules: CaptureTable) -> MoveList {
        self.generate_step_moves(from, Piece::Knight, &KNIGHT_OFFSETS, rules)
    }
}
