use super::super::{Board, CaptureTable, Move, MoveList, Piece, Square};

impl Board {
    /// Pawns of both colors step toward increasing row. There is no double
    /// step, en passant or promotion.
    pub(crate) fn generate_pawn_moves(&self, from: Square, rules: CaptureTable) -> MoveList {
        let mut moves = MoveList::new();

        if let Some(forward) = from.offset(1, 0) {
            if self.is_empty(forward) {
                moves.push(Move::new(from, forward));
            }
        }

        for dc in [-1, 1] {
            let Some(target) = from.offset(1, dc) else {
                continue;
            };
            if let Some(color) = self.color_on(target) {
                if rules.can_capture(Piece::Pawn, color) {
                    moves.push(Move::new(from, target));
                }
            }
        }

        moves
    }
}
