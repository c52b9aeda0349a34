use super::super::{Board, CaptureTable, Move, MoveList, Piece, Square};

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
];

/// Type of sliding piece for move generation
#[derive(Clone, Copy, Debug)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    const fn piece(self) -> Piece {
        match self {
            SliderType::Bishop => Piece::Bishop,
            SliderType::Rook => Piece::Rook,
            SliderType::Queen => Piece::Queen,
        }
    }

    const fn directions(self) -> &'static [(isize, isize)] {
        match self {
            SliderType::Bishop => &BISHOP_DIRECTIONS,
            SliderType::Rook => &ROOK_DIRECTIONS,
            SliderType::Queen => &QUEEN_DIRECTIONS,
        }
    }
}

impl Board {
    /// Cast a ray per direction. Empty squares are moves and the ray goes on;
    /// prey ends the ray with a capture; anything else ends it without one.
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        slider: SliderType,
        rules: CaptureTable,
    ) -> MoveList {
        let mut moves = MoveList::new();
        let mover = slider.piece();

        for &(dr, dc) in slider.directions() {
            let mut cursor = from.offset(dr, dc);
            while let Some(to) = cursor {
                match self.color_on(to) {
                    None => {
                        moves.push(Move::new(from, to));
                        cursor = to.offset(dr, dc);
                    }
                    Some(target) => {
                        if rules.can_capture(mover, target) {
                            moves.push(Move::new(from, to));
                        }
                        break;
                    }
                }
            }
        }
        moves
    }
}
