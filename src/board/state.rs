use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{BoardError, Color, Piece, Square, BOARD_SIZE};

/// Contents of a single square.
pub type Occupant = Option<(Color, Piece)>;

const BACK_RANK: [Piece; BOARD_SIZE] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

static START_POSITION: Lazy<Board> = Lazy::new(|| {
    let mut board = Board::empty();
    for (col, piece) in BACK_RANK.iter().enumerate() {
        for color in Color::BOTH {
            board.set_piece(Square(color.back_row(), col), color, *piece);
            board.set_piece(Square(color.pawn_row(), col), color, Piece::Pawn);
        }
    }
    board
});

/// An 8x8 grid of squares, each empty or holding one piece.
///
/// The board holds no side-to-move or history; callers track whose turn it
/// is. Search works on clones so that sibling branches never share state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) squares: [[Occupant; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// The standard initial layout, Black on rows 0-1 and White on rows 6-7.
    #[must_use]
    pub fn new() -> Self {
        START_POSITION.clone()
    }

    /// A board with no pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    #[inline]
    fn cell(&self, sq: Square) -> &Occupant {
        assert!(
            sq.0 < BOARD_SIZE && sq.1 < BOARD_SIZE,
            "square ({}, {}) is off the board",
            sq.0,
            sq.1
        );
        &self.squares[sq.0][sq.1]
    }

    #[inline]
    fn cell_mut(&mut self, sq: Square) -> &mut Occupant {
        assert!(
            sq.0 < BOARD_SIZE && sq.1 < BOARD_SIZE,
            "square ({}, {}) is off the board",
            sq.0,
            sq.1
        );
        &mut self.squares[sq.0][sq.1]
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Occupant {
        *self.cell(sq)
    }

    #[inline]
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    #[inline]
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cell(sq).is_none()
    }

    /// Put a piece on a square, replacing whatever was there.
    pub fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        *self.cell_mut(sq) = Some((color, piece));
    }

    /// Empty a square, returning its previous occupant.
    pub fn clear(&mut self, sq: Square) -> Occupant {
        self.cell_mut(sq).take()
    }

    pub(crate) fn set_occupant(&mut self, sq: Square, occupant: Occupant) {
        *self.cell_mut(sq) = occupant;
    }

    /// All pieces in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|(c, p)| (sq, c, p)))
    }

    /// Squares holding pieces of `color`, in row-major order.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.pieces()
            .filter(move |(_, c, _)| *c == color)
            .map(|(sq, _, _)| sq)
    }

    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// First square in row-major order holding `color`'s king.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|&(_, c, p)| c == color && p == Piece::King)
            .map(|(sq, _, _)| sq)
    }

    /// Like [`Board::find_king`], but a missing king is an error.
    pub fn king_square(&self, color: Color) -> Result<Square, BoardError> {
        self.find_king(color)
            .ok_or(BoardError::MissingKing { color })
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
