use super::error::{FenError, MoveParseError};
use super::{Board, Color, Move, Piece, Square, BOARD_SIZE};

impl Board {
    /// Parse a board from the piece-placement field of a FEN string.
    ///
    /// The first row of the placement is row 0 (Black's home rank). Uppercase
    /// letters are White pieces, lowercase are Black. Any fields after the
    /// placement (side to move, castling, ...) are ignored since the board
    /// does not track them.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let placement = fen.split_whitespace().next().unwrap_or("");
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(FenError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (row, row_str) in rows.iter().enumerate() {
            let mut col = 0;
            for c in row_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if col >= BOARD_SIZE {
                    return Err(FenError::WrongRowLength {
                        row,
                        squares: col + 1,
                    });
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                board.set_piece(Square(row, col), color, piece);
                col += 1;
            }
            if col != BOARD_SIZE {
                return Err(FenError::WrongRowLength { row, squares: col });
            }
        }
        Ok(board)
    }

    /// Parse a board from FEN piece placement.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// The FEN piece-placement field for this board.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(BOARD_SIZE);
        for row in 0..BOARD_SIZE {
            let mut out = String::new();
            let mut empty = 0;
            for col in 0..BOARD_SIZE {
                if let Some((color, piece)) = self.piece_at(Square(row, col)) {
                    if empty > 0 {
                        out.push_str(&empty.to_string());
                        empty = 0;
                    }
                    out.push(piece.to_layout_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            rows.push(out);
        }
        rows.join("/")
    }

    /// Parse a move in coordinate notation (e.g. "e7e6") for `color`.
    ///
    /// Returns the move if `color` can make it here, or an error describing
    /// why parsing failed.
    ///
    /// # Example
    /// ```
    /// use alphabeta_chess::board::{Board, Color};
    ///
    /// let board = Board::new();
    /// let mv = board.parse_move(Color::Black, "e7e6").unwrap();
    /// assert_eq!(mv.to_string(), "e7e6");
    /// ```
    pub fn parse_move(&self, color: Color, text: &str) -> Result<Move, MoveParseError> {
        let mv: Move = text.parse()?;
        if self.generate_moves(color).contains(mv) {
            Ok(mv)
        } else {
            Err(MoveParseError::IllegalMove {
                notation: text.trim().to_string(),
            })
        }
    }
}
