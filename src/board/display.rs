use std::fmt;

use super::{Board, Square, BOARD_SIZE};

const EMPTY_SYMBOL: char = '□';

impl fmt::Display for Board {
    /// One line per row, row 0 first, Unicode glyphs separated by spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if col > 0 {
                    write!(f, " ")?;
                }
                let glyph = self
                    .piece_at(Square(row, col))
                    .map_or(EMPTY_SYMBOL, |(color, piece)| piece.symbol(color));
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
