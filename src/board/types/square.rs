//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

/// A square on the chess board, represented as (row, col).
///
/// Row 0 is Black's home rank (rank 8), row 7 is White's home rank (rank 1).
/// Column 0 is the a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square(row, col))
        } else {
            None
        }
    }

    /// Get the row (0-7, where 0 = rank 8)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    /// Get the column (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// The square `(row + dr, col + dc)`, or `None` when it falls off the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Square> {
        let row = self.0.checked_add_signed(dr)?;
        let col = self.1.checked_add_signed(dc)?;
        Square::new(row, col)
    }

    /// Get the square's index (0-63, a8=0, b8=1, ..., h1=63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * BOARD_SIZE + self.1
    }

    /// Create a square from an index (0-63)
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        assert!(idx < BOARD_SIZE * BOARD_SIZE, "square index out of range");
        Square(idx / BOARD_SIZE, idx % BOARD_SIZE)
    }

    /// Every square in row-major scan order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE * BOARD_SIZE).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, BOARD_SIZE - self.0)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= BOARD_SIZE {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= BOARD_SIZE {
            return Err(SquareError::ColOutOfBounds { col });
        }
        Ok(Square(row, col))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }

        let col = match chars[0].to_ascii_lowercase() {
            c @ 'a'..='h' => c as usize - 'a' as usize,
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        let row = match chars[1] {
            c @ '1'..='8' => BOARD_SIZE - (c as usize - '0' as usize),
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        Ok(Square(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algebraic_round_trip() {
        let e2: Square = "e2".parse().unwrap();
        assert_eq!(e2, Square(6, 4));
        assert_eq!(e2.to_string(), "e2");

        let a8: Square = "a8".parse().unwrap();
        assert_eq!(a8, Square(0, 0));
        assert_eq!(Square(7, 7).to_string(), "h1");
    }

    #[test]
    fn test_rejects_bad_notation() {
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("a".parse::<Square>().is_err());
    }

    #[test]
    fn test_offset_stays_on_board() {
        assert_eq!(Square(0, 0).offset(-1, 0), None);
        assert_eq!(Square(0, 0).offset(0, -1), None);
        assert_eq!(Square(7, 7).offset(1, 1), None);
        assert_eq!(Square(3, 3).offset(2, -1), Some(Square(5, 2)));
    }

    #[test]
    fn test_try_from_tuple() {
        assert_eq!(
            Square::try_from((8, 0)),
            Err(SquareError::RowOutOfBounds { row: 8 })
        );
        assert_eq!(
            Square::try_from((0, 9)),
            Err(SquareError::ColOutOfBounds { col: 9 })
        );
        assert_eq!(Square::try_from((2, 3)), Ok(Square(2, 3)));
    }

    #[test]
    fn test_all_is_row_major() {
        let squares: Vec<Square> = Square::all().take(9).collect();
        assert_eq!(squares[0], Square(0, 0));
        assert_eq!(squares[7], Square(0, 7));
        assert_eq!(squares[8], Square(1, 0));
        for (idx, sq) in Square::all().enumerate() {
            assert_eq!(sq.as_index(), idx);
        }
    }
}
