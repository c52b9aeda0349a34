use super::{Board, BoardError, Color, Square};

impl Board {
    /// True if some move generated for `by` lands on `target`.
    #[must_use]
    pub fn is_square_attacked(&self, by: Color, target: Square) -> bool {
        self.generate_moves(by).iter().any(|mv| mv.to == target)
    }

    /// True if `color`'s king is attacked by the other side.
    ///
    /// Fails with [`BoardError::MissingKing`] rather than reporting a board
    /// without a king as safe.
    pub fn is_in_check(&self, color: Color) -> Result<bool, BoardError> {
        let king = self.king_square(color)?;
        Ok(self.is_square_attacked(color.opponent(), king))
    }
}
