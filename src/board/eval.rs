use super::Board;

impl Board {
    /// Material balance: White pieces count positive, Black pieces negative.
    #[must_use]
    pub fn score(&self) -> i32 {
        self.pieces()
            .map(|(_, color, piece)| color.sign() * piece.value())
            .sum()
    }

    /// `score` as seen by a minimax node: unchanged for a maximizing node,
    /// negated for a minimizing one.
    #[inline]
    #[must_use]
    pub fn score_for(&self, maximizing: bool) -> i32 {
        let score = self.score();
        if maximizing {
            score
        } else {
            -score
        }
    }
}
