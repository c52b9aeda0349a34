//! Move sources for the game loop.

use std::io::{BufRead, Write};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::GameError;
use crate::board::{find_best_move, Board, Color, LogLogger, Move, SearchLogger, SearchParams};

/// Something that picks moves: a person at a terminal, the search, or dice.
pub trait Player {
    /// Choose a move for `side`. `Ok(None)` means no move is coming (the side
    /// has no moves, or the input was closed) and the game should stop.
    fn choose_move(&mut self, board: &Board, side: Color) -> Result<Option<Move>, GameError>;

    /// Short label for status lines
    fn name(&self) -> &'static str;
}

/// Plays the move chosen by [`find_best_move`].
pub struct EnginePlayer {
    params: SearchParams,
    logger: Box<dyn SearchLogger>,
}

impl EnginePlayer {
    /// Engine reporting through [`LogLogger`].
    #[must_use]
    pub fn new(params: SearchParams) -> Self {
        EnginePlayer {
            params,
            logger: Box::new(LogLogger),
        }
    }

    #[must_use]
    pub fn with_logger(params: SearchParams, logger: Box<dyn SearchLogger>) -> Self {
        EnginePlayer { params, logger }
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }
}

impl Player for EnginePlayer {
    fn choose_move(&mut self, board: &Board, side: Color) -> Result<Option<Move>, GameError> {
        let result = find_best_move(board, side, &self.params, self.logger.as_ref());
        Ok(result.best_move)
    }

    fn name(&self) -> &'static str {
        "engine"
    }
}

/// Picks uniformly among the generated moves.
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    /// Reproducible sequence of choices for a given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        RandomPlayer {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        RandomPlayer {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Player for RandomPlayer {
    fn choose_move(&mut self, board: &Board, side: Color) -> Result<Option<Move>, GameError> {
        let moves = board.generate_moves(side);
        Ok(moves.as_slice().choose(&mut self.rng).copied())
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Reads coordinate-notation moves ("b1c3") from `input`, prompting on
/// `output` and asking again until a move the side can make is entered.
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        HumanPlayer { input, output }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn choose_move(&mut self, board: &Board, side: Color) -> Result<Option<Move>, GameError> {
        if board.generate_moves(side).is_empty() {
            return Ok(None);
        }

        let mut line = String::new();
        loop {
            write!(self.output, "Enter your move (e.g., b1c3): ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            if line.trim().is_empty() {
                continue;
            }

            match board.parse_move(side, &line) {
                Ok(mv) => return Ok(Some(mv)),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn name(&self) -> &'static str {
        "human"
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::board::Square;

    #[test]
    fn test_human_reprompts_until_valid() {
        let input = Cursor::new("e2e4\nzz\nb1c3\n");
        let mut output = Vec::new();
        let mv = {
            let mut human = HumanPlayer::new(input, &mut output);
            human.choose_move(&Board::new(), Color::White).unwrap()
        };
        assert_eq!(mv, Some(Move::new(Square(7, 1), Square(5, 2))));

        let transcript = String::from_utf8(output).unwrap();
        assert_eq!(transcript.matches("Enter your move").count(), 3);
        assert!(transcript.contains("Illegal move 'e2e4'"));
    }

    #[test]
    fn test_human_end_of_input_is_no_move() {
        let mut human = HumanPlayer::new(Cursor::new(""), Vec::new());
        assert_eq!(
            human.choose_move(&Board::new(), Color::White).unwrap(),
            None
        );
    }

    #[test]
    fn test_random_player_is_reproducible() {
        let board = Board::new();
        let first = RandomPlayer::new(7)
            .choose_move(&board, Color::Black)
            .unwrap();
        let second = RandomPlayer::new(7)
            .choose_move(&board, Color::Black)
            .unwrap();
        assert_eq!(first, second);
        assert!(board
            .generate_moves(Color::Black)
            .contains(first.unwrap()));
    }

    #[test]
    fn test_engine_player_matches_best_move() {
        let board = Board::new();
        let mut engine = EnginePlayer::new(SearchParams::with_depth(1));
        assert_eq!(
            engine.choose_move(&board, Color::Black).unwrap(),
            crate::board::best_move(&board, Color::Black, 1)
        );
    }
}
