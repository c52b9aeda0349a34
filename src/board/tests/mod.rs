//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Generation order and the capture asymmetries
//! - `status.rs` - Check, checkmate and stalemate detection
//! - `search.rs` - Minimax values and root move selection
//! - `make_unmake.rs` - Move application and reversal
//! - `proptest.rs` - Property-based tests over random playouts

mod proptest;
mod search;

use crate::board::{Board, Color, Move, Square};

/// Collect a move list as `(from, to)` coordinate pairs for compact asserts.
pub(super) fn pairs(moves: &crate::board::MoveList) -> Vec<((usize, usize), (usize, usize))> {
    moves
        .iter()
        .map(|m| ((m.from().row(), m.from().col()), (m.to().row(), m.to().col())))
        .collect()
}

/// Play `plies` moves chosen by `rng`, alternating from White. Stops early
/// when the side to move has nothing to play.
pub(super) fn random_playout(board: &mut Board, plies: usize, rng: &mut impl rand::Rng) -> Color {
    let mut side = Color::White;
    for _ in 0..plies {
        let moves = board.generate_moves(side);
        if moves.is_empty() {
            break;
        }
        let mv: Move = moves[rng.gen_range(0..moves.len())];
        board.apply_move(mv);
        side = side.opponent();
    }
    side
}

pub(super) fn mv(from: (usize, usize), to: (usize, usize)) -> Move {
    Move::new(Square(from.0, from.1), Square(to.0, to.1))
}
