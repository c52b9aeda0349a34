//! Search tests.

use super::mv;
use crate::board::{
    best_move, find_best_move, minimax, Board, Color, LogLogger, SearchContext, SearchParams,
    INFINITY,
};

#[test]
fn test_depth_zero_is_static_score() {
    let board = Board::from_fen("4k3/8/8/8/3q4/8/8/R3K3");
    assert_eq!(board.score(), -4);
    assert_eq!(minimax(&board, 0, -INFINITY, INFINITY, true, Color::White), -4);
    assert_eq!(minimax(&board, 0, -INFINITY, INFINITY, false, Color::White), 4);
}

#[test]
fn test_no_moves_scores_statically() {
    let board = Board::from_fen("6Pk/6PP/8/8/8/8/8/8");
    // Black has nothing to play at the minimizing node.
    assert_eq!(
        minimax(&board, 3, -INFINITY, INFINITY, false, Color::Black),
        -board.score()
    );
}

#[test]
fn test_ties_keep_first_generated_move() {
    // Every quiet Black move scores 0 at depth 0; Na6 is the first of them.
    let board = Board::new();
    assert_eq!(best_move(&board, Color::Black, 0), Some(mv((0, 1), (2, 0))));
}

#[test]
fn test_black_takes_hanging_queen() {
    let board = Board::from_fen("7k/8/2n5/8/3Q4/8/8/K7");
    assert_eq!(best_move(&board, Color::Black, 0), Some(mv((2, 2), (4, 3))));
}

#[test]
fn test_no_moves_means_no_best_move() {
    let board = Board::from_fen("6Pk/6PP/8/8/8/8/8/K7");
    assert_eq!(best_move(&board, Color::Black, 3), None);
    let result = find_best_move(&board, Color::Black, &SearchParams::default(), &LogLogger);
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, None);
    assert_eq!(result.nodes, 0);
}

#[test]
fn test_best_move_is_generated() {
    let board = Board::new();
    for side in Color::BOTH {
        let chosen = best_move(&board, side, 2).unwrap();
        assert!(board.generate_moves(side).contains(chosen));
    }
}

#[test]
fn test_pruning_preserves_value() {
    let board = Board::new();
    for depth in 1..=3 {
        for maximizing in [true, false] {
            let mut plain = SearchContext::new(false);
            let mut pruned = SearchContext::new(true);
            let expected = plain.minimax(&board, depth, -INFINITY, INFINITY, maximizing);
            let actual = pruned.minimax(&board, depth, -INFINITY, INFINITY, maximizing);
            assert_eq!(actual, expected, "depth {depth}, maximizing {maximizing}");
            assert!(pruned.nodes <= plain.nodes);
        }
    }
}

#[test]
fn test_pruning_preserves_root_choice() {
    let board = Board::from_fen("r3k3/8/2n5/8/3Q4/8/8/K7");
    let pruned = SearchParams::with_depth(2);
    let plain = SearchParams {
        prune: false,
        ..pruned
    };
    let a = find_best_move(&board, Color::Black, &pruned, &LogLogger);
    let b = find_best_move(&board, Color::Black, &plain, &LogLogger);
    assert_eq!(a.best_move, b.best_move);
    assert_eq!(a.score, b.score);
    assert!(a.nodes <= b.nodes);
}

#[test]
fn test_root_side_does_not_change_value() {
    let board = Board::from_fen("r3k3/8/2n5/8/3Q4/8/8/K7");
    assert_eq!(
        minimax(&board, 2, -INFINITY, INFINITY, true, Color::White),
        minimax(&board, 2, -INFINITY, INFINITY, true, Color::Black)
    );
}
