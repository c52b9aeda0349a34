use std::cell::RefCell;

use alphabeta_chess::board::{
    best_move, find_best_move, Board, Color, Move, SearchInfo, SearchLogger, SearchParams, Square,
};

/// Keeps every root report for inspection.
#[derive(Default)]
struct Recorder {
    infos: RefCell<Vec<SearchInfo>>,
}

impl SearchLogger for Recorder {
    fn info(&self, info: &SearchInfo) {
        self.infos.borrow_mut().push(info.clone());
    }
}

#[test]
fn best_move_is_one_of_the_generated_moves() {
    let board = Board::new();
    for side in [Color::White, Color::Black] {
        for depth in 0..=3 {
            let mv = best_move(&board, side, depth).expect("start position has moves");
            assert!(
                board.generate_moves(side).contains(mv),
                "{side} depth {depth} chose {mv}"
            );
        }
    }
}

#[test]
fn black_depth_one_picks_first_highest_static_score() {
    // Black cannot reach a White piece within two plies here, so each root
    // move is worth the static score right after it.
    let board = Board::new();
    let chosen = best_move(&board, Color::Black, 1).expect("Black has moves");
    let moves = board.generate_moves(Color::Black);
    let top = moves
        .iter()
        .map(|&mv| board.with_move(mv).score())
        .max()
        .expect("Black has moves");
    let first_top = moves
        .iter()
        .copied()
        .find(|&mv| board.with_move(mv).score() == top);
    assert_eq!(Some(chosen), first_top);
    // The king taking its own queen is the only +9.
    assert_eq!(chosen, Move::new(Square(0, 4), Square(0, 3)));
}

#[test]
fn search_is_deterministic() {
    let board = Board::from_fen("r3k3/pp6/2n5/8/3Q4/8/8/K7");
    assert_eq!(
        best_move(&board, Color::Black, 3),
        best_move(&board, Color::Black, 3)
    );
}

#[test]
fn hanging_queen_taken_at_depth_zero() {
    let board = Board::from_fen("7k/8/2n5/8/3Q4/8/8/K7");
    assert_eq!(
        best_move(&board, Color::Black, 0),
        Some(Move::new(Square(2, 2), Square(4, 3)))
    );
}

#[test]
fn no_moves_gives_none() {
    let board = Board::from_fen("6Pk/6PP/8/8/8/8/8/K7");
    assert_eq!(best_move(&board, Color::Black, 3), None);
}

#[test]
fn logger_sees_every_root_move() {
    let board = Board::new();
    let recorder = Recorder::default();
    let params = SearchParams::with_depth(2);
    let result = find_best_move(&board, Color::Black, &params, &recorder);

    let infos = recorder.infos.into_inner();
    let moves = board.generate_moves(Color::Black);
    assert_eq!(infos.len(), moves.len());
    for (info, mv) in infos.iter().zip(moves.iter()) {
        assert_eq!(info.mv, *mv);
        assert_eq!(info.depth, 2);
        assert_eq!(info.side, Color::Black);
    }

    let last = infos.last().expect("at least one root move");
    assert_eq!(last.best, result.best_move);
    assert_eq!(last.nodes, result.nodes);
    let best_score = infos.iter().map(|i| i.score).max();
    assert_eq!(result.score, best_score);
    // The first root move with the top score is kept.
    let first_best = infos.iter().find(|i| Some(i.score) == best_score).map(|i| i.mv);
    assert_eq!(result.best_move, first_best);
}

#[test]
fn default_params_search_three_plies() {
    let params = SearchParams::default();
    assert_eq!(params.depth, 3);
    assert!(params.prune);
}
