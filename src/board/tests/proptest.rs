//! Property-based tests using proptest.

use super::random_playout;
use crate::board::{Board, Color, Move, SearchContext, UnmakeInfo, BOARD_SIZE, INFINITY};
use proptest::prelude::*;

/// Strategy to generate a random playout length
fn ply_count_strategy() -> impl Strategy<Value = usize> {
    0..=24usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

fn side_strategy() -> impl Strategy<Value = Color> {
    prop_oneof![Just(Color::White), Just(Color::Black)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: every generated move starts on one of the mover's pieces and
    /// ends on the board
    #[test]
    fn prop_moves_start_on_own_piece(
        seed in seed_strategy(),
        plies in ply_count_strategy(),
        side in side_strategy(),
    ) {
        use rand::prelude::*;

        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        random_playout(&mut board, plies, &mut rng);

        for mv in &board.generate_moves(side) {
            prop_assert_eq!(board.color_on(mv.from()), Some(side));
            prop_assert!(mv.to().row() < BOARD_SIZE && mv.to().col() < BOARD_SIZE);
            prop_assert_ne!(mv.from(), mv.to());
        }
    }

    /// Property: apply_move followed by unmake_move restores the board exactly
    #[test]
    fn prop_make_unmake_restores_state(seed in seed_strategy(), plies in ply_count_strategy()) {
        use rand::prelude::*;

        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let initial_fen = board.to_fen();

        let mut history: Vec<(Move, UnmakeInfo)> = Vec::new();
        let mut side = Color::White;
        for _ in 0..plies {
            let moves = board.generate_moves(side);
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            history.push((mv, board.apply_move(mv)));
            side = side.opponent();
        }

        while let Some((mv, info)) = history.pop() {
            board.unmake_move(mv, info);
        }
        prop_assert_eq!(board.to_fen(), initial_fen);
        prop_assert_eq!(board, Board::new());
    }

    /// Property: alpha-beta returns the plain minimax value with no more nodes
    #[test]
    fn prop_alpha_beta_matches_minimax(
        seed in seed_strategy(),
        plies in ply_count_strategy(),
        maximizing in any::<bool>(),
    ) {
        use rand::prelude::*;

        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        random_playout(&mut board, plies, &mut rng);

        let mut plain = SearchContext::new(false);
        let mut pruned = SearchContext::new(true);
        let expected = plain.minimax(&board, 2, -INFINITY, INFINITY, maximizing);
        let actual = pruned.minimax(&board, 2, -INFINITY, INFINITY, maximizing);
        prop_assert_eq!(actual, expected);
        prop_assert!(pruned.nodes <= plain.nodes);
    }

    /// Property: the static score is the negated score of the color-swapped board
    #[test]
    fn prop_score_is_antisymmetric(seed in seed_strategy(), plies in ply_count_strategy()) {
        use rand::prelude::*;

        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        random_playout(&mut board, plies, &mut rng);

        let mut swapped = Board::empty();
        for (sq, color, piece) in board.pieces() {
            swapped.set_piece(sq, color.opponent(), piece);
        }
        prop_assert_eq!(swapped.score(), -board.score());
    }

    /// Property: a FEN placement round-trips
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), plies in ply_count_strategy()) {
        use rand::prelude::*;

        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        random_playout(&mut board, plies, &mut rng);

        let restored = Board::from_fen(&board.to_fen());
        prop_assert_eq!(restored, board);
    }
}
