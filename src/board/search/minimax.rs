use super::constants::INFINITY;
use super::log::{LogLogger, SearchInfo, SearchLogger};
use super::params::SearchParams;
use crate::board::{Board, Color, Move, SearchSides};

/// Outcome of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen move, `None` when the side has no moves
    pub best_move: Option<Move>,
    /// Minimax value of `best_move`
    pub score: Option<i32>,
    /// Positions visited below the root
    pub nodes: u64,
}

/// State threaded through one search.
pub(crate) struct SearchContext {
    sides: SearchSides,
    prune: bool,
    pub(crate) nodes: u64,
}

impl SearchContext {
    pub(crate) fn new(prune: bool) -> Self {
        SearchContext {
            sides: SearchSides::CASE_CONVENTION,
            prune,
            nodes: 0,
        }
    }

    pub(crate) fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;
        if depth == 0 {
            return board.score_for(maximizing);
        }

        let moves = board.generate_moves(self.sides.mover(maximizing));
        if moves.is_empty() {
            return board.score_for(maximizing);
        }

        if maximizing {
            let mut max_eval = -INFINITY;
            for mv in moves {
                let child = board.with_move(mv);
                max_eval = max_eval.max(self.minimax(&child, depth - 1, alpha, beta, false));
                alpha = alpha.max(max_eval);
                if self.prune && beta <= alpha {
                    break;
                }
            }
            max_eval
        } else {
            let mut min_eval = INFINITY;
            for mv in moves {
                let child = board.with_move(mv);
                min_eval = min_eval.min(self.minimax(&child, depth - 1, alpha, beta, true));
                beta = beta.min(min_eval);
                if self.prune && beta <= alpha {
                    break;
                }
            }
            min_eval
        }
    }
}

/// Minimax value of `board` searched `depth` plies with alpha-beta pruning.
///
/// At depth 0 this is [`Board::score`] for a maximizing node and its negation
/// for a minimizing one. Maximizing nodes expand White's moves and minimizing
/// nodes Black's (see [`SearchSides::CASE_CONVENTION`]), so the color the
/// search is being run for does not change which moves are expanded.
#[must_use]
pub fn minimax(
    board: &Board,
    depth: u32,
    alpha: i32,
    beta: i32,
    maximizing: bool,
    _side: Color,
) -> i32 {
    SearchContext::new(true).minimax(board, depth, alpha, beta, maximizing)
}

/// Search every move of `side` and return the best one.
///
/// Each root move is scored by a minimizing search of `params.depth` plies
/// on the resulting position. Only a strictly greater score replaces the
/// current best, so the earliest generated move wins ties.
pub fn find_best_move(
    board: &Board,
    side: Color,
    params: &SearchParams,
    logger: &dyn SearchLogger,
) -> SearchResult {
    let mut ctx = SearchContext::new(params.prune);
    let mut best: Option<(Move, i32)> = None;

    for mv in board.generate_moves(side) {
        let child = board.with_move(mv);
        let score = ctx.minimax(&child, params.depth, -INFINITY, INFINITY, false);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
        logger.info(&SearchInfo {
            side,
            depth: params.depth,
            mv,
            score,
            nodes: ctx.nodes,
            best: best.map(|(mv, _)| mv),
        });
    }

    SearchResult {
        best_move: best.map(|(mv, _)| mv),
        score: best.map(|(_, score)| score),
        nodes: ctx.nodes,
    }
}

/// Best move for `side` at `depth`, or `None` if `side` has no moves.
#[must_use]
pub fn best_move(board: &Board, side: Color, depth: u32) -> Option<Move> {
    find_best_move(board, side, &SearchParams::with_depth(depth), &LogLogger).best_move
}
