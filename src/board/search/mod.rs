//! Minimax search with alpha-beta pruning.
//!
//! Fixed depth, no move ordering, transposition table, quiescence or
//! iterative deepening. Every explored move is searched on its own clone of
//! the board. Checkmate and stalemate get no special score; a node with no
//! moves is scored statically.

mod constants;
mod log;
mod minimax;
mod params;

pub use self::log::{LogLogger, SearchInfo, SearchLogger, StdoutLogger};
pub use constants::{DEFAULT_DEPTH, INFINITY};
pub use minimax::{best_move, find_best_move, minimax, SearchResult};
pub use params::SearchParams;

#[cfg(test)]
pub(crate) use minimax::SearchContext;
