use crate::board::{Color, Move};

/// Score of one root move, reported as the search finishes it.
#[derive(Clone, Debug)]
pub struct SearchInfo {
    pub side: Color,
    pub depth: u32,
    pub mv: Move,
    pub score: i32,
    pub nodes: u64,
    /// Best root move so far, after this one was considered.
    pub best: Option<Move>,
}

pub trait SearchLogger {
    fn info(&self, info: &SearchInfo);
}

pub struct StdoutLogger;

impl SearchLogger for StdoutLogger {
    fn info(&self, info: &SearchInfo) {
        println!(
            "info side {} depth {} move {} score {} nodes {} best {}",
            info.side,
            info.depth,
            info.mv,
            info.score,
            info.nodes,
            info.best.map_or_else(|| "-".to_string(), |mv| mv.to_string())
        );
    }
}

/// Forwards to the `log` crate when the `logging` feature is enabled and
/// discards otherwise.
pub struct LogLogger;

impl SearchLogger for LogLogger {
    #[cfg(feature = "logging")]
    fn info(&self, info: &SearchInfo) {
        ::log::debug!(
            "{} depth {}: {} scores {} ({} nodes)",
            info.side,
            info.depth,
            info.mv,
            info.score,
            info.nodes
        );
    }

    #[cfg(not(feature = "logging"))]
    fn info(&self, _info: &SearchInfo) {}
}
