#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::constants::DEFAULT_DEPTH;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchParams {
    /// Plies searched below each root move.
    pub depth: u32,
    /// Stop expanding siblings once `beta <= alpha`. Turning this off gives
    /// plain minimax with the same result and more nodes.
    pub prune: bool,
}

impl SearchParams {
    #[must_use]
    pub const fn with_depth(depth: u32) -> Self {
        SearchParams { depth, prune: true }
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams::with_depth(DEFAULT_DEPTH)
    }
}
