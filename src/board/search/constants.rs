//! Search constants.

/// Bound larger than any reachable material score.
pub const INFINITY: i32 = 1_000_000;

/// Search depth used when none is configured.
pub const DEFAULT_DEPTH: u32 = 3;
