//! Typed search failures.
//!
//! Degenerate regions and already-arrived requests are not errors: the former are
//! ignored by `region::MoveCheck`, the latter return a one-point path.

use serde::{Deserialize, Serialize};

/// Why `find_path` returned no path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchError {
    /// The queue emptied: no path exists on this lattice inside the constraints.
    #[error("search exhausted after {iterations} iterations without reaching the goal")]
    Exhausted { iterations: usize },
    /// The search was cut off; a path may still exist.
    #[error("iteration limit of {limit} reached before the goal")]
    IterationLimitReached { limit: usize },
}

impl SearchError {
    /// True only for `Exhausted`, which proves the goal is unreachable.
    pub fn proves_unreachable(&self) -> bool {
        matches!(self, SearchError::Exhausted { .. })
    }
}
