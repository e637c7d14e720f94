//! Best-first search over the heading lattice with lazy deletion.
//!
//! Purpose
//! - Expand positions reachable by fixed-length moves along a profile's headings,
//!   ordered by the profile's priority score, until a node lands within goal
//!   tolerance, the queue empties, or the iteration cap is hit.
//!
//! Design
//! - Nodes live in an arena (`Vec<SearchNode>`) and point to their parent by
//!   index; path reconstruction is an index walk.
//! - The best-known node per position is tracked by `CoordinateKey`. A cheaper
//!   route pushes a new node and leaves the superseded one in the heap; it is
//!   skipped when popped (lazy deletion). Nothing in the heap is ever mutated.
//! - Equal f-scores pop in insertion order (FIFO), so a run is reproducible.
//!
//! States: `Initialized → Exploring → {Found | Exhausted | IterationLimitReached}`.
//!
//! Code cross-refs: `region::MoveCheck`, `cost::{score, heuristic, edge_cost}`.

mod engine;
mod types;

pub use engine::{find_path, find_path_default, SearchRunner};
pub use types::{NodeId, PathResult, SearchCfg, SearchNode, SearchState, SearchStats};
