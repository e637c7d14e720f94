//! Data types for the search: arena nodes, heap entries, config, and results.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::geom::Coordinate;

/// Index of a node in the search arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// One discovered route to a position. Never mutated once created.
#[derive(Clone, Copy, Debug)]
pub struct SearchNode {
    pub position: Coordinate,
    pub parent: Option<NodeId>,
    pub g: f64,
    pub h: f64,
    pub f: f64,
    /// Heading (degrees) of the move that reached this node.
    pub heading: f64,
}

/// Heap entry; `BinaryHeap` is a max-heap so the ordering is reversed.
#[derive(Clone, Copy, Debug)]
pub(crate) struct QueueEntry {
    pub f: f64,
    pub seq: u64,
    pub id: NodeId,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // lower f first, then earlier insertion first
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Search tolerances and limits.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchCfg {
    /// A position strictly closer than this to the goal counts as arrived.
    pub goal_tolerance: f64,
    /// Heap pops allowed before giving up (overridable per profile).
    pub max_iterations: usize,
    /// Quantization of `CoordinateKey`, in key units per coordinate unit.
    pub key_scale: f64,
    /// Factor (> 1) applied to Euclidean estimates to favour direct lines on ties.
    pub euclid_tie_break: f64,
    /// Heading assumed at the start node.
    pub initial_heading: f64,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            goal_tolerance: 0.00015,
            max_iterations: 150_000,
            key_scale: 1e9,
            euclid_tie_break: 1.001,
            initial_heading: 0.0,
        }
    }
}

/// Counters describing how much work a search did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Heap pops, including stale entries.
    pub iterations: usize,
    /// Nodes whose successors were generated.
    pub expanded: usize,
    /// Heap pushes, including the start node.
    pub pushed: usize,
    /// Popped entries discarded because a cheaper route had superseded them.
    pub stale_skipped: usize,
}

impl SearchStats {
    /// Total heap operations (pushes plus pops).
    pub fn queue_ops(&self) -> usize {
        self.pushed + self.iterations
    }
}

/// A found path: positions from start to the arrival point, and its cost in the
/// profile's units (moves, or simulated time under physics).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    pub path: Vec<Coordinate>,
    pub total_cost: f64,
    pub stats: SearchStats,
}

impl PathResult {
    /// Number of moves, i.e. path positions minus one.
    pub fn moves(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Lifecycle of one search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    Initialized,
    Exploring,
    Found(NodeId),
    Exhausted,
    IterationLimitReached,
}

impl SearchState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, SearchState::Initialized | SearchState::Exploring)
    }
}
