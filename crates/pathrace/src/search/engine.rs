//! The best-first search loop.

use std::collections::{BinaryHeap, HashMap};

use crate::cost::{edge_cost, heuristic, score};
use crate::error::SearchError;
use crate::geom::{distance, next_position, Coordinate, CoordinateKey};
use crate::profile::{default_profile, AgentProfile};
use crate::region::{MoveCheck, Region, RegionMode};

use super::types::{
    NodeId, PathResult, QueueEntry, SearchCfg, SearchNode, SearchState, SearchStats,
};

/// Find a path from `start` to within `cfg.goal_tolerance` of `goal`.
///
/// `mode` decides whether `regions` are boundaries or obstacles. If start is already
/// within tolerance the result is `[start]` at zero cost and no queue work is done.
pub fn find_path(
    start: Coordinate,
    goal: Coordinate,
    regions: &[Region],
    mode: RegionMode,
    profile: &AgentProfile,
    cfg: &SearchCfg,
) -> Result<PathResult, SearchError> {
    tracing::info!(
        profile = %profile.name,
        %start,
        %goal,
        ?mode,
        regions = regions.len(),
        "finding path"
    );
    if distance(start, goal) < cfg.goal_tolerance {
        return Ok(PathResult {
            path: vec![start],
            total_cost: 0.0,
            stats: SearchStats::default(),
        });
    }
    SearchRunner::new(start, goal, regions, mode, profile, cfg).run()
}

/// `find_path` with the standard drone and default tolerances.
pub fn find_path_default(
    start: Coordinate,
    goal: Coordinate,
    regions: &[Region],
    mode: RegionMode,
) -> Result<PathResult, SearchError> {
    find_path(
        start,
        goal,
        regions,
        mode,
        &default_profile(),
        &SearchCfg::default(),
    )
}

/// One search in progress. Owns its arena, heap, and best-known map.
pub struct SearchRunner<'a> {
    goal: Coordinate,
    profile: &'a AgentProfile,
    cfg: SearchCfg,
    check: MoveCheck<'a>,
    limit: usize,
    nodes: Vec<SearchNode>,
    best: HashMap<CoordinateKey, NodeId>,
    open: BinaryHeap<QueueEntry>,
    seq: u64,
    stats: SearchStats,
    state: SearchState,
}

impl<'a> SearchRunner<'a> {
    /// Seed the heap with the start node.
    pub fn new(
        start: Coordinate,
        goal: Coordinate,
        regions: &'a [Region],
        mode: RegionMode,
        profile: &'a AgentProfile,
        cfg: &SearchCfg,
    ) -> Self {
        let mut runner = Self {
            goal,
            profile,
            cfg: *cfg,
            check: MoveCheck::new(regions, mode, profile.safety_margin),
            limit: profile.max_iterations.unwrap_or(cfg.max_iterations),
            nodes: Vec::new(),
            best: HashMap::new(),
            open: BinaryHeap::new(),
            seq: 0,
            stats: SearchStats::default(),
            state: SearchState::Initialized,
        };
        let h = runner.estimate(start);
        runner.push(SearchNode {
            position: start,
            parent: None,
            g: 0.0,
            h,
            f: score(profile.strategy, 0.0, h, profile.heuristic_weight),
            heading: cfg.initial_heading,
        });
        runner
    }

    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Node behind `id`, if this runner allocated it.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.0)
    }

    /// Drive the search to a terminal state and convert it into a result.
    pub fn run(mut self) -> Result<PathResult, SearchError> {
        while !self.state.is_terminal() {
            self.step();
        }
        match self.state {
            SearchState::Found(id) => {
                let node = self.nodes[id.0];
                let path = self.path_to(id);
                tracing::info!(
                    profile = %self.profile.name,
                    iterations = self.stats.iterations,
                    moves = path.len().saturating_sub(1),
                    cost = node.g,
                    "path found"
                );
                Ok(PathResult {
                    path,
                    total_cost: node.g,
                    stats: self.stats,
                })
            }
            SearchState::IterationLimitReached => {
                tracing::warn!(
                    profile = %self.profile.name,
                    limit = self.limit,
                    "no path: iteration limit reached"
                );
                Err(SearchError::IterationLimitReached { limit: self.limit })
            }
            _ => {
                tracing::warn!(
                    profile = %self.profile.name,
                    iterations = self.stats.iterations,
                    "no path: queue exhausted"
                );
                Err(SearchError::Exhausted {
                    iterations: self.stats.iterations,
                })
            }
        }
    }

    /// Pop one entry and either skip it, finish on it, or expand it.
    pub fn step(&mut self) -> SearchState {
        if self.state.is_terminal() {
            return self.state;
        }
        let Some(entry) = self.open.pop() else {
            self.state = SearchState::Exhausted;
            return self.state;
        };
        self.stats.iterations += 1;
        if self.stats.iterations > self.limit {
            self.state = SearchState::IterationLimitReached;
            return self.state;
        }
        self.state = SearchState::Exploring;

        let current = self.nodes[entry.id.0];
        let key = current.position.key(self.cfg.key_scale);
        if let Some(&best) = self.best.get(&key) {
            if self.nodes[best.0].g < current.g {
                self.stats.stale_skipped += 1;
                return self.state;
            }
        }

        if distance(current.position, self.goal) < self.cfg.goal_tolerance {
            self.state = SearchState::Found(entry.id);
            return self.state;
        }

        self.expand(entry.id, current);
        self.state
    }

    fn expand(&mut self, id: NodeId, current: SearchNode) {
        self.stats.expanded += 1;
        let profile = self.profile;
        let step = profile.move_distance;
        let physics = profile.active_physics();
        for &heading in &profile.flight_angles {
            let next = next_position(current.position, heading, step);
            if self.check.rejects(current.position, next) {
                continue;
            }
            let g = current.g + edge_cost(physics, step, current.heading, heading);
            let key = next.key(self.cfg.key_scale);
            let improves = match self.best.get(&key) {
                None => true,
                Some(&known) => g < self.nodes[known.0].g,
            };
            if !improves {
                continue;
            }
            let h = self.estimate(next);
            self.push(SearchNode {
                position: next,
                parent: Some(id),
                g,
                h,
                f: score(profile.strategy, g, h, profile.heuristic_weight),
                heading,
            });
        }
    }

    /// Record a node as best-known for its position and enqueue it.
    fn push(&mut self, node: SearchNode) {
        let id = NodeId(self.nodes.len());
        self.best.insert(node.position.key(self.cfg.key_scale), id);
        self.open.push(QueueEntry {
            f: node.f,
            seq: self.seq,
            id,
        });
        self.nodes.push(node);
        self.seq += 1;
        self.stats.pushed += 1;
    }

    fn estimate(&self, p: Coordinate) -> f64 {
        heuristic(
            self.profile.heuristic,
            p,
            self.goal,
            self.profile.heuristic_normalizer(),
            self.cfg.euclid_tie_break,
        )
    }

    /// Positions from the start to `id`, following parent indices.
    fn path_to(&self, id: NodeId) -> Vec<Coordinate> {
        let mut path = Vec::new();
        let mut cur = Some(id);
        while let Some(NodeId(i)) = cur {
            let node = &self.nodes[i];
            path.push(node.position);
            cur = node.parent;
        }
        path.reverse();
        path
    }
}
