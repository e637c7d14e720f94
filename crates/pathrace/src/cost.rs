//! Priority scores, heuristics, and the motion cost of a single move.
//!
//! - `score`: f from (g, h) per `SearchStrategy`.
//! - `heuristic`: estimate-to-goal per `HeuristicKind`, divided by a normalizer
//!   (step length in unit-cost mode, base speed in physics mode) so that h is in
//!   the same units as g.
//! - `edge_cost`: 1 per move without physics; travel time plus turn penalty with it.

use serde::{Deserialize, Serialize};

use crate::geom::{distance, Coordinate};

/// Speed never drops below this fraction of the base speed, however sharp the turn.
pub const MIN_SPEED_FRACTION: f64 = 0.1;

/// How the priority score combines accumulated cost and heuristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// f = g + h
    AStar,
    /// f = h
    Greedy,
    /// f = g
    Dijkstra,
    /// f = g + w·h
    WeightedAStar,
}

impl SearchStrategy {
    pub fn label(self) -> &'static str {
        match self {
            SearchStrategy::AStar => "A Star",
            SearchStrategy::Greedy => "Greedy",
            SearchStrategy::Dijkstra => "Dijkstra",
            SearchStrategy::WeightedAStar => "W A Star",
        }
    }
}

/// Distance estimate used for h.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicKind {
    #[default]
    Euclidean,
    Manhattan,
    Chebyshev,
    Octile,
}

/// Priority score for a node with accumulated cost `g` and estimate `h`.
#[inline]
pub fn score(strategy: SearchStrategy, g: f64, h: f64, weight: f64) -> f64 {
    match strategy {
        SearchStrategy::AStar => g + h,
        SearchStrategy::Greedy => h,
        SearchStrategy::Dijkstra => g,
        SearchStrategy::WeightedAStar => g + weight * h,
    }
}

/// Heuristic estimate from `from` to `goal`.
///
/// `tie_break` (slightly above 1) scales only the Euclidean estimate so that, among
/// candidates with equal f, the one closer to the straight line wins.
pub fn heuristic(
    kind: HeuristicKind,
    from: Coordinate,
    goal: Coordinate,
    normalizer: f64,
    tie_break: f64,
) -> f64 {
    let dx = (from.lng - goal.lng).abs();
    let dy = (from.lat - goal.lat).abs();
    let raw = match kind {
        HeuristicKind::Manhattan => dx + dy,
        HeuristicKind::Chebyshev => dx.max(dy),
        HeuristicKind::Euclidean => distance(from, goal) * tie_break,
        HeuristicKind::Octile => dx + dy + (std::f64::consts::SQRT_2 - 1.0) * dx.min(dy),
    };
    raw / normalizer
}

/// Absolute heading change between two headings in degrees, folded into [0, 180].
#[inline]
pub fn turn_angle(from_deg: f64, to_deg: f64) -> f64 {
    let d = (to_deg - from_deg).rem_euclid(360.0);
    if d > 180.0 {
        360.0 - d
    } else {
        d
    }
}

/// Speed/drag/turn model turning heading changes into time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Physics {
    /// Coordinate units per time unit when flying straight.
    pub base_speed: f64,
    /// Fractional speed loss per degree of turn.
    pub drag_factor: f64,
    /// Extra cost for a full 180° reversal, scaled linearly below that.
    pub turning_penalty: f64,
}

impl Physics {
    /// Speed after a turn of `turn_deg` degrees, floored at `MIN_SPEED_FRACTION` of base.
    #[inline]
    pub fn effective_speed(&self, turn_deg: f64) -> f64 {
        let drag = self.drag_factor.max(0.0);
        let v = self.base_speed * (1.0 - turn_deg * drag);
        v.max(self.base_speed * MIN_SPEED_FRACTION)
    }

    /// Time to fly `step` after turning `turn_deg`, plus the turn penalty.
    #[inline]
    pub fn move_cost(&self, step: f64, turn_deg: f64) -> f64 {
        let time = step / self.effective_speed(turn_deg);
        time + self.turning_penalty.max(0.0) * (turn_deg / 180.0)
    }

    /// Physics parameters are usable only with a positive, finite base speed.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.base_speed.is_finite() && self.base_speed > 0.0
    }
}

/// Cost of one move of length `step` from arrival heading `prev_deg` along `next_deg`.
#[inline]
pub fn edge_cost(physics: Option<&Physics>, step: f64, prev_deg: f64, next_deg: f64) -> f64 {
    match physics {
        Some(p) if p.is_active() => p.move_cost(step, turn_angle(prev_deg, next_deg)),
        _ => 1.0,
    }
}
