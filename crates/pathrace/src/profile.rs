//! Agent profiles and the built-in roster.
//!
//! A profile fixes everything that differs between racers: scoring strategy,
//! heuristic, step length, heading set, physics, and wall clearance. Profiles are
//! built by the caller before a race and never change during a search.

use serde::{Deserialize, Serialize};

use crate::cost::{HeuristicKind, Physics, SearchStrategy};

/// Step length of the standard drone, in degrees.
pub const STANDARD_STEP: f64 = 0.00015;

/// Behavioural and physical parameters of one racer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentProfile {
    pub name: String,
    /// Display colour (hex), carried through to results.
    pub color: String,
    pub strategy: SearchStrategy,
    #[serde(default)]
    pub heuristic: HeuristicKind,
    #[serde(default = "default_weight")]
    pub heuristic_weight: f64,
    /// Step length in coordinate units.
    pub move_distance: f64,
    /// Allowed headings in degrees (0 = east, 90 = north), tried in this order.
    pub flight_angles: Vec<f64>,
    /// Speed/drag/turn model; `None` means one cost unit per move.
    #[serde(default)]
    pub physics: Option<Physics>,
    /// Minimum clearance from any boundary wall.
    #[serde(default)]
    pub safety_margin: f64,
    /// Per-agent override of `SearchCfg::max_iterations`.
    #[serde(default)]
    pub max_iterations: Option<usize>,
}

fn default_weight() -> f64 {
    1.0
}

impl AgentProfile {
    /// Unit-cost profile with Euclidean heuristic and weight 1.
    pub fn new(
        name: impl Into<String>,
        strategy: SearchStrategy,
        move_distance: f64,
        flight_angles: Vec<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            color: "#FFFFFF".to_string(),
            strategy,
            heuristic: HeuristicKind::Euclidean,
            heuristic_weight: 1.0,
            move_distance,
            flight_angles,
            physics: None,
            safety_margin: 0.0,
            max_iterations: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_heuristic(mut self, kind: HeuristicKind) -> Self {
        self.heuristic = kind;
        self
    }

    pub fn with_weight(mut self, w: f64) -> Self {
        self.heuristic_weight = w;
        self
    }

    pub fn with_physics(mut self, physics: Physics) -> Self {
        self.physics = Some(physics);
        self
    }

    pub fn with_safety_margin(mut self, margin: f64) -> Self {
        self.safety_margin = margin;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = Some(n);
        self
    }

    /// Active physics model, if any.
    #[inline]
    pub fn active_physics(&self) -> Option<&Physics> {
        self.physics.as_ref().filter(|p| p.is_active())
    }

    /// Divisor that puts heuristic distances into the units of g: base speed under
    /// physics (time), otherwise the step length (moves).
    #[inline]
    pub fn heuristic_normalizer(&self) -> f64 {
        match self.active_physics() {
            Some(p) => p.base_speed,
            None => self.move_distance,
        }
    }
}

/// `n` evenly spaced headings starting at 0°.
pub fn compass(n: usize) -> Vec<f64> {
    let n = n.max(1);
    (0..n).map(|k| 360.0 * k as f64 / n as f64).collect()
}

/// The standard drone: A*, Euclidean, 16 compass headings, standard step.
pub fn default_profile() -> AgentProfile {
    AgentProfile::new("Standard Drone", SearchStrategy::AStar, STANDARD_STEP, compass(16))
        .with_color("#FFFFFF")
}

/// Built-in racers, each with a distinct search personality.
pub fn default_roster() -> Vec<AgentProfile> {
    vec![
        AgentProfile::new("Optimal Ace", SearchStrategy::AStar, STANDARD_STEP, compass(16))
            .with_color("#00FF00"),
        // Double step, fewer headings: fast but may miss narrow gaps.
        AgentProfile::new(
            "The Muscle",
            SearchStrategy::WeightedAStar,
            2.0 * STANDARD_STEP,
            compass(8),
        )
        .with_color("#0000FF")
        .with_weight(2.5),
        AgentProfile::new("Swift Seeker", SearchStrategy::Greedy, 0.0002, compass(12))
            .with_color("#FF0000")
            .with_weight(1.5),
        AgentProfile::new("Cautious Cruiser", SearchStrategy::Dijkstra, 0.0001, compass(8))
            .with_color("#00FFFF")
            .with_weight(0.0)
            .with_max_iterations(1_000_000),
        // Cardinal moves only; tends to zig-zag along grid lines.
        AgentProfile::new("The Taxi Driver", SearchStrategy::AStar, STANDARD_STEP, compass(4))
            .with_color("#FFFF00")
            .with_heuristic(HeuristicKind::Manhattan),
        AgentProfile::new("The King", SearchStrategy::AStar, STANDARD_STEP, compass(8))
            .with_color("#800080")
            .with_heuristic(HeuristicKind::Chebyshev),
        // Loses speed in corners, so it prefers long straights.
        AgentProfile::new("Drift Racer", SearchStrategy::AStar, STANDARD_STEP, compass(16))
            .with_color("#FF8000")
            .with_heuristic(HeuristicKind::Octile)
            .with_physics(Physics {
                base_speed: 0.0003,
                drag_factor: 0.004,
                turning_penalty: 0.5,
            }),
        AgentProfile::new("Rookie", SearchStrategy::AStar, STANDARD_STEP, compass(8))
            .with_color("#A0A0A0")
            .with_physics(Physics {
                base_speed: 0.0002,
                drag_factor: 0.002,
                turning_penalty: 0.2,
            })
            .with_safety_margin(0.0003),
    ]
}
