//! Comparative multi-profile pathfinding in continuous 2D space.
//!
//! Each racer (`AgentProfile`) searches the same start, goal, and regions with
//! its own strategy, heuristic, heading set, step length, physics, and wall
//! clearance, so one input yields a different path, cost, and timing per racer.
//!
//! Layout
//! - `geom`: coordinates, quantized keys, and exact 2D predicates.
//! - `region`: named rings and per-move boundary/obstacle enforcement.
//! - `track`: polygon-with-holes flattening and the procedural wall.
//! - `cost`: scoring strategies, heuristics, and the physics edge cost.
//! - `profile`: agent profiles, the default drone, and the built-in roster.
//! - `search`: best-first search with lazy deletion (`find_path`).
//! - `race`: one search per profile, sequential or on the rayon pool.
//!
//! Searches are single-threaded and own all of their state; inputs are shared
//! read-only.

pub mod cost;
pub mod error;
pub mod geom;
pub mod profile;
pub mod race;
pub mod region;
pub mod search;
pub mod track;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::SearchError;
pub use geom::{Coordinate, CoordinateKey};
pub use profile::{default_profile, default_roster, AgentProfile};
pub use race::{race, run_profiles, run_profiles_parallel, run_racer, RaceReport, RaceResult};
pub use region::{Region, RegionMode};
pub use search::{find_path, find_path_default, PathResult, SearchCfg};

/// Common imports for callers.
pub mod prelude {
    pub use crate::cost::{HeuristicKind, Physics, SearchStrategy};
    pub use crate::geom::{Coordinate, CoordinateKey};
    pub use crate::profile::{compass, default_profile, default_roster, AgentProfile};
    pub use crate::race::{race, run_profiles, run_profiles_parallel, RaceReport, RaceResult};
    pub use crate::region::{Region, RegionMode};
    pub use crate::search::{find_path, PathResult, SearchCfg, SearchStats};
    pub use crate::track::{procedural_wall, PolygonWithHoles};
    pub use crate::SearchError;
}
