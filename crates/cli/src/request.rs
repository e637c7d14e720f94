use anyhow::{bail, Context, Result};
use pathrace::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name given to a flattened user-drawn track.
pub const TRACK_NAME: &str = "User Drawn Track";

/// Race input file: start/goal, constraints, and optional racers and tolerances.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RaceRequest {
    pub start: Coordinate,
    pub goal: Coordinate,
    #[serde(default)]
    pub regions: Vec<Region>,
    /// How `regions` are read; inferred from `track`/`procedural_wall` when absent.
    #[serde(default)]
    pub mode: Option<RegionMode>,
    /// Outer ring plus holes, flattened into one boundary and appended to `regions`.
    /// Boundary mode only.
    #[serde(default)]
    pub track: Option<PolygonWithHoles>,
    /// Add the procedural wall between start and goal as an obstacle.
    /// Exclusion mode only.
    #[serde(default)]
    pub procedural_wall: bool,
    /// Racers; the built-in roster when absent.
    #[serde(default)]
    pub profiles: Option<Vec<AgentProfile>>,
    #[serde(default)]
    pub search: SearchCfg,
}

impl RaceRequest {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("reading request {}", path.display()))?;
        serde_json::from_slice(&bytes)
            .with_context(|| format!("parsing request {}", path.display()))
    }

    /// The explicit mode, else exclusion for a wall-only request, else boundary.
    pub fn mode(&self) -> RegionMode {
        match self.mode {
            Some(mode) => mode,
            None if self.procedural_wall && self.track.is_none() => RegionMode::Exclusion,
            None => RegionMode::Boundary,
        }
    }

    /// Explicit regions, then the flattened track or the procedural wall.
    ///
    /// A track is a boundary and the wall is an obstacle, so each is only
    /// accepted under its own mode.
    pub fn resolve_regions(&self) -> Result<Vec<Region>> {
        let mode = self.mode();
        let mut regions = self.regions.clone();
        if let Some(track) = &self.track {
            if mode != RegionMode::Boundary {
                bail!("a track needs boundary mode, request is in {mode:?} mode");
            }
            if let Some(ring) = track.flatten(TRACK_NAME) {
                regions.push(ring);
            }
        }
        if self.procedural_wall {
            if mode != RegionMode::Exclusion {
                bail!("the procedural wall needs exclusion mode, request is in {mode:?} mode");
            }
            regions.push(procedural_wall(self.start, self.goal));
        }
        Ok(regions)
    }

    pub fn resolve_profiles(&self) -> Vec<AgentProfile> {
        self.profiles.clone().unwrap_or_else(default_roster)
    }
}
