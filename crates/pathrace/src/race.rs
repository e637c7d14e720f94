//! Multi-profile races: one independent search per profile on shared inputs.
//!
//! A failing profile yields a sentinel result (empty path, `move_count = -1`,
//! zero simulated time) and never aborts the rest of the batch. The parallel
//! runner shares only read-only inputs and returns results in roster order.

use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::geom::Coordinate;
use crate::profile::AgentProfile;
use crate::region::{Region, RegionMode};
use crate::search::{find_path, PathResult, SearchCfg};

/// Outcome of one racer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RaceResult {
    pub profile_name: String,
    /// Moves taken, or -1 when no path was found.
    pub move_count: i64,
    /// Wall-clock time spent searching.
    pub compute_time_ms: f64,
    pub path: Vec<Coordinate>,
    pub color: String,
    /// Path cost in the profile's units (moves, or time under physics); 0 on failure.
    pub simulated_travel_time: f64,
    /// Why the search failed, if it did.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<SearchError>,
}

impl RaceResult {
    fn from_outcome(
        profile: &AgentProfile,
        outcome: Result<PathResult, SearchError>,
        compute_time_ms: f64,
    ) -> Self {
        match outcome {
            Ok(res) => Self {
                profile_name: profile.name.clone(),
                move_count: res.moves() as i64,
                compute_time_ms,
                simulated_travel_time: res.total_cost,
                path: res.path,
                color: profile.color.clone(),
                failure: None,
            },
            Err(e) => Self {
                profile_name: profile.name.clone(),
                move_count: -1,
                compute_time_ms,
                path: Vec::new(),
                color: profile.color.clone(),
                simulated_travel_time: 0.0,
                failure: Some(e),
            },
        }
    }

    #[inline]
    pub fn finished(&self) -> bool {
        self.failure.is_none()
    }
}

/// A whole race: inputs echoed back with one result per profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RaceReport {
    pub start: Coordinate,
    pub goal: Coordinate,
    pub mode: RegionMode,
    pub region_count: usize,
    pub results: Vec<RaceResult>,
}

impl RaceReport {
    /// Finished result with the lowest simulated travel time.
    pub fn winner(&self) -> Option<&RaceResult> {
        self.results
            .iter()
            .filter(|r| r.finished())
            .min_by(|a, b| a.simulated_travel_time.total_cmp(&b.simulated_travel_time))
    }
}

/// Run and time a single profile.
pub fn run_racer(
    start: Coordinate,
    goal: Coordinate,
    regions: &[Region],
    mode: RegionMode,
    profile: &AgentProfile,
    cfg: &SearchCfg,
) -> RaceResult {
    let t0 = Instant::now();
    let outcome = find_path(start, goal, regions, mode, profile, cfg);
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;
    tracing::debug!(profile = %profile.name, elapsed_ms, ok = outcome.is_ok(), "racer done");
    RaceResult::from_outcome(profile, outcome, elapsed_ms)
}

/// Run every profile one after another.
pub fn run_profiles(
    start: Coordinate,
    goal: Coordinate,
    regions: &[Region],
    mode: RegionMode,
    profiles: &[AgentProfile],
    cfg: &SearchCfg,
) -> Vec<RaceResult> {
    profiles
        .iter()
        .map(|p| run_racer(start, goal, regions, mode, p, cfg))
        .collect()
}

/// Run every profile on the rayon pool; results keep the order of `profiles`.
pub fn run_profiles_parallel(
    start: Coordinate,
    goal: Coordinate,
    regions: &[Region],
    mode: RegionMode,
    profiles: &[AgentProfile],
    cfg: &SearchCfg,
) -> Vec<RaceResult> {
    profiles
        .par_iter()
        .map(|p| run_racer(start, goal, regions, mode, p, cfg))
        .collect()
}

/// Run a race and wrap the results in a report.
pub fn race(
    start: Coordinate,
    goal: Coordinate,
    regions: &[Region],
    mode: RegionMode,
    profiles: &[AgentProfile],
    cfg: &SearchCfg,
    parallel: bool,
) -> RaceReport {
    tracing::info!(
        %start,
        %goal,
        racers = profiles.len(),
        regions = regions.len(),
        parallel,
        "starting race"
    );
    let results = if parallel {
        run_profiles_parallel(start, goal, regions, mode, profiles, cfg)
    } else {
        run_profiles(start, goal, regions, mode, profiles, cfg)
    };
    RaceReport {
        start,
        goal,
        mode,
        region_count: regions.len(),
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::SearchStrategy;
    use crate::profile::compass;

    fn c(lng: f64, lat: f64) -> Coordinate {
        Coordinate::new(lng, lat)
    }

    fn roster() -> Vec<AgentProfile> {
        vec![
            AgentProfile::new("astar", SearchStrategy::AStar, 1.0, compass(4)).with_color("#00FF00"),
            // gives up almost immediately
            AgentProfile::new("quitter", SearchStrategy::Dijkstra, 1.0, compass(4))
                .with_max_iterations(2),
            AgentProfile::new("greedy", SearchStrategy::Greedy, 1.0, compass(4)),
            // cannot move at all
            AgentProfile::new("frozen", SearchStrategy::AStar, 1.0, Vec::new()),
        ]
    }

    #[test]
    fn failures_become_sentinels_without_stopping_the_batch() {
        let results = run_profiles(
            c(0.0, 0.0),
            c(4.0, 3.0),
            &[],
            RegionMode::Exclusion,
            &roster(),
            &SearchCfg::default(),
        );
        assert_eq!(results.len(), 4);
        let names: Vec<_> = results.iter().map(|r| r.profile_name.as_str()).collect();
        assert_eq!(names, ["astar", "quitter", "greedy", "frozen"]);

        assert_eq!(results[0].move_count, 7);
        assert_eq!(results[0].simulated_travel_time, 7.0);
        assert_eq!(results[0].path.len(), 8);
        assert_eq!(results[0].color, "#00FF00");

        for (r, err) in [
            (&results[1], SearchError::IterationLimitReached { limit: 2 }),
            (&results[3], SearchError::Exhausted { iterations: 1 }),
        ] {
            assert!(!r.finished());
            assert_eq!(r.move_count, -1);
            assert!(r.path.is_empty());
            assert_eq!(r.simulated_travel_time, 0.0);
            assert_eq!(r.failure, Some(err));
        }
        assert_eq!(results[2].move_count, 7);
    }

    #[test]
    fn parallel_matches_sequential() {
        let regions = vec![Region::rectangle("wall", c(1.5, -1.5), c(2.5, 1.5))];
        let cfg = SearchCfg::default();
        let seq = run_profiles(c(0.0, 0.0), c(4.0, 0.0), &regions, RegionMode::Exclusion, &roster(), &cfg);
        let par = run_profiles_parallel(
            c(0.0, 0.0),
            c(4.0, 0.0),
            &regions,
            RegionMode::Exclusion,
            &roster(),
            &cfg,
        );
        assert_eq!(seq.len(), par.len());
        for (a, b) in seq.iter().zip(&par) {
            assert_eq!(a.profile_name, b.profile_name);
            assert_eq!(a.move_count, b.move_count);
            assert_eq!(a.path, b.path);
            assert_eq!(a.failure, b.failure);
        }
    }

    #[test]
    fn report_picks_fastest_finisher() {
        let report = race(
            c(0.0, 0.0),
            c(3.0, 0.0),
            &[],
            RegionMode::Exclusion,
            &roster(),
            &SearchCfg::default(),
            true,
        );
        assert_eq!(report.region_count, 0);
        let w = report.winner().unwrap();
        assert!(w.finished());
        assert_eq!(w.simulated_travel_time, 3.0);
    }

    #[test]
    fn results_serialize_failure_kind() {
        let p = &roster()[3];
        let r = run_racer(
            c(0.0, 0.0),
            c(1.0, 0.0),
            &[],
            RegionMode::Exclusion,
            p,
            &SearchCfg::default(),
        );
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["move_count"], -1);
        assert_eq!(v["failure"]["kind"], "exhausted");
    }
}
