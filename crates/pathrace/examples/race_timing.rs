//! Timing run: the built-in roster around the procedural wall.
//!
//! Purpose
//! - Give a reproducible data point for how long each racer takes on a short
//!   city-scale course, and how their costs compare.
//!
//! Why this shape
//! - Start and goal sit 0.002° apart in longitude, so the wall spans the direct
//!   line and every racer must detour around it.

use std::time::Instant;

use pathrace::prelude::*;

fn main() {
    let start = Coordinate::new(-3.1880, 55.9440);
    let goal = Coordinate::new(-3.1860, 55.9440);
    let regions = vec![procedural_wall(start, goal)];
    let roster = default_roster();

    let t0 = Instant::now();
    let report = race(
        start,
        goal,
        &regions,
        RegionMode::Exclusion,
        &roster,
        &SearchCfg::default(),
        true,
    );
    let total_ms = t0.elapsed().as_secs_f64() * 1e3;

    for r in &report.results {
        println!(
            "racer={:<18} moves={:>5} cost={:>10.4} time_ms={:>9.3}{}",
            r.profile_name,
            r.move_count,
            r.simulated_travel_time,
            r.compute_time_ms,
            r.failure
                .as_ref()
                .map(|e| format!(" failed=\"{e}\""))
                .unwrap_or_default()
        );
    }
    if let Some(w) = report.winner() {
        println!("winner={}", w.profile_name);
    }
    println!("race_time_ms={total_ms:.3}");
}
