use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use pathrace::prelude::*;
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod request;
mod table;

use provenance::{code_rev, write_sidecar, Payload};
use request::RaceRequest;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Run pathfinding races between agent profiles")]
struct Cmd {
    /// Optional run label; propagated to logs and provenance sidecars
    #[arg(long)]
    tag: Option<String>,

    /// Log search internals (skipped regions, per-racer timing)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Race every profile in the request (or the built-in roster)
    Race {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Also write a results table (.csv or .parquet)
        #[arg(long)]
        table: Option<PathBuf>,
        /// Run racers on the rayon thread pool
        #[arg(long)]
        parallel: bool,
    },
    /// Find one path with a single named profile
    Path {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        profile: String,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print the built-in roster as JSON
    Profiles,
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Race {
            input,
            out,
            table,
            parallel,
        } => run_race(&input, &out, table.as_deref(), parallel, cmd.tag),
        Action::Path {
            input,
            profile,
            out,
        } => run_path(&input, &profile, &out, cmd.tag),
        Action::Profiles => profiles(),
        Action::Report => report(cmd.tag),
    }
}

fn run_race(
    input: &Path,
    out: &Path,
    table: Option<&Path>,
    parallel: bool,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), parallel, tag = ?tag, "race");
    let req = RaceRequest::load(input)?;
    let regions = req.resolve_regions()?;
    let roster = req.resolve_profiles();
    let report = race(
        req.start,
        req.goal,
        &regions,
        req.mode(),
        &roster,
        &req.search,
        parallel,
    );
    for r in &report.results {
        tracing::info!(
            racer = %r.profile_name,
            moves = r.move_count,
            cost = r.simulated_travel_time,
            time_ms = r.compute_time_ms,
            "result"
        );
    }
    if let Some(w) = report.winner() {
        tracing::info!(winner = %w.profile_name, "race finished");
    }

    write_json(out, &report)?;
    if let Some(table) = table {
        table::write_table(table, &report.results)?;
    }
    let params = json!({
        "input": input.to_string_lossy(),
        "mode": req.mode(),
        "regions": regions.len(),
        "racers": roster.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
        "parallel": parallel,
        "search": req.search,
    });
    write_sidecar(out, Payload::new(params, tag))?;
    Ok(())
}

fn run_path(input: &Path, name: &str, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), profile = name, tag = ?tag, "path");
    let req = RaceRequest::load(input)?;
    let roster = req.resolve_profiles();
    let Some(profile) = roster.iter().find(|p| p.name == name) else {
        let known: Vec<_> = roster.iter().map(|p| p.name.as_str()).collect();
        bail!("unknown profile {name:?}; known: {}", known.join(", "));
    };
    let regions = req.resolve_regions()?;
    let res = find_path(req.start, req.goal, &regions, req.mode(), profile, &req.search)
        .with_context(|| format!("{name} found no path"))?;
    tracing::info!(moves = res.moves(), cost = res.total_cost, "path");
    write_json(out, &res)?;
    let params = json!({
        "input": input.to_string_lossy(),
        "profile": name,
        "stats": res.stats,
    });
    write_sidecar(out, Payload::new(params, tag))?;
    Ok(())
}

fn profiles() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&default_roster())?);
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = json!({
        "code_rev": code_rev(),
        "pathrace_version": pathrace::VERSION,
        "tag": tag,
        "defaults": SearchCfg::default(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn write_json<T: Serialize>(out: &Path, value: &T) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn request_file(dir: &Path) -> PathBuf {
        let req = json!({
            "start": {"lng": 0.0, "lat": 0.0},
            "goal": {"lng": 4.0, "lat": 0.0},
            "mode": "exclusion",
            "regions": [{
                "name": "wall",
                "vertices": [
                    {"lng": 1.5, "lat": -1.5}, {"lng": 2.5, "lat": -1.5},
                    {"lng": 2.5, "lat": 1.5}, {"lng": 1.5, "lat": 1.5}
                ]
            }],
            "profiles": [
                {"name": "ace", "color": "#00FF00", "strategy": "a_star",
                 "move_distance": 1.0, "flight_angles": [0.0, 90.0, 180.0, 270.0]},
                {"name": "stuck", "color": "#FF0000", "strategy": "greedy",
                 "move_distance": 1.0, "flight_angles": []}
            ]
        });
        let path = dir.join("req.json");
        std::fs::write(&path, serde_json::to_vec(&req).unwrap()).unwrap();
        path
    }

    #[test]
    fn race_writes_report_table_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = request_file(dir.path());
        let out = dir.path().join("out/report.json");
        let table = dir.path().join("out/results.csv");
        run_race(&input, &out, Some(&table), true, Some("t1".into())).unwrap();

        let report: RaceReport = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(report.results.len(), 2);
        assert_eq!(report.results[0].move_count, 8);
        assert_eq!(report.results[1].move_count, -1);
        assert!(table.exists());
        assert!(dir.path().join("out/report.provenance.json").exists());
    }

    #[test]
    fn path_rejects_unknown_profile() {
        let dir = tempdir().unwrap();
        let input = request_file(dir.path());
        let out = dir.path().join("path.json");
        let err = run_path(&input, "nobody", &out, None).unwrap_err();
        assert!(err.to_string().contains("unknown profile"));
        run_path(&input, "ace", &out, None).unwrap();
        let res: PathResult = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(res.moves(), 8);
    }
}
