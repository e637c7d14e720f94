use anyhow::{Context, Result};
use pathrace::RaceResult;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// One row per racer; failure is null for finishers.
pub fn results_frame(results: &[RaceResult]) -> PolarsResult<DataFrame> {
    df!(
        "profile" => results.iter().map(|r| r.profile_name.as_str()).collect::<Vec<_>>(),
        "move_count" => results.iter().map(|r| r.move_count).collect::<Vec<i64>>(),
        "compute_time_ms" => results.iter().map(|r| r.compute_time_ms).collect::<Vec<f64>>(),
        "simulated_travel_time" => results.iter().map(|r| r.simulated_travel_time).collect::<Vec<f64>>(),
        "color" => results.iter().map(|r| r.color.as_str()).collect::<Vec<_>>(),
        "failure" => results
            .iter()
            .map(|r| r.failure.as_ref().map(|e| e.to_string()))
            .collect::<Vec<Option<String>>>()
    )
}

/// Write as Parquet for `.parquet` paths, CSV otherwise.
pub fn write_table(path: &Path, results: &[RaceResult]) -> Result<()> {
    let mut df = results_frame(results)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating table dir {}", parent.display()))?;
        }
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    if path.extension().is_some_and(|e| e == "parquet") {
        ParquetWriter::new(file).finish(&mut df)?;
    } else {
        CsvWriter::new(file).include_header(true).finish(&mut df)?;
    }
    tracing::info!(rows = df.height(), cols = df.width(), path = %path.display(), "results_table");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathrace::prelude::*;
    use tempfile::tempdir;

    fn results() -> Vec<RaceResult> {
        let roster = vec![
            AgentProfile::new("a", SearchStrategy::AStar, 1.0, compass(4)),
            AgentProfile::new("b", SearchStrategy::AStar, 1.0, Vec::new()),
        ];
        run_profiles(
            Coordinate::new(0.0, 0.0),
            Coordinate::new(2.0, 0.0),
            &[],
            RegionMode::Exclusion,
            &roster,
            &SearchCfg::default(),
        )
    }

    #[test]
    fn frame_has_one_row_per_racer() {
        let df = results_frame(&results()).unwrap();
        assert_eq!(df.shape(), (2, 6));
    }

    #[test]
    fn csv_table_reads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out/results.csv");
        write_table(&path, &results()).unwrap();
        let df = LazyCsvReader::new(&path)
            .with_infer_schema_length(Some(100))
            .finish()
            .unwrap()
            .collect()
            .unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 6);
    }
}
