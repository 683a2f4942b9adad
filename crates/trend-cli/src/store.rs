// File: crates/trend-cli/src/store.rs
// Summary: Per-repository data source (JSON or CSV samples) and SVG output sink.

use anyhow::{Context, Result};
use log::warn;
use std::path::{Path, PathBuf};
use trend_core::Sample;

use crate::config::RepoRef;

/// Load `<owner>_<repo>.json`, falling back to `<owner>_<repo>.csv` (`date,total` header).
/// A repository with neither file has no data yet and gets an empty series.
pub fn load_samples(data_dir: &Path, repo: &RepoRef) -> Result<Vec<Sample>> {
    let json = data_dir.join(format!("{}.json", repo.key()));
    if json.exists() {
        let text = std::fs::read_to_string(&json)
            .with_context(|| format!("reading {}", json.display()))?;
        return serde_json::from_str(&text).with_context(|| format!("parsing {}", json.display()));
    }

    let csv_path = data_dir.join(format!("{}.csv", repo.key()));
    if csv_path.exists() {
        return load_csv(&csv_path).with_context(|| format!("failed to load CSV '{}'", csv_path.display()));
    }

    warn!("{repo}: no data file in {}, rendering placeholder", data_dir.display());
    Ok(Vec::new())
}

fn load_csv(path: &Path) -> Result<Vec<Sample>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut out: Vec<Sample> = Vec::new();
    for rec in rdr.deserialize::<Sample>() {
        out.push(rec?);
    }
    Ok(out)
}

/// Write `<owner>_<repo>.svg` under `out_dir`, creating the directory first.
pub fn write_chart(out_dir: &Path, repo: &RepoRef, svg: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;
    let path = out_dir.join(format!("{}.svg", repo.key()));
    std::fs::write(&path, svg).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}
