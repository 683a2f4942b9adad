// File: crates/trend-cli/src/main.rs
// Summary: Renders one download-trend SVG per configured repository.

mod config;
mod store;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::{Path, PathBuf};
use trend_core::{render, Summary};

use crate::config::{load_config, RepoRef};
use crate::store::{load_samples, write_chart};

/// Render download-count trend charts as SVG
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file listing repositories: {"repos": ["owner/repo", ...]}
    #[arg(short, long, default_value = "repos.json")]
    config: PathBuf,

    /// Directory holding <owner>_<repo>.json (or .csv) sample files
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Directory receiving <owner>_<repo>.svg charts
    #[arg(short, long, default_value = "charts")]
    out_dir: PathBuf,

    /// Render only this configured repository (owner/repo)
    #[arg(long)]
    only: Option<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut repos = load_config(&cli.config)?;
    if let Some(only) = &cli.only {
        let wanted: RepoRef = only.parse()?;
        repos.retain(|r| *r == wanted);
        if repos.is_empty() {
            anyhow::bail!("{wanted} is not listed in {}", cli.config.display());
        }
    }
    info!("Rendering {} chart(s) from {}", repos.len(), cli.config.display());

    for repo in &repos {
        let path = render_repo(repo, &cli.data_dir, &cli.out_dir)?;
        info!("Wrote {}", path.display());
    }
    Ok(())
}

/// Load, render and write one repository's chart.
fn render_repo(repo: &RepoRef, data_dir: &Path, out_dir: &Path) -> Result<PathBuf> {
    let samples = load_samples(data_dir, repo)?;
    match Summary::from_samples(&samples) {
        Some(s) => info!("{repo}: {} samples, total {}, change {}", samples.len(), s.current, s.change_label()),
        None => info!("{repo}: no samples"),
    }
    let svg = render(&repo.owner, &repo.repo, &samples)
        .with_context(|| format!("rendering chart for {repo}"))?;
    write_chart(out_dir, repo, &svg)
}
