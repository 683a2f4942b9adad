// File: crates/trend-cli/src/config.rs
// Summary: Repository list loading and `owner/repo` parsing.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// On-disk shape: `{"repos": ["owner/repo", ...]}`.
#[derive(Debug, Deserialize)]
pub struct RepoConfig {
    pub repos: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl RepoRef {
    /// Storage key shared by the data file and the output file.
    pub fn key(&self) -> String {
        format!("{}_{}", self.owner, self.repo)
    }
}

impl FromStr for RepoRef {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (owner, repo) = s
            .trim()
            .split_once('/')
            .with_context(|| format!("repository '{s}' is not in owner/repo form"))?;
        if owner.is_empty() || repo.is_empty() {
            anyhow::bail!("repository '{s}' has an empty owner or name");
        }
        Ok(Self { owner: owner.to_string(), repo: repo.to_string() })
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

pub fn parse_config(text: &str) -> Result<Vec<RepoRef>> {
    let cfg: RepoConfig = serde_json::from_str(text).context("invalid repository config")?;
    cfg.repos.iter().map(|r| r.parse()).collect()
}

pub fn load_config(path: &Path) -> Result<Vec<RepoRef>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("parsing config {}", path.display()))
}
