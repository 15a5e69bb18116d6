//! JSON work file parking the draft set between CLI invocations.
//!
//! The draft set lives in memory for the duration of one subcommand;
//! mutating subcommands load it from here first and write it back after.

use std::path::Path;

use anyhow::Context;
use caseflow_core::DraftSet;

/// Load the parked draft set. A missing file is an empty set.
pub fn load(path: &Path) -> anyhow::Result<DraftSet> {
    if !path.exists() {
        return Ok(DraftSet::new());
    }
    let bytes =
        std::fs::read(path).with_context(|| format!("reading draft file {}", path.display()))?;
    serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing draft file {}", path.display()))
}

/// Park the current draft set. An empty set removes the file.
pub fn save(path: &Path, drafts: &DraftSet) -> anyhow::Result<()> {
    if drafts.is_empty() {
        if path.exists() {
            std::fs::remove_file(path)
                .with_context(|| format!("removing draft file {}", path.display()))?;
        }
        return Ok(());
    }
    let json = serde_json::to_vec_pretty(drafts).context("encoding draft set")?;
    std::fs::write(path, json).with_context(|| format!("writing draft file {}", path.display()))
}
