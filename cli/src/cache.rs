use anyhow::{Context, Result};
use baconpath_core::ActorScore;
use std::{fs, path::Path};

/// Load persisted average scores. The entries keep the core's deterministic
/// order (ascending score, ties by name) but nothing here depends on it.
pub fn read_scores(path: &Path) -> Result<Vec<ActorScore>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("could not read score cache {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("score cache {} is not valid JSON", path.display()))
}

pub fn write_scores(path: &Path, scores: &[ActorScore]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("could not create cache directory {}", parent.display()))?;
    }
    let data = serde_json::to_string_pretty(scores)?;
    fs::write(path, data)
        .with_context(|| format!("could not write score cache {}", path.display()))
}
