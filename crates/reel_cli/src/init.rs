//! Scene scaffolding

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::SceneConfig;

/// Write the sample scene to `path`, refusing to overwrite unless `force`
pub fn create_scene(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Pass --force to overwrite it.",
            path.display()
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let content = format!(
        "# Reel scene\n#\n# Scrub it with `reel sample {0}` or play it with `reel play {0}`.\n\n{1}",
        path.display(),
        SceneConfig::sample().to_toml()?
    );
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!("Created scene at {}", path.display());
    Ok(())
}
