//! Reference-list configuration loaded from `~/.config/urlcheck/config.toml`.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::lists::ReferenceLists;

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlcheck")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load the reference lists from disk, creating a default file if none
/// exists. The written file doubles as documentation of the list format.
pub fn load_or_init() -> Result<ReferenceLists> {
    let path = config_path()?;
    if !path.exists() {
        let defaults = ReferenceLists::default();
        let toml = toml::to_string_pretty(&defaults)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(defaults);
    }

    load_from_path(&path)
}

/// Load reference lists from a specific file, without the init side effect.
/// Used for the CLI `--config` override.
pub fn load_from_path(path: &Path) -> Result<ReferenceLists> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let lists: ReferenceLists =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(lists)
}
