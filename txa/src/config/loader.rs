// src/config/loader.rs
use crate::config::{CONFIG_FILE_NAME, Config};
use anyhow::{Context as _, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Finds the nearest `txa.toml`, starting in `dir` and walking up through
/// its parents.
///
/// # Returns
///
/// * `Ok(Some(path))` for the first config file found
/// * `Ok(None)` when no directory up to the root has one
///
/// # Errors
///
/// Returns an error if the existence of a candidate file cannot be checked.
#[inline]
pub fn find_config(dir: &Path) -> Result<Option<PathBuf>> {
    let mut current_dir = dir.to_path_buf();
    let mut visited = HashSet::new();

    while visited.insert(current_dir.clone()) {
        let candidate = current_dir.join(CONFIG_FILE_NAME);
        if candidate
            .try_exists()
            .with_context(|| format!("Failed to check for config file: {}", candidate.display()))?
        {
            debug!(path = %candidate.display(), "found config file");
            return Ok(Some(candidate));
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    Ok(None)
}

/// Reads and parses a config file.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * The file is not valid TOML or holds unknown keys
#[inline]
pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config = parse_config(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Loads the nearest `txa.toml` above `dir`, or the defaults if none exists.
///
/// # Errors
///
/// Propagates errors from [`find_config`] and [`load_config_file`].
#[inline]
pub fn load_config(dir: &Path) -> Result<Config> {
    match find_config(dir)? {
        Some(path) => load_config_file(&path),
        None => Ok(Config::default()),
    }
}

/// Parses config TOML.
///
/// # Errors
///
/// Returns an error if `content` is not valid TOML for [`Config`].
#[inline]
pub fn parse_config(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}
