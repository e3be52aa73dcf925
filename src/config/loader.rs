use std::fs;
use std::path::{Path, PathBuf};

use super::ArcheryConfig;
use crate::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".archerymath.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse config from a TOML string
pub fn parse_config(contents: &str) -> Result<ArcheryConfig> {
    Ok(toml::from_str::<ArcheryConfig>(contents)?)
}

/// Load and parse a specific config file
pub fn load_config_from(path: &Path) -> Result<ArcheryConfig> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents).map_err(|e| Error::Configuration {
        message: format!("Failed to parse {}: {}", path.display(), e),
        path: Some(path.to_path_buf()),
    })
}

fn try_load_config_from_path(config_path: &Path) -> Option<ArcheryConfig> {
    match load_config_from(config_path) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// `start` and its parents, nearest first, up to `max_depth` directories
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find the nearest `.archerymath.toml` from the working directory upwards
pub fn load_config() -> ArcheryConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return ArcheryConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            ArcheryConfig::default()
        })
}
