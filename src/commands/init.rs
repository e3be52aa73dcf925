use crate::config::{CONFIG_FILE_NAME, DEFAULT_CONFIG};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Write the default `.archerymath.toml` into `dir`
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(config_path)
}

pub fn init_config(force: bool) -> Result<String> {
    let path = init_config_in(Path::new("."), force)?;
    Ok(format!("Created {} configuration file", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_config_from, ArcheryConfig};
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = TempDir::new().unwrap();
        let path = init_config_in(dir.path(), false).unwrap();
        assert_eq!(load_config_from(&path).unwrap(), ArcheryConfig::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        init_config_in(dir.path(), false).unwrap();
        assert!(init_config_in(dir.path(), false).is_err());
        assert!(init_config_in(dir.path(), true).is_ok());
    }
}
