//! `.archerymath.toml` configuration.
//!
//! Every section and field is optional; missing values fall back to the
//! defaults below so a partial file is always valid.

mod loader;

pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_config, CONFIG_FILE_NAME,
};

use crate::formatting::ColorMode;
use crate::handicaps::{SchemeName, TableOptions};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArcheryConfig {
    #[serde(default)]
    pub handicap: HandicapConfig,

    #[serde(default)]
    pub table: TableConfig,

    #[serde(default)]
    pub rounds: RoundsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Defaults for the `score` and `handicap` commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandicapConfig {
    #[serde(default = "default_scheme")]
    pub scheme: SchemeName,

    /// Report integer handicaps from `handicap`
    #[serde(default)]
    pub int_prec: bool,
}

impl Default for HandicapConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            int_prec: false,
        }
    }
}

fn default_scheme() -> SchemeName {
    SchemeName::Agb
}

/// Defaults for the `table` command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    #[serde(default = "default_true")]
    pub rounded: bool,

    #[serde(default = "default_true")]
    pub clean_gaps: bool,

    #[serde(default = "default_true")]
    pub int_prec: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            rounded: true,
            clean_gaps: true,
            int_prec: true,
        }
    }
}

impl From<&TableConfig> for TableOptions {
    fn from(config: &TableConfig) -> Self {
        Self {
            rounded: config.rounded,
            int_prec: config.int_prec,
            clean_gaps: config.clean_gaps,
            arrow_diameter: None,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Extra JSON round definition files merged over the built-in catalogue
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundsConfig {
    #[serde(default)]
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// "auto", "always" or "never"
    #[serde(default = "default_color")]
    pub color: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

fn default_color() -> String {
    "auto".to_string()
}

impl OutputConfig {
    pub fn color_mode(&self) -> ColorMode {
        ColorMode::parse(&self.color).unwrap_or_else(|| {
            log::warn!("Unknown color setting '{}', using auto", self.color);
            ColorMode::Auto
        })
    }
}

/// Contents written by `archerymath init`
pub const DEFAULT_CONFIG: &str = r#"# archerymath configuration

[handicap]
scheme = "AGB"
int_prec = false

[table]
rounded = true
clean_gaps = true
int_prec = true

[rounds]
files = []

[output]
color = "auto"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses_to_defaults() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, ArcheryConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = parse_config("[handicap]\nscheme = \"AA2\"\n").unwrap();
        assert_eq!(config.handicap.scheme, SchemeName::Aa2);
        assert!(!config.handicap.int_prec);
        assert!(config.table.clean_gaps);
        assert_eq!(config.output.color_mode(), ColorMode::Auto);
    }

    #[test]
    fn test_table_options_from_config() {
        let config = TableConfig {
            rounded: false,
            clean_gaps: false,
            int_prec: false,
        };
        let options = TableOptions::from(&config);
        assert!(!options.rounded);
        assert!(!options.clean_gaps);
        assert_eq!(options.arrow_diameter, None);
    }
}
