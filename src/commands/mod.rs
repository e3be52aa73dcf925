//! CLI command implementations.
//!
//! Each command takes its parsed arguments plus a [`CommandContext`] and
//! returns the text to print, leaving stdout to `main`.
//!
//! Available commands:
//! - **score**: expected score for a handicap on a round
//! - **handicap**: handicap for a score on a round
//! - **table**: scores over a range of handicaps for several rounds
//! - **classify**: Archery GB classification or thresholds for a category
//! - **age**: age group from year of birth
//! - **rounds**: list the round catalogue
//! - **init**: write a default `.archerymath.toml`

pub mod age;
pub mod classify;
pub mod handicap;
pub mod init;
pub mod rounds;
pub mod score;
pub mod table;

pub use init::init_config;

use crate::config::ArcheryConfig;
use crate::formatting::{ColorMode, ColoredFormatter, OutputFormatter};
use crate::handicaps::{HandicapScheme, SchemeName};
use crate::rounds::loader::catalogue_with_files;
use crate::rounds::{Round, RoundCatalogue};
use anyhow::Result;
use std::path::PathBuf;

/// Shared state for one CLI invocation
pub struct CommandContext {
    pub config: ArcheryConfig,
    pub catalogue: RoundCatalogue,
    pub formatter: Box<dyn OutputFormatter>,
}

impl CommandContext {
    /// Build the catalogue from the built-in rounds plus configured and extra files
    pub fn new(
        config: ArcheryConfig,
        extra_round_files: &[PathBuf],
        color: ColorMode,
    ) -> Result<Self> {
        let files: Vec<PathBuf> = config
            .rounds
            .files
            .iter()
            .chain(extra_round_files)
            .cloned()
            .collect();
        let catalogue = catalogue_with_files(&files)?;
        log::debug!("Round catalogue holds {} rounds", catalogue.len());
        Ok(Self {
            config,
            catalogue,
            formatter: Box::new(ColoredFormatter::new(color)),
        })
    }

    pub fn round(&self, codename: &str) -> Result<&Round> {
        Ok(self.catalogue.get(codename)?)
    }

    /// The requested scheme, or the configured default
    pub fn scheme(&self, requested: Option<SchemeName>) -> &'static HandicapScheme {
        requested.unwrap_or(self.config.handicap.scheme).scheme()
    }
}

/// Integers without decimals, everything else to three places
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.3}", value)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(44.0), "44");
        assert_eq!(format_number(-6.0), "-6");
        assert_eq!(format_number(1395.12345), "1395.123");
    }

    #[test]
    fn test_scheme_falls_back_to_config() {
        let mut config = ArcheryConfig::default();
        config.handicap.scheme = SchemeName::Aa;
        let ctx = test_support::context_with(config);
        assert_eq!(ctx.scheme(None).name, SchemeName::Aa);
        assert_eq!(ctx.scheme(Some(SchemeName::Agb)).name, SchemeName::Agb);
    }
}
