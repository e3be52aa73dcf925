//! Archery GB classification thresholds.
//!
//! Each discipline resolves a [`Category`] to a ladder of score thresholds on
//! a round, best tier first, and picks the best tier a score reaches.
//!
//! - [`outdoor`]: 2023 outdoor target scheme, computed from handicaps
//! - [`indoor`]: 2023 indoor scheme, computed from handicaps
//! - [`old_indoor`]: pre-2023 indoor scheme with fixed handicaps
//! - [`old_outdoor`]: pre-2023 outdoor scheme with fixed handicaps
//! - [`old_field`]: pre-2023 field scheme with fixed score tables
//! - [`age`]: age group from year of birth

pub mod age;
pub mod category;
pub mod data;
pub mod indoor;
pub mod old_field;
pub mod old_indoor;
pub mod old_outdoor;
pub mod outdoor;

pub use age::{age_group_for_year, calculate_age_group};
pub use category::{AgeGroup, Bowstyle, Category, Discipline, Gender};
pub use indoor::{
    agb_indoor_classification_scores, calculate_agb_indoor_classification, coax_indoor_group,
    validate_indoor_group,
};
pub use old_field::{
    agb_old_field_classification_scores, calculate_agb_old_field_classification,
    coax_old_field_group, validate_old_field_group,
};
pub use old_indoor::{
    agb_old_indoor_classification_scores, calculate_agb_old_indoor_classification,
    coax_old_indoor_group, validate_old_indoor_group,
};
pub use old_outdoor::{
    agb_old_outdoor_classification_scores, calculate_agb_old_outdoor_classification,
    coax_old_outdoor_group, validate_old_outdoor_group,
};
pub use outdoor::{
    agb_outdoor_classification_scores, calculate_agb_outdoor_classification, coax_outdoor_group,
    validate_outdoor_group,
};

use crate::errors::{Error, Result};
use crate::rounds::Round;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Threshold for a tier that cannot be awarded on a round
pub const UNATTAINABLE: i32 = -9999;

/// Outcome of classifying a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassificationResult {
    Tier(&'static str),
    Unclassified,
}

impl ClassificationResult {
    /// Short label, `UC` when unclassified
    pub fn label(&self) -> &'static str {
        match self {
            Self::Tier(label) => label,
            Self::Unclassified => "UC",
        }
    }

    pub fn is_classified(&self) -> bool {
        matches!(self, Self::Tier(_))
    }
}

impl fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reject scores outside `0..=max` for a round
pub(crate) fn check_score(score: f64, codename: &str, round: &Round) -> Result<()> {
    let max = round.max_score();
    if !(0.0..=f64::from(max)).contains(&score) {
        return Err(Error::invalid_score(
            score,
            codename,
            format!("Should be in range 0-{}.", max),
        ));
    }
    Ok(())
}

/// Best tier whose threshold the score reaches, skipping unattainable tiers
pub(crate) fn pick_tier(
    tiers: &[&'static str],
    thresholds: &[i32],
    score: f64,
) -> ClassificationResult {
    tiers
        .iter()
        .zip(thresholds)
        .find(|(_, &threshold)| threshold >= 0 && f64::from(threshold) <= score)
        .map_or(ClassificationResult::Unclassified, |(tier, _)| {
            ClassificationResult::Tier(tier)
        })
}

/// Full face codename for triple spot, five centre and small face variants
pub fn strip_spots(codename: &str) -> String {
    codename
        .replace("_triple", "")
        .replace("_5_centre", "")
        .replace("_small", "")
}

/// Indoor codename scored with the compound inner ten, if one exists
pub fn compound_codename(codename: &str) -> &str {
    match codename {
        "bray_i" => "bray_i_compound",
        "bray_i_triple" => "bray_i_compound_triple",
        "bray_ii" => "bray_ii_compound",
        "bray_ii_triple" => "bray_ii_compound_triple",
        "stafford" => "stafford_compound",
        "portsmouth" => "portsmouth_compound",
        "portsmouth_triple" => "portsmouth_compound_triple",
        "vegas" => "vegas_compound",
        "wa18" => "wa18_compound",
        "wa18_triple" => "wa18_compound_triple",
        "wa25" => "wa25_compound",
        "wa25_triple" => "wa25_compound_triple",
        other => other,
    }
}
