//! Archery GB indoor classifications (2023 scheme).
//!
//! Eight tiers from Indoor Grand Master Bowman down to Indoor Archer 3rd
//! Class. Thresholds are AGB scores on the full size face; compounds are
//! scored on the compound version of a round where one exists.

use super::category::{Bowstyle, Category, Discipline};
use super::data::{age_gender_step, bowstyle_data};
use super::{
    check_score, compound_codename, pick_tier, strip_spots, ClassificationResult, UNATTAINABLE,
};
use crate::errors::{Error, Result};
use crate::handicaps::AGB;
use crate::rounds::{builtin, Location, Round};

pub const TIERS: [&str; 8] = [
    "I-GMB", "I-MB", "I-B1", "I-B2", "I-B3", "I-A1", "I-A2", "I-A3",
];

pub const TIERS_LONG: [&str; 8] = [
    "Indoor Grand Master Bowman",
    "Indoor Master Bowman",
    "Indoor Bowman 1st Class",
    "Indoor Bowman 2nd Class",
    "Indoor Bowman 3rd Class",
    "Indoor Archer 1st Class",
    "Indoor Archer 2nd Class",
    "Indoor Archer 3rd Class",
];

/// Map bowstyles without indoor datums onto the one they are scored as
pub fn coax_indoor_group(category: Category) -> Category {
    let bowstyle = match category.bowstyle {
        Bowstyle::Traditional | Bowstyle::Flatbow | Bowstyle::Asiatic => Bowstyle::Barebow,
        Bowstyle::CompoundBarebow => Bowstyle::Barebow,
        Bowstyle::CompoundLimited => Bowstyle::Compound,
        other => other,
    };
    Category { bowstyle, ..category }
}

/// Strict counterpart of [`coax_indoor_group`]
pub fn validate_indoor_group(category: Category) -> Result<Category> {
    bowstyle_data(category.bowstyle, Discipline::Indoor).map(|_| category)
}

/// Handicap for each tier, best first
pub fn indoor_handicaps(category: Category) -> Result<[f64; 8]> {
    let category = coax_indoor_group(category);
    let data = bowstyle_data(category.bowstyle, Discipline::Indoor)?;
    let delta = age_gender_step(
        category.gender,
        category.age_group.data().step,
        data.age_step_in,
        data.gender_step_in,
    );
    let mut handicaps = [0.0; 8];
    for (i, hc) in handicaps.iter_mut().enumerate() {
        *hc = data.datum_in + delta + (i as f64 - 1.0) * data.class_step_in;
    }
    Ok(handicaps)
}

fn indoor_round(codename: &str) -> Result<&'static Round> {
    let round = builtin().get(codename)?;
    match round.location() {
        Some(Location::Indoor) => Ok(round),
        _ => Err(Error::invalid_input(format!(
            "'{}' is not an indoor round",
            codename
        ))),
    }
}

/// Score thresholds for every tier, best first
///
/// A tier whose handicap already scores the round maximum, with no room for
/// a better score, is [`UNATTAINABLE`]. A threshold sitting in a gap of the
/// score table is lifted by one point.
pub fn agb_indoor_classification_scores(codename: &str, category: Category) -> Result<Vec<i32>> {
    indoor_round(codename)?;
    let category = coax_indoor_group(category);
    let codename = if category.bowstyle == Bowstyle::Compound {
        compound_codename(codename)
    } else {
        codename
    };
    let round = indoor_round(codename)?;
    let full_face = builtin().get(&strip_spots(codename))?;
    let max = round.max_score() as i32;

    indoor_handicaps(category)?
        .iter()
        .map(|&hc| {
            let score = AGB.score_for_round(hc, full_face, None, true)? as i32;
            let next = AGB.score_for_round(hc.floor() + 1.0, full_face, None, true)? as i32;
            Ok(match (next == score, score == max) {
                (true, true) => UNATTAINABLE,
                (true, false) => score + 1,
                (false, _) => score,
            })
        })
        .collect()
}

/// Classification earned by `score` on an indoor round
pub fn calculate_agb_indoor_classification(
    score: f64,
    codename: &str,
    category: Category,
) -> Result<ClassificationResult> {
    let round = indoor_round(codename)?;
    check_score(score, codename, round)?;
    let thresholds = agb_indoor_classification_scores(codename, category)?;
    Ok(pick_tier(&TIERS, &thresholds, score))
}
