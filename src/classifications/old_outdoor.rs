//! Pre-2023 Archery GB outdoor classifications.
//!
//! Adults work towards Grand Master Bowman, juniors towards Junior Master
//! Bowman. Thresholds are AGBold scores at fixed handicaps, gated by a
//! minimum distance per class and, for the master classes, a round of at
//! least twelve dozen arrows.
//!
//! The handicap ladder is provisional: every bowstyle and gender shares it
//! until fitted values are published.

use super::category::{AgeGroup, Bowstyle, Category, Discipline, Gender};
use super::{check_score, pick_tier, strip_spots, ClassificationResult, UNATTAINABLE};
use crate::errors::{Error, Result};
use crate::handicaps::AGB_OLD;
use crate::rounds::{builtin, Location, Round};

pub const ADULT_TIERS: [&str; 6] = ["GMB", "MB", "B", "1ST", "2ND", "3RD"];

pub const JUNIOR_TIERS: [&str; 5] = ["JMB", "JB", "1ST", "2ND", "3RD"];

const HANDICAPS: [f64; 6] = [5.0, 23.0, 41.0, 59.0, 77.0, 95.0];

/// Distance and length requirements for one class
#[derive(Debug, Clone, Copy, PartialEq)]
struct Prerequisite {
    min_dist: f64,
    min_dozens: u32,
}

const fn prerequisites<const N: usize>(
    dists: [f64; N],
    master_classes: usize,
) -> [Prerequisite; N] {
    let mut out = [Prerequisite {
        min_dist: 0.0,
        min_dozens: 0,
    }; N];
    let mut i = 0;
    while i < N {
        out[i].min_dist = dists[i];
        if i < master_classes {
            out[i].min_dozens = 12;
        }
        i += 1;
    }
    out
}

const ADULT_MALE: [Prerequisite; 6] = prerequisites([90.0, 90.0, 90.0, 70.0, 60.0, 50.0], 2);
const ADULT_FEMALE: [Prerequisite; 6] = prerequisites([70.0, 70.0, 70.0, 60.0, 50.0, 40.0], 2);
const U18_MALE: [Prerequisite; 5] = prerequisites([70.0, 70.0, 60.0, 50.0, 40.0], 1);
const U18_FEMALE: [Prerequisite; 5] = prerequisites([60.0, 60.0, 50.0, 40.0, 30.0], 1);
const U16_MALE: [Prerequisite; 5] = prerequisites([60.0, 60.0, 50.0, 40.0, 30.0], 1);
const U16_FEMALE: [Prerequisite; 5] = prerequisites([50.0, 50.0, 40.0, 30.0, 20.0], 1);
const U14_MALE: [Prerequisite; 5] = prerequisites([50.0, 50.0, 40.0, 30.0, 20.0], 1);
const U14_FEMALE: [Prerequisite; 5] = prerequisites([40.0, 40.0, 30.0, 20.0, 15.0], 1);
const U12_MALE: [Prerequisite; 5] = prerequisites([40.0, 40.0, 30.0, 20.0, 15.0], 1);
const U12_FEMALE: [Prerequisite; 5] = prerequisites([30.0, 30.0, 20.0, 15.0, 10.0], 1);

/// Fold the newer age groups into the five the old scheme knew
pub fn coax_old_outdoor_group(category: Category) -> Category {
    let age_group = match category.age_group {
        AgeGroup::Adult | AgeGroup::Over50 | AgeGroup::Under21 => AgeGroup::Adult,
        AgeGroup::Under15 => AgeGroup::Under16,
        other => other,
    };
    Category { age_group, ..category }
}

/// Strict counterpart of [`coax_old_outdoor_group`]
pub fn validate_old_outdoor_group(category: Category) -> Result<Category> {
    if !matches!(
        category.bowstyle,
        Bowstyle::Compound | Bowstyle::Recurve | Bowstyle::Barebow | Bowstyle::Longbow
    ) {
        return Err(Error::invalid_category(
            Discipline::OldOutdoor.as_str(),
            format!(
                "{} is not a recognised bowstyle. \
                 Select from compound, recurve, barebow, longbow.",
                category.bowstyle
            ),
        ));
    }
    if matches!(
        category.age_group,
        AgeGroup::Over50 | AgeGroup::Under21 | AgeGroup::Under15
    ) {
        return Err(Error::invalid_category(
            Discipline::OldOutdoor.as_str(),
            format!(
                "{} is not a recognised age group. \
                 Select from adult, under 18, under 16, under 14, under 12.",
                category.age_group
            ),
        ));
    }
    Ok(category)
}

/// Class names for a category, best first
pub fn old_outdoor_tiers(category: Category) -> &'static [&'static str] {
    match coax_old_outdoor_group(category).age_group {
        AgeGroup::Adult => &ADULT_TIERS,
        _ => &JUNIOR_TIERS,
    }
}

fn prerequisites_for(category: Category) -> &'static [Prerequisite] {
    match (category.age_group, category.gender) {
        (AgeGroup::Under18, Gender::Male) => &U18_MALE,
        (AgeGroup::Under18, Gender::Female) => &U18_FEMALE,
        (AgeGroup::Under16, Gender::Male) => &U16_MALE,
        (AgeGroup::Under16, Gender::Female) => &U16_FEMALE,
        (AgeGroup::Under14, Gender::Male) => &U14_MALE,
        (AgeGroup::Under14, Gender::Female) => &U14_FEMALE,
        (AgeGroup::Under12, Gender::Male) => &U12_MALE,
        (AgeGroup::Under12, Gender::Female) => &U12_FEMALE,
        (_, Gender::Male) => &ADULT_MALE,
        (_, Gender::Female) => &ADULT_FEMALE,
    }
}

fn old_outdoor_round(codename: &str) -> Result<&'static Round> {
    let round = builtin().get(codename)?;
    match round.location() {
        Some(Location::Outdoor) => Ok(round),
        _ => Err(Error::invalid_input(format!(
            "'{}' is not recognised for the purposes of old outdoor classification",
            codename
        ))),
    }
}

/// Score thresholds for every class, best first
///
/// ```rust
/// use archerymath::classifications::{agb_old_outdoor_classification_scores, Category};
///
/// let cat = Category::parse("recurve", "male", "adult").unwrap();
/// let scores = agb_old_outdoor_classification_scores("york", cat).unwrap();
/// assert_eq!(scores, vec![1273, 1134, 786, 259, 30, 2]);
/// ```
pub fn agb_old_outdoor_classification_scores(
    codename: &str,
    category: Category,
) -> Result<Vec<i32>> {
    old_outdoor_round(codename)?;
    let category = validate_old_outdoor_group(coax_old_outdoor_group(category))?;
    let round = builtin().get(&strip_spots(codename))?;
    let longest = round.max_distance().value;
    let dozens = round.n_arrows() / 12;

    prerequisites_for(category)
        .iter()
        .zip(HANDICAPS)
        .map(|(req, hc)| {
            if req.min_dist > longest || req.min_dozens > dozens {
                return Ok(UNATTAINABLE);
            }
            Ok(AGB_OLD.score_for_round(hc, round, None, true)? as i32)
        })
        .collect()
}

/// Class earned by `score` on an outdoor round
pub fn calculate_agb_old_outdoor_classification(
    score: f64,
    codename: &str,
    category: Category,
) -> Result<ClassificationResult> {
    let round = old_outdoor_round(codename)?;
    check_score(score, codename, round)?;
    let thresholds = agb_old_outdoor_classification_scores(codename, category)?;
    Ok(pick_tier(old_outdoor_tiers(category), &thresholds, score))
}
