//! Pre-2023 Archery GB indoor classifications.
//!
//! Classes A to H for adult recurve and compound archers, at fixed AGBold
//! handicaps.

use super::category::{AgeGroup, Bowstyle, Category, Discipline, Gender};
use super::{check_score, compound_codename, pick_tier, ClassificationResult};
use crate::errors::{Error, Result};
use crate::handicaps::AGB_OLD;
use crate::rounds::{builtin, Location, Round};

pub const TIERS: [&str; 8] = ["A", "B", "C", "D", "E", "F", "G", "H"];

const COMPOUND_MALE: [f64; 8] = [5.0, 12.0, 24.0, 37.0, 49.0, 62.0, 73.0, 79.0];
const COMPOUND_FEMALE: [f64; 8] = [12.0, 18.0, 30.0, 43.0, 55.0, 67.0, 79.0, 83.0];
const RECURVE_MALE: [f64; 8] = [14.0, 21.0, 33.0, 46.0, 58.0, 70.0, 80.0, 85.0];
const RECURVE_FEMALE: [f64; 8] = [21.0, 27.0, 39.0, 51.0, 64.0, 75.0, 85.0, 90.0];

/// Every compound style shoots as Compound, everything else as Recurve, and
/// all ages as Adult
pub fn coax_old_indoor_group(category: Category) -> Category {
    let bowstyle = if category.bowstyle.is_compound_family() {
        Bowstyle::Compound
    } else {
        Bowstyle::Recurve
    };
    Category::new(bowstyle, category.gender, AgeGroup::Adult)
}

/// Strict counterpart of [`coax_old_indoor_group`]
pub fn validate_old_indoor_group(category: Category) -> Result<Category> {
    if !matches!(category.bowstyle, Bowstyle::Compound | Bowstyle::Recurve) {
        return Err(Error::invalid_category(
            Discipline::OldIndoor.as_str(),
            format!(
                "{} is not a recognised bowstyle. Select from compound, recurve.",
                category.bowstyle
            ),
        ));
    }
    if category.age_group != AgeGroup::Adult {
        return Err(Error::invalid_category(
            Discipline::OldIndoor.as_str(),
            format!(
                "{} is not a recognised age group. Only adult is classified.",
                category.age_group
            ),
        ));
    }
    Ok(category)
}

/// Fixed handicaps for each class, best first
pub fn old_indoor_handicaps(category: Category) -> Result<&'static [f64; 8]> {
    let category = validate_old_indoor_group(category)?;
    Ok(match (category.bowstyle, category.gender) {
        (Bowstyle::Compound, Gender::Male) => &COMPOUND_MALE,
        (Bowstyle::Compound, Gender::Female) => &COMPOUND_FEMALE,
        (_, Gender::Male) => &RECURVE_MALE,
        (_, Gender::Female) => &RECURVE_FEMALE,
    })
}

fn old_indoor_round(codename: &str) -> Result<&'static Round> {
    let round = builtin().get(codename)?;
    match round.location() {
        Some(Location::Indoor) => Ok(round),
        _ => Err(Error::invalid_input(format!(
            "'{}' is not recognised for the purposes of indoor classification",
            codename
        ))),
    }
}

/// Score thresholds for every class, best first
///
/// The category is coaxed first, so any bowstyle and age is accepted.
///
/// ```rust
/// use archerymath::classifications::{agb_old_indoor_classification_scores, Category};
///
/// let cat = Category::parse("recurve", "male", "adult").unwrap();
/// let scores = agb_old_indoor_classification_scores("portsmouth", cat).unwrap();
/// assert_eq!(scores, vec![592, 582, 554, 505, 432, 315, 195, 139]);
/// ```
pub fn agb_old_indoor_classification_scores(
    codename: &str,
    category: Category,
) -> Result<Vec<i32>> {
    old_indoor_round(codename)?;
    let category = coax_old_indoor_group(category);
    let codename = if category.bowstyle == Bowstyle::Compound {
        compound_codename(codename)
    } else {
        codename
    };
    let round = old_indoor_round(codename)?;

    old_indoor_handicaps(category)?
        .iter()
        .map(|&hc| Ok(AGB_OLD.score_for_round(hc, round, None, true)? as i32))
        .collect()
}

/// Class earned by `score` on an indoor round
pub fn calculate_agb_old_indoor_classification(
    score: f64,
    codename: &str,
    category: Category,
) -> Result<ClassificationResult> {
    let round = old_indoor_round(codename)?;
    check_score(score, codename, round)?;
    let thresholds = agb_old_indoor_classification_scores(codename, category)?;
    Ok(pick_tier(&TIERS, &thresholds, score))
}
