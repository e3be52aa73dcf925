//! Pre-2023 Archery GB field classifications.
//!
//! Six classes from Grand Master Bowman to 3rd Class, read from published
//! score tables for adult and under 18 archers. Only 24 target WA field
//! rounds on the right peg count.

use super::category::{AgeGroup, Bowstyle, Category, Discipline, Gender};
use super::{check_score, pick_tier, ClassificationResult};
use crate::errors::{Error, Result};
use crate::rounds::{builtin, Location, Round};

pub const TIERS: [&str; 6] = ["GMB", "MB", "B", "1C", "2C", "3C"];

pub const TIERS_LONG: [&str; 6] = [
    "Grand Master Bowman",
    "Master Bowman",
    "Bowman",
    "1st Class",
    "2nd Class",
    "3rd Class",
];

type ScoreRow = [i32; 6];

/// Adult male, adult female, under 18 male, under 18 female
struct FieldTable {
    adult: [ScoreRow; 2],
    under18: [ScoreRow; 2],
}

const COMPOUND: FieldTable = FieldTable {
    adult: [
        [393, 377, 344, 312, 279, 247],
        [376, 361, 330, 299, 268, 237],
    ],
    under18: [
        [385, 369, 337, 306, 273, 242],
        [357, 343, 314, 284, 255, 225],
    ],
};

const RECURVE: FieldTable = FieldTable {
    adult: [
        [338, 317, 288, 260, 231, 203],
        [322, 302, 275, 247, 220, 193],
    ],
    under18: [
        [311, 292, 265, 239, 213, 187],
        [280, 263, 239, 215, 191, 168],
    ],
};

const BAREBOW: FieldTable = FieldTable {
    adult: [
        [328, 307, 279, 252, 224, 197],
        [303, 284, 258, 233, 207, 182],
    ],
    under18: [
        [298, 279, 254, 229, 204, 179],
        [251, 236, 214, 193, 172, 151],
    ],
};

const LONGBOW: FieldTable = FieldTable {
    adult: [
        [201, 188, 171, 155, 137, 121],
        [152, 142, 129, 117, 103, 91],
    ],
    under18: [
        [161, 150, 137, 124, 109, 96],
        [122, 114, 103, 94, 83, 73],
    ],
};

const TRADITIONAL: FieldTable = FieldTable {
    adult: [
        [262, 245, 223, 202, 178, 157],
        [197, 184, 167, 152, 134, 118],
    ],
    under18: [
        [210, 196, 178, 161, 143, 126],
        [158, 147, 134, 121, 107, 95],
    ],
};

fn field_table(bowstyle: Bowstyle) -> Option<&'static FieldTable> {
    match bowstyle {
        Bowstyle::Compound => Some(&COMPOUND),
        Bowstyle::Recurve | Bowstyle::CompoundLimited => Some(&RECURVE),
        Bowstyle::Barebow | Bowstyle::CompoundBarebow => Some(&BAREBOW),
        Bowstyle::Longbow => Some(&LONGBOW),
        Bowstyle::Traditional | Bowstyle::Flatbow => Some(&TRADITIONAL),
        Bowstyle::Asiatic => None,
    }
}

/// Under 21 and 50+ shoot as adults, younger juniors as under 18
pub fn coax_old_field_group(category: Category) -> Category {
    let age_group = match category.age_group {
        AgeGroup::Adult | AgeGroup::Under21 | AgeGroup::Over50 => AgeGroup::Adult,
        _ => AgeGroup::Under18,
    };
    Category { age_group, ..category }
}

/// Strict counterpart of [`coax_old_field_group`]
pub fn validate_old_field_group(category: Category) -> Result<Category> {
    if field_table(category.bowstyle).is_none() {
        return Err(Error::invalid_category(
            Discipline::OldField.as_str(),
            format!("{} is not a recognised bowstyle", category.bowstyle),
        ));
    }
    if !matches!(category.age_group, AgeGroup::Adult | AgeGroup::Under18) {
        return Err(Error::invalid_category(
            Discipline::OldField.as_str(),
            format!(
                "{} is not a recognised age group. Select from adult, under 18.",
                category.age_group
            ),
        ));
    }
    Ok(category)
}

fn field_round(codename: &str) -> Result<&'static Round> {
    let round = builtin().get(codename)?;
    match round.location() {
        Some(Location::Field) => Ok(round),
        _ => Err(Error::invalid_input(format!(
            "'{}' is not recognised for the purposes of field classification",
            codename
        ))),
    }
}

/// Whether a round counts for a bowstyle: a red peg 24 target round for
/// sighted bows, a blue peg one otherwise
pub fn is_eligible_round(codename: &str, bowstyle: Bowstyle) -> bool {
    let peg = if bowstyle.is_sighted() {
        "wa_field_24_red_"
    } else {
        "wa_field_24_blue_"
    };
    codename.contains(peg)
}

/// Score thresholds for every class, best first
///
/// ```rust
/// use archerymath::classifications::{agb_old_field_classification_scores, Category};
///
/// let cat = Category::parse("compound", "male", "adult").unwrap();
/// let scores = agb_old_field_classification_scores("wa_field_24_red_marked", cat).unwrap();
/// assert_eq!(scores, vec![393, 377, 344, 312, 279, 247]);
/// ```
pub fn agb_old_field_classification_scores(
    codename: &str,
    category: Category,
) -> Result<Vec<i32>> {
    field_round(codename)?;
    let category = validate_old_field_group(coax_old_field_group(category))?;
    let table = field_table(category.bowstyle).ok_or_else(|| {
        Error::invalid_category(Discipline::OldField.as_str(), category.group_name())
    })?;
    let rows = if category.age_group == AgeGroup::Adult {
        &table.adult
    } else {
        &table.under18
    };
    let row = match category.gender {
        Gender::Male => rows[0],
        Gender::Female => rows[1],
    };
    Ok(row.to_vec())
}

/// Class earned by `score` on a field round
///
/// Rounds on the wrong peg, or with fewer than 24 targets, are unclassified.
pub fn calculate_agb_old_field_classification(
    score: f64,
    codename: &str,
    category: Category,
) -> Result<ClassificationResult> {
    let round = field_round(codename)?;
    check_score(score, codename, round)?;
    if !is_eligible_round(codename, category.bowstyle) {
        log::debug!(
            "{} does not count for {} field classifications",
            codename,
            category.bowstyle
        );
        return Ok(ClassificationResult::Unclassified);
    }
    let thresholds = agb_old_field_classification_scores(codename, category)?;
    Ok(pick_tier(&TIERS, &thresholds, score))
}
