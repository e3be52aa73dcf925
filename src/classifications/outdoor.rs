//! Archery GB outdoor target classifications (2023 scheme).
//!
//! Nine tiers from Elite Master Bowman down to Archer 3rd Class. The handicap
//! for each tier steps away from the bowstyle datum by a fixed class step;
//! thresholds are the AGB scores at those handicaps. The Master Bowman tiers
//! need a prestige round, and lower tiers need a minimum distance.

use super::category::{AgeGroup, Bowstyle, Category, Discipline, Gender};
use super::data::{age_gender_step, bowstyle_data};
use super::{check_score, pick_tier, strip_spots, ClassificationResult, UNATTAINABLE};
use crate::errors::{Error, Result};
use crate::handicaps::AGB;
use crate::rounds::{builtin, Location, Round};

pub const TIERS: [&str; 9] = ["EMB", "GMB", "MB", "B1", "B2", "B3", "A1", "A2", "A3"];

pub const TIERS_LONG: [&str; 9] = [
    "Elite Master Bowman",
    "Grand Master Bowman",
    "Master Bowman",
    "Bowman 1st Class",
    "Bowman 2nd Class",
    "Bowman 3rd Class",
    "Archer 1st Class",
    "Archer 2nd Class",
    "Archer 3rd Class",
];

/// Longest distances used to step down tier requirements (metres)
const DISTANCES: [f64; 8] = [90.0, 70.0, 60.0, 50.0, 40.0, 30.0, 20.0, 15.0];

const PRESTIGE_IMPERIAL: [&str; 7] = [
    "york",
    "hereford",
    "bristol_i",
    "bristol_ii",
    "bristol_iii",
    "bristol_iv",
    "bristol_v",
];

const PRESTIGE_METRIC: [&str; 11] = [
    "wa1440_90",
    "wa1440_90_small",
    "wa1440_70",
    "wa1440_70_small",
    "wa1440_60",
    "wa1440_60_small",
    "metric_i",
    "metric_ii",
    "metric_iii",
    "metric_iv",
    "metric_v",
];

const PRESTIGE_720: [&str; 5] = [
    "wa720_70",
    "wa720_60",
    "metric_122_50",
    "metric_122_40",
    "metric_122_30",
];

const PRESTIGE_720_COMPOUND: [&str; 3] = ["wa720_50_c", "metric_80_40", "metric_80_30"];

const PRESTIGE_720_BAREBOW: [&str; 4] =
    ["wa720_50_b", "metric_122_50", "metric_122_40", "metric_122_30"];

/// Resolved rule data for one outdoor category
#[derive(Debug, Clone, PartialEq)]
pub struct OutdoorGroup {
    pub category: Category,
    pub handicaps: [f64; 9],
    pub min_dists: [f64; 9],
    pub prestige_rounds: Vec<&'static str>,
    pub max_distances: [f64; 2],
}

/// Map bowstyles without outdoor datums onto the one they are scored as
pub fn coax_outdoor_group(category: Category) -> Category {
    let bowstyle = match category.bowstyle {
        Bowstyle::Traditional | Bowstyle::Flatbow | Bowstyle::Asiatic => Bowstyle::Barebow,
        Bowstyle::CompoundBarebow => Bowstyle::Barebow,
        Bowstyle::CompoundLimited => Bowstyle::Compound,
        other => other,
    };
    Category { bowstyle, ..category }
}

/// Strict counterpart of [`coax_outdoor_group`]
pub fn validate_outdoor_group(category: Category) -> Result<Category> {
    bowstyle_data(category.bowstyle, Discipline::Outdoor).map(|_| category)
}

/// Minimum distance required for tier `n` (0 = EMB)
fn min_dist(n: usize, gender: Gender, age: AgeGroup, max_dists: [f64; 2]) -> f64 {
    let longest = max_dists[0].min(max_dists[1]);
    let start = DISTANCES
        .iter()
        .position(|&d| d == longest)
        .unwrap_or(DISTANCES.len() - 1);
    if n <= 3 {
        return DISTANCES[start];
    }
    let steps_down = match (gender, age) {
        (
            Gender::Male,
            AgeGroup::Adult
            | AgeGroup::Over50
            | AgeGroup::Under21
            | AgeGroup::Under18
            | AgeGroup::Under16,
        ) => n - 3,
        _ => n - 4,
    };
    DISTANCES[(start + steps_down).min(DISTANCES.len() - 1)]
}

fn prestige_rounds(category: Category, max_dists: [f64; 2]) -> Vec<&'static str> {
    let mut prestige = Vec::new();
    let mut distance_check: Vec<&'static str> = Vec::new();

    match category.bowstyle {
        Bowstyle::Compound => {
            prestige.push(PRESTIGE_720_COMPOUND[0]);
            distance_check.extend(&PRESTIGE_720_COMPOUND[1..]);
        }
        Bowstyle::Barebow => {
            prestige.push(PRESTIGE_720_BAREBOW[0]);
            distance_check.extend(&PRESTIGE_720_BAREBOW[1..]);
        }
        _ => {
            prestige.push(PRESTIGE_720[0]);
            distance_check.extend(&PRESTIGE_720[1..]);
            // shorter 720s for some male junior and senior groups
            if category.gender == Gender::Male {
                match category.age_group {
                    AgeGroup::Over50 | AgeGroup::Under18 => prestige.push(PRESTIGE_720[1]),
                    AgeGroup::Under16 => prestige.push(PRESTIGE_720[2]),
                    _ => {}
                }
            }
        }
    }
    distance_check.extend(PRESTIGE_IMPERIAL);
    distance_check.extend(PRESTIGE_METRIC);

    let shortest = max_dists[0].min(max_dists[1]);
    for codename in distance_check {
        match builtin().get(codename) {
            Ok(round) if round.max_distance().value >= shortest => prestige.push(codename),
            Ok(_) => {}
            Err(e) => log::warn!("Prestige round unavailable: {}", e),
        }
    }
    prestige
}

/// Resolve the handicaps, distances and prestige rounds for a category
pub fn outdoor_group(category: Category) -> Result<OutdoorGroup> {
    let category = coax_outdoor_group(category);
    let data = bowstyle_data(category.bowstyle, Discipline::Outdoor)?;
    let age = category.age_group.data();
    let max_distances = age.max_distances(category.gender);
    let delta = age_gender_step(
        category.gender,
        age.step,
        data.age_step_out,
        data.gender_step_out,
    );

    let mut handicaps = [0.0; 9];
    let mut min_dists = [0.0; 9];
    for (i, (hc, dist)) in handicaps.iter_mut().zip(min_dists.iter_mut()).enumerate() {
        *hc = data.datum_out + delta + (i as f64 - 2.0) * data.class_step_out;
        *dist = min_dist(i, category.gender, category.age_group, max_distances);
    }

    Ok(OutdoorGroup {
        category,
        handicaps,
        min_dists,
        prestige_rounds: prestige_rounds(category, max_distances),
        max_distances,
    })
}

fn outdoor_round(codename: &str) -> Result<&'static Round> {
    let round = builtin().get(codename)?;
    match round.location() {
        Some(Location::Outdoor) => Ok(round),
        _ => Err(Error::invalid_input(format!(
            "'{}' is not an outdoor target round",
            codename
        ))),
    }
}

/// Score thresholds for every tier, best first
///
/// Tiers a round cannot award are [`UNATTAINABLE`]. Triple spot and small
/// face variants use the full face round.
///
/// ```rust
/// use archerymath::classifications::{agb_outdoor_classification_scores, Category};
///
/// let cat = Category::parse("recurve", "male", "50+").unwrap();
/// let scores = agb_outdoor_classification_scores("hereford", cat).unwrap();
/// assert_eq!(scores, vec![1222, 1165, 1089, 993, 873, 732, 581, 436, 311]);
/// ```
pub fn agb_outdoor_classification_scores(codename: &str, category: Category) -> Result<Vec<i32>> {
    let round = outdoor_round(codename)?;
    let group = outdoor_group(category)?;
    let full_face = builtin().get(&strip_spots(codename))?;

    let mut scores = group
        .handicaps
        .iter()
        .map(|&hc| Ok(AGB.score_for_round(hc, full_face, None, true)? as i32))
        .collect::<Result<Vec<i32>>>()?;

    if !group.prestige_rounds.contains(&codename) {
        scores[..3].fill(UNATTAINABLE);
        let longest = round.max_distance().value;
        for (score, &min_dist) in scores.iter_mut().zip(&group.min_dists).skip(3) {
            if min_dist > longest {
                *score = UNATTAINABLE;
            }
        }
    }
    Ok(scores)
}

/// Classification earned by `score` on a round
pub fn calculate_agb_outdoor_classification(
    score: f64,
    codename: &str,
    category: Category,
) -> Result<ClassificationResult> {
    let round = outdoor_round(codename)?;
    check_score(score, codename, round)?;
    let thresholds = agb_outdoor_classification_scores(codename, category)?;
    Ok(pick_tier(&TIERS, &thresholds, score))
}
