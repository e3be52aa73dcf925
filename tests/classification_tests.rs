//! Cross-discipline checks on classification thresholds.

use archerymath::classifications::{
    agb_indoor_classification_scores, agb_old_field_classification_scores,
    agb_old_indoor_classification_scores, agb_old_outdoor_classification_scores,
    agb_outdoor_classification_scores, calculate_agb_indoor_classification,
    calculate_agb_old_field_classification, calculate_agb_old_indoor_classification,
    calculate_agb_old_outdoor_classification, calculate_agb_outdoor_classification,
    coax_indoor_group, coax_old_field_group, coax_old_indoor_group, coax_old_outdoor_group,
    coax_outdoor_group, indoor, old_field, old_indoor, old_outdoor, outdoor, AgeGroup, Bowstyle,
    Category, ClassificationResult, Gender,
};
use archerymath::rounds::builtin;
use archerymath::Result;

type Scores = fn(&str, Category) -> Result<Vec<i32>>;
type Calculate = fn(f64, &str, Category) -> Result<ClassificationResult>;
type Coax = fn(Category) -> Category;
type Tiers = fn(Category) -> &'static [&'static str];

struct Discipline {
    name: &'static str,
    tiers: Tiers,
    rounds: &'static [&'static str],
    scores: Scores,
    calculate: Calculate,
    coax: Coax,
}

fn disciplines() -> [Discipline; 5] {
    [
        Discipline {
            name: "outdoor",
            tiers: |_| &outdoor::TIERS[..],
            rounds: &["wa1440_90", "york", "metric_v", "wa720_50_c"],
            scores: agb_outdoor_classification_scores,
            calculate: calculate_agb_outdoor_classification,
            coax: coax_outdoor_group,
        },
        Discipline {
            name: "indoor",
            tiers: |_| &indoor::TIERS[..],
            rounds: &["portsmouth", "wa18_triple", "worcester", "vegas_300"],
            scores: agb_indoor_classification_scores,
            calculate: calculate_agb_indoor_classification,
            coax: coax_indoor_group,
        },
        Discipline {
            name: "old outdoor",
            tiers: old_outdoor::old_outdoor_tiers,
            rounds: &["york", "wa1440_90", "metric_iv", "wa720_70"],
            scores: agb_old_outdoor_classification_scores,
            calculate: calculate_agb_old_outdoor_classification,
            coax: coax_old_outdoor_group,
        },
        Discipline {
            name: "old indoor",
            tiers: |_| &old_indoor::TIERS[..],
            rounds: &["portsmouth", "wa18", "bray_i"],
            scores: agb_old_indoor_classification_scores,
            calculate: calculate_agb_old_indoor_classification,
            coax: coax_old_indoor_group,
        },
        Discipline {
            name: "old field",
            tiers: |_| &old_field::TIERS[..],
            rounds: &["wa_field_24_red_marked", "wa_field_24_blue_unmarked"],
            scores: agb_old_field_classification_scores,
            calculate: calculate_agb_old_field_classification,
            coax: coax_old_field_group,
        },
    ]
}

fn categories() -> impl Iterator<Item = Category> {
    Bowstyle::ALL.into_iter().flat_map(|bowstyle| {
        [Gender::Male, Gender::Female].into_iter().flat_map(move |gender| {
            AgeGroup::ALL
                .into_iter()
                .map(move |age_group| Category::new(bowstyle, gender, age_group))
        })
    })
}

fn has_thresholds(discipline: &Discipline, category: Category) -> bool {
    match discipline.name {
        "old field" => category.bowstyle != Bowstyle::Asiatic,
        "old outdoor" => matches!(
            category.bowstyle,
            Bowstyle::Compound | Bowstyle::Recurve | Bowstyle::Barebow | Bowstyle::Longbow
        ),
        _ => true,
    }
}

fn tier_index(tiers: &[&str], result: ClassificationResult) -> Option<usize> {
    tiers.iter().position(|tier| *tier == result.label())
}

#[test]
fn test_attainable_thresholds_never_increase() {
    for discipline in disciplines() {
        for codename in discipline.rounds {
            for category in categories().filter(|c| has_thresholds(&discipline, *c)) {
                let scores = (discipline.scores)(codename, category).unwrap();
                assert_eq!(scores.len(), (discipline.tiers)(category).len());
                let attainable: Vec<i32> = scores.iter().copied().filter(|s| *s >= 0).collect();
                for pair in attainable.windows(2) {
                    assert!(
                        pair[1] <= pair[0],
                        "{} {} {}: {:?}",
                        discipline.name,
                        codename,
                        category,
                        scores
                    );
                }
            }
        }
    }
}

#[test]
fn test_scoring_a_threshold_earns_that_tier() {
    for discipline in disciplines() {
        for codename in discipline.rounds {
            let max = f64::from(builtin().get(codename).unwrap().max_score());
            for category in categories().filter(|c| has_thresholds(&discipline, *c)) {
                let scores = (discipline.scores)(codename, category).unwrap();
                for (i, threshold) in scores.iter().enumerate() {
                    if *threshold < 0 || f64::from(*threshold) > max {
                        continue;
                    }
                    let result =
                        (discipline.calculate)(f64::from(*threshold), codename, category).unwrap();
                    if discipline.name == "old field"
                        && !old_field::is_eligible_round(codename, category.bowstyle)
                    {
                        assert_eq!(result, ClassificationResult::Unclassified);
                        continue;
                    }
                    let index = tier_index((discipline.tiers)(category), result);
                    assert!(
                        index.is_some_and(|index| index <= i),
                        "{} {} {} at {}: {}",
                        discipline.name,
                        codename,
                        category,
                        threshold,
                        result
                    );
                }
            }
        }
    }
}

#[test]
fn test_zero_scores_are_unclassified() {
    let recurve = Category::new(Bowstyle::Recurve, Gender::Female, AgeGroup::Adult);
    for discipline in disciplines() {
        for codename in discipline.rounds {
            let result = (discipline.calculate)(0.0, codename, recurve).unwrap();
            assert!(!result.is_classified(), "{} {}", discipline.name, codename);
        }
    }
}

#[test]
fn test_coaxing_is_idempotent() {
    for discipline in disciplines() {
        for category in categories() {
            let once = (discipline.coax)(category);
            assert_eq!((discipline.coax)(once), once, "{} {}", discipline.name, category);
        }
    }
}

#[test]
fn test_rounds_from_other_disciplines_are_rejected() {
    let recurve = Category::new(Bowstyle::Recurve, Gender::Male, AgeGroup::Adult);
    assert!(agb_outdoor_classification_scores("portsmouth", recurve).is_err());
    assert!(agb_indoor_classification_scores("york", recurve).is_err());
    assert!(agb_old_outdoor_classification_scores("wa18", recurve).is_err());
    assert!(agb_old_field_classification_scores("wa18", recurve).is_err());
    assert!(agb_old_indoor_classification_scores("not_a_round", recurve).is_err());
}
