//! Integration tests for the handicap schemes on built-in rounds.

mod common;

use archerymath::handicaps::{handicap_scheme, Direction, SchemeName};
use common::{ratings_best_to_worst, round, schemes, SAMPLE_ROUNDS};

#[test]
fn test_scores_never_increase_towards_worse_ratings() {
    for scheme in schemes() {
        let ratings = ratings_best_to_worst(scheme, 5.0);
        for codename in SAMPLE_ROUNDS {
            let round = round(codename);
            let scores: Vec<f64> = ratings
                .iter()
                .map(|&rating| scheme.score_for_round(rating, round, None, false).unwrap())
                .collect();
            for pair in scores.windows(2) {
                assert!(
                    pair[1] <= pair[0] + 1e-9,
                    "{} on {}: {} then {}",
                    scheme.name,
                    codename,
                    pair[0],
                    pair[1]
                );
            }
        }
    }
}

#[test]
fn test_rounded_scores_stay_within_round_maximum() {
    for scheme in schemes() {
        let (best, _) = scheme.best_worst();
        for codename in SAMPLE_ROUNDS {
            let round = round(codename);
            let score = scheme.score_for_round(best, round, None, true).unwrap();
            assert_eq!(score, f64::from(round.max_score()), "{} {}", scheme.name, codename);
        }
    }
}

#[test]
fn test_pass_scores_sum_to_round_score() {
    let round = round("york");
    for scheme in schemes() {
        let passes = scheme.score_for_passes(40.0, round, None, false).unwrap();
        let total = scheme.score_for_round(40.0, round, None, false).unwrap();
        assert_eq!(passes.len(), round.passes().len());
        assert!((passes.iter().sum::<f64>() - total).abs() < 1e-9);
    }
}

#[test]
fn test_decimal_inverse_recovers_rating() {
    let cases = [
        (SchemeName::Agb, [15.0, 42.5, 70.0]),
        (SchemeName::AgbOld, [15.0, 42.5, 70.0]),
        (SchemeName::Aa, [30.0, 62.5, 100.0]),
        (SchemeName::Aa2, [30.0, 62.5, 100.0]),
    ];
    for (name, ratings) in cases {
        let scheme = name.scheme();
        for codename in ["wa1440_90", "york", "portsmouth"] {
            let round = round(codename);
            for rating in ratings {
                let score = scheme.score_for_round(rating, round, None, false).unwrap();
                let recovered = scheme.handicap_from_score(score, round, false, None).unwrap();
                assert!(
                    (recovered - rating).abs() < 1e-6,
                    "{} {} {}: {}",
                    name,
                    codename,
                    rating,
                    recovered
                );
            }
        }
    }
}

#[test]
fn test_integer_inverse_is_monotonic_in_score() {
    let round = round("wa720_70");
    for scheme in schemes() {
        let handicaps: Vec<f64> = (1..=70)
            .map(|i| f64::from(i * 10))
            .map(|score| scheme.handicap_from_score(score, round, true, None).unwrap())
            .collect();
        for pair in handicaps.windows(2) {
            let better_or_equal = match scheme.direction {
                Direction::LowerIsBetter => pair[1] <= pair[0],
                Direction::HigherIsBetter => pair[1] >= pair[0],
            };
            assert!(better_or_equal, "{}: {:?}", scheme.name, pair);
            assert_eq!(pair[1], pair[1].trunc());
        }
    }
}

#[test]
fn test_known_agb_values() {
    let agb = handicap_scheme("AGB").unwrap();
    assert_eq!(agb.score_for_round(1.0, round("wa1440_90"), None, true).unwrap(), 1396.0);
    assert_eq!(agb.score_for_round(1.0, round("wa1440_70"), None, true).unwrap(), 1412.0);
    assert_eq!(agb.handicap_from_score(500.0, round("wa720_70"), true, None).unwrap(), 44.0);
}

#[test]
fn test_thicker_arrows_score_higher() {
    let round = round("portsmouth");
    for scheme in schemes() {
        let thin = scheme.score_for_round(50.0, round, Some(4.0e-3), false).unwrap();
        let thick = scheme.score_for_round(50.0, round, Some(9.3e-3), false).unwrap();
        assert!(thick > thin, "{}", scheme.name);
    }
}

#[test]
fn test_rejects_bad_inputs() {
    let agb = SchemeName::Agb.scheme();
    let round = round("wa720_70");
    assert!(agb.score_for_round(f64::NAN, round, None, true).is_err());
    assert!(agb.score_for_round(10.0, round, Some(-1.0), true).is_err());
    assert!(agb.handicap_from_score(-5.0, round, true, None).is_err());
    assert!(handicap_scheme("Lane").is_err());
}
