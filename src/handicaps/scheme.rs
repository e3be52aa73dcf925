//! Handicap schemes: rating to expected score and back.
//!
//! Every scheme shares one algorithm. A rating is turned into an angular
//! dispersion θ by the scheme's own relation, scaled by distance to a radial
//! spread σ, and integrated against the rings of each target assuming a
//! circular normal arrow distribution. The inverse runs Brent's method on the
//! same forward model. A [`HandicapScheme`] only supplies the constants: the θ
//! relation, arrow diameters, rounding, scale direction and search bracket.

use super::rootfind::{brent, RootFindConfig};
use crate::errors::{Error, Result};
use crate::rounds::Round;
use crate::targets::{FaceSpec, Target};
use serde::{Deserialize, Serialize};
use std::f64::consts::SQRT_2;
use std::fmt;
use std::str::FromStr;
use tracing::debug_span;

/// Identifiers of the supported schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemeName {
    #[serde(rename = "AGB")]
    Agb,
    #[serde(rename = "AGBold")]
    AgbOld,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AA2")]
    Aa2,
}

impl SchemeName {
    pub const ALL: [SchemeName; 4] = [Self::Agb, Self::AgbOld, Self::Aa, Self::Aa2];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Agb => "AGB",
            Self::AgbOld => "AGBold",
            Self::Aa => "AA",
            Self::Aa2 => "AA2",
        }
    }

    pub fn scheme(self) -> &'static HandicapScheme {
        match self {
            Self::Agb => &AGB,
            Self::AgbOld => &AGB_OLD,
            Self::Aa => &AA,
            Self::Aa2 => &AA2,
        }
    }
}

impl fmt::Display for SchemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemeName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::SchemeNotFound(s.to_string()))
    }
}

/// How a continuous expected score becomes an attainable table value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    Ceil,
    /// Round half to even
    Nearest,
}

impl Rounding {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Ceil => value.ceil(),
            Self::Nearest => value.round_ties_even(),
        }
    }
}

/// Which end of the rating scale denotes the better archer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Scores fall as the rating rises (AGB style)
    LowerIsBetter,
    /// Scores rise with the rating (AA style)
    HigherIsBetter,
}

/// Model constants of one scheme
#[derive(Debug)]
pub struct HandicapScheme {
    pub name: SchemeName,
    pub description: &'static str,
    /// Default arrow diameter outdoors (m)
    pub arrow_diameter_out: f64,
    /// Default arrow diameter indoors (m)
    pub arrow_diameter_in: f64,
    pub rounding: Rounding,
    pub direction: Direction,
    /// Search bracket `(low, high)` for the inverse
    pub rating_bounds: (f64, f64),
    /// Gap below the round maximum that defines the max-score rating
    pub max_score_tolerance: f64,
    theta: fn(f64, f64) -> f64,
}

fn agb_theta(h: f64, d: f64) -> f64 {
    5.0e-4 * 1.035f64.powf(h + 6.0) * (0.00365 * d).exp()
}

fn agb_old_theta(h: f64, d: f64) -> f64 {
    5.0e-4 * 1.036f64.powf(h + 12.9) * (1.0 + 1.429e-6 * 1.07f64.powf(h + 4.3) * d * d)
}

fn aa_theta(h: f64, d: f64) -> f64 {
    SQRT_2 * 1.0e-3 * (2.37 - 0.027 * h + 0.004 * d).exp()
}

fn aa2_theta(h: f64, d: f64) -> f64 {
    SQRT_2 * 1.0e-3 * (2.57 - 0.027 * h).exp() * (0.815 + 0.185 * d / 50.0)
}

pub static AGB: HandicapScheme = HandicapScheme {
    name: SchemeName::Agb,
    description: "Archery GB 2023 (Atkinson, Lane, Brown)",
    arrow_diameter_out: 5.5e-3,
    arrow_diameter_in: 9.3e-3,
    rounding: Rounding::Ceil,
    direction: Direction::LowerIsBetter,
    rating_bounds: (-75.0, 300.0),
    max_score_tolerance: 1.0,
    theta: agb_theta,
};

pub static AGB_OLD: HandicapScheme = HandicapScheme {
    name: SchemeName::AgbOld,
    description: "Archery GB pre-2023 (Lane)",
    arrow_diameter_out: 7.14e-3,
    arrow_diameter_in: 7.14e-3,
    rounding: Rounding::Nearest,
    direction: Direction::LowerIsBetter,
    rating_bounds: (-75.0, 300.0),
    max_score_tolerance: 0.5,
    theta: agb_old_theta,
};

pub static AA: HandicapScheme = HandicapScheme {
    name: SchemeName::Aa,
    description: "Archery Australia (Park)",
    arrow_diameter_out: 5.0e-3,
    arrow_diameter_in: 9.3e-3,
    rounding: Rounding::Nearest,
    direction: Direction::HigherIsBetter,
    rating_bounds: (-250.0, 175.0),
    max_score_tolerance: 0.5,
    theta: aa_theta,
};

pub static AA2: HandicapScheme = HandicapScheme {
    name: SchemeName::Aa2,
    description: "Archery Australia, revised distance term (Park)",
    arrow_diameter_out: 5.0e-3,
    arrow_diameter_in: 9.3e-3,
    rounding: Rounding::Nearest,
    direction: Direction::HigherIsBetter,
    rating_bounds: (-250.0, 175.0),
    max_score_tolerance: 0.5,
    theta: aa2_theta,
};

/// Expected score of one arrow on `face` for a radial spread `sig_r` (m)
fn expected_arrow_score(face: &FaceSpec, arrow_radius: f64, sig_r: f64) -> f64 {
    if sig_r <= 0.0 {
        return f64::from(face.max_score());
    }
    if sig_r.is_infinite() {
        return 0.0;
    }
    let rings = face.rings();
    rings
        .iter()
        .enumerate()
        .map(|(i, &(diameter, score))| {
            let next = rings.get(i + 1).map_or(0, |&(_, s)| s);
            let reach = (diameter / 2.0 + arrow_radius) / sig_r;
            f64::from(score - next) * (1.0 - (-reach * reach).exp())
        })
        .sum()
}

impl HandicapScheme {
    /// Look a scheme up by name
    pub fn by_name(name: &str) -> Result<&'static HandicapScheme> {
        name.parse::<SchemeName>().map(SchemeName::scheme)
    }

    /// Best and worst representable ratings
    pub fn best_worst(&self) -> (f64, f64) {
        let (low, high) = self.rating_bounds;
        match self.direction {
            Direction::LowerIsBetter => (low, high),
            Direction::HigherIsBetter => (high, low),
        }
    }

    fn check_rating(&self, rating: f64) -> Result<()> {
        if rating.is_finite() {
            Ok(())
        } else {
            Err(Error::invalid_rating(
                rating,
                self.name.as_str(),
                "ratings must be finite numbers",
            ))
        }
    }

    fn arrow_diameter(&self, target: &Target, arrow_diameter: Option<f64>) -> f64 {
        arrow_diameter.unwrap_or(if target.is_indoor() {
            self.arrow_diameter_in
        } else {
            self.arrow_diameter_out
        })
    }

    fn check_arrow_diameter(arrow_diameter: Option<f64>) -> Result<()> {
        match arrow_diameter {
            Some(d) if !(d.is_finite() && d > 0.0) => Err(Error::invalid_input(format!(
                "arrow diameter must be positive and finite, got {}",
                d
            ))),
            _ => Ok(()),
        }
    }

    /// Angular dispersion θ (radians) at `rating` for a distance in metres
    pub fn sigma_t(&self, rating: f64, distance_m: f64) -> Result<f64> {
        self.check_rating(rating)?;
        Ok((self.theta)(rating, distance_m))
    }

    /// Radial spread σ (m) at `rating` for a distance in metres
    pub fn sigma_r(&self, rating: f64, distance_m: f64) -> Result<f64> {
        Ok(self.sigma_t(rating, distance_m)? * distance_m)
    }

    /// Expected score of a single arrow at a target
    ///
    /// `arrow_diameter` (m) overrides the scheme's indoor/outdoor default.
    pub fn arrow_score(
        &self,
        rating: f64,
        target: &Target,
        arrow_diameter: Option<f64>,
    ) -> Result<f64> {
        self.check_rating(rating)?;
        Self::check_arrow_diameter(arrow_diameter)?;
        Ok(self.arrow_score_unchecked(rating, target, arrow_diameter))
    }

    fn arrow_score_unchecked(
        &self,
        rating: f64,
        target: &Target,
        arrow_diameter: Option<f64>,
    ) -> f64 {
        let distance = target.distance_m();
        let sig_r = (self.theta)(rating, distance) * distance;
        let radius = self.arrow_diameter(target, arrow_diameter) / 2.0;
        expected_arrow_score(target.face_spec(), radius, sig_r)
    }

    fn raw_passes(&self, rating: f64, round: &Round, arrow_diameter: Option<f64>) -> Vec<f64> {
        round
            .passes()
            .iter()
            .map(|pass| {
                f64::from(pass.n_arrows())
                    * self.arrow_score_unchecked(rating, pass.target(), arrow_diameter)
            })
            .collect()
    }

    fn raw_round(&self, rating: f64, round: &Round, arrow_diameter: Option<f64>) -> f64 {
        self.raw_passes(rating, round, arrow_diameter).iter().sum()
    }

    /// Apply the scheme's rounding, never exceeding `max`
    ///
    /// Ceil rounding would otherwise lift a near-perfect raw score above
    /// what the round can physically award.
    pub fn round_score(&self, raw: f64, max: f64) -> f64 {
        self.rounding.apply(raw).min(max)
    }

    /// Expected score of each pass, in pass order
    pub fn score_for_passes(
        &self,
        rating: f64,
        round: &Round,
        arrow_diameter: Option<f64>,
        rounded: bool,
    ) -> Result<Vec<f64>> {
        self.check_rating(rating)?;
        Self::check_arrow_diameter(arrow_diameter)?;
        let raw = self.raw_passes(rating, round, arrow_diameter);
        if !rounded {
            return Ok(raw);
        }
        Ok(raw
            .into_iter()
            .zip(round.passes())
            .map(|(score, pass)| self.round_score(score, f64::from(pass.max_score())))
            .collect())
    }

    /// Expected score of a whole round
    ///
    /// Pass scores are summed unrounded and the total is rounded once.
    ///
    /// ```rust
    /// use archerymath::handicaps::SchemeName;
    /// use archerymath::rounds::builtin;
    ///
    /// let wa720 = builtin().get("wa720_70").unwrap();
    /// let agb = SchemeName::Agb.scheme();
    /// assert_eq!(agb.score_for_round(44.0, wa720, None, true).unwrap(), 496.0);
    /// ```
    pub fn score_for_round(
        &self,
        rating: f64,
        round: &Round,
        arrow_diameter: Option<f64>,
        rounded: bool,
    ) -> Result<f64> {
        self.check_rating(rating)?;
        Self::check_arrow_diameter(arrow_diameter)?;
        let raw = self.raw_round(rating, round, arrow_diameter);
        if rounded {
            Ok(self.round_score(raw, f64::from(round.max_score())))
        } else {
            Ok(raw)
        }
    }

    /// Rating at which a round's maximum score is (just) attained
    ///
    /// The continuous edge is snapped to a 0.01 grid measured from the best
    /// bound; with `int_prec` it is snapped to the integer on the worse side.
    /// Rounds too small for the edge to lie inside the rating bounds give
    /// the best bound.
    pub fn max_score_handicap(
        &self,
        round: &Round,
        int_prec: bool,
        arrow_diameter: Option<f64>,
    ) -> Result<f64> {
        Self::check_arrow_diameter(arrow_diameter)?;
        let max = f64::from(round.max_score());
        let aim = max - self.max_score_tolerance;
        let (best, worst) = self.best_worst();
        if self.raw_round(worst, round, arrow_diameter) >= aim
            || self.raw_round(best, round, arrow_diameter) <= aim
        {
            log::debug!(
                "Max score edge of {} is outside the {} bounds",
                round.name(),
                self.name
            );
            return Ok(best);
        }
        let edge = self.solve(round, aim, arrow_diameter)?;

        let (low, high) = self.rating_bounds;
        let snapped = match self.direction {
            Direction::LowerIsBetter => low + 0.01 * ((edge - low) / 0.01).floor(),
            Direction::HigherIsBetter => high - 0.01 * ((high - edge) / 0.01).floor(),
        };
        let snapped = (snapped * 100.0).round() / 100.0;
        Ok(match (int_prec, self.direction) {
            (false, _) => snapped,
            (true, Direction::LowerIsBetter) => snapped.floor(),
            (true, Direction::HigherIsBetter) => snapped.ceil(),
        })
    }

    /// Invert the forward model for a score on a round
    ///
    /// Scores at or above the round maximum give [`Self::max_score_handicap`];
    /// zero, or anything below the score at the worst rating, gives the worst
    /// bound. With `int_prec` the exact rating is first rounded towards the
    /// worse end of the scale, then moved further while the rounded score at
    /// the next integer still reaches `score`.
    ///
    /// ```rust
    /// use archerymath::handicaps::SchemeName;
    /// use archerymath::rounds::builtin;
    ///
    /// let wa720 = builtin().get("wa720_70").unwrap();
    /// let agb = SchemeName::Agb.scheme();
    /// assert_eq!(agb.handicap_from_score(500.0, wa720, true, None).unwrap(), 44.0);
    /// ```
    pub fn handicap_from_score(
        &self,
        score: f64,
        round: &Round,
        int_prec: bool,
        arrow_diameter: Option<f64>,
    ) -> Result<f64> {
        let _span = debug_span!("handicap_from_score", scheme = %self.name, round = %round.name())
            .entered();

        if !score.is_finite() || score < 0.0 {
            return Err(Error::invalid_score(
                score,
                round.name(),
                "Scores must be finite and non-negative.",
            ));
        }
        Self::check_arrow_diameter(arrow_diameter)?;

        let max = f64::from(round.max_score());
        if score >= max {
            return self.max_score_handicap(round, int_prec, arrow_diameter);
        }

        let (_, worst) = self.best_worst();
        if score == 0.0 || score <= self.raw_round(worst, round, arrow_diameter) {
            log::debug!("Score {} is at the floor of {}", score, round.name());
            return Ok(worst);
        }

        let rating = self.solve(round, score, arrow_diameter)?;
        if !int_prec {
            return Ok(rating);
        }

        let step = match self.direction {
            Direction::LowerIsBetter => 1.0,
            Direction::HigherIsBetter => -1.0,
        };
        let mut rating = match self.direction {
            Direction::LowerIsBetter => rating.ceil(),
            Direction::HigherIsBetter => rating.floor(),
        };
        loop {
            let next = rating + step;
            if (next - worst) * step > 0.0 {
                break;
            }
            let rounded = self.round_score(self.raw_round(next, round, arrow_diameter), max);
            if rounded < score {
                break;
            }
            rating = next;
        }
        Ok(rating)
    }

    /// Rating whose unrounded round score equals `aim`
    fn solve(&self, round: &Round, aim: f64, arrow_diameter: Option<f64>) -> Result<f64> {
        let config = RootFindConfig::default();
        let (low, high) = self.rating_bounds;
        brent(
            |h| self.raw_round(h, round, arrow_diameter) - aim,
            low,
            high,
            config,
        )
        .map_err(|e| {
            log::warn!("Root finding failed for {} on {}: {}", aim, round.name(), e);
            Error::ConvergenceError {
                score: aim,
                round: round.name().to_string(),
                iterations: config.max_iterations,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::Quantity;
    use crate::rounds::{builtin, Pass};
    use crate::targets::ScoringSystem;

    fn close(actual: f64, expected: f64, tol: f64) -> bool {
        (actual - expected).abs() < tol
    }

    #[test]
    fn test_scheme_names() {
        assert_eq!("AGBold".parse::<SchemeName>().unwrap(), SchemeName::AgbOld);
        assert_eq!("agb".parse::<SchemeName>().unwrap(), SchemeName::Agb);
        assert!(matches!(
            "XYZ".parse::<SchemeName>(),
            Err(Error::SchemeNotFound(_))
        ));
    }

    #[test]
    fn test_sigma_t() {
        let cases = [
            (SchemeName::Agb, 0.002125743670979009),
            (SchemeName::AgbOld, 0.002149455433015334),
            (SchemeName::Aa, 0.011349271879457612),
            (SchemeName::Aa2, 0.011011017526614786),
        ];
        for (name, expected) in cases {
            let theta = name.scheme().sigma_t(25.46, 100.0).unwrap();
            assert!(close(theta, expected, 1e-15), "{}: {}", name, theta);
        }
    }

    #[test]
    fn test_arrow_score_indoor_outdoor() {
        let scheme = SchemeName::Agb.scheme();
        let outdoor = Target::new("10_zone_5_ring_compound", 40.0, 20.0, false).unwrap();
        let indoor = Target::new("10_zone_5_ring_compound", 40.0, 20.0, true).unwrap();
        assert!(close(scheme.arrow_score(20.0, &outdoor, None).unwrap(), 9.134460979, 1e-8));
        assert!(close(scheme.arrow_score(20.0, &indoor, None).unwrap(), 9.207981128, 1e-8));
    }

    #[test]
    fn test_arrow_score_faces() {
        let scheme = SchemeName::Agb.scheme();
        let cases = [
            ("10_zone", 8.938462708),
            ("5_zone", 8.424383789),
            ("WA_field", 4.568119410),
            ("Worcester", 4.712191895),
            ("Beiter_hit_miss", 1.0),
        ];
        for (system, expected) in cases {
            let target = Target::new(system, 80.0, 50.0, false).unwrap();
            let score = scheme.arrow_score(20.0, &target, None).unwrap();
            assert!(close(score, expected, 1e-8), "{}: {}", system, score);
        }
    }

    #[test]
    fn test_zero_spread_gives_max() {
        let target = Target::new("10_zone", 122.0, 70.0, false).unwrap();
        assert_eq!(expected_arrow_score(target.face_spec(), 0.0, 0.0), 10.0);
        assert_eq!(expected_arrow_score(target.face_spec(), 0.0, f64::INFINITY), 0.0);
        // θ underflows to zero for absurd AA ratings
        let score = SchemeName::Aa.scheme().arrow_score(1.0e6, &target, None).unwrap();
        assert_eq!(score, 10.0);
    }

    #[test]
    fn test_mixed_round_scores() {
        let round = Round::new(
            "Mixed",
            vec![
                Pass::at_target(10, ScoringSystem::TenZone, Quantity::cm(122.0), Quantity::metres(100.0), false).unwrap(),
                Pass::at_target(10, ScoringSystem::TenZone, Quantity::cm(80.0), Quantity::metres(80.0), false).unwrap(),
                Pass::at_target(10, ScoringSystem::FiveZone, Quantity::cm(122.0), Quantity::metres(60.0), false).unwrap(),
            ],
        )
        .unwrap();
        let cases = [
            (SchemeName::Agb, 243.381870344),
            (SchemeName::AgbOld, 242.769238469),
            (SchemeName::Aa, 36.368977909),
            (SchemeName::Aa2, 37.126051009),
        ];
        for (name, expected) in cases {
            let raw = name.scheme().score_for_round(20.0, &round, None, false).unwrap();
            assert!(close(raw, expected, 1e-6), "{}: {}", name, raw);
        }
        let passes = SchemeName::Agb
            .scheme()
            .score_for_passes(20.0, &round, None, false)
            .unwrap();
        assert_eq!(passes.len(), 3);
        assert!(close(passes.iter().sum::<f64>(), 243.381870344, 1e-6));
    }

    #[test]
    fn test_rounding_conventions() {
        let round = builtin().get("wa720_70").unwrap();
        let raw = AGB.score_for_round(30.3, round, None, false).unwrap();
        assert_eq!(AGB.score_for_round(30.3, round, None, true).unwrap(), raw.ceil());
        let raw = AA.score_for_round(80.3, round, None, false).unwrap();
        assert_eq!(
            AA.score_for_round(80.3, round, None, true).unwrap(),
            raw.round_ties_even()
        );
    }

    #[test]
    fn test_best_rating_gives_max_score() {
        for name in SchemeName::ALL {
            let scheme = name.scheme();
            let (best, _) = scheme.best_worst();
            for codename in ["wa1440_90", "york", "portsmouth"] {
                let round = builtin().get(codename).unwrap();
                let score = scheme.score_for_round(best, round, None, true).unwrap();
                assert_eq!(score, f64::from(round.max_score()), "{} {}", name, codename);
            }
        }
    }

    #[test]
    fn test_integer_handicaps() {
        let cases = [
            ("wa720_70", 700.0, [1.0, 1.0, 119.0]),
            ("wa720_70", 500.0, [44.0, 40.0, 64.0]),
            ("wa720_70", 710.0, [-5.0, -5.0, 127.0]),
            ("wa1440_90", 850.0, [52.0, 46.0, 53.0]),
        ];
        for (codename, score, expected) in cases {
            let round = builtin().get(codename).unwrap();
            for (name, hc) in [SchemeName::Agb, SchemeName::AgbOld, SchemeName::Aa]
                .into_iter()
                .zip(expected)
            {
                let result = name.scheme().handicap_from_score(score, round, true, None).unwrap();
                assert_eq!(result, hc, "{} {} {}", name, codename, score);
            }
        }
    }

    #[test]
    fn test_decimal_handicaps() {
        let wa720 = builtin().get("wa720_70").unwrap();
        let wa1440 = builtin().get("wa1440_90").unwrap();
        let cases = [
            (&AGB, wa720, 500.0, 43.47468),
            (&AGB, wa1440, 850.0, 51.77507),
            (&AGB_OLD, wa720, 500.0, 39.05682),
            (&AA, wa720, 500.0, 64.19808),
        ];
        for (scheme, round, score, expected) in cases {
            let hc = scheme.handicap_from_score(score, round, false, None).unwrap();
            assert!(close(hc, expected, 1e-4), "{}: {}", scheme.name, hc);
        }
    }

    #[test]
    fn test_max_score_handicaps() {
        let cases = [
            ("metric_122_30", [11.0, 5.0, 107.0]),
            ("western", [9.0, 6.0, 110.0]),
            ("vegas_300", [3.0, -7.0, 119.0]),
        ];
        for (codename, expected) in cases {
            let round = builtin().get(codename).unwrap();
            let max = f64::from(round.max_score());
            for (scheme, hc) in [&AGB, &AGB_OLD, &AA].into_iter().zip(expected) {
                assert_eq!(
                    scheme.handicap_from_score(max, round, true, None).unwrap(),
                    hc,
                    "{} {}",
                    scheme.name,
                    codename
                );
            }
        }
    }

    #[test]
    fn test_one_point_round_max_score() {
        let pass = Pass::at_target(
            1,
            ScoringSystem::BeiterHitMiss,
            Quantity::cm(80.0),
            Quantity::metres(18.0),
            true,
        )
        .unwrap();
        let round = Round::new("One arrow", vec![pass]).unwrap();
        for name in SchemeName::ALL {
            let scheme = name.scheme();
            let (low, high) = scheme.rating_bounds;
            for int_prec in [false, true] {
                let hc = scheme.handicap_from_score(1.0, &round, int_prec, None).unwrap();
                assert!((low..=high).contains(&hc), "{}: {}", name, hc);
                let score = scheme.score_for_round(hc, &round, None, true).unwrap();
                assert_eq!(score, 1.0, "{} at {}", name, hc);
            }
        }
        // the max score edge lies beyond the worst bound
        assert_eq!(AGB.max_score_handicap(&round, true, None).unwrap(), -75.0);
    }

    #[test]
    fn test_floor_scores_give_worst_rating() {
        let round = builtin().get("wa720_70").unwrap();
        assert_eq!(AGB.handicap_from_score(0.0, round, false, None).unwrap(), 300.0);
        assert_eq!(AA.handicap_from_score(0.0, round, true, None).unwrap(), -250.0);
    }

    #[test]
    fn test_invalid_inputs() {
        let round = builtin().get("wa720_70").unwrap();
        assert!(matches!(
            AGB.handicap_from_score(-1.0, round, false, None),
            Err(Error::InvalidScore { .. })
        ));
        assert!(matches!(
            AGB.handicap_from_score(f64::NAN, round, false, None),
            Err(Error::InvalidScore { .. })
        ));
        assert!(matches!(
            AGB.score_for_round(f64::INFINITY, round, None, true),
            Err(Error::InvalidRating { .. })
        ));
        assert!(matches!(
            AGB.score_for_round(10.0, round, Some(-0.005), true),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_arrow_diameter_override() {
        let round = builtin().get("wa720_70").unwrap();
        let thin = AGB.score_for_round(40.0, round, Some(4.0e-3), false).unwrap();
        let default = AGB.score_for_round(40.0, round, None, false).unwrap();
        let thick = AGB.score_for_round(40.0, round, Some(9.0e-3), false).unwrap();
        assert!(thin < default && default < thick);
    }
}
