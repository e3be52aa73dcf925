//! Static Archery GB rule data: bowstyle datums and age group limits.

use super::category::{AgeGroup, Bowstyle, Discipline, Gender};
use crate::errors::{Error, Result};

/// Handicap datum and step sizes for a scored bowstyle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BowstyleData {
    pub datum_out: f64,
    pub class_step_out: f64,
    pub gender_step_out: f64,
    pub age_step_out: f64,
    pub datum_in: f64,
    pub class_step_in: f64,
    pub gender_step_in: f64,
    pub age_step_in: f64,
}

const COMPOUND: BowstyleData = BowstyleData {
    datum_out: 15.0,
    class_step_out: 6.0,
    gender_step_out: 4.0,
    age_step_out: 6.0,
    datum_in: 11.0,
    class_step_in: 8.0,
    gender_step_in: 5.0,
    age_step_in: 6.0,
};

const RECURVE: BowstyleData = BowstyleData {
    datum_out: 30.0,
    class_step_out: 7.0,
    gender_step_out: 5.0,
    age_step_out: 6.5,
    datum_in: 28.0,
    class_step_in: 7.5,
    gender_step_in: 5.0,
    age_step_in: 6.5,
};

const BAREBOW: BowstyleData = BowstyleData {
    datum_out: 47.0,
    class_step_out: 5.5,
    gender_step_out: 5.5,
    age_step_out: 6.0,
    datum_in: 42.0,
    class_step_in: 6.0,
    gender_step_in: 5.0,
    age_step_in: 6.0,
};

const LONGBOW: BowstyleData = BowstyleData {
    datum_out: 65.0,
    class_step_out: 6.0,
    gender_step_out: 7.0,
    age_step_out: 6.0,
    datum_in: 61.0,
    class_step_in: 6.5,
    gender_step_in: 5.0,
    age_step_in: 6.0,
};

impl Bowstyle {
    /// Datums exist only for the independently scored bowstyles
    pub fn data(self) -> Option<&'static BowstyleData> {
        match self {
            Self::Compound => Some(&COMPOUND),
            Self::Recurve => Some(&RECURVE),
            Self::Barebow => Some(&BAREBOW),
            Self::Longbow => Some(&LONGBOW),
            _ => None,
        }
    }
}

/// Bowstyle data, or an invalid category error naming the discipline
pub fn bowstyle_data(bowstyle: Bowstyle, discipline: Discipline) -> Result<&'static BowstyleData> {
    bowstyle.data().ok_or_else(|| {
        Error::invalid_category(
            discipline.as_str(),
            format!("{} is not classified independently", bowstyle),
        )
    })
}

/// Per age group step count and longest distances `[metres, yards]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeData {
    pub step: u32,
    pub male: [f64; 2],
    pub female: [f64; 2],
}

impl AgeData {
    pub fn max_distances(&self, gender: Gender) -> [f64; 2] {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
        }
    }
}

impl AgeGroup {
    pub fn data(self) -> AgeData {
        let (step, male, female) = match self {
            Self::Over50 => (1, [70.0, 80.0], [60.0, 60.0]),
            Self::Adult => (0, [90.0, 100.0], [70.0, 80.0]),
            Self::Under21 => (1, [90.0, 100.0], [70.0, 80.0]),
            Self::Under18 => (2, [70.0, 80.0], [60.0, 60.0]),
            Self::Under16 => (3, [60.0, 60.0], [50.0, 50.0]),
            Self::Under15 => (4, [50.0, 50.0], [50.0, 50.0]),
            Self::Under14 => (5, [40.0, 40.0], [40.0, 40.0]),
            Self::Under12 => (6, [30.0, 30.0], [30.0, 30.0]),
        };
        AgeData { step, male, female }
    }
}

/// Handicap offset from the bowstyle datum for an age and gender
///
/// Female archers get the gender step on top of the age steps up to Under
/// 16. Under 16 women take one extra age step instead when the age step is
/// the smaller of the two.
pub fn age_gender_step(gender: Gender, age_steps: u32, age_step: f64, gender_step: f64) -> f64 {
    let steps = f64::from(age_steps);
    match gender {
        Gender::Female if age_steps == 3 && age_step < gender_step => steps * age_step + age_step,
        Gender::Female if age_steps <= 3 => gender_step + steps * age_step,
        _ => steps * age_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_gender_step() {
        // adult women take the gender step only
        assert_eq!(age_gender_step(Gender::Female, 0, 6.5, 5.0), 5.0);
        assert_eq!(age_gender_step(Gender::Male, 2, 6.5, 5.0), 13.0);
        // U16 women with a large gender step take four age steps
        assert_eq!(age_gender_step(Gender::Female, 3, 6.0, 7.0), 24.0);
        assert_eq!(age_gender_step(Gender::Female, 3, 6.5, 5.0), 24.5);
        // younger women match the men
        assert_eq!(age_gender_step(Gender::Female, 5, 6.0, 7.0), 30.0);
    }

    #[test]
    fn test_only_scored_bowstyles_have_data() {
        assert!(Bowstyle::Recurve.data().is_some());
        assert!(Bowstyle::Flatbow.data().is_none());
        assert!(Bowstyle::CompoundLimited.data().is_none());
    }
}
