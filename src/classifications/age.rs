//! Age group from year of birth.
//!
//! Archery GB age groups run on the calendar year: an archer is in a group
//! for the whole year in which they reach the relevant age.

use super::category::AgeGroup;
use chrono::{Datelike, Local};

/// Age group for someone reaching `age` this year
pub fn age_group_for_year(age: i32) -> AgeGroup {
    match age {
        a if a >= 50 => AgeGroup::Over50,
        a if a <= 11 => AgeGroup::Under12,
        a if a <= 13 => AgeGroup::Under14,
        14 => AgeGroup::Under15,
        15 => AgeGroup::Under16,
        a if a <= 17 => AgeGroup::Under18,
        a if a <= 20 => AgeGroup::Under21,
        _ => AgeGroup::Adult,
    }
}

/// Age group in the year of an event, defaulting to the current year
///
/// ```rust
/// use archerymath::classifications::{calculate_age_group, AgeGroup};
///
/// assert_eq!(calculate_age_group(2010, Some(2025)), AgeGroup::Under16);
/// assert_eq!(calculate_age_group(1975, Some(2025)), AgeGroup::Over50);
/// ```
pub fn calculate_age_group(year_of_birth: i32, year_of_event: Option<i32>) -> AgeGroup {
    let year = year_of_event.unwrap_or_else(|| Local::now().year());
    age_group_for_year(year - year_of_birth)
}
