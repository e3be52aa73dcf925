use crate::classifications::calculate_age_group;

pub fn run_age(birth_year: i32, event_year: Option<i32>) -> String {
    let group = calculate_age_group(birth_year, event_year);
    match event_year {
        Some(year) => format!(
            "Age group in {} for an archer born in {}: {}",
            year, birth_year, group
        ),
        None => format!(
            "Age group this year for an archer born in {}: {}",
            birth_year, group
        ),
    }
}
