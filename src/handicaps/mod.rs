//! Handicap schemes and tables.
//!
//! - [`scheme`]: the scheme constants and the shared forward/inverse model
//! - [`rootfind`]: Brent's method used by the inverse
//! - [`tables`]: rating × round score tables

pub mod rootfind;
pub mod scheme;
pub mod tables;

pub use scheme::{Direction, HandicapScheme, Rounding, SchemeName, AA, AA2, AGB, AGB_OLD};
pub use tables::{HandicapTable, TableOptions};

use crate::errors::Result;

/// Resolve a scheme by name ("AGB", "AGBold", "AA", "AA2")
pub fn handicap_scheme(name: &str) -> Result<&'static HandicapScheme> {
    HandicapScheme::by_name(name)
}

/// Evenly spaced ratings from `start` to `end` inclusive
///
/// The step sign is taken from the direction of travel.
pub fn rating_range(start: f64, end: f64, step: f64) -> Vec<f64> {
    let step = step.abs();
    if step == 0.0 || !start.is_finite() || !end.is_finite() {
        return vec![start];
    }
    let count = ((end - start).abs() / step + 1e-9).floor() as usize;
    let sign = if end >= start { 1.0 } else { -1.0 };
    (0..=count)
        .map(|i| {
            let value = start + sign * step * i as f64;
            // keep decimal steps tidy
            (value * 1e9).round() / 1e9
        })
        .collect()
}
