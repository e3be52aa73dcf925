// Shared helpers for archerymath integration tests
#![allow(dead_code)]

use archerymath::handicaps::{HandicapScheme, SchemeName};
use archerymath::rounds::{builtin, Round};

/// Rounds covering outdoor, imperial, indoor and field scoring
pub const SAMPLE_ROUNDS: [&str; 6] = [
    "wa1440_90",
    "york",
    "wa720_50_c",
    "portsmouth",
    "wa18_triple",
    "wa_field_24_red_marked",
];

pub fn round(codename: &str) -> &'static Round {
    builtin()
        .get(codename)
        .unwrap_or_else(|e| panic!("missing built-in round {}: {}", codename, e))
}

pub fn schemes() -> impl Iterator<Item = &'static HandicapScheme> {
    SchemeName::ALL.into_iter().map(SchemeName::scheme)
}

/// Integer ratings from best to worst for a scheme
pub fn ratings_best_to_worst(scheme: &HandicapScheme, step: f64) -> Vec<f64> {
    let (best, worst) = scheme.best_worst();
    archerymath::handicaps::rating_range(best, worst, step)
}
