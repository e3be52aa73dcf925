//! Archery scoring geometry, handicap schemes and Archery GB classifications.
//!
//! - [`length`]: unit conversion
//! - [`targets`]: target faces and scoring systems
//! - [`rounds`]: passes, rounds and the round catalogue
//! - [`handicaps`]: handicap schemes (forward and inverse) and score tables
//! - [`classifications`]: classification thresholds by category

// Export modules for library usage
pub mod classifications;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod formatting;
pub mod handicaps;
pub mod length;
pub mod rounds;
pub mod targets;

// Re-export commonly used types
pub use crate::errors::{Error, ErrorCategory, Result};
pub use crate::handicaps::{
    handicap_scheme, HandicapScheme, HandicapTable, SchemeName, TableOptions,
};
pub use crate::length::{LengthUnit, Quantity};
pub use crate::rounds::{builtin, Pass, Round, RoundCatalogue};
pub use crate::targets::{FaceSpec, ScoringSystem, Target};

pub use crate::classifications::{
    agb_indoor_classification_scores, agb_old_field_classification_scores,
    agb_old_indoor_classification_scores, agb_old_outdoor_classification_scores,
    agb_outdoor_classification_scores, calculate_agb_indoor_classification,
    calculate_agb_old_field_classification, calculate_agb_old_indoor_classification,
    calculate_agb_old_outdoor_classification, calculate_agb_outdoor_classification,
    calculate_age_group, AgeGroup, Bowstyle, Category, ClassificationResult, Discipline, Gender,
};
