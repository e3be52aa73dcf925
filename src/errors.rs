//! Error types shared by every archerymath module.
//!
//! All fallible operations in the library return [`Result<T>`], which carries
//! an [`Error`]. Variants map onto four broad categories (see
//! [`ErrorCategory`]) so callers can react to a class of failure without
//! matching every variant:
//!
//! - **Invalid input**: malformed units, face specs, arrow counts, files
//! - **Domain**: ratings or scores outside what a scheme supports, unknown names
//! - **Invalid category**: a classification category that cannot be resolved
//! - **Convergence**: the root-finder failed; this signals a defect, not user error
//!
//! # Example
//!
//! ```rust
//! use archerymath::errors::{Error, ErrorCategory};
//!
//! let err = Error::unknown_unit("furlong");
//! assert_eq!(err.category(), ErrorCategory::InvalidInput);
//! assert!(err.to_string().contains("furlong"));
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for archerymath operations
#[derive(Debug, Error)]
pub enum Error {
    /// Generic malformed input (negative arrow counts, empty rounds, bad records)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unit name not present in the alias registry
    #[error("Unit '{unit}' not recognised. Select from yard, metre, cm or inch aliases.")]
    UnknownUnit { unit: String },

    /// Scoring system name not present in the registry
    #[error("Invalid target face type '{name}'. Select from {supported}.")]
    UnsupportedSystem { name: String, supported: String },

    /// Face spec violating the ascending-diameter / descending-score invariant
    #[error("Invalid face spec: {0}")]
    InvalidFaceSpec(String),

    /// Rating that cannot be evaluated by a scheme
    #[error("Invalid rating {rating} for the {scheme} scheme: {reason}")]
    InvalidRating {
        rating: f64,
        scheme: String,
        reason: String,
    },

    /// Score that is negative, non-finite, or outside the range of a round
    #[error("Invalid score of {score} for a {round}. {reason}")]
    InvalidScore {
        score: f64,
        round: String,
        reason: String,
    },

    /// Handicap scheme name not recognised
    #[error("Handicap scheme '{0}' not recognised. Select from AGB, AGBold, AA, AA2.")]
    SchemeNotFound(String),

    /// Round codename not present in a catalogue
    #[error("Round '{0}' is not recognised. Use `archerymath rounds` to list known rounds.")]
    RoundNotFound(String),

    /// Classification category that cannot be resolved for a discipline
    #[error("Invalid category for {discipline} classifications: {message}")]
    InvalidCategory { discipline: String, message: String },

    /// Root-finder did not converge inside its iteration budget
    #[error("Root-finding did not converge for a score of {score} on a {round} after {iterations} iterations")]
    ConvergenceError {
        score: f64,
        round: String,
        iterations: usize,
    },

    /// Configuration file problems
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        path: Option<PathBuf>,
    },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// CSV export errors
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Coarse grouping of [`Error`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    InvalidInput,
    Domain,
    InvalidCategory,
    Convergence,
    Environment,
}

impl Error {
    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create an unknown unit error
    pub fn unknown_unit(unit: impl Into<String>) -> Self {
        Self::UnknownUnit { unit: unit.into() }
    }

    /// Create an invalid face spec error
    pub fn invalid_face_spec(message: impl Into<String>) -> Self {
        Self::InvalidFaceSpec(message.into())
    }

    /// Create an invalid rating error
    pub fn invalid_rating(
        rating: f64,
        scheme: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidRating {
            rating,
            scheme: scheme.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid score error
    pub fn invalid_score(score: f64, round: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidScore {
            score,
            round: round.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid category error for a discipline
    pub fn invalid_category(discipline: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidCategory {
            discipline: discipline.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error with optional path context
    pub fn configuration(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Configuration {
            message: message.into(),
            path,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput(_)
            | Self::UnknownUnit { .. }
            | Self::UnsupportedSystem { .. }
            | Self::InvalidFaceSpec(_) => ErrorCategory::InvalidInput,
            Self::InvalidRating { .. }
            | Self::InvalidScore { .. }
            | Self::SchemeNotFound(_)
            | Self::RoundNotFound(_) => ErrorCategory::Domain,
            Self::InvalidCategory { .. } => ErrorCategory::InvalidCategory,
            Self::ConvergenceError { .. } => ErrorCategory::Convergence,
            Self::Configuration { .. }
            | Self::Io(_)
            | Self::Json(_)
            | Self::Toml(_)
            | Self::Csv(_) => ErrorCategory::Environment,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
