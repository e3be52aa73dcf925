//! Passes and rounds: the shooting formats scores are recorded against.
//!
//! A [`Round`] is an ordered list of [`Pass`]es, each a number of arrows shot
//! at one [`Target`]. Rounds are built once (from the built-in
//! [`catalogue`] or a JSON file through [`loader`]) and shared read-only.

pub mod catalogue;
pub mod loader;

pub use catalogue::{builtin, RoundCatalogue};

use crate::errors::{Error, Result};
use crate::length::{LengthUnit, Quantity};
use crate::targets::{ScoringSystem, Target};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write as _;

/// A number of arrows shot at a single target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PassRepr", into = "PassRepr")]
pub struct Pass {
    n_arrows: u32,
    target: Target,
}

#[derive(Serialize, Deserialize)]
struct PassRepr {
    n_arrows: u32,
    target: Target,
}

impl TryFrom<PassRepr> for Pass {
    type Error = Error;

    fn try_from(repr: PassRepr) -> Result<Self> {
        Self::new(repr.n_arrows, repr.target)
    }
}

impl From<Pass> for PassRepr {
    fn from(pass: Pass) -> Self {
        Self {
            n_arrows: pass.n_arrows,
            target: pass.target,
        }
    }
}

impl Pass {
    pub fn new(n_arrows: u32, target: Target) -> Result<Self> {
        if n_arrows == 0 {
            return Err(Error::invalid_input("a pass must contain at least one arrow"));
        }
        Ok(Self { n_arrows, target })
    }

    /// Build the target and the pass in one step
    pub fn at_target(
        n_arrows: u32,
        system: ScoringSystem,
        diameter: Quantity,
        distance: Quantity,
        indoor: bool,
    ) -> Result<Self> {
        Self::new(
            n_arrows,
            Target::with_units(system, diameter, distance, indoor)?,
        )
    }

    pub fn n_arrows(&self) -> u32 {
        self.n_arrows
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn distance(&self) -> Quantity {
        self.target.distance()
    }

    pub fn native_dist_unit(&self) -> LengthUnit {
        self.target.native_dist_unit()
    }

    pub fn scoring_system(&self) -> ScoringSystem {
        self.target.scoring_system()
    }

    pub fn is_indoor(&self) -> bool {
        self.target.is_indoor()
    }

    pub fn max_score(&self) -> u32 {
        self.n_arrows * self.target.max_score()
    }
}

/// Where a round is shot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Indoor,
    Outdoor,
    Field,
}

impl Location {
    /// Resolve the loose spellings found in round files ("I", "outside", "woods", ...)
    pub fn from_alias(alias: &str) -> Option<Self> {
        match alias.trim().to_lowercase().as_str() {
            "i" | "indoor" | "indoors" | "in" | "inside" => Some(Self::Indoor),
            "o" | "outdoor" | "outdoors" | "out" | "outside" => Some(Self::Outdoor),
            "f" | "field" | "woods" => Some(Self::Field),
            _ => None,
        }
    }

    pub fn is_indoor(self) -> bool {
        matches!(self, Self::Indoor)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Indoor => "indoor",
            Self::Outdoor => "outdoor",
            Self::Field => "field",
        };
        f.write_str(s)
    }
}

/// Descriptive information that does not affect scoring
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundMetadata {
    pub location: Option<Location>,
    pub body: String,
    pub family: String,
}

impl RoundMetadata {
    pub fn new(location: Location, body: &str, family: &str) -> Self {
        Self {
            location: Some(location),
            body: body.to_string(),
            family: family.to_string(),
        }
    }
}

/// A named sequence of passes
///
/// Two rounds are equal when their names and passes match; metadata is ignored.
///
/// ```rust
/// use archerymath::length::Quantity;
/// use archerymath::rounds::{Pass, Round};
/// use archerymath::targets::ScoringSystem;
///
/// let pass = Pass::at_target(
///     36,
///     ScoringSystem::TenZone,
///     Quantity::cm(122.0),
///     Quantity::metres(70.0),
///     false,
/// )
/// .unwrap();
/// let round = Round::new("WA 720 (70m)", vec![pass.clone(), pass]).unwrap();
/// assert_eq!(round.max_score(), 720);
/// assert_eq!(round.n_arrows(), 72);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RoundRepr", into = "RoundRepr")]
pub struct Round {
    name: String,
    passes: Vec<Pass>,
    metadata: RoundMetadata,
}

#[derive(Serialize, Deserialize)]
struct RoundRepr {
    name: String,
    passes: Vec<Pass>,
    #[serde(default)]
    metadata: RoundMetadata,
}

impl TryFrom<RoundRepr> for Round {
    type Error = Error;

    fn try_from(repr: RoundRepr) -> Result<Self> {
        Ok(Self::new(repr.name, repr.passes)?.with_metadata(repr.metadata))
    }
}

impl From<Round> for RoundRepr {
    fn from(round: Round) -> Self {
        Self {
            name: round.name,
            passes: round.passes,
            metadata: round.metadata,
        }
    }
}

impl Round {
    pub fn new(name: impl Into<String>, passes: Vec<Pass>) -> Result<Self> {
        let name = name.into();
        if passes.is_empty() {
            return Err(Error::invalid_input(format!(
                "round '{}' must contain at least one pass",
                name
            )));
        }
        Ok(Self {
            name,
            passes,
            metadata: RoundMetadata::default(),
        })
    }

    pub fn with_metadata(mut self, metadata: RoundMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn passes(&self) -> &[Pass] {
        &self.passes
    }

    pub fn metadata(&self) -> &RoundMetadata {
        &self.metadata
    }

    pub fn location(&self) -> Option<Location> {
        self.metadata.location
    }

    pub fn max_score(&self) -> u32 {
        self.passes.iter().map(Pass::max_score).sum()
    }

    pub fn n_arrows(&self) -> u32 {
        self.passes.iter().map(Pass::n_arrows).sum()
    }

    /// Longest distance shot, in the unit that pass was defined in
    pub fn max_distance(&self) -> Quantity {
        self.passes
            .iter()
            .map(Pass::distance)
            .reduce(|longest, d| {
                if d.to_metres() > longest.to_metres() {
                    d
                } else {
                    longest
                }
            })
            // rounds always hold at least one pass
            .unwrap_or(Quantity::metres(0.0))
    }

    /// Human readable summary of the passes
    pub fn describe(&self) -> String {
        let mut out = format!(
            "A {} consists of {} passes:\n",
            self.name,
            self.passes.len()
        );
        for pass in &self.passes {
            let distance = pass.distance();
            // writing to a String cannot fail
            let _ = writeln!(
                out,
                "\t- {} arrows at a {:.1} cm target at {:.1} {}s.",
                pass.n_arrows(),
                pass.target().diameter_m() * 100.0,
                distance.value,
                distance.unit
            );
        }
        out
    }
}

impl PartialEq for Round {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.passes == other.passes
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
