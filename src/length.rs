//! Length units and conversion to metres.
//!
//! Units are identified by a small registry of aliases. Every alias resolves
//! to one definitive unit name (`yard`, `metre`, `cm`, `inch`) which carries an
//! exact scaling factor to metres.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Definitive length units understood by the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Yard,
    Metre,
    Cm,
    Inch,
}

const YARD_ALIASES: &[&str] = &[
    "Yard", "yard", "Yards", "yards", "Y", "y", "Yd", "yd", "Yds", "yds",
];
const METRE_ALIASES: &[&str] = &["Metre", "metre", "Metres", "metres", "M", "m", "Ms", "ms"];
const CM_ALIASES: &[&str] = &[
    "Centimetre",
    "centimetre",
    "Centimetres",
    "centimetres",
    "CM",
    "cm",
    "CMs",
    "cms",
];
const INCH_ALIASES: &[&str] = &["Inch", "inch", "Inches", "inches"];

impl LengthUnit {
    pub const ALL: [LengthUnit; 4] = [Self::Yard, Self::Metre, Self::Cm, Self::Inch];

    /// Exact factor converting one of this unit to metres
    pub fn metres_per_unit(self) -> f64 {
        match self {
            Self::Yard => 0.9144,
            Self::Metre => 1.0,
            Self::Cm => 0.01,
            Self::Inch => 0.0254,
        }
    }

    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Yard => YARD_ALIASES,
            Self::Metre => METRE_ALIASES,
            Self::Cm => CM_ALIASES,
            Self::Inch => INCH_ALIASES,
        }
    }

    /// Canonical name used in output
    pub fn name(self) -> &'static str {
        match self {
            Self::Yard => "yard",
            Self::Metre => "metre",
            Self::Cm => "cm",
            Self::Inch => "inch",
        }
    }

    /// Resolve any registered alias to its definitive unit
    pub fn from_alias(alias: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.aliases().contains(&alias))
            .ok_or_else(|| Error::unknown_unit(alias))
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for LengthUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_alias(s)
    }
}

/// Convert a value in the named unit to metres
pub fn to_metres(value: f64, unit: &str) -> Result<f64> {
    Ok(value * LengthUnit::from_alias(unit)?.metres_per_unit())
}

/// Convert a value in metres to the named unit
pub fn from_metres(value: f64, unit: &str) -> Result<f64> {
    Ok(value / LengthUnit::from_alias(unit)?.metres_per_unit())
}

/// Name of the definitive unit for an alias, e.g. `"Yds"` -> `"yard"`
pub fn definitive_unit(alias: &str) -> Result<&'static str> {
    LengthUnit::from_alias(alias).map(LengthUnit::name)
}

/// Every alias recognised by the registry
pub fn known_units() -> impl Iterator<Item = &'static str> {
    LengthUnit::ALL
        .into_iter()
        .flat_map(|unit| unit.aliases().iter().copied())
}

/// A magnitude paired with the unit it was given in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Quantity {
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// Build from a (value, alias) pair, failing on unknown aliases
    pub fn parse(value: f64, unit: &str) -> Result<Self> {
        Ok(Self::new(value, LengthUnit::from_alias(unit)?))
    }

    pub fn metres(value: f64) -> Self {
        Self::new(value, LengthUnit::Metre)
    }

    pub fn yards(value: f64) -> Self {
        Self::new(value, LengthUnit::Yard)
    }

    pub fn cm(value: f64) -> Self {
        Self::new(value, LengthUnit::Cm)
    }

    pub fn inches(value: f64) -> Self {
        Self::new(value, LengthUnit::Inch)
    }

    pub fn to_metres(&self) -> f64 {
        self.value * self.unit.metres_per_unit()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
