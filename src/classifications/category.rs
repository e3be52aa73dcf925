//! Archer categories used as classification lookup keys.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Strip case, spaces, dashes and underscores for lenient parsing
fn normalise(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalise(s).as_str() {
            "male" | "m" | "men" | "gents" => Ok(Self::Male),
            "female" | "f" | "women" | "ladies" => Ok(Self::Female),
            _ => Err(Error::invalid_input(format!(
                "gender '{}' not recognised. Select from male, female.",
                s
            ))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Archery GB age groups, oldest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "50+")]
    Over50,
    #[serde(rename = "adult")]
    Adult,
    #[serde(rename = "under21")]
    Under21,
    #[serde(rename = "under18")]
    Under18,
    #[serde(rename = "under16")]
    Under16,
    #[serde(rename = "under15")]
    Under15,
    #[serde(rename = "under14")]
    Under14,
    #[serde(rename = "under12")]
    Under12,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 8] = [
        Self::Over50,
        Self::Adult,
        Self::Under21,
        Self::Under18,
        Self::Under16,
        Self::Under15,
        Self::Under14,
        Self::Under12,
    ];

    /// Identifier used in group names
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Over50 => "50+",
            Self::Adult => "adult",
            Self::Under21 => "under21",
            Self::Under18 => "under18",
            Self::Under16 => "under16",
            Self::Under15 => "under15",
            Self::Under14 => "under14",
            Self::Under12 => "under12",
        }
    }

    pub fn is_junior(self) -> bool {
        !matches!(self, Self::Over50 | Self::Adult)
    }
}

impl FromStr for AgeGroup {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let age = match normalise(s).as_str() {
            "50+" | "over50" | "p50" | "50plus" => Self::Over50,
            "adult" | "senior" => Self::Adult,
            "under21" | "u21" => Self::Under21,
            "under18" | "u18" => Self::Under18,
            "under16" | "u16" => Self::Under16,
            "under15" | "u15" => Self::Under15,
            "under14" | "u14" => Self::Under14,
            "under12" | "u12" => Self::Under12,
            _ => {
                return Err(Error::invalid_input(format!(
                    "age group '{}' not recognised. Select from 50+, adult, under 21, \
                     under 18, under 16, under 15, under 14, under 12.",
                    s
                )))
            }
        };
        Ok(age)
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bowstyle {
    Compound,
    Recurve,
    Barebow,
    /// Also parsed from "English Longbow"
    Longbow,
    Traditional,
    Flatbow,
    Asiatic,
    CompoundLimited,
    CompoundBarebow,
}

impl Bowstyle {
    pub const ALL: [Bowstyle; 9] = [
        Self::Compound,
        Self::Recurve,
        Self::Barebow,
        Self::Longbow,
        Self::Traditional,
        Self::Flatbow,
        Self::Asiatic,
        Self::CompoundLimited,
        Self::CompoundBarebow,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compound => "compound",
            Self::Recurve => "recurve",
            Self::Barebow => "barebow",
            Self::Longbow => "longbow",
            Self::Traditional => "traditional",
            Self::Flatbow => "flatbow",
            Self::Asiatic => "asiatic",
            Self::CompoundLimited => "compoundlimited",
            Self::CompoundBarebow => "compoundbarebow",
        }
    }

    /// Compound, Compound Limited and Compound Barebow
    pub fn is_compound_family(self) -> bool {
        matches!(
            self,
            Self::Compound | Self::CompoundLimited | Self::CompoundBarebow
        )
    }

    /// Bowstyles shooting with a sight
    pub fn is_sighted(self) -> bool {
        matches!(
            self,
            Self::Compound | Self::Recurve | Self::CompoundLimited
        )
    }
}

impl FromStr for Bowstyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalised = normalise(s);
        if normalised == "englishlongbow" {
            return Ok(Self::Longbow);
        }
        Self::ALL
            .into_iter()
            .find(|b| b.as_str() == normalised)
            .ok_or_else(|| {
                Error::invalid_input(format!(
                    "bowstyle '{}' not recognised. Select from {}.",
                    s,
                    Self::ALL.map(Bowstyle::as_str).join(", ")
                ))
            })
    }
}

impl fmt::Display for Bowstyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification scheme a category is resolved against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Discipline {
    Outdoor,
    Indoor,
    OldOutdoor,
    OldIndoor,
    OldField,
}

impl Discipline {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Outdoor => "outdoor",
            Self::Indoor => "indoor",
            Self::OldOutdoor => "old outdoor",
            Self::OldIndoor => "old indoor",
            Self::OldField => "old field",
        }
    }
}

impl FromStr for Discipline {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalise(s).as_str() {
            "outdoor" => Ok(Self::Outdoor),
            "indoor" => Ok(Self::Indoor),
            "oldoutdoor" => Ok(Self::OldOutdoor),
            "oldindoor" => Ok(Self::OldIndoor),
            "oldfield" | "field" => Ok(Self::OldField),
            _ => Err(Error::invalid_input(format!(
                "discipline '{}' not recognised. \
                 Select from outdoor, indoor, old-outdoor, old-indoor, old-field.",
                s
            ))),
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A (bowstyle, gender, age group) triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub bowstyle: Bowstyle,
    pub gender: Gender,
    pub age_group: AgeGroup,
}

impl Category {
    pub fn new(bowstyle: Bowstyle, gender: Gender, age_group: AgeGroup) -> Self {
        Self {
            bowstyle,
            gender,
            age_group,
        }
    }

    /// Parse all three fields from strings
    ///
    /// ```rust
    /// use archerymath::classifications::{AgeGroup, Category};
    ///
    /// let cat = Category::parse("English Longbow", "female", "Under 18").unwrap();
    /// assert_eq!(cat.age_group, AgeGroup::Under18);
    /// assert_eq!(cat.group_name(), "under18_female_longbow");
    /// ```
    pub fn parse(bowstyle: &str, gender: &str, age_group: &str) -> Result<Self> {
        Ok(Self::new(
            bowstyle.parse()?,
            gender.parse()?,
            age_group.parse()?,
        ))
    }

    /// Identifier such as `adult_male_recurve`
    pub fn group_name(&self) -> String {
        format!(
            "{}_{}_{}",
            self.age_group.as_str(),
            self.gender.as_str(),
            self.bowstyle.as_str()
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.group_name())
    }
}
