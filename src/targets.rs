//! Target faces and the scoring zones they define.
//!
//! A [`Target`] couples a scoring system with a face diameter and a shooting
//! distance. Its [`FaceSpec`] lists every ring as `(diameter in metres, score)`
//! from the centre outwards and is fixed at construction time.

use crate::errors::{Error, Result};
use crate::length::{LengthUnit, Quantity};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named scoring systems with a face spec generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoringSystem {
    #[serde(rename = "5_zone")]
    FiveZone,
    #[serde(rename = "10_zone")]
    TenZone,
    #[serde(rename = "10_zone_compound")]
    TenZoneCompound,
    #[serde(rename = "10_zone_6_ring")]
    TenZoneSixRing,
    #[serde(rename = "10_zone_5_ring")]
    TenZoneFiveRing,
    #[serde(rename = "10_zone_5_ring_compound")]
    TenZoneFiveRingCompound,
    #[serde(rename = "WA_field")]
    WaField,
    #[serde(rename = "IFAA_field")]
    IfaaField,
    #[serde(rename = "IFAA_field_expert")]
    IfaaFieldExpert,
    #[serde(rename = "Worcester")]
    Worcester,
    #[serde(rename = "Worcester_2_ring")]
    WorcesterTwoRing,
    #[serde(rename = "Beiter_hit_miss")]
    BeiterHitMiss,
    /// Caller supplied face spec
    #[serde(rename = "Custom")]
    Custom,
}

impl ScoringSystem {
    /// Systems that can generate a face spec from a diameter
    pub const NAMED: [ScoringSystem; 12] = [
        Self::FiveZone,
        Self::TenZone,
        Self::TenZoneCompound,
        Self::TenZoneSixRing,
        Self::TenZoneFiveRing,
        Self::TenZoneFiveRingCompound,
        Self::WaField,
        Self::IfaaField,
        Self::IfaaFieldExpert,
        Self::Worcester,
        Self::WorcesterTwoRing,
        Self::BeiterHitMiss,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::FiveZone => "5_zone",
            Self::TenZone => "10_zone",
            Self::TenZoneCompound => "10_zone_compound",
            Self::TenZoneSixRing => "10_zone_6_ring",
            Self::TenZoneFiveRing => "10_zone_5_ring",
            Self::TenZoneFiveRingCompound => "10_zone_5_ring_compound",
            Self::WaField => "WA_field",
            Self::IfaaField => "IFAA_field",
            Self::IfaaFieldExpert => "IFAA_field_expert",
            Self::Worcester => "Worcester",
            Self::WorcesterTwoRing => "Worcester_2_ring",
            Self::BeiterHitMiss => "Beiter_hit_miss",
            Self::Custom => "Custom",
        }
    }

    /// Generate the rings of this system for a face of diameter `d` metres
    pub fn face_spec(self, d: f64) -> Result<FaceSpec> {
        let rings: Vec<(f64, u32)> = match self {
            Self::FiveZone => (1..=5u32).map(|n| (n as f64 * d / 5.0, 11 - 2 * n)).collect(),
            Self::TenZone => (1..=10u32).map(|n| (n as f64 * d / 10.0, 11 - n)).collect(),
            Self::TenZoneCompound => std::iter::once((d / 20.0, 10))
                .chain((2..=10u32).map(|n| (n as f64 * d / 10.0, 11 - n)))
                .collect(),
            Self::TenZoneSixRing => (1..=6u32).map(|n| (n as f64 * d / 10.0, 11 - n)).collect(),
            Self::TenZoneFiveRing => (1..=5u32).map(|n| (n as f64 * d / 10.0, 11 - n)).collect(),
            Self::TenZoneFiveRingCompound => std::iter::once((d / 20.0, 10))
                .chain((2..=5u32).map(|n| (n as f64 * d / 10.0, 11 - n)))
                .collect(),
            Self::WaField => std::iter::once((d / 10.0, 6))
                .chain((2..=6u32).map(|n| (n as f64 * d / 5.0, 7 - n)))
                .collect(),
            Self::IfaaField => vec![(d / 5.0, 5), (3.0 * d / 5.0, 4), (d, 3)],
            Self::IfaaFieldExpert | Self::Worcester => {
                (1..=5u32).map(|n| (n as f64 * d / 5.0, 6 - n)).collect()
            }
            Self::WorcesterTwoRing => vec![(d / 5.0, 5), (2.0 * d / 5.0, 4)],
            Self::BeiterHitMiss => vec![(d, 1)],
            Self::Custom => {
                return Err(Error::invalid_face_spec(
                    "a custom target must be built from an explicit face spec",
                ))
            }
        };
        FaceSpec::new(rings)
    }

    fn supported_names() -> String {
        Self::NAMED
            .iter()
            .map(|s| format!("'{}'", s.name()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ScoringSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScoringSystem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::NAMED
            .into_iter()
            .find(|system| system.name() == s)
            .ok_or_else(|| Error::UnsupportedSystem {
                name: s.to_string(),
                supported: Self::supported_names(),
            })
    }
}

/// Rings of a target face, innermost first
///
/// Diameters (metres) strictly increase and scores strictly decrease.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(f64, u32)>", into = "Vec<(f64, u32)>")]
pub struct FaceSpec {
    rings: Vec<(f64, u32)>,
}

impl FaceSpec {
    pub fn new(rings: Vec<(f64, u32)>) -> Result<Self> {
        if rings.is_empty() {
            return Err(Error::invalid_face_spec("at least one ring is required"));
        }
        if let Some((d, _)) = rings.iter().find(|(d, _)| !d.is_finite() || *d <= 0.0) {
            return Err(Error::invalid_face_spec(format!(
                "ring diameter {} must be positive and finite",
                d
            )));
        }
        if rings.iter().any(|(_, s)| *s == 0) {
            return Err(Error::invalid_face_spec("ring scores must be positive"));
        }
        for pair in rings.windows(2) {
            let ((d_in, s_in), (d_out, s_out)) = (pair[0], pair[1]);
            if d_out <= d_in {
                return Err(Error::invalid_face_spec(format!(
                    "ring diameters must increase outwards, found {} after {}",
                    d_out, d_in
                )));
            }
            if s_out >= s_in {
                return Err(Error::invalid_face_spec(format!(
                    "ring scores must decrease outwards, found {} after {}",
                    s_out, s_in
                )));
            }
        }
        Ok(Self { rings })
    }

    pub fn rings(&self) -> &[(f64, u32)] {
        &self.rings
    }

    pub fn len(&self) -> usize {
        self.rings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    pub fn max_score(&self) -> u32 {
        self.rings[0].1
    }

    pub fn min_score(&self) -> u32 {
        self.rings[self.rings.len() - 1].1
    }

    /// Diameter of the outermost scoring ring in metres
    pub fn outer_diameter(&self) -> f64 {
        self.rings[self.rings.len() - 1].0
    }
}

impl TryFrom<Vec<(f64, u32)>> for FaceSpec {
    type Error = Error;

    fn try_from(rings: Vec<(f64, u32)>) -> Result<Self> {
        Self::new(rings)
    }
}

impl From<FaceSpec> for Vec<(f64, u32)> {
    fn from(spec: FaceSpec) -> Self {
        spec.rings
    }
}

/// A target face at a distance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TargetRepr", into = "TargetRepr")]
pub struct Target {
    scoring_system: ScoringSystem,
    face_spec: FaceSpec,
    diameter: Quantity,
    distance: Quantity,
    indoor: bool,
}

#[derive(Serialize, Deserialize)]
struct TargetRepr {
    scoring_system: ScoringSystem,
    face_spec: FaceSpec,
    diameter: Quantity,
    distance: Quantity,
    indoor: bool,
}

/// Rebuild through the constructors; a named system must match its stored rings
impl TryFrom<TargetRepr> for Target {
    type Error = Error;

    fn try_from(repr: TargetRepr) -> Result<Self> {
        if repr.scoring_system == ScoringSystem::Custom {
            return Self::from_face_spec(repr.face_spec, repr.distance, repr.indoor);
        }
        let target =
            Self::with_units(repr.scoring_system, repr.diameter, repr.distance, repr.indoor)?;
        if target.face_spec != repr.face_spec {
            return Err(Error::invalid_face_spec(format!(
                "rings do not match a {} face of {} m",
                repr.scoring_system.name(),
                target.diameter_m()
            )));
        }
        Ok(target)
    }
}

impl From<Target> for TargetRepr {
    fn from(target: Target) -> Self {
        Self {
            scoring_system: target.scoring_system,
            face_spec: target.face_spec,
            diameter: target.diameter,
            distance: target.distance,
            indoor: target.indoor,
        }
    }
}

impl Target {
    /// Build from a named scoring system with bare numbers
    ///
    /// Diameters default to centimetres and distances to metres.
    ///
    /// ```rust
    /// use archerymath::targets::Target;
    ///
    /// let target = Target::new("10_zone", 122.0, 70.0, false).unwrap();
    /// assert_eq!(target.max_score(), 10);
    /// assert!((target.diameter_m() - 1.22).abs() < 1e-12);
    /// ```
    pub fn new(system: &str, diameter_cm: f64, distance_m: f64, indoor: bool) -> Result<Self> {
        Self::with_units(
            system.parse()?,
            Quantity::cm(diameter_cm),
            Quantity::metres(distance_m),
            indoor,
        )
    }

    /// Build from a named scoring system with explicit units
    pub fn with_units(
        system: ScoringSystem,
        diameter: Quantity,
        distance: Quantity,
        indoor: bool,
    ) -> Result<Self> {
        check_length("diameter", &diameter)?;
        check_length("distance", &distance)?;
        let face_spec = system.face_spec(diameter.to_metres())?;
        Ok(Self {
            scoring_system: system,
            face_spec,
            diameter,
            distance,
            indoor,
        })
    }

    /// Build from an explicit face spec
    ///
    /// The face diameter is taken from the outermost ring.
    pub fn from_face_spec(face_spec: FaceSpec, distance: Quantity, indoor: bool) -> Result<Self> {
        check_length("distance", &distance)?;
        let diameter = Quantity::metres(face_spec.outer_diameter());
        Ok(Self {
            scoring_system: ScoringSystem::Custom,
            face_spec,
            diameter,
            distance,
            indoor,
        })
    }

    pub fn scoring_system(&self) -> ScoringSystem {
        self.scoring_system
    }

    pub fn face_spec(&self) -> &FaceSpec {
        &self.face_spec
    }

    pub fn diameter(&self) -> Quantity {
        self.diameter
    }

    pub fn diameter_m(&self) -> f64 {
        self.diameter.to_metres()
    }

    /// Distance in the unit it was given in
    pub fn distance(&self) -> Quantity {
        self.distance
    }

    pub fn distance_m(&self) -> f64 {
        self.distance.to_metres()
    }

    pub fn native_dist_unit(&self) -> LengthUnit {
        self.distance.unit
    }

    pub fn is_indoor(&self) -> bool {
        self.indoor
    }

    pub fn max_score(&self) -> u32 {
        self.face_spec.max_score()
    }

    /// Lowest score an arrow can record on this face
    ///
    /// Hit/miss faces score a miss as zero.
    pub fn min_score(&self) -> u32 {
        match self.scoring_system {
            ScoringSystem::BeiterHitMiss => 0,
            _ => self.face_spec.min_score(),
        }
    }
}

fn check_length(what: &str, quantity: &Quantity) -> Result<()> {
    if quantity.value.is_finite() && quantity.value > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_input(format!(
            "target {} must be positive and finite, got {}",
            what, quantity
        )))
    }
}
