//! Built-in round definitions keyed by codename.
//!
//! Covers the common Archery GB imperial and metric outdoor rounds, the WA
//! target and indoor rounds, and WA field courses.

use super::{Location, Pass, Round, RoundMetadata};
use crate::errors::{Error, Result};
use crate::length::Quantity;
use crate::targets::ScoringSystem;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

use ScoringSystem::{
    FiveZone, TenZone, TenZoneCompound, TenZoneFiveRing, TenZoneFiveRingCompound, TenZoneSixRing,
    WaField, Worcester, WorcesterTwoRing,
};

/// Rounds addressable by codename, e.g. `wa1440_90` or `portsmouth`
#[derive(Debug, Clone, Default)]
pub struct RoundCatalogue {
    rounds: BTreeMap<String, Round>,
}

impl RoundCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a round, returning any round previously stored under the codename
    pub fn insert(&mut self, codename: impl Into<String>, round: Round) -> Option<Round> {
        self.rounds.insert(codename.into(), round)
    }

    pub fn get(&self, codename: &str) -> Result<&Round> {
        self.rounds
            .get(codename)
            .ok_or_else(|| Error::RoundNotFound(codename.to_string()))
    }

    pub fn contains(&self, codename: &str) -> bool {
        self.rounds.contains_key(codename)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Round)> {
        self.rounds.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn codenames(&self) -> impl Iterator<Item = &str> {
        self.rounds.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Merge another catalogue in; its rounds win on codename clashes
    pub fn extend(&mut self, other: RoundCatalogue) {
        for (codename, round) in other.rounds {
            if self.rounds.insert(codename.clone(), round).is_some() {
                log::debug!("Round '{}' replaced by a loaded definition", codename);
            }
        }
    }

    /// Rounds whose codename or display name contains `needle` (case-insensitive)
    pub fn filter<'a>(&'a self, needle: &'a str) -> impl Iterator<Item = (&'a str, &'a Round)> {
        let needle = needle.to_lowercase();
        self.iter().filter(move |(codename, round)| {
            codename.to_lowercase().contains(&needle)
                || round.name().to_lowercase().contains(&needle)
        })
    }
}

static BUILTIN: Lazy<RoundCatalogue> = Lazy::new(|| {
    build_builtin().unwrap_or_else(|e| {
        log::error!("Failed to build the built-in round catalogue: {}", e);
        RoundCatalogue::default()
    })
});

/// The shared built-in catalogue
pub fn builtin() -> &'static RoundCatalogue {
    &BUILTIN
}

type PassDef = (u32, ScoringSystem, f64, Quantity);

fn m(value: f64) -> Quantity {
    Quantity::metres(value)
}

fn yd(value: f64) -> Quantity {
    Quantity::yards(value)
}

struct Builder {
    catalogue: RoundCatalogue,
}

impl Builder {
    fn add(
        &mut self,
        codename: &str,
        name: &str,
        metadata: &RoundMetadata,
        passes: &[PassDef],
    ) -> Result<()> {
        let indoor = metadata.location.is_some_and(Location::is_indoor);
        let passes = passes
            .iter()
            .map(|&(n, system, cm, distance)| {
                Pass::at_target(n, system, Quantity::cm(cm), distance, indoor)
            })
            .collect::<Result<Vec<_>>>()?;
        let round = Round::new(name, passes)?.with_metadata(metadata.clone());
        self.catalogue.insert(codename, round);
        Ok(())
    }
}

/// Build the built-in catalogue from scratch
pub fn build_builtin() -> Result<RoundCatalogue> {
    let mut b = Builder {
        catalogue: RoundCatalogue::new(),
    };
    add_wa_outdoor(&mut b)?;
    add_agb_metric(&mut b)?;
    add_agb_imperial(&mut b)?;
    add_indoor(&mut b)?;
    add_field(&mut b)?;
    Ok(b.catalogue)
}

fn four_distance(long: [f64; 2], short: [f64; 2], short_system: ScoringSystem) -> [PassDef; 4] {
    [
        (36, TenZone, 122.0, m(long[0])),
        (36, TenZone, 122.0, m(long[1])),
        (36, short_system, 80.0, m(short[0])),
        (36, short_system, 80.0, m(short[1])),
    ]
}

fn add_wa_outdoor(b: &mut Builder) -> Result<()> {
    let meta = RoundMetadata::new(Location::Outdoor, "WA", "WA1440");
    for (code, name, long, short) in [
        ("wa1440_90", "WA 1440 (90m)", [90.0, 70.0], [50.0, 30.0]),
        ("wa1440_70", "WA 1440 (70m)", [70.0, 60.0], [50.0, 30.0]),
        ("wa1440_60", "WA 1440 (60m)", [60.0, 50.0], [40.0, 30.0]),
    ] {
        b.add(code, name, &meta, &four_distance(long, short, TenZone))?;
        b.add(
            &format!("{}_small", code),
            &format!("{} Small", name),
            &meta,
            &four_distance(long, short, TenZoneSixRing),
        )?;
    }

    let meta = RoundMetadata::new(Location::Outdoor, "WA", "WA720");
    for (code, name, system, cm, distance) in [
        ("wa720_70", "WA 720 (70m)", TenZone, 122.0, 70.0),
        ("wa720_60", "WA 720 (60m)", TenZone, 122.0, 60.0),
        ("wa720_50_b", "WA 720 (50m) (Barebow)", TenZone, 122.0, 50.0),
        (
            "wa720_50_c",
            "WA 720 (50m) (Compound)",
            TenZoneFiveRingCompound,
            80.0,
            50.0,
        ),
    ] {
        let pass = (36, system, cm, m(distance));
        b.add(code, name, &meta, &[pass, pass])?;
    }
    Ok(())
}

fn add_agb_metric(b: &mut Builder) -> Result<()> {
    let meta = RoundMetadata::new(Location::Outdoor, "AGB", "Metric");
    for (code, name, long, short) in [
        ("metric_i", "Metric I", [70.0, 60.0], [50.0, 30.0]),
        ("metric_ii", "Metric II", [60.0, 50.0], [40.0, 30.0]),
        ("metric_iii", "Metric III", [50.0, 40.0], [30.0, 20.0]),
        ("metric_iv", "Metric IV", [40.0, 30.0], [20.0, 10.0]),
        ("metric_v", "Metric V", [30.0, 20.0], [15.0, 10.0]),
    ] {
        b.add(code, name, &meta, &four_distance(long, short, TenZone))?;
    }

    let meta = RoundMetadata::new(Location::Outdoor, "AGB", "Metric 720");
    for distance in [50.0, 40.0, 30.0] {
        let pass = (36, TenZone, 122.0, m(distance));
        b.add(
            &format!("metric_122_{}", distance),
            &format!("Metric 122-{}", distance),
            &meta,
            &[pass, pass],
        )?;
    }
    for distance in [40.0, 30.0] {
        let pass = (36, TenZoneFiveRingCompound, 80.0, m(distance));
        b.add(
            &format!("metric_80_{}", distance),
            &format!("Metric 80-{}", distance),
            &meta,
            &[pass, pass],
        )?;
    }
    Ok(())
}

fn add_agb_imperial(b: &mut Builder) -> Result<()> {
    let meta = RoundMetadata::new(Location::Outdoor, "AGB", "York/Hereford/Bristol");
    for (code, name, distances) in [
        ("york", "York", [100.0, 80.0, 60.0]),
        ("hereford", "Hereford", [80.0, 60.0, 50.0]),
        ("bristol_i", "Bristol I", [80.0, 60.0, 50.0]),
        ("bristol_ii", "Bristol II", [60.0, 50.0, 40.0]),
        ("bristol_iii", "Bristol III", [50.0, 40.0, 30.0]),
        ("bristol_iv", "Bristol IV", [40.0, 30.0, 20.0]),
        ("bristol_v", "Bristol V", [30.0, 20.0, 10.0]),
    ] {
        let passes = [
            (72, FiveZone, 122.0, yd(distances[0])),
            (48, FiveZone, 122.0, yd(distances[1])),
            (24, FiveZone, 122.0, yd(distances[2])),
        ];
        b.add(code, name, &meta, &passes)?;
    }

    let meta = RoundMetadata::new(Location::Outdoor, "AGB", "St. George/Albion/Windsor");
    for (code, name, distances) in [
        ("st_george", "St. George", [100.0, 80.0, 60.0]),
        ("albion", "Albion", [80.0, 60.0, 50.0]),
        ("windsor", "Windsor", [60.0, 50.0, 40.0]),
    ] {
        let passes = distances.map(|d| (36, FiveZone, 122.0, yd(d)));
        b.add(code, name, &meta, &passes)?;
    }

    let meta = RoundMetadata::new(Location::Outdoor, "AGB", "Western/National/Warwick");
    for (code, name, arrows, distances) in [
        ("western", "Western", [48, 48], [60.0, 50.0]),
        ("long_western", "Long Western", [48, 48], [80.0, 60.0]),
        ("national", "National", [48, 24], [60.0, 50.0]),
        ("warwick", "Warwick", [24, 24], [60.0, 50.0]),
    ] {
        let passes = [
            (arrows[0], FiveZone, 122.0, yd(distances[0])),
            (arrows[1], FiveZone, 122.0, yd(distances[1])),
        ];
        b.add(code, name, &meta, &passes)?;
    }

    let meta = RoundMetadata::new(Location::Outdoor, "AGB", "American");
    let passes = [60.0, 50.0, 40.0].map(|d| (30, FiveZone, 122.0, yd(d)));
    b.add("american", "American", &meta, &passes)?;
    Ok(())
}

fn add_indoor(b: &mut Builder) -> Result<()> {
    // each base round gets triple-spot and compound-scoring variants
    let meta = RoundMetadata::new(Location::Indoor, "AGB", "Indoor");
    for (code, name, arrows, cm, distance) in [
        ("portsmouth", "Portsmouth", 60, 60.0, yd(20.0)),
        ("bray_i", "Bray I", 30, 40.0, yd(20.0)),
        ("bray_ii", "Bray II", 30, 60.0, m(25.0)),
        ("wa18", "WA 18", 60, 40.0, m(18.0)),
        ("wa25", "WA 25", 60, 60.0, m(25.0)),
    ] {
        b.add(code, name, &meta, &[(arrows, TenZone, cm, distance)])?;
        b.add(
            &format!("{}_triple", code),
            &format!("{} Triple", name),
            &meta,
            &[(arrows, TenZoneFiveRing, cm, distance)],
        )?;
        b.add(
            &format!("{}_compound", code),
            &format!("{} (Compound)", name),
            &meta,
            &[(arrows, TenZoneCompound, cm, distance)],
        )?;
        b.add(
            &format!("{}_compound_triple", code),
            &format!("{} Triple (Compound)", name),
            &meta,
            &[(arrows, TenZoneFiveRingCompound, cm, distance)],
        )?;
    }

    b.add(
        "stafford",
        "Stafford",
        &meta,
        &[(72, TenZone, 80.0, m(30.0))],
    )?;
    b.add(
        "stafford_compound",
        "Stafford (Compound)",
        &meta,
        &[(72, TenZoneCompound, 80.0, m(30.0))],
    )?;
    b.add(
        "vegas",
        "Vegas",
        &meta,
        &[(60, TenZoneFiveRing, 40.0, m(18.0))],
    )?;
    b.add(
        "vegas_compound",
        "Vegas (Compound)",
        &meta,
        &[(60, TenZoneFiveRingCompound, 40.0, m(18.0))],
    )?;
    b.add(
        "vegas_300",
        "Vegas 300",
        &meta,
        &[(30, TenZone, 40.0, yd(20.0))],
    )?;
    b.add(
        "vegas_300_triple",
        "Vegas 300 Triple",
        &meta,
        &[(30, TenZoneFiveRing, 40.0, yd(20.0))],
    )?;

    let worcester_cm = 16.0 * 2.54;
    b.add(
        "worcester",
        "Worcester",
        &meta,
        &[(60, Worcester, worcester_cm, yd(20.0))],
    )?;
    b.add(
        "worcester_5_centre",
        "Worcester (5 centre)",
        &meta,
        &[(60, WorcesterTwoRing, worcester_cm, yd(20.0))],
    )?;
    Ok(())
}

/// Per-target (face cm, distance m) for each peg colour on a 12-target unit
const FIELD_PEGS: [(&str, [(f64, f64); 12]); 3] = [
    (
        "red",
        [
            (80.0, 60.0),
            (80.0, 55.0),
            (80.0, 50.0),
            (60.0, 45.0),
            (60.0, 40.0),
            (60.0, 35.0),
            (40.0, 30.0),
            (40.0, 25.0),
            (40.0, 20.0),
            (20.0, 15.0),
            (20.0, 10.0),
            (20.0, 5.0),
        ],
    ),
    (
        "blue",
        [
            (80.0, 50.0),
            (80.0, 45.0),
            (80.0, 40.0),
            (60.0, 35.0),
            (60.0, 30.0),
            (60.0, 25.0),
            (40.0, 20.0),
            (40.0, 15.0),
            (40.0, 10.0),
            (20.0, 10.0),
            (20.0, 8.0),
            (20.0, 5.0),
        ],
    ),
    (
        "yellow",
        [
            (80.0, 35.0),
            (80.0, 30.0),
            (80.0, 25.0),
            (60.0, 25.0),
            (60.0, 20.0),
            (60.0, 15.0),
            (40.0, 15.0),
            (40.0, 10.0),
            (40.0, 10.0),
            (20.0, 10.0),
            (20.0, 5.0),
            (20.0, 5.0),
        ],
    ),
];

fn add_field(b: &mut Builder) -> Result<()> {
    let meta = RoundMetadata::new(Location::Field, "WA", "WA Field");
    for (peg, unit) in FIELD_PEGS {
        for course in ["marked", "unmarked", "mixed"] {
            for (targets, arrows) in [(12, 3), (24, 6)] {
                let passes: Vec<PassDef> = unit
                    .iter()
                    .map(|&(cm, distance)| (arrows, WaField, cm, m(distance)))
                    .collect();
                b.add(
                    &format!("wa_field_{}_{}_{}", targets, peg, course),
                    &format!(
                        "WA Field {} {} {}",
                        targets,
                        capitalise(peg),
                        capitalise(course)
                    ),
                    &meta,
                    &passes,
                )?;
            }
        }
    }
    Ok(())
}

fn capitalise(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
