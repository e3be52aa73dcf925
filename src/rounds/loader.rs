//! Load round definitions from JSON files.
//!
//! A round file is a JSON array of records:
//!
//! ```json
//! [
//!   {
//!     "codename": "club_70",
//!     "name": "Club 70",
//!     "location": "outdoor",
//!     "body": "custom",
//!     "family": "Club",
//!     "passes": [
//!       {"n_arrows": 36, "scoring": "10_zone", "diameter": 122, "distance": 70, "dist_unit": "m"}
//!     ]
//!   }
//! ]
//! ```
//!
//! `diameter_unit` defaults to `cm`. Missing metadata falls back to defaults with a warning.

use super::{Location, Pass, Round, RoundCatalogue, RoundMetadata};
use crate::errors::{Error, Result};
use crate::length::Quantity;
use crate::targets::ScoringSystem;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RoundRecord {
    codename: String,
    name: String,
    location: Option<String>,
    body: Option<String>,
    family: Option<String>,
    passes: Vec<PassRecord>,
}

#[derive(Debug, Deserialize)]
struct PassRecord {
    n_arrows: u32,
    scoring: String,
    diameter: f64,
    #[serde(default = "default_diameter_unit")]
    diameter_unit: String,
    distance: f64,
    dist_unit: String,
}

fn default_diameter_unit() -> String {
    "cm".to_string()
}

/// Parse round records from a JSON string
pub fn parse_rounds(contents: &str) -> Result<RoundCatalogue> {
    let records: Vec<RoundRecord> = serde_json::from_str(contents)?;
    let mut catalogue = RoundCatalogue::new();
    for record in records {
        let (codename, round) = build_round(record)?;
        if catalogue.insert(codename.clone(), round).is_some() {
            log::warn!("Duplicate round codename '{}'; keeping the last definition", codename);
        }
    }
    Ok(catalogue)
}

/// Read a round file from disk
pub fn load_round_file(path: &Path) -> Result<RoundCatalogue> {
    let contents = std::fs::read_to_string(path)?;
    let catalogue = parse_rounds(&contents).map_err(|e| match e {
        Error::Json(json) => Error::invalid_input(format!(
            "failed to parse round file {}: {}",
            path.display(),
            json
        )),
        other => other,
    })?;
    log::debug!("Loaded {} rounds from {}", catalogue.len(), path.display());
    Ok(catalogue)
}

/// Built-in rounds plus every round defined in `files`
pub fn catalogue_with_files<P: AsRef<Path>>(files: &[P]) -> Result<RoundCatalogue> {
    let mut catalogue = super::builtin().clone();
    for file in files {
        catalogue.extend(load_round_file(file.as_ref())?);
    }
    Ok(catalogue)
}

fn resolve_location(record: &RoundRecord) -> Option<Location> {
    match record.location.as_deref() {
        None => {
            log::warn!("No location provided for round {}. Defaulting to None.", record.name);
            None
        }
        Some(alias) => {
            let location = Location::from_alias(alias);
            if location.is_none() {
                log::warn!(
                    "Location not recognised for round {}. Defaulting to None.",
                    record.name
                );
            }
            location
        }
    }
}

fn build_round(record: RoundRecord) -> Result<(String, Round)> {
    let location = resolve_location(&record);
    let indoor = location.is_some_and(Location::is_indoor);

    let body = record.body.unwrap_or_else(|| {
        log::warn!("No body provided for round {}. Defaulting to 'custom'.", record.name);
        "custom".to_string()
    });
    let family = record.family.unwrap_or_else(|| {
        log::warn!("No family provided for round {}. Defaulting to ''.", record.name);
        String::new()
    });

    let passes = record
        .passes
        .iter()
        .map(|p| {
            let system: ScoringSystem = p.scoring.parse()?;
            Pass::at_target(
                p.n_arrows,
                system,
                Quantity::parse(p.diameter, &p.diameter_unit)?,
                Quantity::parse(p.distance, &p.dist_unit)?,
                indoor,
            )
        })
        .collect::<Result<Vec<_>>>()?;

    let round = Round::new(record.name, passes)?.with_metadata(RoundMetadata {
        location,
        body,
        family,
    });
    Ok((record.codename, round))
}
