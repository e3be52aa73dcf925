//! Rating × round score tables.
//!
//! A [`HandicapTable`] is computed once at construction and is read-only
//! afterwards. Columns (one per round) are evaluated in parallel.

use super::scheme::{Direction, SchemeName};
use crate::errors::{Error, Result};
use crate::rounds::Round;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info_span;

/// Construction options for [`HandicapTable`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableOptions {
    /// Apply the scheme's rounding to each score
    pub rounded: bool,
    /// Truncate scores to integers
    pub int_prec: bool,
    /// Blank a score when the next worse rating gives the same score
    pub clean_gaps: bool,
    /// Arrow diameter override in metres
    pub arrow_diameter: Option<f64>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            rounded: true,
            int_prec: true,
            clean_gaps: true,
            arrow_diameter: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HandicapTable {
    scheme: SchemeName,
    ratings: Vec<f64>,
    round_names: Vec<String>,
    /// One row per rating, one cell per round; `None` marks a cleaned gap
    rows: Vec<Vec<Option<f64>>>,
    options: TableOptions,
}

impl HandicapTable {
    /// Build a table of scores for every rating on every round
    ///
    /// ```rust
    /// use archerymath::handicaps::{HandicapTable, SchemeName, TableOptions};
    /// use archerymath::rounds::builtin;
    ///
    /// let rounds = vec![builtin().get("wa1440_90").unwrap().clone()];
    /// let table = HandicapTable::new(
    ///     SchemeName::Agb,
    ///     &[1.0, 2.0, 3.0],
    ///     &rounds,
    ///     TableOptions::default(),
    /// )
    /// .unwrap();
    /// assert_eq!(table.cell(0, 0), Some(1396.0));
    /// ```
    pub fn new(
        scheme: SchemeName,
        ratings: &[f64],
        rounds: &[Round],
        options: TableOptions,
    ) -> Result<Self> {
        let _span = info_span!("handicap_table", scheme = %scheme, rounds = rounds.len()).entered();

        if rounds.is_empty() {
            return Err(Error::invalid_input("no rounds provided for handicap table"));
        }
        if ratings.is_empty() {
            return Err(Error::invalid_input("no ratings provided for handicap table"));
        }

        let mut options = options;
        if options.rounded && !options.int_prec {
            log::warn!(
                "Rounded scores requested without integer precision; enabling integer precision"
            );
            options.int_prec = true;
        }

        let padded = if options.clean_gaps {
            pad_ratings(ratings)
        } else {
            ratings.to_vec()
        };

        let hc_scheme = scheme.scheme();
        let columns = rounds
            .par_iter()
            .map(|round| {
                padded
                    .iter()
                    .map(|&rating| {
                        hc_scheme
                            .score_for_round(rating, round, options.arrow_diameter, options.rounded)
                            .map(|score| if options.int_prec { score.trunc() } else { score })
                    })
                    .collect::<Result<Vec<f64>>>()
            })
            .collect::<Result<Vec<Vec<f64>>>>()?;

        let grid: Vec<Vec<f64>> = (0..padded.len())
            .map(|i| columns.iter().map(|column| column[i]).collect())
            .collect();

        let rows = if options.clean_gaps {
            let mut cleaned = clean_repeated(grid, hc_scheme.direction);
            // drop the padding rows
            cleaned.pop();
            cleaned.remove(0);
            cleaned
        } else {
            grid.into_iter()
                .map(|row| row.into_iter().map(Some).collect())
                .collect()
        };

        log::debug!(
            "Built {} table with {} ratings and {} rounds",
            scheme,
            ratings.len(),
            rounds.len()
        );

        Ok(Self {
            scheme,
            ratings: ratings.to_vec(),
            round_names: rounds.iter().map(|r| r.name().to_string()).collect(),
            rows,
            options,
        })
    }

    pub fn scheme(&self) -> SchemeName {
        self.scheme
    }

    pub fn ratings(&self) -> &[f64] {
        &self.ratings
    }

    pub fn round_names(&self) -> &[String] {
        &self.round_names
    }

    pub fn rows(&self) -> &[Vec<Option<f64>>] {
        &self.rows
    }

    pub fn options(&self) -> TableOptions {
        self.options
    }

    /// Score at a rating row and round column; `None` for gaps or out of range
    pub fn cell(&self, row: usize, col: usize) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.get(col).copied().flatten())
    }

    pub fn column(&self, col: usize) -> Vec<Option<f64>> {
        self.rows
            .iter()
            .map(|row| row.get(col).copied().flatten())
            .collect()
    }

    fn format_score(&self, score: f64) -> String {
        if self.options.int_prec {
            format!("{}", score as i64)
        } else {
            format!("{:.8}", score)
        }
    }

    /// Comma separated export with a header row
    ///
    /// Round names are quoted when they contain separators; gaps are empty
    /// fields.
    pub fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(
            std::iter::once("handicap").chain(self.round_names.iter().map(String::as_str)),
        )?;
        for (rating, row) in self.ratings.iter().zip(&self.rows) {
            let cells = row
                .iter()
                .map(|cell| cell.map(|score| self.format_score(score)).unwrap_or_default());
            writer.write_record(std::iter::once(rating.to_string()).chain(cells))?;
        }
        let bytes = writer.into_inner().map_err(|e| Error::Io(e.into_error()))?;
        String::from_utf8(bytes).map_err(|e| Error::invalid_input(e.to_string()))
    }
}

impl fmt::Display for HandicapTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>14}", "Handicap")?;
        for name in &self.round_names {
            write!(f, "{:>14}", abbreviate(name))?;
        }

        let decimals = self
            .ratings
            .iter()
            .map(|r| decimal_places(*r))
            .max()
            .unwrap_or(0);
        for (rating, row) in self.ratings.iter().zip(&self.rows) {
            writeln!(f)?;
            write!(f, "{:>14.*}", decimals, rating)?;
            for cell in row {
                match cell {
                    Some(score) => write!(f, "{:>14}", self.format_score(*score))?,
                    None => write!(f, "{:14}", "")?,
                }
            }
        }
        Ok(())
    }
}

/// Extend the ratings one step beyond each end so edge repeats are detected
fn pad_ratings(ratings: &[f64]) -> Vec<f64> {
    let n = ratings.len();
    let (first_step, last_step) = if n > 1 {
        (ratings[1] - ratings[0], ratings[n - 1] - ratings[n - 2])
    } else {
        (1.0, 1.0)
    };
    let mut padded = Vec::with_capacity(n + 2);
    padded.push(ratings[0] - first_step);
    padded.extend_from_slice(ratings);
    padded.push(ratings[n - 1] + last_step);
    padded
}

/// Keep only the worst-rating occurrence of each repeated score
fn clean_repeated(grid: Vec<Vec<f64>>, direction: Direction) -> Vec<Vec<Option<f64>>> {
    let mut grid = grid;
    if direction == Direction::HigherIsBetter {
        grid.reverse();
    }
    let mut cleaned: Vec<Vec<Option<f64>>> = grid
        .iter()
        .enumerate()
        .map(|(i, row)| {
            row.iter()
                .enumerate()
                .map(|(j, &score)| match grid.get(i + 1) {
                    Some(next) if next[j] == score => None,
                    _ => Some(score),
                })
                .collect()
        })
        .collect();
    if direction == Direction::HigherIsBetter {
        cleaned.reverse();
    }
    cleaned
}

/// Shorten common words in round names for column headers
pub fn abbreviate(name: &str) -> String {
    name.split_whitespace()
        .map(|word| match word {
            "Compound" => "C",
            "Recurve" => "R",
            "Triple" => "Tr",
            "Centre" => "C",
            "Portsmouth" => "Ports",
            "Worcester" => "Worc",
            "Short" => "St",
            "Long" => "Lg",
            "Small" => "Sm",
            "Gents" => "G",
            "Ladies" => "L",
            other => other,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn decimal_places(value: f64) -> usize {
    let text = value.to_string();
    text.split_once('.').map_or(0, |(_, frac)| frac.len())
}
