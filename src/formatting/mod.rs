use crate::classifications::ClassificationResult;
use crate::rounds::{Round, RoundCatalogue};
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Colour only when stdout is a capable terminal
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }

    /// Apply `NO_COLOR`, `CLICOLOR` and `CLICOLOR_FORCE` on top of a setting
    pub fn with_env(self) -> Self {
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v == "1") {
            return Self::Always;
        }
        if env::var("NO_COLOR").is_ok() || env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return Self::Never;
        }
        self
    }
}

/// Text roles a formatter can emphasise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Success,
    Warning,
    Header,
    Bold,
    Dim,
}

pub trait OutputFormatter {
    fn style(&self, text: &str, style: Style) -> String;

    fn success(&self, text: &str) -> String {
        self.style(text, Style::Success)
    }

    fn warning(&self, text: &str) -> String {
        self.style(text, Style::Warning)
    }

    fn header(&self, text: &str) -> String {
        self.style(text, Style::Header)
    }

    fn bold(&self, text: &str) -> String {
        self.style(text, Style::Bold)
    }

    fn dim(&self, text: &str) -> String {
        self.style(text, Style::Dim)
    }
}

/// Terminal formatter backed by `colored`
pub struct ColoredFormatter {
    enabled: bool,
}

impl ColoredFormatter {
    pub fn new(mode: ColorMode) -> Self {
        let enabled = mode.should_use_color();
        colored::control::set_override(enabled);
        Self { enabled }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn style(&self, text: &str, style: Style) -> String {
        if !self.enabled {
            return text.to_string();
        }
        let painted = match style {
            Style::Success => text.green(),
            Style::Warning => text.yellow(),
            Style::Header => text.blue().bold(),
            Style::Bold => text.bold(),
            Style::Dim => text.dimmed(),
        };
        painted.to_string()
    }
}

/// Formatter that never adds escape codes
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn style(&self, text: &str, _style: Style) -> String {
        text.to_string()
    }
}

fn detect_color_support() -> bool {
    let dumb = env::var("TERM").is_ok_and(|term| term == "dumb");
    !dumb && std::io::stdout().is_terminal()
}

/// Classification label, green when a tier was reached
pub fn format_classification(
    formatter: &dyn OutputFormatter,
    result: ClassificationResult,
) -> String {
    if result.is_classified() {
        formatter.success(result.label())
    } else {
        formatter.warning(result.label())
    }
}

/// One line per threshold, skipping tiers the round cannot award
pub fn format_thresholds(
    formatter: &dyn OutputFormatter,
    tiers: &[&str],
    thresholds: &[i32],
) -> String {
    tiers
        .iter()
        .zip(thresholds)
        .map(|(tier, &score)| {
            if score < 0 {
                format!("{:>6}  {}", tier, formatter.dim("-"))
            } else {
                format!("{:>6}  {}", tier, score)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn location_label(round: &Round) -> String {
    round
        .location()
        .map(|location| location.to_string())
        .unwrap_or_default()
}

/// Table of catalogue rounds
pub fn rounds_table<'a>(rounds: impl IntoIterator<Item = (&'a str, &'a Round)>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Codename",
            "Name",
            "Location",
            "Arrows",
            "Max score",
            "Max distance",
        ]);
    for (codename, round) in rounds {
        let distance = round.max_distance();
        table.add_row(vec![
            codename.to_string(),
            round.name().to_string(),
            location_label(round),
            round.n_arrows().to_string(),
            round.max_score().to_string(),
            format!("{} {}", distance.value, distance.unit),
        ]);
    }
    table
}

/// Catalogue listing, optionally filtered by a codename or name fragment
pub fn format_catalogue(catalogue: &RoundCatalogue, filter: Option<&str>) -> String {
    match filter {
        Some(needle) => rounds_table(catalogue.filter(needle)).to_string(),
        None => rounds_table(catalogue.iter()).to_string(),
    }
}
