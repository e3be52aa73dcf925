//! Command-line interface for archerymath
//!
//! - Argument parsing (this module)
//! - Runtime setup: logging and the rayon pool (`setup`)

pub mod setup;

pub use setup::{configure_thread_pool, init_logging};

use crate::classifications::Discipline;
use crate::handicaps::SchemeName;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "archerymath")]
#[command(about = "Archery handicaps, score tables and classifications", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Log backend
    #[arg(long = "log-format", value_enum, default_value = "tracing", global = true)]
    pub log_format: LogFormat,

    /// Color output: auto, always or never (overrides the config file)
    #[arg(long, global = true)]
    pub color: Option<String>,

    /// Extra JSON round definition files
    #[arg(long = "round-file", global = true)]
    pub round_files: Vec<PathBuf>,

    /// Worker threads for table building (0 = all cores)
    #[arg(short = 'j', long, default_value = "0", global = true)]
    pub jobs: usize,

    /// Configuration file (defaults to the nearest .archerymath.toml)
    #[arg(long, global = true, env = "ARCHERYMATH_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// tracing-subscriber with RUST_LOG filtering
    Tracing,
    /// env_logger plain lines
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableFormat {
    Text,
    Csv,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Expected score for a handicap on a round
    Score(ScoreArgs),

    /// Handicap for a score on a round
    Handicap(HandicapArgs),

    /// Table of scores over a range of handicaps
    Table(TableArgs),

    /// Classification for a score, or the thresholds for a category
    Classify(ClassifyArgs),

    /// Age group from year of birth
    Age {
        /// Year of birth
        #[arg(long = "birth-year")]
        birth_year: i32,

        /// Year of the event (defaults to the current year)
        #[arg(long = "event-year")]
        event_year: Option<i32>,
    },

    /// List known rounds
    Rounds {
        /// Only show rounds whose codename or name contains this text
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Round codename, e.g. wa1440_90
    #[arg(short, long)]
    pub round: String,

    #[arg(long = "handicap", allow_negative_numbers = true)]
    pub handicap: f64,

    /// Handicap scheme (AGB, AGBold, AA, AA2)
    #[arg(short, long)]
    pub scheme: Option<SchemeName>,

    /// Report the unrounded score
    #[arg(long)]
    pub raw: bool,

    /// Show the score of every pass
    #[arg(long = "per-pass")]
    pub per_pass: bool,

    /// Arrow diameter override in metres
    #[arg(long = "arrow-diameter")]
    pub arrow_diameter: Option<f64>,
}

#[derive(Args, Debug, Clone)]
pub struct HandicapArgs {
    /// Round codename, e.g. portsmouth
    #[arg(short, long)]
    pub round: String,

    #[arg(long)]
    pub score: f64,

    /// Handicap scheme (AGB, AGBold, AA, AA2)
    #[arg(short, long)]
    pub scheme: Option<SchemeName>,

    /// Report an integer handicap
    #[arg(long = "int-prec")]
    pub int_prec: bool,

    /// Arrow diameter override in metres
    #[arg(long = "arrow-diameter")]
    pub arrow_diameter: Option<f64>,
}

#[derive(Args, Debug, Clone)]
pub struct TableArgs {
    /// Round codenames, comma separated
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub rounds: Vec<String>,

    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub from: f64,

    #[arg(long, default_value = "150", allow_negative_numbers = true)]
    pub to: f64,

    #[arg(long, default_value = "1")]
    pub step: f64,

    /// Handicap scheme (AGB, AGBold, AA, AA2)
    #[arg(short, long)]
    pub scheme: Option<SchemeName>,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: TableFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Keep repeated scores instead of blanking them
    #[arg(long = "keep-gaps")]
    pub keep_gaps: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ClassifyArgs {
    /// outdoor, indoor, old-outdoor, old-indoor or old-field
    #[arg(short, long)]
    pub discipline: Discipline,

    /// Round codename
    #[arg(short, long)]
    pub round: String,

    /// Score shot; omit to print the thresholds instead
    #[arg(long)]
    pub score: Option<f64>,

    #[arg(long)]
    pub bowstyle: String,

    #[arg(long)]
    pub gender: String,

    /// Age group, e.g. adult, 50+, "under 18"
    #[arg(long, default_value = "adult")]
    pub age: String,

    /// Reject categories that would otherwise be coaxed
    #[arg(long)]
    pub strict: bool,
}
