//! CLI argument definitions for DoseWise.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dosewise",
    version,
    about = "DoseWise - Pediatric syrup dose and volume calculator",
    long_about = "Compute pediatric medication doses and syrup volumes from patient weight,\n\
                  catalog dosing guidelines, and formulation concentrations.\n\
                  Reports per-drug safety warnings alongside every result."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Allow patient values (weight) in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Calculate a dose and syrup volume for one patient.
    Calculate(CalculateArgs),

    /// List catalog drugs with their indications and concentrations.
    Drugs(DrugsArgs),

    /// Show a stored guideline and its interpreted parameters.
    Guideline(GuidelineArgs),
}

#[derive(Parser)]
pub struct CalculateArgs {
    /// Drug identifier (see `dosewise drugs`).
    #[arg(long)]
    pub drug: String,

    /// Indication identifier (default: the drug's first listed indication).
    #[arg(long)]
    pub indication: Option<String>,

    /// Patient weight in kilograms. Omit for age-table guidelines.
    #[arg(long, value_name = "KG")]
    pub weight: Option<f64>,

    /// Formulation concentration, e.g. "160 mg / 5 ml" (default: the drug's
    /// first listed concentration).
    #[arg(long)]
    pub concentration: Option<String>,

    /// Display locale for numbers, units and range words.
    #[arg(long, value_enum, default_value = "en")]
    pub locale: LocaleArg,

    /// Load the drug library from a TOML file instead of the embedded one.
    #[arg(long, value_name = "PATH")]
    pub library: Option<PathBuf>,

    /// Print the result as JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// Append the result as a timestamped JSON line to this file.
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,
}

#[derive(Parser)]
pub struct DrugsArgs {
    /// Load the drug library from a TOML file instead of the embedded one.
    #[arg(long, value_name = "PATH")]
    pub library: Option<PathBuf>,
}

#[derive(Parser)]
pub struct GuidelineArgs {
    /// Drug identifier (see `dosewise drugs`).
    #[arg(long)]
    pub drug: String,

    /// Indication identifier (default: the drug's first listed indication).
    #[arg(long)]
    pub indication: Option<String>,

    /// Load the drug library from a TOML file instead of the embedded one.
    #[arg(long, value_name = "PATH")]
    pub library: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LocaleArg {
    /// English units and Latin digits.
    En,
    /// Persian units and Extended Arabic-Indic digits.
    Fa,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
