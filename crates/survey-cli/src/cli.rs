//! CLI argument definitions for the survey validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use survey_output::DEFAULT_SPOTS_FILE_NAME;

#[derive(Parser)]
#[command(
    name = "survey-validator",
    version,
    about = "Plantation survey validator - Check palm surveys and export spots",
    long_about = "Validate plantation survey CSV files (Lote, Linea, Palma, Longitud, Latitud).\n\n\
                  Reports missing and non-numeric values, repeated coordinates, lines and\n\
                  positions, out-of-range coordinates and unknown lots, and exports\n\
                  clean surveys as a spots CSV."
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

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include survey cell values in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a survey file and report the result.
    Validate(ValidateArgs),

    /// Validate a survey file and write the spots CSV when it is clean.
    Export(ExportArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Survey CSV (comma or tab separated).
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Lot directory export (JSON) enabling the lot membership check.
    #[arg(long = "lots", value_name = "JSON", requires = "farm_id")]
    pub lots: Option<PathBuf>,

    /// Farm whose lots are read from the directory.
    #[arg(long = "farm-id", value_name = "ID")]
    pub farm_id: Option<u64>,

    /// How to print the result.
    #[arg(long = "format", value_enum, default_value = "json")]
    pub format: OutputFormatArg,

    /// Write the JSON result to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Survey CSV (comma or tab separated).
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Farm the spots belong to.
    #[arg(long = "farm-id", value_name = "ID")]
    pub farm_id: u64,

    /// Lot id applied to every spot.
    #[arg(long = "lot-id", value_name = "ID")]
    pub lot_id: Option<u64>,

    /// Lot directory export (JSON) used to check and resolve lots.
    #[arg(long = "lots", value_name = "JSON")]
    pub lots: Option<PathBuf>,

    /// Spots CSV destination.
    #[arg(long = "output", value_name = "PATH", default_value = DEFAULT_SPOTS_FILE_NAME)]
    pub output: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Json,
    Table,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
