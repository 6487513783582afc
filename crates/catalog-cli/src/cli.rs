//! CLI argument definitions for the catalog checker.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "catalog-check",
    version,
    about = "Validate product catalog spreadsheets before import",
    long_about = "Validate product catalog files (.xlsx, .xls, .csv) against the fixed\n\
                  product schema.\n\n\
                  Reports missing or extra columns, empty required cells, invalid origin\n\
                  codes, malformed classification codes and non-numeric values."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a catalog file and print the report.
    Validate(ValidateArgs),

    /// List the expected columns with their rules.
    Schema(SchemaArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Catalog file to validate (.xlsx, .xls or .csv).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Directory for the detailed report file (default: current directory).
    #[arg(long = "report-dir", value_name = "DIR")]
    pub report_dir: Option<PathBuf>,

    /// Do not write the detailed report file.
    #[arg(long = "no-report-file")]
    pub no_report_file: bool,

    /// Output format for the report.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Print transcript lines as the validation runs.
    #[arg(long = "show-logs")]
    pub show_logs: bool,
}

#[derive(Parser)]
pub struct SchemaArgs {
    /// Output format for the schema listing.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
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
