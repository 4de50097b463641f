//! CLI argument definitions for the stock reconciliation tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "stock-recon",
    version,
    about = "Reconcile two inventory worksheets kept in different location schemes",
    long_about = "Reconcile two inventory worksheets kept in different location schemes.\n\n\
                  Reads primary and secondary inventory CSVs plus a location conversion\n\
                  table, cross-checks serial numbers and quantities in both directions,\n\
                  and writes a discrepancy report."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Reconcile the inventory files in a data folder.
    Check(CheckArgs),

    /// List the columns each input file must provide.
    Columns,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the folder containing the input CSV files.
    #[arg(value_name = "DATA_FOLDER")]
    pub data_folder: PathBuf,

    /// Output directory for generated files (default: <DATA_FOLDER>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Result format to write.
    #[arg(long = "format", value_enum, default_value = "both")]
    pub format: ResultFormatArg,

    /// Column to sort inventory rows by before validation.
    #[arg(long = "sort-by", value_name = "COLUMN", default_value = "Part Number")]
    pub sort_by: String,

    /// Validate and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ResultFormatArg {
    Csv,
    Json,
    Both,
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
