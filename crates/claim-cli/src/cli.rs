//! CLI argument definitions for the claim converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "claim837",
    version,
    about = "Convert claim CSV files into 837-style envelopes",
    long_about = "Convert claim CSV files into 837-style envelopes.\n\n\
                  Records are filtered, sorted by service date, de-identified\n\
                  through a name mapping and adjusted before encoding."
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

    /// Allow member names and identifiers in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a claim CSV file into an envelope file.
    Convert(ConvertArgs),

    /// Print column statistics for a claim CSV file.
    Profile(ProfileArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Claim CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Two-column name mapping CSV (original, replacement).
    #[arg(long = "mapping", value_name = "PATH")]
    pub mapping: PathBuf,

    /// Output file (default: <INPUT> with an .edi extension).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Treat the first mapping row as data instead of a header.
    #[arg(long = "no-mapping-header")]
    pub no_mapping_header: bool,

    /// Seed for name synthesis and charge adjustment.
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,

    /// Run every stage and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Also write the provider aggregation as JSON.
    #[arg(long = "summary-json", value_name = "PATH")]
    pub summary_json: Option<PathBuf>,
}

impl ConvertArgs {
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("edi"))
    }
}

#[derive(Parser)]
pub struct ProfileArgs {
    /// Claim CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
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
