//! CLI argument definitions for csvsel.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "csvsel",
    version,
    about = "Select, drop and reorder CSV columns as a stream filter",
    long_about = "Read delimited records from FILE or standard input, apply \
                  include/exclude column projections in order, and write the \
                  result as CSV, raw comma-joined lines, or an aligned table."
)]
pub struct Cli {
    /// Input file; standard input is read when omitted.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Column indices to keep, in output order. Repeatable, and a repeated
    /// index duplicates the column (e.g. -i 2,0,2).
    #[arg(
        short = 'i',
        long = "include",
        value_name = "INDICES",
        value_delimiter = ',',
        action = ArgAction::Append
    )]
    pub include: Vec<usize>,

    /// Column indices to drop. Repeatable (e.g. -x 0 -x 3,4).
    #[arg(
        short = 'x',
        long = "exclude",
        value_name = "INDICES",
        value_delimiter = ',',
        action = ArgAction::Append
    )]
    pub exclude: Vec<usize>,

    /// Field delimiter, a single ASCII character.
    #[arg(
        short = 'd',
        long = "delimiter",
        value_name = "CHAR",
        default_value = ",",
        value_parser = parse_delimiter
    )]
    pub delimiter: u8,

    /// Output format.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FORMAT",
        default_value = "csv"
    )]
    pub output: String,

    /// Skip include indices that fall outside a record instead of failing.
    #[arg(long = "no-strict")]
    pub no_strict: bool,

    /// After the output, print an (index, value) table of the first input
    /// record as it looked before any projection.
    #[arg(long = "print-headers")]
    pub print_headers: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
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

/// Accept exactly one ASCII character as the field delimiter.
fn parse_delimiter(raw: &str) -> Result<u8, String> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii() => Ok(ch as u8),
        (Some(_), None) => Err(format!("delimiter must be an ASCII character, got {raw:?}")),
        _ => Err(format!(
            "delimiter must be exactly one character, got {raw:?}"
        )),
    }
}
