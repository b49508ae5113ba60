//! CLI argument definitions for the sample sheet validator.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "samplesheet-validate",
    version,
    about = "Validate an Illumina sample sheet before demultiplexing",
    long_about = "Validate an Illumina sample sheet before demultiplexing.\n\n\
                  Checks the header block, Sample_ID and Sample_Name columns,\n\
                  index sequences and optional sample naming conventions.\n\
                  Exits 0 when clean, 1 when problems are found, 2 on fatal errors."
)]
pub struct Cli {
    /// Path to the sample sheet CSV.
    #[arg(long = "samplesheet", value_name = "PATH")]
    pub samplesheet: PathBuf,

    /// Regular expression sample identifiers must match (repeatable).
    #[arg(long = "name-patterns", value_name = "REGEX", num_args = 1..)]
    pub name_patterns: Vec<String>,

    /// File with one naming regular expression per line.
    #[arg(long = "name-patterns-file", value_name = "PATH")]
    pub name_patterns_file: Option<PathBuf>,

    /// Require Sample_ID and Sample_Name to be the first two columns.
    #[arg(long = "strict-columns")]
    pub strict_columns: bool,

    /// Report output format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: ReportFormatArg,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Text,
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
