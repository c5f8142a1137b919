//! CLI argument definitions for the `mic` tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use mic_core::{Comparator, KeepOperators};

#[derive(Parser)]
#[command(
    name = "mic",
    version,
    about = "Normalize and validate minimum inhibitory concentration (MIC) values",
    long_about = "Normalize and validate minimum inhibitory concentration (MIC) values.\n\n\
                  Raw laboratory input is cleaned up and checked against the table of\n\
                  valid dilutions; anything else is reported and becomes missing."
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
    /// Validate MIC columns of a CSV file.
    Validate(ValidateArgs),

    /// Show how individual values are normalized.
    Normalize(NormalizeArgs),

    /// List the valid MIC levels.
    Levels(LevelsArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// CSV file with one MIC column per antimicrobial.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Columns to validate (default: every column that holds only valid MICs).
    #[arg(long = "column", value_name = "NAME")]
    pub columns: Vec<String>,

    /// Drop rows where every validated column is missing.
    #[arg(long = "na-rm")]
    pub na_rm: bool,

    /// Which comparators to keep.
    #[arg(long = "keep-operators", value_enum, default_value = "all")]
    pub keep_operators: KeepOperatorsArg,

    /// Write the cleaned table to this CSV file.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Raw values, e.g. "<= 0,5" or ">=32 R".
    #[arg(value_name = "VALUE", required = true)]
    pub values: Vec<String>,
}

#[derive(Parser)]
pub struct LevelsArgs {
    /// Only list levels with this comparator.
    #[arg(long = "comparator", value_enum)]
    pub comparator: Option<ComparatorArg>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum KeepOperatorsArg {
    All,
    None,
    Edges,
}

impl From<KeepOperatorsArg> for KeepOperators {
    fn from(value: KeepOperatorsArg) -> Self {
        match value {
            KeepOperatorsArg::All => KeepOperators::All,
            KeepOperatorsArg::None => KeepOperators::None,
            KeepOperatorsArg::Edges => KeepOperators::Edges,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ComparatorArg {
    #[value(name = "lt")]
    Less,
    #[value(name = "le")]
    LessOrEqual,
    #[value(name = "eq")]
    Equal,
    #[value(name = "ge")]
    GreaterOrEqual,
    #[value(name = "gt")]
    Greater,
}

impl From<ComparatorArg> for Comparator {
    fn from(value: ComparatorArg) -> Self {
        match value {
            ComparatorArg::Less => Comparator::Less,
            ComparatorArg::LessOrEqual => Comparator::LessOrEqual,
            ComparatorArg::Equal => Comparator::Equal,
            ComparatorArg::GreaterOrEqual => Comparator::GreaterOrEqual,
            ComparatorArg::Greater => Comparator::Greater,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormatArg {
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
