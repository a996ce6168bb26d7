//! CLI argument definitions for the header automapper.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use dimap_model::{DEFAULT_MATCH_LIMIT, DEFAULT_SIMILARITY_THRESHOLD};

#[derive(Parser)]
#[command(
    name = "dimap",
    version,
    about = "Propose mappings between source dataset headers and target system headers",
    long_about = "Match the column headers of an incoming dataset against the headers a\n\
                  target system expects, using a configurable string-similarity algorithm.\n\
                  Targets are read from a JSON file; sources from a JSON file, a CSV header\n\
                  row, or a plain name-per-line file."
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
    /// Propose a mapping from source headers to target headers.
    Automap(AutomapArgs),

    /// List the available similarity algorithms.
    Algorithms,
}

#[derive(Parser)]
pub struct AutomapArgs {
    /// JSON file with the target headers: [{"id": "...", "alternatives": [...]}].
    #[arg(long = "targets", value_name = "FILE")]
    pub targets: PathBuf,

    /// Source headers: a .json list, a .csv (header row), or one name per line.
    #[arg(long = "sources", value_name = "FILE")]
    pub sources: PathBuf,

    /// Registry id of the similarity algorithm.
    #[arg(
        long = "algorithm",
        value_name = "ID",
        default_value = "levenshteinDistance"
    )]
    pub algorithm: String,

    /// Minimum similarity a source must reach, in [0, 1].
    #[arg(long = "threshold", value_name = "VALUE", default_value_t = DEFAULT_SIMILARITY_THRESHOLD)]
    pub threshold: f64,

    /// Maximum number of matches kept per target.
    #[arg(long = "limit", value_name = "N", default_value_t = DEFAULT_MATCH_LIMIT)]
    pub limit: usize,

    /// Also match against target alternative names.
    #[arg(long = "alternatives")]
    pub alternatives: bool,

    /// Print the proposal as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
