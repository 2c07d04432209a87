// patex/src/cli.rs
//! This file defines the command-line interface (CLI) for the patex
//! application, including all available commands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "patex",
    version = env!("CARGO_PKG_VERSION"),
    about = "Extract regex-matched spans from a text and re-insert them after tagging",
    long_about = "Patex has two main modes. In extraction mode it deletes every match of a \
set of patterns from a text file and saves the removed spans, with their original positions, \
into a records file. In integration mode it reads the records file and an XML file derived \
from the reduced text, and re-inserts the spans at the right places regardless of where \
markup has been added.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for the 'patex' crates to DEBUG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `patex` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extracts pattern matches from a text and writes them to a records file.
    #[command(about = "Extract pattern matches from a text into a records file.")]
    Extract(ExtractCommand),

    /// Re-inserts recorded spans into a marked-up (XML) text.
    #[command(about = "Integrate recorded spans into a marked-up (XML) text.")]
    Integrate(IntegrateCommand),

    /// Lists the text of every record in a records file.
    #[command(about = "Enumerate the matched texts stored in a records file.")]
    Enumerate(EnumerateCommand),
}

/// Arguments for the `extract` command.
#[derive(Parser, Debug)]
pub struct ExtractCommand {
    /// A single inline pattern to extract.
    #[arg(long, short = 'p', value_name = "PATTERN", help = "Give a single pattern for extraction.")]
    pub pattern: Option<String>,

    /// A file with one pattern per line.
    #[arg(long = "pattern-file", short = 'f', value_name = "FILE", help = "A file to read line-delimited patterns from.")]
    pub pattern_file: Option<PathBuf>,

    /// Path to the input text (reads from stdin if not provided).
    #[arg(long = "input-file", short = 'i', value_name = "FILE", help = "Read input text from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write the reduced text to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write the reduced text to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// The file to write the extraction records into (JSON).
    #[arg(value_name = "RECORDS_FILE", help = "The JSON file to write the extracted records into.")]
    pub records_file: PathBuf,
}

/// Arguments for the `integrate` command.
#[derive(Parser, Debug)]
pub struct IntegrateCommand {
    /// Path to the marked-up text (reads from stdin if not provided).
    #[arg(long = "input-file", short = 'i', value_name = "FILE", help = "Read the marked-up (XML) text from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write the restored text to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write the restored text to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// The records file produced by a prior `extract` run.
    #[arg(value_name = "RECORDS_FILE", help = "The JSON records file produced by a prior extract run.")]
    pub records_file: PathBuf,
}

/// Arguments for the `enumerate` command.
#[derive(Parser, Debug)]
pub struct EnumerateCommand {
    /// The records file to enumerate.
    #[arg(value_name = "RECORDS_FILE", help = "The JSON records file to enumerate.")]
    pub records_file: PathBuf,
}
