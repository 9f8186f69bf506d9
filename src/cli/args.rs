//! Command line argument parsing for the speller CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::spelling::corrector::CorrectorConfig;

/// Speller - a statistical spelling corrector
#[derive(Parser, Debug, Clone)]
#[command(name = "speller")]
#[command(about = "Corrects misspelled words using corpus word frequencies")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpellerArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpellerArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Correct one or more words
    Correct(CorrectArgs),

    /// Score the corrector against labelled test sets
    Evaluate(EvaluateArgs),

    /// Show corpus statistics
    Stats(StatsArgs),

    /// Count corpus words and write a frequency file
    Count(CountArgs),
}

/// Options shared by commands that build a corrector.
#[derive(Parser, Debug, Clone)]
pub struct CorpusArgs {
    /// Corpus text file, or a frequency file when it ends in `.freq`
    #[arg(short, long, value_name = "CORPUS", env = "SPELLER_CORPUS")]
    pub corpus: PathBuf,

    /// Maximum edit distance to search (1 or 2)
    #[arg(long, default_value = "2")]
    pub max_distance: usize,

    /// Correct words on a single thread
    #[arg(long)]
    pub sequential: bool,
}

impl CorpusArgs {
    /// Corrector configuration selected by these options.
    pub fn corrector_config(&self) -> CorrectorConfig {
        CorrectorConfig {
            max_distance: self.max_distance,
            parallel: !self.sequential,
        }
    }
}

/// Arguments for correcting words
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Words to correct
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Show the candidate stage and corpus count of each correction
    #[arg(long)]
    pub explain: bool,
}

/// Arguments for evaluating against test sets
#[derive(Parser, Debug, Clone)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Test-set files with `<correct>: <wrong> <wrong> ...` records
    #[arg(value_name = "TEST_SET", required = true)]
    pub test_sets: Vec<PathBuf>,

    /// List every failed correction
    #[arg(long)]
    pub show_failures: bool,
}

/// Arguments for corpus statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Corpus text file, or a frequency file when it ends in `.freq`
    #[arg(short, long, value_name = "CORPUS", env = "SPELLER_CORPUS")]
    pub corpus: PathBuf,

    /// Number of most frequent words to list
    #[arg(short, long, default_value = "10")]
    pub top: usize,
}

/// Arguments for writing a frequency file
#[derive(Parser, Debug, Clone)]
pub struct CountArgs {
    /// Corpus text file
    #[arg(short, long, value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Destination frequency file
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
