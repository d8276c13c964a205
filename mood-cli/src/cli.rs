//! Command-line arguments.
//!
//! Flags that take a value accept it optionally, so a flag given without
//! its value produces a warning and a default instead of aborting the run.

use std::path::PathBuf;

use clap::Parser;

/// Drive an emotional agent with symbolic stimuli.
#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(name = "mood", author, version, about, long_about = None)]
pub struct Cli {
    /// Read stimuli from stdin, one per line, until a blank line.
    #[arg(long)]
    pub interactive: bool,

    /// Print the summary report after processing.
    #[arg(long)]
    pub summary: bool,

    /// Number of recent experiences in the summary (default 5).
    #[arg(long, num_args = 0..=1, value_name = "N", allow_negative_numbers = true)]
    pub history: Option<Option<String>>,

    /// Export the experience log as JSON.
    #[arg(long, num_args = 0..=1, value_name = "PATH")]
    pub log: Option<Option<PathBuf>>,

    /// Seed for reproducible runs.
    #[arg(long, num_args = 0..=1, value_name = "N", allow_negative_numbers = true)]
    pub seed: Option<Option<String>>,

    /// JSON file of extra lexicon entries.
    #[arg(long, num_args = 0..=1, value_name = "PATH")]
    pub lexicon: Option<Option<PathBuf>>,

    /// Write an HTML report of every experience.
    #[arg(long, num_args = 0..=1, value_name = "PATH")]
    pub visualize: Option<Option<PathBuf>>,

    /// TOML configuration file.
    #[arg(long, num_args = 0..=1, value_name = "PATH", env = "MOOD_CONFIG")]
    pub config: Option<Option<PathBuf>>,

    /// Stimuli to process in order (ignored with --interactive).
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<String>,
}
