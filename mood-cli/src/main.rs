//! # mood
//!
//! Command-line driver for the MOOD emotional agent.
//!
//! ```text
//! mood --seed 42 --summary A ? hello
//! mood --interactive --log run.json --visualize run.html
//! ```
//!
//! Responses go to stdout; diagnostics go to stderr through `tracing`
//! (filter from `RUST_LOG`, else `general.log_level` in the config file).

#![deny(clippy::unwrap_used)]
#![warn(clippy::pedantic)]

mod cli;
mod config;
mod session;

use std::io;

use anyhow::Result;
use clap::Parser;
use mood_core::MoodConfig;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::{RunSettings, path_value};

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Config is read before logging is up; its warnings are emitted after.
    let mut warnings = Vec::new();
    let config_path = path_value(cli.config.take(), "config", &mut warnings);
    let (config, config_error) = match &config_path {
        Some(path) => match MoodConfig::from_file(path) {
            Ok(config) => (config, None),
            Err(e) => (MoodConfig::default(), Some(e)),
        },
        None => (MoodConfig::default(), None),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let (Some(path), Some(e)) = (&config_path, config_error) {
        warn!(path = %path.display(), error = %e, "failed to load config; using defaults");
    }

    let (settings, settings_warnings) = RunSettings::resolve(cli, &config.report);
    for warning in warnings.iter().chain(&settings_warnings) {
        warn!("{warning}");
    }

    let mut agent = session::build_agent(&settings, config.decision);
    let stdin = io::stdin();
    session::run(&mut agent, &settings, stdin.lock(), &mut io::stdout().lock())
}
