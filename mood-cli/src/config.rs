//! Run settings — the command line resolved against `mood.toml`.
//!
//! Bad or missing flag values never abort a run: each one becomes a
//! [`SettingsWarning`] and the documented default is used instead.

use std::fmt;
use std::path::PathBuf;

use mood_core::config::ReportConfig;

use crate::cli::Cli;

/// Fully resolved options for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    /// Read stimuli from stdin.
    pub interactive: bool,
    /// Stimuli from the command line.
    pub inputs: Vec<String>,
    /// Whether to print the summary when done.
    pub print_summary: bool,
    /// Recent experiences listed in the summary.
    pub history_limit: usize,
    /// Explicit seed, if a valid one was given.
    pub seed: Option<u64>,
    /// Where to export the JSON log.
    pub log_path: Option<PathBuf>,
    /// Lexicon overlay file.
    pub lexicon_path: Option<PathBuf>,
    /// Where to write the HTML report.
    pub visualize_path: Option<PathBuf>,
    /// HTML report title.
    pub html_title: String,
}

/// A recoverable problem with the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsWarning {
    /// A flag that needs a value was given without one.
    MissingValue(&'static str),
    /// `--history` was not an integer.
    InvalidHistory(String),
    /// `--seed` was not an unsigned integer.
    InvalidSeed(String),
}

impl fmt::Display for SettingsWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValue(flag) => write!(f, "--{flag} requires a value; ignoring it"),
            Self::InvalidHistory(v) => {
                write!(f, "invalid --history value {v:?}; using the default limit")
            }
            Self::InvalidSeed(v) => {
                write!(f, "invalid --seed value {v:?}; using a random seed")
            }
        }
    }
}

impl RunSettings {
    /// Resolve `cli` against the report defaults from the config file.
    ///
    /// Returns the settings together with any warnings to surface.
    #[must_use]
    pub fn resolve(cli: Cli, report: &ReportConfig) -> (Self, Vec<SettingsWarning>) {
        let mut warnings = Vec::new();

        let mut history_limit = report.history_limit;
        let mut history_requests_summary = false;
        match cli.history {
            Some(Some(raw)) => match raw.trim().parse::<i64>() {
                Ok(n) => {
                    history_limit = usize::try_from(n).unwrap_or(0);
                    history_requests_summary = n > 0;
                }
                Err(_) => warnings.push(SettingsWarning::InvalidHistory(raw)),
            },
            Some(None) => warnings.push(SettingsWarning::MissingValue("history")),
            None => {}
        }

        let seed = match cli.seed {
            Some(Some(raw)) => raw.trim().parse::<u64>().map_or_else(
                |_| {
                    warnings.push(SettingsWarning::InvalidSeed(raw.clone()));
                    None
                },
                Some,
            ),
            Some(None) => {
                warnings.push(SettingsWarning::MissingValue("seed"));
                None
            }
            None => None,
        };

        let log_path = path_value(cli.log, "log", &mut warnings);
        let lexicon_path = path_value(cli.lexicon, "lexicon", &mut warnings);
        let visualize_path = path_value(cli.visualize, "visualize", &mut warnings);

        let inputs = if cli.interactive { Vec::new() } else { cli.inputs };

        let settings = Self {
            interactive: cli.interactive,
            inputs,
            print_summary: cli.summary || history_requests_summary,
            history_limit,
            seed,
            log_path,
            lexicon_path,
            visualize_path,
            html_title: report.html_title.clone(),
        };
        (settings, warnings)
    }
}

/// Unwrap an optional-valued path flag, warning when the value is missing.
pub fn path_value(
    flag: Option<Option<PathBuf>>,
    name: &'static str,
    warnings: &mut Vec<SettingsWarning>,
) -> Option<PathBuf> {
    match flag {
        Some(Some(path)) => Some(path),
        Some(None) => {
            warnings.push(SettingsWarning::MissingValue(name));
            None
        }
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn resolve(args: &[&str]) -> (RunSettings, Vec<SettingsWarning>) {
        let cli = Cli::try_parse_from(std::iter::once("mood").chain(args.iter().copied()))
            .expect("arguments parse");
        RunSettings::resolve(cli, &ReportConfig::default())
    }

    #[test]
    fn defaults() {
        let (settings, warnings) = resolve(&["A"]);
        assert!(warnings.is_empty());
        assert_eq!(settings.history_limit, 5);
        assert!(!settings.print_summary);
        assert_eq!(settings.seed, None);
        assert_eq!(settings.inputs, vec!["A"]);
        assert_eq!(settings.html_title, "Agent Experience Report");
    }

    #[test]
    fn positive_history_implies_summary() {
        let (settings, _) = resolve(&["--history", "3", "A"]);
        assert_eq!(settings.history_limit, 3);
        assert!(settings.print_summary);

        let (settings, _) = resolve(&["--history", "0", "A"]);
        assert_eq!(settings.history_limit, 0);
        assert!(!settings.print_summary);

        let (settings, _) = resolve(&["--history", "-4"]);
        assert_eq!(settings.history_limit, 0);
        assert!(!settings.print_summary);
    }

    #[test]
    fn invalid_history_warns_and_defaults() {
        let (settings, warnings) = resolve(&["--summary", "--history", "lots"]);
        assert_eq!(settings.history_limit, 5);
        assert!(settings.print_summary);
        assert_eq!(warnings, vec![SettingsWarning::InvalidHistory("lots".to_string())]);
    }

    #[test]
    fn invalid_seed_warns_and_is_ignored() {
        let (settings, warnings) = resolve(&["--seed", "-1", "A"]);
        assert_eq!(settings.seed, None);
        assert_eq!(warnings, vec![SettingsWarning::InvalidSeed("-1".to_string())]);

        let (settings, warnings) = resolve(&["--seed", "18446744073709551615"]);
        assert_eq!(settings.seed, Some(u64::MAX));
        assert!(warnings.is_empty());
    }

    #[test]
    fn missing_values_warn() {
        let (settings, warnings) = resolve(&["--log", "--seed"]);
        assert_eq!(settings.log_path, None);
        assert_eq!(
            warnings,
            vec![
                SettingsWarning::MissingValue("seed"),
                SettingsWarning::MissingValue("log"),
            ]
        );
    }

    #[test]
    fn interactive_ignores_positionals() {
        let (settings, _) = resolve(&["--interactive", "A", "B"]);
        assert!(settings.interactive);
        assert!(settings.inputs.is_empty());
    }
}
