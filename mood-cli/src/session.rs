//! One run of the agent: feed stimuli, print responses, then report and
//! export as requested.

use std::io::{BufRead, Write};

use anyhow::Result;
use mood_core::config::DecisionConfig;
use mood_core::{Agent, Lexicon, LexiconEntries, Response};
use tracing::{info, warn};

use crate::config::RunSettings;

/// Build the agent for `settings`.
///
/// An unreadable lexicon file is reported and the built-in lexicon is used.
#[must_use]
pub fn build_agent(settings: &RunSettings, decision: DecisionConfig) -> Agent {
    let overlay = match &settings.lexicon_path {
        Some(path) => Lexicon::load_entries(path).unwrap_or_else(|e| {
            warn!(
                path = %path.display(),
                error = %e,
                "failed to load lexicon; using built-in entries"
            );
            LexiconEntries::new()
        }),
        None => LexiconEntries::new(),
    };
    let agent = Agent::with_config(settings.seed, overlay, decision);
    info!(seed = agent.seed(), "agent ready");
    agent
}

/// Render one response the way the session prints it.
#[must_use]
pub fn format_response(input: &str, response: &Response) -> String {
    format!(
        "{input} → {} ({})\n  {}",
        response.action, response.outcome, response.reflection
    )
}

/// Drive `agent` through the whole session.
///
/// Stimuli come from `settings.inputs`, or from `stdin` line by line in
/// interactive mode until a blank line or end of input.
pub fn run(
    agent: &mut Agent,
    settings: &RunSettings,
    stdin: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    if settings.interactive {
        interactive(agent, stdin, out)?;
    } else {
        for input in &settings.inputs {
            let response = agent.respond(input);
            writeln!(out, "{}", format_response(input, &response))?;
        }
    }

    if settings.print_summary {
        write!(out, "{}", agent.summary_report(settings.history_limit))?;
    }

    if let Some(path) = &settings.log_path {
        match agent.export_log(path) {
            Ok(()) => info!(path = %path.display(), "exported experience log"),
            Err(e) => warn!(path = %path.display(), error = %e, "failed to export experience log"),
        }
    }

    if let Some(path) = &settings.visualize_path {
        match agent.export_html(path, &settings.html_title) {
            Ok(()) => info!(path = %path.display(), "wrote HTML report"),
            Err(e) => warn!(path = %path.display(), error = %e, "failed to write HTML report"),
        }
    }

    Ok(())
}

fn interactive(agent: &mut Agent, mut stdin: impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim_end_matches(['\r', '\n']);
        if input.trim().is_empty() {
            break;
        }
        let response = agent.respond(input);
        writeln!(out, "{}", format_response(input, &response))?;
    }
    writeln!(out)?;
    Ok(())
}
