//! Reports and exports — the summary text, the JSON log export and the HTML
//! report.
//!
//! The JSON export is routed through [`serde_json::Value`], whose object
//! type keeps keys sorted, so output is stable regardless of field order.

use std::fmt::Write as _;
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::Result;
use crate::experience::{Experience, ExperienceLog};
use crate::state::EmotionalState;

/// Second line of the summary when there is nothing to list.
pub const NO_EXPERIENCES: &str = "No experiences recorded yet.";

/// Render the summary report.
///
/// ```text
/// Emotional state — Joy: 0.40, Trust: 0.20, ...
/// Recent experiences:
/// [#0] Input: A → Action: explore → Outcome: Found a hidden path
/// ```
#[must_use]
pub fn summary_report(state: &EmotionalState, log: &ExperienceLog, limit: usize) -> String {
    let emotions = state
        .sorted_descending()
        .into_iter()
        .map(|(emotion, value)| format!("{}: {value:.2}", emotion.label()))
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = format!("Emotional state — {emotions}\n");
    let recent = log.recent(limit);
    if recent.is_empty() {
        out.push_str(NO_EXPERIENCES);
        out.push('\n');
        return out;
    }

    out.push_str("Recent experiences:\n");
    for exp in recent {
        let _ = writeln!(
            out,
            "[#{}] Input: {} → Action: {} → Outcome: {}",
            exp.index, exp.input, exp.action, exp.outcome
        );
    }
    out
}

/// Write the summary report to `path` and return the text written.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn export_summary(
    state: &EmotionalState,
    log: &ExperienceLog,
    limit: usize,
    path: &Path,
) -> Result<String> {
    let report = summary_report(state, log, limit);
    std::fs::write(path, &report)?;
    info!(path = %path.display(), limit, "Exported summary");
    Ok(report)
}

/// Serialize the log as pretty-printed JSON with sorted keys.
///
/// # Errors
/// Returns `MoodError::Serialization` if serialization fails.
pub fn log_to_json(log: &ExperienceLog) -> Result<String> {
    let value = serde_json::to_value(log.as_slice())?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Parse a JSON log export back into records.
///
/// # Errors
/// Returns `MoodError::Serialization` on malformed input.
pub fn parse_log_json(json: &str) -> Result<Vec<Experience>> {
    Ok(serde_json::from_str(json)?)
}

/// Write the log to `path` as JSON.
///
/// # Errors
/// Returns an error if serialization or the write fails.
pub fn export_log(log: &ExperienceLog, path: &Path) -> Result<()> {
    let json = log_to_json(log)?;
    std::fs::write(path, json)?;
    info!(path = %path.display(), count = log.len(), "Exported experience log");
    Ok(())
}

/// Render the HTML report.
#[must_use]
pub fn render_html(log: &ExperienceLog, title: &str, generated_at: DateTime<Utc>) -> String {
    let title = escape_html(title);
    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <style>\n\
         body {{ font-family: sans-serif; margin: 2em; }}\n\
         table {{ border-collapse: collapse; }}\n\
         th, td {{ border: 1px solid #ccc; padding: 4px 8px; text-align: left; }}\n\
         </style>\n</head>\n<body>\n<h1>{title}</h1>\n\
         <p>Generated: {}</p>\n<p>Total experiences: {}</p>\n",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        log.len()
    );

    html.push_str(
        "<table>\n<tr><th>#</th><th>Input</th><th>Action</th><th>Outcome</th>\
         <th>Emotion changes</th></tr>\n",
    );
    for exp in log {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            exp.index,
            escape_html(&exp.input),
            exp.action,
            escape_html(&exp.outcome),
            format_changes(exp),
        );
    }
    html.push_str("</table>\n</body>\n</html>\n");
    html
}

/// Write the HTML report to `path`, stamped with the current time.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn export_html(log: &ExperienceLog, title: &str, path: &Path) -> Result<()> {
    std::fs::write(path, render_html(log, title, Utc::now()))?;
    info!(path = %path.display(), count = log.len(), "Exported HTML report");
    Ok(())
}

/// `name: value` pairs sorted by emotion name, two decimals.
fn format_changes(exp: &Experience) -> String {
    let mut pairs: Vec<_> = exp.emotion_changes.iter().collect();
    pairs.sort_by_key(|(emotion, _)| emotion.name());
    pairs
        .into_iter()
        .map(|(emotion, delta)| format!("{emotion}: {delta:.2}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Action, Emotion, EmotionDeltaMap, deltas};
    use chrono::TimeZone;

    fn sample_log() -> ExperienceLog {
        let mut log = ExperienceLog::new();
        log.record(
            "A",
            deltas([(Emotion::Trust, 0.1), (Emotion::Joy, 0.3)]),
            Action::Explore,
            "Found a hidden path",
            "r0",
        );
        log.record(
            "<b>",
            EmotionDeltaMap::new(),
            Action::RemainPassive,
            "Nothing happened",
            "r1",
        );
        log.record(
            "?",
            deltas([(Emotion::Curiosity, 0.4)]),
            Action::Inquire,
            "Received an answer",
            "r2",
        );
        log
    }

    #[test]
    fn empty_summary_has_header_and_placeholder() {
        let report = summary_report(&EmotionalState::new(), &ExperienceLog::new(), 5);
        assert_eq!(
            report,
            "Emotional state — Joy: 0.00, Curiosity: 0.00, Sadness: 0.00, Fear: 0.00, \
             Anger: 0.00, Trust: 0.00\nNo experiences recorded yet.\n"
        );
    }

    #[test]
    fn zero_limit_uses_placeholder() {
        let report = summary_report(&EmotionalState::new(), &sample_log(), 0);
        assert!(report.ends_with("No experiences recorded yet.\n"));
        assert!(!report.contains("Recent experiences:"));
    }

    #[test]
    fn summary_lists_most_recent_oldest_first() {
        let mut state = EmotionalState::new();
        state.set(Emotion::Curiosity, 0.456);
        state.set(Emotion::Fear, 0.1);
        let report = summary_report(&state, &sample_log(), 2);
        let lines: Vec<_> = report.lines().collect();
        assert!(lines[0].starts_with("Emotional state — Curiosity: 0.46, Fear: 0.10, Joy: 0.00"));
        assert_eq!(lines[1], "Recent experiences:");
        assert_eq!(
            lines[2],
            "[#1] Input: <b> → Action: remainPassive → Outcome: Nothing happened"
        );
        assert_eq!(
            lines[3],
            "[#2] Input: ? → Action: inquire → Outcome: Received an answer"
        );
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn json_keys_are_sorted() {
        let json = log_to_json(&sample_log()).expect("serialize");
        let action = json.find("\"action\"").expect("action key");
        let changes = json.find("\"emotionChanges\"").expect("changes key");
        let timestamp = json.find("\"timestamp\"").expect("timestamp key");
        assert!(action < changes && changes < timestamp);
        let joy = json.find("\"joy\"").expect("joy");
        let trust = json.find("\"trust\"").expect("trust");
        assert!(joy < trust);
    }

    #[test]
    fn json_round_trip() {
        let log = sample_log();
        let parsed = parse_log_json(&log_to_json(&log).expect("serialize")).expect("parse");
        assert_eq!(parsed, log.as_slice());
    }

    #[test]
    fn html_has_rows_and_escapes() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).single().expect("valid time");
        let html = render_html(&sample_log(), "Report & <Co>", at);
        assert!(html.contains("<title>Report &amp; &lt;Co&gt;</title>"));
        assert!(html.contains("Generated: 2024-05-01 12:30:00 UTC"));
        assert!(html.contains("Total experiences: 3"));
        assert!(html.contains("<td>&lt;b&gt;</td>"));
        assert!(html.contains("<td>joy: 0.30, trust: 0.10</td>"));
        assert_eq!(html.matches("<tr><td>").count(), 3);
    }
}
