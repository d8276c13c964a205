//! The agent — owns state, history and randomness, and runs the response
//! pipeline for each stimulus.
//!
//! Per call to [`Agent::respond`]:
//!
//! ```text
//! stimulus ─► lexicon ─► state += delta ─► decide ─► catalog feedback
//!                                                        │
//!          log.append ◄── reflection ◄── state += impact ◄┘
//! ```

use std::path::Path;

use tracing::{debug, warn};

use crate::catalog::ActionCatalog;
use crate::config::DecisionConfig;
use crate::decision::{self, Decision};
use crate::error::Result;
use crate::experience::ExperienceLog;
use crate::lexicon::{Lexicon, LexiconEntries};
use crate::reflection;
use crate::report;
use crate::rng::RandomSource;
use crate::state::EmotionalState;
use crate::types::{Action, Emotion, EmotionDeltaMap};

/// Outcome used when the catalog has no entry for the chosen action.
pub const UNPREDICTABLE_OUTCOME: &str = "Unpredictable outcome";

/// What the agent did in response to one stimulus.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// The chosen action.
    pub action: Action,
    /// The sampled outcome.
    pub outcome: String,
    /// The generated reflection.
    pub reflection: String,
}

/// A single emotional agent.
///
/// Not shareable across threads for mutation: every operation that draws
/// randomness or records history takes `&mut self`.
#[derive(Debug, Clone)]
pub struct Agent {
    state: EmotionalState,
    log: ExperienceLog,
    catalog: ActionCatalog,
    config: DecisionConfig,
    rng: RandomSource,
    lexicon: Lexicon,
}

impl Agent {
    /// Create an agent with the default decision parameters.
    ///
    /// `seed` makes every draw reproducible; `None` seeds from system
    /// entropy. `overlay` is laid over the built-in lexicon.
    #[must_use]
    pub fn new(seed: Option<u64>, overlay: LexiconEntries) -> Self {
        Self::with_config(seed, overlay, DecisionConfig::default())
    }

    /// Create an agent with explicit decision parameters.
    #[must_use]
    pub fn with_config(seed: Option<u64>, overlay: LexiconEntries, config: DecisionConfig) -> Self {
        let rng = RandomSource::new(seed);
        debug!(seed = rng.seed(), "Agent created");
        Self {
            state: EmotionalState::new(),
            log: ExperienceLog::new(),
            catalog: ActionCatalog::standard(),
            config,
            rng,
            lexicon: Lexicon::with_overlay(overlay),
        }
    }

    /// Resolve `input` through the lexicon and apply it to the state.
    ///
    /// Returns the applied deltas. Does not decide or record anything.
    pub fn stimulate(&mut self, input: &str) -> EmotionDeltaMap {
        let changes = self.lexicon.resolve(input);
        self.state.apply(&changes);
        changes
    }

    /// Run the decision cascade against the current state and history.
    pub fn decide(&mut self) -> Decision {
        decision::decide(&self.state, &self.log, &self.config, &mut self.rng)
    }

    /// Process one stimulus end to end and record the experience.
    pub fn respond(&mut self, input: &str) -> Response {
        let changes = self.stimulate(input);
        let decision = self.decide();

        let (action, outcome, reflection) = match self.catalog.get(decision.action) {
            Some(feedback) => {
                let outcome = self
                    .rng
                    .choose(&feedback.likely_outcomes)
                    .cloned()
                    .unwrap_or_else(|| UNPREDICTABLE_OUTCOME.to_string());
                self.state.apply(&feedback.emotional_impact);
                let reflection =
                    reflection::compose(input, self.state.dominant(), decision.action, &outcome);
                (decision.action, outcome, reflection)
            }
            None => {
                warn!(
                    action = %decision.action,
                    "Action missing from catalog; falling back to remainPassive"
                );
                (
                    Action::RemainPassive,
                    UNPREDICTABLE_OUTCOME.to_string(),
                    reflection::PLACEHOLDER.to_string(),
                )
            }
        };

        let experience = self.log.record(input, changes, action, &outcome, &reflection);
        debug!(
            index = experience.index,
            input = %input,
            action = %action,
            outcome = %outcome,
            "Experience recorded"
        );

        Response {
            action,
            outcome,
            reflection,
        }
    }

    /// Current emotional state.
    #[must_use]
    pub fn state(&self) -> &EmotionalState {
        &self.state
    }

    /// Current intensity of one emotion.
    #[must_use]
    pub fn emotion(&self, emotion: Emotion) -> f64 {
        self.state.get(emotion)
    }

    /// Owned copy of the current state.
    #[must_use]
    pub fn snapshot_state(&self) -> EmotionalState {
        self.state
    }

    /// The experience log.
    #[must_use]
    pub fn experiences(&self) -> &ExperienceLog {
        &self.log
    }

    /// The effective lexicon.
    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// The action catalog.
    #[must_use]
    pub fn catalog(&self) -> &ActionCatalog {
        &self.catalog
    }

    /// The decision parameters.
    #[must_use]
    pub fn decision_config(&self) -> &DecisionConfig {
        &self.config
    }

    /// The effective random seed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Summary of the state and the last `limit` experiences.
    #[must_use]
    pub fn summary_report(&self, limit: usize) -> String {
        report::summary_report(&self.state, &self.log, limit)
    }

    /// Write the summary report to `path` and return it.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn export_summary(&self, path: &Path, limit: usize) -> Result<String> {
        report::export_summary(&self.state, &self.log, limit, path)
    }

    /// Write the experience log to `path` as pretty, key-sorted JSON.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn export_log(&self, path: &Path) -> Result<()> {
        report::export_log(&self.log, path)
    }

    /// Write an HTML report of the experience log to `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn export_html(&self, path: &Path, title: &str) -> Result<()> {
        report::export_html(&self.log, title, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ActionFeedback;
    use crate::types::deltas;

    #[test]
    fn respond_records_stimulus_deltas_not_feedback() {
        let mut agent = Agent::new(Some(42), LexiconEntries::new());
        let response = agent.respond("A");
        let log = agent.experiences();
        assert_eq!(log.len(), 1);
        let exp = &log.as_slice()[0];
        assert_eq!(exp.index, 0);
        assert_eq!(exp.input, "A");
        assert_eq!(Some(&exp.emotion_changes), agent.lexicon().get("A"));
        assert_eq!(exp.action, response.action);
        assert_eq!(exp.outcome, response.outcome);
        assert_eq!(exp.reflection, response.reflection);
    }

    #[test]
    fn outcome_comes_from_catalog() {
        let mut agent = Agent::new(Some(7), LexiconEntries::new());
        for input in ["A", "B", "C", "?", "!", "@", "#", "", "zzz"] {
            let response = agent.respond(input);
            let feedback = agent.catalog().get(response.action).expect("catalog entry");
            assert!(feedback.likely_outcomes.contains(&response.outcome));
        }
    }

    #[test]
    fn feedback_impact_applied_after_decision() {
        let mut overlay = LexiconEntries::new();
        overlay.insert("F".to_string(), deltas([(Emotion::Fear, 0.9)]));
        let mut agent = Agent::new(Some(1), overlay);
        let response = agent.respond("F");
        assert_eq!(response.action, Action::SeekComfort);
        // 0.9 stimulus, then -0.2 from seekComfort.
        assert!((agent.emotion(Emotion::Fear) - 0.7).abs() < 1e-9);
        assert!((agent.emotion(Emotion::Trust) - 0.1).abs() < 1e-9);
        assert!(response.reflection.contains("fear (0.70)"));
    }

    #[test]
    fn missing_catalog_entry_degrades_to_passive() {
        let mut agent = Agent::new(Some(3), LexiconEntries::new());
        agent.catalog = ActionCatalog::from_entries([(
            Action::Inquire,
            ActionFeedback {
                likely_outcomes: vec!["Received an answer".to_string()],
                emotional_impact: EmotionDeltaMap::new(),
            },
        )]);
        let response = agent.respond("C");
        assert_eq!(response.action, Action::RemainPassive);
        assert_eq!(response.outcome, UNPREDICTABLE_OUTCOME);
        assert_eq!(response.reflection, reflection::PLACEHOLDER);
        assert_eq!(agent.experiences().len(), 1);
        assert_eq!(agent.experiences().as_slice()[0].action, Action::RemainPassive);
    }

    #[test]
    fn stimulate_does_not_record() {
        let mut agent = Agent::new(Some(5), LexiconEntries::new());
        let changes = agent.stimulate("!");
        assert_eq!(Some(&changes), agent.lexicon().get("!"));
        assert!(agent.experiences().is_empty());
        assert!((agent.emotion(Emotion::Fear) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn zero_seed_substituted() {
        let agent = Agent::new(Some(0), LexiconEntries::new());
        assert_eq!(agent.seed(), crate::rng::ZERO_SEED_SUBSTITUTE);
    }
}
