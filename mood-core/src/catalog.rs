//! Action catalog — what can happen after each action, and how it feels.

use std::collections::BTreeMap;

use crate::types::{Action, Emotion, EmotionDeltaMap, deltas};

/// Feedback profile for one action.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionFeedback {
    /// Candidate outcomes; one is sampled uniformly. Never empty.
    pub likely_outcomes: Vec<String>,
    /// Deltas applied to the state once the action has been taken.
    pub emotional_impact: EmotionDeltaMap,
}

impl ActionFeedback {
    fn new(outcomes: &[&str], impact: EmotionDeltaMap) -> Self {
        Self {
            likely_outcomes: outcomes.iter().map(|s| (*s).to_string()).collect(),
            emotional_impact: impact,
        }
    }
}

/// Immutable action → feedback table.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionCatalog {
    entries: BTreeMap<Action, ActionFeedback>,
}

impl Default for ActionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl ActionCatalog {
    /// The standard catalog, with one entry per [`Action`].
    #[must_use]
    pub fn standard() -> Self {
        use Emotion::{Anger, Curiosity, Fear, Joy, Sadness, Trust};

        let entries = [
            (
                Action::SeekComfort,
                ActionFeedback::new(
                    &["Found reassurance", "Felt a little safer", "Comfort was out of reach"],
                    deltas([(Fear, -0.2), (Trust, 0.1), (Sadness, -0.05)]),
                ),
            ),
            (
                Action::Explore,
                ActionFeedback::new(
                    &["Discovered something new", "Found a hidden path", "Nothing of interest"],
                    deltas([(Curiosity, -0.1), (Joy, 0.1)]),
                ),
            ),
            (
                Action::RemainPassive,
                ActionFeedback::new(
                    &["Nothing happened", "Time passed quietly"],
                    deltas([(Joy, -0.05), (Curiosity, 0.05)]),
                ),
            ),
            (
                Action::Inquire,
                ActionFeedback::new(
                    &[
                        "Received an answer",
                        "The question went unanswered",
                        "Learned something useful",
                    ],
                    deltas([(Curiosity, -0.1), (Trust, 0.1)]),
                ),
            ),
            (
                Action::ExpressAnger,
                ActionFeedback::new(
                    &["Negative reaction", "Released tension", "Others backed away"],
                    deltas([(Anger, -0.3), (Fear, 0.05), (Sadness, 0.05)]),
                ),
            ),
            (
                Action::SeekInsight,
                ActionFeedback::new(
                    &["Gained perspective", "Understood the pattern", "Remained uncertain"],
                    deltas([(Sadness, -0.2), (Curiosity, 0.1), (Trust, 0.05)]),
                ),
            ),
        ]
        .into_iter()
        .collect();

        Self { entries }
    }

    /// A catalog with only the given entries. Used to exercise lookup misses.
    #[cfg(test)]
    pub(crate) fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Action, ActionFeedback)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Feedback for `action`.
    #[must_use]
    pub fn get(&self, action: Action) -> Option<&ActionFeedback> {
        self.entries.get(&action)
    }

    /// Every outcome string the catalog can produce, in action order.
    #[cfg(test)]
    pub(crate) fn outcomes(&self) -> impl Iterator<Item = &str> {
        self.entries
            .values()
            .flat_map(|f| f.likely_outcomes.iter().map(String::as_str))
    }
}
