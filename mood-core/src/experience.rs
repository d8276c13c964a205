//! Experience log — append-only record of every interaction.

use serde::{Deserialize, Serialize};

use crate::types::{Action, EmotionDeltaMap};

/// One interaction, as remembered by the agent.
///
/// Records are only ever created by [`ExperienceLog::record`] and are never
/// modified once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    /// Position in the log, starting at 0.
    #[serde(rename = "timestamp")]
    pub index: usize,
    /// The raw stimulus as given by the caller.
    pub input: String,
    /// Deltas produced by the stimulus (not the action feedback).
    pub emotion_changes: EmotionDeltaMap,
    /// The action the agent chose.
    pub action: Action,
    /// The sampled outcome of that action.
    pub outcome: String,
    /// Generated one-sentence summary of the interaction.
    pub reflection: String,
}

/// Ordered, append-only sequence of [`Experience`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperienceLog {
    entries: Vec<Experience>,
}

impl ExperienceLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, assigning it the next index.
    pub fn record(
        &mut self,
        input: impl Into<String>,
        emotion_changes: EmotionDeltaMap,
        action: Action,
        outcome: impl Into<String>,
        reflection: impl Into<String>,
    ) -> &Experience {
        let index = self.entries.len();
        self.entries.push(Experience {
            index,
            input: input.into(),
            emotion_changes,
            action,
            outcome: outcome.into(),
            reflection: reflection.into(),
        });
        &self.entries[index]
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All records, oldest first.
    #[must_use]
    pub fn as_slice(&self) -> &[Experience] {
        &self.entries
    }

    /// Iterate over records, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Experience> {
        self.entries.iter()
    }

    /// The last `n` records (fewer if the log is shorter), oldest first.
    #[must_use]
    pub fn recent(&self, n: usize) -> &[Experience] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    /// Whether `action` appears anywhere in the log.
    #[must_use]
    pub fn has_tried(&self, action: Action) -> bool {
        self.entries.iter().any(|e| e.action == action)
    }

    /// Actions never taken so far, in declaration order.
    #[must_use]
    pub fn untried(&self) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|&a| !self.has_tried(a))
            .collect()
    }
}

impl<'a> IntoIterator for &'a ExperienceLog {
    type Item = &'a Experience;
    type IntoIter = std::slice::Iter<'a, Experience>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
