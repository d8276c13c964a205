//! Lexicon — maps stimulus keys to emotion deltas.
//!
//! A built-in table covers the single-character keys `A`, `B`, `C`, `?`,
//! `!`, `@` and `#`. Callers can overlay their own entries; an overlaid key
//! replaces the built-in entry wholesale.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{MoodError, Result};
use crate::types::{Emotion, EmotionDeltaMap, deltas};

/// Raw lexicon entries, as read from a lexicon file.
pub type LexiconEntries = HashMap<String, EmotionDeltaMap>;

/// Immutable stimulus → delta table.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexicon {
    entries: LexiconEntries,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Lexicon {
    /// The built-in table.
    #[must_use]
    pub fn builtin() -> Self {
        use Emotion::{Anger, Curiosity, Fear, Joy, Sadness, Trust};

        let entries = [
            ("A", deltas([(Joy, 0.3), (Trust, 0.1)])),
            ("B", deltas([(Sadness, 0.3), (Joy, -0.1)])),
            ("C", deltas([(Curiosity, 0.3)])),
            ("?", deltas([(Curiosity, 0.4), (Fear, 0.1)])),
            ("!", deltas([(Fear, 0.3), (Anger, 0.2)])),
            ("@", deltas([(Trust, 0.3), (Joy, 0.1)])),
            ("#", deltas([(Anger, 0.4), (Trust, -0.1)])),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        Self { entries }
    }

    /// The built-in table with `overlay` applied on top.
    #[must_use]
    pub fn with_overlay(overlay: LexiconEntries) -> Self {
        let mut lexicon = Self::builtin();
        for (key, changes) in overlay {
            if lexicon.entries.insert(key.clone(), changes).is_some() {
                debug!(key = %key, "Lexicon entry overrides built-in");
            }
        }
        lexicon
    }

    /// Parse lexicon entries from a JSON object of `key -> {emotion: delta}`.
    ///
    /// # Errors
    /// Returns [`MoodError::Serialization`] on malformed JSON or unknown
    /// emotion names, and [`MoodError::Lexicon`] for blank keys.
    pub fn parse_entries(json: &str) -> Result<LexiconEntries> {
        let entries: LexiconEntries = serde_json::from_str(json)?;
        if let Some(key) = entries.keys().find(|k| k.trim().is_empty()) {
            return Err(MoodError::Lexicon {
                key: key.clone(),
                reason: "key is blank and can never match a stimulus".to_string(),
            });
        }
        Ok(entries)
    }

    /// Read lexicon entries from a JSON file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_entries(path: &Path) -> Result<LexiconEntries> {
        let content = std::fs::read_to_string(path)?;
        let entries = Self::parse_entries(&content)?;
        info!(path = %path.display(), count = entries.len(), "Loaded lexicon overlay");
        Ok(entries)
    }

    /// Delta map for `stimulus`.
    ///
    /// The trimmed stimulus is first matched exactly; failing that, its
    /// first character is uppercased and looked up. Unknown or empty
    /// stimuli resolve to an empty map.
    #[must_use]
    pub fn resolve(&self, stimulus: &str) -> EmotionDeltaMap {
        let trimmed = stimulus.trim();
        if let Some(changes) = self.entries.get(trimmed) {
            return changes.clone();
        }
        let Some(first) = trimmed.chars().next() else {
            return EmotionDeltaMap::new();
        };
        let key: String = first.to_uppercase().collect();
        self.entries.get(&key).cloned().unwrap_or_default()
    }

    /// Entry for an exact key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&EmotionDeltaMap> {
        self.entries.get(key)
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
