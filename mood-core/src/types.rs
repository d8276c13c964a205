//! Core type definitions for the MOOD agent.
//!
//! [`Emotion`] and [`Action`] are closed sets. Their declaration order is the
//! canonical total order used everywhere a tie must be broken.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::MoodError;

// ---------------------------------------------------------------------------
// Emotion
// ---------------------------------------------------------------------------

/// One of the six emotional dimensions an agent tracks.
///
/// Each dimension holds an intensity in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    /// Contentment, delight.
    Joy,
    /// Drive to find out more.
    Curiosity,
    /// Loss, disappointment.
    Sadness,
    /// Sense of threat.
    Fear,
    /// Frustration, hostility.
    Anger,
    /// Confidence in others.
    Trust,
}

impl Emotion {
    /// All emotions in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Joy,
        Self::Curiosity,
        Self::Sadness,
        Self::Fear,
        Self::Anger,
        Self::Trust,
    ];

    /// Position of this emotion in [`Emotion::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name, as used in lexicon files and exports.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Joy => "joy",
            Self::Curiosity => "curiosity",
            Self::Sadness => "sadness",
            Self::Fear => "fear",
            Self::Anger => "anger",
            Self::Trust => "trust",
        }
    }

    /// Capitalized name, as used in the summary report.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Joy => "Joy",
            Self::Curiosity => "Curiosity",
            Self::Sadness => "Sadness",
            Self::Fear => "Fear",
            Self::Anger => "Anger",
            Self::Trust => "Trust",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Emotion {
    type Err = MoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MoodError::UnknownEmotion(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// A discrete behavior the agent can choose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    /// Look for reassurance.
    SeekComfort,
    /// Go and look around.
    Explore,
    /// Do nothing.
    RemainPassive,
    /// Ask a question.
    Inquire,
    /// Lash out.
    ExpressAnger,
    /// Step back and try to understand.
    SeekInsight,
}

impl Action {
    /// All actions in declaration order.
    pub const ALL: [Self; 6] = [
        Self::SeekComfort,
        Self::Explore,
        Self::RemainPassive,
        Self::Inquire,
        Self::ExpressAnger,
        Self::SeekInsight,
    ];

    /// Position of this action in [`Action::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// camelCase name, as used in reports and exports.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::SeekComfort => "seekComfort",
            Self::Explore => "explore",
            Self::RemainPassive => "remainPassive",
            Self::Inquire => "inquire",
            Self::ExpressAnger => "expressAnger",
            Self::SeekInsight => "seekInsight",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Deltas
// ---------------------------------------------------------------------------

/// Partial mapping from emotion to a signed adjustment.
///
/// Emotions absent from the map are left untouched when it is applied.
pub type EmotionDeltaMap = BTreeMap<Emotion, f64>;

/// Build an [`EmotionDeltaMap`] from `(emotion, delta)` pairs.
#[must_use]
pub fn deltas<I>(pairs: I) -> EmotionDeltaMap
where
    I: IntoIterator<Item = (Emotion, f64)>,
{
    pairs.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_order_matches_all() {
        for (i, e) in Emotion::ALL.iter().enumerate() {
            assert_eq!(e.index(), i);
        }
        assert!(Action::SeekComfort < Action::SeekInsight);
    }

    #[test]
    fn emotion_parses_case_insensitively() {
        assert_eq!("Fear".parse::<Emotion>().expect("valid"), Emotion::Fear);
        assert_eq!(" trust ".parse::<Emotion>().expect("valid"), Emotion::Trust);
        assert!("boredom".parse::<Emotion>().is_err());
    }

    #[test]
    fn serde_names_match_display() {
        let json = serde_json::to_string(&Action::ExpressAnger).expect("serialize");
        assert_eq!(json, "\"expressAnger\"");
        let json = serde_json::to_string(&Emotion::Curiosity).expect("serialize");
        assert_eq!(json, "\"curiosity\"");
        assert_eq!(Action::SeekInsight.to_string(), "seekInsight");
    }

    #[test]
    fn delta_map_keys_serialize_as_names() {
        let map = deltas([(Emotion::Fear, 0.25), (Emotion::Joy, -0.5)]);
        let json = serde_json::to_string(&map).expect("serialize");
        assert_eq!(json, r#"{"joy":-0.5,"fear":0.25}"#);
        let back: EmotionDeltaMap = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, map);
    }
}
