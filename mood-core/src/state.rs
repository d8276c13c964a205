//! Emotional state — one clamped intensity per [`Emotion`].

use std::cmp::Reverse;
use std::collections::BTreeMap;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::{Emotion, EmotionDeltaMap};

/// Current intensity of every emotion, each kept in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EmotionalState {
    values: [f64; 6],
}

impl EmotionalState {
    /// Neutral state: every emotion at 0.0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current intensity of `emotion`.
    #[must_use]
    pub fn get(&self, emotion: Emotion) -> f64 {
        self.values[emotion.index()]
    }

    /// Overwrite one intensity, clamped to `[0, 1]`.
    pub fn set(&mut self, emotion: Emotion, value: f64) {
        if value.is_nan() {
            return;
        }
        self.values[emotion.index()] = value.clamp(0.0, 1.0);
    }

    /// Add every delta to its emotion, clamping the result.
    ///
    /// NaN deltas are ignored.
    pub fn apply(&mut self, deltas: &EmotionDeltaMap) {
        for (&emotion, &delta) in deltas {
            self.set(emotion, self.get(emotion) + delta);
        }
    }

    /// `(emotion, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, f64)> + '_ {
        Emotion::ALL.into_iter().map(move |e| (e, self.get(e)))
    }

    /// The emotion with the highest value; the earliest declared wins a tie.
    #[must_use]
    pub fn dominant(&self) -> Option<(Emotion, f64)> {
        self.iter().fold(None, |best, (e, v)| match best {
            Some((_, bv)) if bv >= v => best,
            _ => Some((e, v)),
        })
    }

    /// All emotions sorted by descending value, ties in declaration order.
    #[must_use]
    pub fn sorted_descending(&self) -> Vec<(Emotion, f64)> {
        let mut pairs: Vec<_> = self.iter().collect();
        pairs.sort_by_key(|&(_, v)| Reverse(OrderedFloat(v)));
        pairs
    }

    /// Whether every emotion is strictly below `floor`.
    #[must_use]
    pub fn all_below(&self, floor: f64) -> bool {
        self.values.iter().all(|&v| v < floor)
    }

    /// Owned name-keyed copy of the state.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<Emotion, f64> {
        self.iter().collect()
    }
}

// Serialized as an emotion-name map so snapshots read like the export format.
impl Serialize for EmotionalState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_map().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EmotionalState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = BTreeMap::<Emotion, f64>::deserialize(deserializer)?;
        let mut state = Self::new();
        for (emotion, value) in map {
            state.set(emotion, value);
        }
        Ok(state)
    }
}
