//! Decision engine — the five-stage cascade that turns state and history
//! into an [`Action`].
//!
//! Stages run in order and the first one that yields an action wins:
//!
//! 1. **Dominant emotion** — the strongest emotion, if above its threshold
//! 2. **Avoidance** — steer away from an action that recently went badly
//! 3. **Exploration** — occasionally try something never tried before
//! 4. **Low emotion** — when nothing is felt strongly, usually do something
//! 5. **Trust fallback** — high trust turns to reflection
//!
//! If no stage fires the agent remains passive. Ties are always broken by
//! declaration order of [`Emotion`] and [`Action`].

use tracing::debug;

use crate::config::DecisionConfig;
use crate::experience::ExperienceLog;
use crate::rng::RandomSource;
use crate::state::EmotionalState;
use crate::types::{Action, Emotion};

/// Outcomes that count against an action in the avoidance stage.
pub const NEGATIVE_OUTCOMES: [&str; 3] = ["Danger", "Minor setback", "Negative reaction"];

/// Which stage of the cascade produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionStage {
    /// Stage 1.
    DominantEmotion,
    /// Stage 2.
    Avoidance,
    /// Stage 3.
    Exploration,
    /// Stage 4.
    LowEmotion,
    /// Stage 5.
    TrustFallback,
    /// No stage fired.
    Default,
}

/// A chosen action and the stage that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// The chosen action.
    pub action: Action,
    /// The stage that produced it.
    pub stage: DecisionStage,
}

/// Action associated with an emotion that dominates past its threshold.
#[must_use]
pub fn action_for_emotion(emotion: Emotion) -> Action {
    match emotion {
        Emotion::Fear => Action::SeekComfort,
        Emotion::Curiosity | Emotion::Joy => Action::Explore,
        Emotion::Anger => Action::ExpressAnger,
        Emotion::Sadness => Action::SeekInsight,
        Emotion::Trust => Action::Inquire,
    }
}

/// Run the cascade.
///
/// Draws from `rng` only in the stages that need randomness, and never for
/// an empty selection.
pub fn decide(
    state: &EmotionalState,
    log: &ExperienceLog,
    config: &DecisionConfig,
    rng: &mut RandomSource,
) -> Decision {
    let decision = if let Some(action) = dominant_emotion(state, config) {
        Decision { action, stage: DecisionStage::DominantEmotion }
    } else if let Some(action) = avoidance(log, config, rng) {
        Decision { action, stage: DecisionStage::Avoidance }
    } else if let Some(action) = exploration(log, rng) {
        Decision { action, stage: DecisionStage::Exploration }
    } else if let Some(action) = low_emotion(state, config, rng) {
        Decision { action, stage: DecisionStage::LowEmotion }
    } else if let Some(action) = trust_fallback(state, config) {
        Decision { action, stage: DecisionStage::TrustFallback }
    } else {
        Decision { action: Action::RemainPassive, stage: DecisionStage::Default }
    };

    debug!(action = %decision.action, stage = ?decision.stage, "Decision made");
    decision
}

/// Stage 1: strongest emotion above its threshold.
fn dominant_emotion(state: &EmotionalState, config: &DecisionConfig) -> Option<Action> {
    let (emotion, value) = state.dominant()?;
    (value > config.thresholds.get(emotion)).then(|| action_for_emotion(emotion))
}

/// Stage 2: avoid the action with the most recent negative outcomes.
fn avoidance(
    log: &ExperienceLog,
    config: &DecisionConfig,
    rng: &mut RandomSource,
) -> Option<Action> {
    let mut counts = [0usize; Action::ALL.len()];
    for experience in log.recent(config.avoidance_window) {
        if NEGATIVE_OUTCOMES.contains(&experience.outcome.as_str()) {
            counts[experience.action.index()] += 1;
        }
    }

    let (avoided, _) = Action::ALL
        .into_iter()
        .zip(counts)
        .filter(|&(_, count)| count > 0)
        .fold(None, |best: Option<(Action, usize)>, (action, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((action, count)),
        })?;

    let alternatives: Vec<Action> = Action::ALL
        .into_iter()
        .filter(|&a| a != avoided)
        .collect();
    debug!(avoided = %avoided, "Avoiding action after negative outcomes");
    rng.choose(&alternatives).copied()
}

/// Stage 3: explore untried actions, more eagerly as history grows.
#[allow(clippy::cast_precision_loss)]
fn exploration(log: &ExperienceLog, rng: &mut RandomSource) -> Option<Action> {
    let untried = log.untried();
    if untried.is_empty() {
        return None;
    }

    let untried_count = untried.len() as f64;
    let confidence = 1.0 - untried_count / (log.len() as f64 + 1.0);
    let p_explore = (untried_count / Action::ALL.len() as f64) * confidence;

    if rng.next_float() < p_explore {
        rng.choose(&untried).copied()
    } else {
        None
    }
}

/// Stage 4: when every emotion is faint, usually act anyway.
fn low_emotion(
    state: &EmotionalState,
    config: &DecisionConfig,
    rng: &mut RandomSource,
) -> Option<Action> {
    if !state.all_below(config.low_emotion_floor) {
        return None;
    }

    if rng.next_float() < config.low_emotion_act_probability {
        let active: Vec<Action> = Action::ALL
            .into_iter()
            .filter(|&a| a != Action::RemainPassive)
            .collect();
        rng.choose(&active).copied()
    } else {
        Some(Action::RemainPassive)
    }
}

/// Stage 5: high trust turns to insight.
fn trust_fallback(state: &EmotionalState, config: &DecisionConfig) -> Option<Action> {
    (state.get(Emotion::Trust) > config.trust_fallback).then_some(Action::SeekInsight)
}
