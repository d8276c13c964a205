//! Reflection — the one-sentence summary an agent writes after each
//! interaction.

use crate::types::{Action, Emotion};

/// Used when the action catalog has no entry for the chosen action.
pub const PLACEHOLDER: &str = "I could not make sense of what just happened.";

/// Compose the reflection for one interaction.
///
/// `dominant` is the strongest emotion after the action's feedback was
/// applied; without one a neutral phrasing is used.
#[must_use]
pub fn compose(
    input: &str,
    dominant: Option<(Emotion, f64)>,
    action: Action,
    outcome: &str,
) -> String {
    match dominant {
        Some((emotion, value)) => format!(
            "After \"{input}\", feeling mostly {emotion} ({value:.2}), I chose to {action} \
             and the outcome was: {outcome}."
        ),
        None => format!(
            "After \"{input}\", I chose to {action} and the outcome was: {outcome}."
        ),
    }
}
