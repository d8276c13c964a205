//! Configuration for the MOOD agent.
//!
//! Maps directly to `mood.toml`. Every field has a default, so an empty
//! file (or no file) yields the stock behavior.

use serde::{Deserialize, Serialize};

use crate::error::MoodError;
use crate::types::Emotion;

/// Top-level MOOD configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoodConfig {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Summary and HTML report settings.
    #[serde(default)]
    pub report: ReportConfig,
    /// Decision cascade parameters.
    #[serde(default)]
    pub decision: DecisionConfig,
}

impl MoodConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `MoodError::Config` if the TOML is invalid or a value is out
    /// of range.
    pub fn from_toml(toml_str: &str) -> crate::error::Result<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| MoodError::Config(e.to_string()))?;
        config.decision.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// General settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Report settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// How many recent experiences the summary lists.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// Title of the HTML report.
    #[serde(default = "default_html_title")]
    pub html_title: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            html_title: default_html_title(),
        }
    }
}

/// Parameters of the five-stage decision cascade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionConfig {
    /// Per-emotion dominance thresholds for stage 1.
    #[serde(default)]
    pub thresholds: Thresholds,
    /// How many recent experiences stage 2 inspects.
    #[serde(default = "default_avoidance_window")]
    pub avoidance_window: usize,
    /// Stage 4 fires when every emotion is below this value.
    #[serde(default = "default_low_emotion_floor")]
    pub low_emotion_floor: f64,
    /// Stage 4 probability of acting rather than staying passive.
    #[serde(default = "default_low_emotion_act_probability")]
    pub low_emotion_act_probability: f64,
    /// Stage 5 fires when trust exceeds this value.
    #[serde(default = "default_trust_fallback")]
    pub trust_fallback: f64,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            avoidance_window: default_avoidance_window(),
            low_emotion_floor: default_low_emotion_floor(),
            low_emotion_act_probability: default_low_emotion_act_probability(),
            trust_fallback: default_trust_fallback(),
        }
    }
}

impl DecisionConfig {
    /// Check that every probability and threshold lies in `[0, 1]`.
    ///
    /// # Errors
    /// Returns `MoodError::Config` naming the first offending field.
    pub fn validate(&self) -> crate::error::Result<()> {
        let mut fields: Vec<(String, f64)> = Emotion::ALL
            .into_iter()
            .map(|e| (format!("thresholds.{e}"), self.thresholds.get(e)))
            .collect();
        fields.push(("low_emotion_floor".to_string(), self.low_emotion_floor));
        fields.push((
            "low_emotion_act_probability".to_string(),
            self.low_emotion_act_probability,
        ));
        fields.push(("trust_fallback".to_string(), self.trust_fallback));

        for (name, value) in fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(MoodError::Config(format!(
                    "decision.{name} must be within [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Stage-1 dominance thresholds, one per emotion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Joy threshold.
    #[serde(default = "default_joy")]
    pub joy: f64,
    /// Curiosity threshold.
    #[serde(default = "default_curiosity")]
    pub curiosity: f64,
    /// Sadness threshold.
    #[serde(default = "default_sadness")]
    pub sadness: f64,
    /// Fear threshold.
    #[serde(default = "default_fear")]
    pub fear: f64,
    /// Anger threshold.
    #[serde(default = "default_anger")]
    pub anger: f64,
    /// Trust threshold.
    #[serde(default = "default_trust")]
    pub trust: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            joy: default_joy(),
            curiosity: default_curiosity(),
            sadness: default_sadness(),
            fear: default_fear(),
            anger: default_anger(),
            trust: default_trust(),
        }
    }
}

impl Thresholds {
    /// Threshold for `emotion`.
    #[must_use]
    pub fn get(&self, emotion: Emotion) -> f64 {
        match emotion {
            Emotion::Joy => self.joy,
            Emotion::Curiosity => self.curiosity,
            Emotion::Sadness => self.sadness,
            Emotion::Fear => self.fear,
            Emotion::Anger => self.anger,
            Emotion::Trust => self.trust,
        }
    }
}

// ---------------------------------------------------------------------------
// Serde default helpers
// ---------------------------------------------------------------------------

fn default_log_level() -> String { "warn".to_string() }
fn default_html_title() -> String { "Agent Experience Report".to_string() }
fn default_history_limit() -> usize { 5 }
fn default_avoidance_window() -> usize { 5 }
fn default_low_emotion_floor() -> f64 { 0.2 }
fn default_low_emotion_act_probability() -> f64 { 0.8 }
fn default_trust_fallback() -> f64 { 0.6 }
fn default_joy() -> f64 { 0.55 }
fn default_curiosity() -> f64 { 0.65 }
fn default_sadness() -> f64 { 0.30 }
fn default_fear() -> f64 { 0.75 }
fn default_anger() -> f64 { 0.45 }
fn default_trust() -> f64 { 0.50 }
