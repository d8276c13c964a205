//! # MOOD Core Library
//!
//! A small deterministic emotional agent. Each agent keeps a bounded
//! emotional state over six dimensions, reacts to symbolic stimuli, and
//! chooses an action through a prioritized five-stage cascade:
//!
//! - **Dominant emotion** — a strong feeling drives the matching action
//! - **Avoidance** — recent bad outcomes push away from an action
//! - **Exploration** — untried actions get a growing chance
//! - **Low emotion** — a near-neutral agent usually does something
//! - **Trust fallback** — high trust turns to insight
//!
//! Every interaction is recorded as an immutable [`Experience`], and the
//! history can be summarized, exported as JSON, or rendered as HTML.
//!
//! ## Determinism
//!
//! All randomness comes from [`RandomSource`], a fixed LCG. Two agents
//! built with the same seed and fed the same stimuli produce identical
//! actions, outcomes, reflections and final state.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod agent;
pub mod catalog;
pub mod config;
pub mod decision;
pub mod error;
pub mod experience;
pub mod lexicon;
pub mod reflection;
pub mod report;
pub mod rng;
pub mod state;
pub mod types;

pub use agent::{Agent, Response};
pub use config::{DecisionConfig, MoodConfig};
pub use error::MoodError;
pub use experience::{Experience, ExperienceLog};
pub use lexicon::{Lexicon, LexiconEntries};
pub use rng::RandomSource;
pub use state::EmotionalState;
pub use types::*;
