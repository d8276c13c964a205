//! Error types for the MOOD core library.

use thiserror::Error;

/// Top-level error type for all MOOD operations.
#[derive(Error, Debug)]
pub enum MoodError {
    /// Serialization or deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A lexicon entry was rejected.
    #[error("Invalid lexicon entry {key:?}: {reason}")]
    Lexicon {
        /// The offending stimulus key.
        key: String,
        /// Why the entry was rejected.
        reason: String,
    },

    /// An emotion name did not match any known emotion.
    #[error("Unknown emotion: {0}")]
    UnknownEmotion(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for MoodError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, MoodError>;
