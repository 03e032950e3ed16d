//! Error types for mood inference.

use thiserror::Error;

/// Errors raised while recording signals or predicting a mood.
///
/// Every failing operation leaves the session's [`GameState`] untouched.
///
/// [`GameState`]: crate::session::GameState
#[derive(Debug, Error)]
pub enum MoodError {
    /// A prediction was requested before any word tags were selected.
    #[error("Missing prerequisite: please complete at least the word association game")]
    MissingPrerequisite,

    /// The color string is not six hex digits.
    #[error("Malformed color '{input}': expected #RRGGBB")]
    MalformedColor { input: String },

    /// The text-polarity analyzer failed or returned a non-finite score.
    #[error("Text polarity analyzer failed: {0}")]
    AnalyzerFailure(String),

    /// A word tag outside the fixed catalog.
    #[error("Unknown word tag: {0}")]
    UnknownWordTag(String),

    /// A mood label that is not one of the eight selectable moods.
    #[error("Unknown mood: {0}")]
    UnknownMood(String),

    /// No session with this identifier.
    #[error("Session not found: {0}")]
    SessionNotFound(String),
}

/// Result alias used across the crate.
pub type MoodResult<T> = Result<T, MoodError>;

/// Errors from loading a [`MoodConfig`](crate::config::MoodConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A value is present but unusable.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
