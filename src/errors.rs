//! Error types for the wellbeing coach
//!
//! Every failure on the advice path is one of these variants. The advice
//! service never lets them escape: they are folded into a fallback outcome
//! and kept only as its cause.

use thiserror::Error;

/// Main error type for the wellbeing coach
#[derive(Error, Debug)]
pub enum CoachError {
    /// Lifecycle state machine transition errors
    #[error("Invalid state transition from {from:?} on {event}: {reason}")]
    InvalidTransition {
        from: String,
        event: String,
        reason: String,
    },

    /// No API key in the environment
    #[error("API key not set (expected in ${0})")]
    MissingApiKey(String),

    /// Advice requested for a snapshot without any app usage
    #[error("Snapshot has no top apps to analyze")]
    EmptyTopApps,

    /// Model API returned a non-success status
    #[error("Model API error: HTTP {status}: {body}")]
    ApiStatus { status: u16, body: String },

    /// Model API returned no text
    #[error("Model returned an empty response")]
    EmptyResponse,

    /// Response text was not a JSON array of strings
    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for coach operations
pub type Result<T> = std::result::Result<T, CoachError>;
