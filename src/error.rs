//! Error handling for PulseUX
//!
//! Only construction-time failures live here. Per-call failures inside a
//! capability (a single transcription or scoring attempt) are reported as
//! an absent result at the trait boundary, never as a `PulseError`.

use thiserror::Error;

/// Result type alias for PulseUX operations
pub type Result<T> = std::result::Result<T, PulseError>;

/// Main error type for PulseUX operations
#[derive(Error, Debug)]
pub enum PulseError {
    /// The scoring backend could not be reached at startup
    #[error("scoring backend unreachable at {host}: {reason}")]
    BackendUnavailable { host: String, reason: String },

    /// The scoring model could not be listed or pulled at startup
    #[error("failed to prepare model '{model}': {reason}")]
    ModelPreparation { model: String, reason: String },

    /// The whisper model file is missing or unloadable
    #[error("failed to load whisper model from '{path}': {reason}")]
    ModelLoad { path: String, reason: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PulseError {
    /// One-line remediation hint for startup failures, if there is one.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            PulseError::BackendUnavailable { .. } | PulseError::ModelPreparation { .. } => {
                Some("Please ensure Ollama is running and accessible.")
            }
            PulseError::ModelLoad { .. } => {
                Some("Please ensure the model file exists and is accessible.")
            }
            PulseError::Io(_) => None,
        }
    }
}
