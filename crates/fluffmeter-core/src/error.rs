//! Error types for the scoring engine.

/// Scoring errors.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    /// Configuration error (missing API key, bad base URL).
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Network error.
    #[error("network error: {message}")]
    Network { message: String },

    /// Provider returned a non-success status.
    #[error("provider error (status {status}): {message}")]
    Provider { status: u16, message: String },

    /// Response body did not have the expected completion shape.
    #[error("malformed provider response: {message}")]
    MalformedResponse { message: String },

    /// Completion content could not be parsed as a single number.
    #[error("non-numeric score from model: {content:?}")]
    NonNumericScore { content: String },
}

impl From<reqwest::Error> for ScoreError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }
}

/// Result type for scoring operations.
pub type ScoreResult<T> = Result<T, ScoreError>;
