use thiserror::Error;

/// Result type alias for cyberscore operations
pub type Result<T> = std::result::Result<T, ScoreError>;

/// Errors that can occur while scoring a URL
#[derive(Error, Debug)]
pub enum ScoreError {
    /// Input could not be parsed as a URL, even after scheme normalization
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Liveness probe failed at the network level
    #[error("liveness probe unavailable: {0}")]
    ProbeUnavailable(String),

    /// Liveness probe did not answer within its budget
    #[error("liveness probe timed out after {0} ms")]
    ProbeTimeout(u64),

    /// Scoring configuration is malformed
    #[error("invalid configuration: {0}")]
    ConfigurationInvalid(String),

    /// History or config file access failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScoreError {
    /// Returns true if the engine recovers from this error locally.
    ///
    /// Only configuration errors halt the system.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidUrl(_) | Self::ProbeUnavailable(_) | Self::ProbeTimeout(_)
        )
    }

    /// Returns true if the error came from the liveness probe
    #[must_use]
    pub const fn is_probe_error(&self) -> bool {
        matches!(self, Self::ProbeUnavailable(_) | Self::ProbeTimeout(_))
    }
}
