//! Stancemeter error types

/// Stancemeter error types
#[derive(Debug, thiserror::Error)]
pub enum StanceError {
    // Configuration errors
    /// Weights, thresholds or lexicon entries outside their valid ranges.
    ///
    /// Raised while building an analyzer or loading a config/lexicon file.
    #[error("configuration error: {0}")]
    Configuration(String),

    // Input errors
    /// A single post record could not be used.
    ///
    /// The analyzer logs and skips these; they never abort a batch.
    #[error("malformed post at index {index}: {reason}")]
    MalformedPost { index: usize, reason: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StanceError {
    /// Whether this error must stop the caller.
    ///
    /// Per-record problems are recoverable (skip the record); configuration and
    /// I/O problems are not.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, StanceError::MalformedPost { .. })
    }
}

/// Result type alias for stancemeter operations
pub type Result<T> = std::result::Result<T, StanceError>;
