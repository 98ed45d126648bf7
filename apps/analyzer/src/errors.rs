use thiserror::Error;

/// Analyzer-level error type.
///
/// Only configuration can fail. The analysis path itself degrades to empty
/// results instead of returning errors.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Invalid classification threshold: {0} (expected 0.0..=1.0)")]
    InvalidThreshold(f64),

    #[error("Unknown skill split mode: {0}")]
    UnknownSplitMode(String),

    #[error("Score weights must sum to 1.0, got {0}")]
    InvalidWeights(f64),

    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),
}

impl AnalyzerError {
    /// Stable machine-readable code, mirrored in host error payloads.
    pub fn code(&self) -> &'static str {
        match self {
            AnalyzerError::InvalidThreshold(_) => "INVALID_THRESHOLD",
            AnalyzerError::UnknownSplitMode(_) => "UNKNOWN_SPLIT_MODE",
            AnalyzerError::InvalidWeights(_) => "INVALID_WEIGHTS",
            AnalyzerError::Config(_) => "CONFIG_ERROR",
        }
    }
}
