use thiserror::Error;

/// Errors surfaced by the sketch core.
///
/// Extending or committing without an active stroke is not an error: those
/// calls are absorbed by the canvas and only logged.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("A stroke is already in progress")]
    StrokeInProgress,

    #[error("Invalid sketch configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

pub type SketchResult<T> = Result<T, SketchError>;
