//! Engine error types
//!
//! Only unsatisfiable preconditions surface as errors; everything else
//! (degenerate splits, semantic-detector rejection) resolves locally via
//! the documented fallbacks.

use thiserror::Error;

/// Hard input failures of the speaker-alignment path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlignError {
    /// The transcript word list was empty
    #[error("transcript word list is empty")]
    EmptyTranscript,

    /// The diarization span list was empty
    #[error("speaker span list is empty")]
    EmptySpans,

    /// No transcript word carried any timestamp
    #[error("no transcript word carries a timestamp")]
    MissingTimestamps,
}

/// Result type for alignment operations.
pub type Result<T> = std::result::Result<T, AlignError>;
