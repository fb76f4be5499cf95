//! API error types

use subcue_core::AlignError;
use thiserror::Error;

/// Errors surfaced by the public API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The caller handed over input the engine cannot work with
    #[error("invalid input: {0}")]
    InvalidInput(#[from] AlignError),

    /// Configuration failed validation
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
