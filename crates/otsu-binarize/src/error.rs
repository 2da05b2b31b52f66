//! Error types for otsu-binarize

use thiserror::Error;

/// Errors that can occur during threshold selection and binarization
#[derive(Debug, Error)]
pub enum BinarizeError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] otsu_core::Error),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for binarization operations
pub type BinarizeResult<T> = Result<T, BinarizeError>;
