//! Error types for otsu-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// otsu-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid pixel depth
    #[error("invalid pixel depth: {0} bpp")]
    InvalidDepth(u32),

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Raw data length does not match the stated dimensions
    #[error("data size mismatch: expected {expected} samples, got {actual}")]
    DataSizeMismatch { expected: usize, actual: usize },
}

/// Result type alias for otsu-core operations
pub type Result<T> = std::result::Result<T, Error>;
