//! otsu-binarize - Automatic grayscale binarization
//!
//! Converts grayscale images to binary (two-valued) images:
//!
//! - **Threshold selection**: Otsu's method, computed from the image
//!   histogram via prefix sums
//! - **Binarization**: fixed-threshold classification of each pixel
//! - **Entry points** for 8 bpp images, normalized floating-point
//!   images, and batches of images
//!
//! The whole pipeline is a pure function of its input: no state survives
//! a call, and concurrent calls on different images need no coordination.

pub mod error;
pub mod threshold;

// Re-export core types
pub use otsu_core;

// Re-export error types
pub use error::{BinarizeError, BinarizeResult};

// Re-export threshold functions
pub use threshold::{
    compute_otsu_threshold,
    otsu_threshold_from_histogram,
    threshold_otsu,
    threshold_otsu_batch,
    threshold_otsu_fpix,
    threshold_to_binary,
};
