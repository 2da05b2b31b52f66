//! otsu-core - Data structures for grayscale binarization
//!
//! This crate provides the fundamental data structures used throughout
//! the otsu-rs binarization library:
//!
//! - [`Pix`] / [`PixMut`] - The main image container (immutable / mutable)
//! - [`FPix`] - Floating-point image for normalized intensity input
//! - [`Numa`] - Numeric array, used for histograms and prefix sums
//! - [`Pixa`] - Array of images (batched input)

pub mod error;
pub mod fpix;
pub mod numa;
pub mod pix;
pub mod pixa;

pub use error::{Error, Result};
pub use fpix::FPix;
pub use numa::Numa;
pub use pix::{Pix, PixMut, PixelDepth};
pub use pixa::Pixa;
