//! otsu - Grayscale image binarization
//!
//! Turns a grayscale image into a binary (foreground/background) image
//! by selecting the threshold that maximizes the between-class variance
//! of the intensity histogram, then classifying every pixel against it:
//!
//! ```text
//! image -> 256-bin histogram -> Otsu threshold -> binary image
//! ```
//!
//! # Example
//!
//! ```
//! use otsu::{Pix, PixelDepth};
//! use otsu::binarize::threshold_otsu;
//!
//! // A half dark, half bright image
//! let pix = Pix::new(8, 8, PixelDepth::Bit8);
//! let mut pm = pix.try_into_mut().unwrap();
//! for y in 0..8 {
//!     for x in 4..8 {
//!         pm.set_pixel(x, y, 200).unwrap();
//!     }
//! }
//! let pix: Pix = pm.into();
//!
//! let binary = threshold_otsu(&pix).unwrap();
//! assert_eq!(binary.depth(), PixelDepth::Bit1);
//! assert_eq!(binary.get_pixel(0, 0), Some(0));
//! assert_eq!(binary.get_pixel(7, 7), Some(1));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use otsu_core::*;

// Re-export the algorithm crate as a module
pub use otsu_binarize as binarize;
