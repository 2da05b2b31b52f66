//! Pix - The grayscale/binary image container
//!
//! The `Pix` structure is the image type used throughout the library.
//! It supports 8 bpp grayscale input images and the 1 bpp binary images
//! produced by thresholding.
//!
//! # Pixel layout
//!
//! - Image data is stored in 32-bit words
//! - Every row starts on a 32-bit boundary
//! - Pixels are packed MSB to LSB within each word
//!
//! # Ownership model
//!
//! `Pix` uses `Arc` for efficient cloning (shared ownership).
//! To modify pixel data, convert to `PixMut` via [`Pix::try_into_mut`]
//! or [`Pix::to_mut`], then convert back with `Into<Pix>`.

mod access;
mod histogram;

pub use access::{get_data_bit, get_data_byte, set_data_bit, set_data_byte};

use crate::error::{Error, Result};
use std::sync::Arc;

/// Pixel depth (bits per pixel)
///
/// Represents the number of bits used to encode each pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PixelDepth {
    /// 1-bit binary image
    Bit1 = 1,
    /// 8-bit grayscale
    Bit8 = 8,
}

impl PixelDepth {
    /// Create `PixelDepth` from a raw bit count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDepth`] if `bits` is not 1 or 8.
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            1 => Ok(PixelDepth::Bit1),
            8 => Ok(PixelDepth::Bit8),
            _ => Err(Error::InvalidDepth(bits)),
        }
    }

    /// Get the number of bits per pixel.
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// Get the maximum pixel value representable at this depth.
    pub fn max_value(self) -> u32 {
        (1u32 << self.bits()) - 1
    }
}

/// Internal Pix data
#[derive(Debug)]
struct PixData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Depth in bits per pixel
    depth: PixelDepth,
    /// 32-bit words per line
    wpl: u32,
    /// The image data (packed 32-bit words)
    data: Vec<u32>,
}

/// Pix - Main image container
///
/// `Pix` is the fundamental image type of the library. It uses reference
/// counting via `Arc` for efficient cloning.
///
/// Zero-width and zero-height images are valid: they hold no samples and
/// every operation on them has a defined (empty or all-zero) result.
///
/// # Examples
///
/// ```
/// use otsu_core::{Pix, PixelDepth};
///
/// // Create a new 8-bit grayscale image
/// let pix = Pix::new(640, 480, PixelDepth::Bit8);
/// assert_eq!(pix.width(), 640);
/// assert_eq!(pix.height(), 480);
/// ```
#[derive(Debug, Clone)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Create a new Pix with the specified dimensions and depth.
    ///
    /// The image data is initialized to zero. A width or height of 0
    /// produces an empty image.
    pub fn new(width: u32, height: u32, depth: PixelDepth) -> Self {
        let wpl = Self::compute_wpl(width, depth);
        let data_size = (wpl as usize) * (height as usize);
        let data = vec![0u32; data_size];

        let inner = PixData {
            width,
            height,
            depth,
            wpl,
            data,
        };

        Pix {
            inner: Arc::new(inner),
        }
    }

    /// Compute words per line for given width and depth.
    ///
    /// Uses u64 arithmetic to prevent overflow for large widths.
    ///
    /// # Panics
    ///
    /// Panics if the result would exceed `u32::MAX`.
    #[inline]
    fn compute_wpl(width: u32, depth: PixelDepth) -> u32 {
        let bits_per_line = u64::from(width) * u64::from(depth.bits());
        let wpl = bits_per_line.div_ceil(32);
        u32::try_from(wpl).unwrap_or_else(|_| {
            panic!(
                "image row too large: width={} depth={:?} requires {} words",
                width, depth, wpl
            )
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the pixel depth.
    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.inner.depth
    }

    /// Get the words per line.
    #[inline]
    pub fn wpl(&self) -> u32 {
        self.inner.wpl
    }

    /// Get the total number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.inner.width) * u64::from(self.inner.height)
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the number of strong references to this Pix.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Get the words of a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let start = (y * self.inner.wpl) as usize;
        let end = start + self.inner.wpl as usize;
        &self.inner.data[start..end]
    }

    /// Create a new Pix with the same dimensions and depth as the source.
    ///
    /// The image data is initialized to zero.
    pub fn create_template(&self) -> Self {
        Pix::new(self.inner.width, self.inner.height, self.inner.depth)
    }

    /// Check if two Pix have the same width, height, and depth.
    pub fn sizes_equal(&self, other: &Pix) -> bool {
        self.inner.width == other.inner.width
            && self.inner.height == other.inner.height
            && self.inner.depth == other.inner.depth
    }

    /// Create a deep copy of this Pix.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates
    /// a completely independent copy.
    pub fn deep_clone(&self) -> Self {
        let inner = PixData {
            width: self.inner.width,
            height: self.inner.height,
            depth: self.inner.depth,
            wpl: self.inner.wpl,
            data: self.inner.data.clone(),
        };

        Pix {
            inner: Arc::new(inner),
        }
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    /// If successful, returns a [`PixMut`] that allows modification.
    pub fn try_into_mut(self) -> std::result::Result<PixMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixMut { inner: data }),
            Err(arc) => Err(Pix { inner: arc }),
        }
    }

    /// Create a mutable copy of this Pix.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> PixMut {
        let inner = PixData {
            width: self.inner.width,
            height: self.inner.height,
            depth: self.inner.depth,
            wpl: self.inner.wpl,
            data: self.inner.data.clone(),
        };

        PixMut { inner }
    }
}

/// Mutable Pix
///
/// Allows modification of image data. Convert back to an immutable
/// [`Pix`] using `Into<Pix>`.
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the pixel depth.
    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.inner.depth
    }

    /// Get words per line.
    #[inline]
    pub fn wpl(&self) -> u32 {
        self.inner.wpl
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable access to the image data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Get mutable access to a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let start = (y * self.inner.wpl) as usize;
        let end = start + self.inner.wpl as usize;
        &mut self.inner.data[start..end]
    }

    /// Set all pixels to an arbitrary value.
    ///
    /// The value is depth-dependent: 0 or 1 for 1 bpp, 0-255 for 8 bpp.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `val` exceeds the maximum
    /// value for the image depth.
    pub fn set_all_arbitrary(&mut self, val: u32) -> Result<()> {
        if val > self.inner.depth.max_value() {
            return Err(Error::InvalidParameter(format!(
                "value {} exceeds max {} for {} bpp",
                val,
                self.inner.depth.max_value(),
                self.inner.depth.bits()
            )));
        }

        let word = match self.inner.depth {
            PixelDepth::Bit1 => {
                if val == 0 {
                    0
                } else {
                    0xFFFFFFFF
                }
            }
            PixelDepth::Bit8 => val * 0x01010101,
        };
        self.inner.data.fill(word);
        Ok(())
    }

    /// Clear all pixels to zero.
    pub fn clear(&mut self) {
        self.inner.data.fill(0);
    }
}

impl From<PixMut> for Pix {
    fn from(pix_mut: PixMut) -> Self {
        Pix {
            inner: Arc::new(pix_mut.inner),
        }
    }
}
