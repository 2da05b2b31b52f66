//! Histogram generation for Pix images
//!
//! Functions to compute pixel value distributions from images.

use super::{Pix, PixelDepth, get_data_bit, get_data_byte};
use crate::error::{Error, Result};
use crate::numa::Numa;

impl Pix {
    /// Get the grayscale histogram of the image
    ///
    /// Counts the occurrence of each pixel value in the image.
    /// The histogram size depends on the image depth:
    /// - 1-bit: 2 bins (0 and 1)
    /// - 8-bit: 256 bins (0-255)
    ///
    /// The per-pixel work is a single scatter-accumulation: each sample
    /// is quantized to a bin index and bumps that bin's count. An empty
    /// (zero-area) image yields an all-zero histogram.
    ///
    /// # Arguments
    ///
    /// * `factor` - Subsampling factor. Use 1 to count all pixels,
    ///   2 to count every other pixel in each direction, etc.
    ///
    /// # Returns
    ///
    /// A `Numa` containing the histogram with parameters set to
    /// `startx=0, deltax=1`. At factor 1 the counts sum to the
    /// pixel count of the image.
    ///
    /// # Errors
    ///
    /// Returns an error if the factor is 0.
    ///
    /// # Example
    ///
    /// ```
    /// use otsu_core::{Pix, PixelDepth};
    ///
    /// let pix = Pix::new(100, 100, PixelDepth::Bit8);
    /// let hist = pix.gray_histogram(1).unwrap();
    /// assert_eq!(hist.len(), 256);
    /// assert_eq!(hist[0], 10000.0);
    /// ```
    pub fn gray_histogram(&self, factor: u32) -> Result<Numa> {
        if factor == 0 {
            return Err(Error::InvalidParameter("factor must be >= 1".to_string()));
        }

        let depth = self.depth();
        let size = 1usize << depth.bits();
        let mut histogram = vec![0.0f32; size];

        let width = self.width();
        let height = self.height();

        // Special case for 1-bit images: count 1-bits
        if depth == PixelDepth::Bit1 {
            let total_pixels = self.count_pixels_by_factor(factor);
            let ones = self.count_ones_by_factor(factor);
            histogram[0] = (total_pixels - ones) as f32;
            histogram[1] = ones as f32;
        } else {
            // General case: scatter-accumulate over sampled pixels
            let mut y = 0;
            while y < height {
                let line = self.row_data(y);
                let mut x = 0;
                while x < width {
                    let val = get_data_byte(line, x) as usize;
                    histogram[val] += 1.0;
                    x += factor;
                }
                y += factor;
            }
        }

        let mut result = Numa::from_vec(histogram);
        result.set_parameters(0.0, 1.0);
        Ok(result)
    }

    /// Count total pixels considering subsampling factor
    fn count_pixels_by_factor(&self, factor: u32) -> u64 {
        let w = u64::from(self.width().div_ceil(factor));
        let h = u64::from(self.height().div_ceil(factor));
        w * h
    }

    /// Count 1-bits with subsampling factor
    fn count_ones_by_factor(&self, factor: u32) -> u64 {
        if self.depth() != PixelDepth::Bit1 {
            return 0;
        }

        let width = self.width();
        let height = self.height();
        let mut count = 0u64;

        let mut y = 0;
        while y < height {
            let line = self.row_data(y);
            let mut x = 0;
            while x < width {
                if get_data_bit(line, x) != 0 {
                    count += 1;
                }
                x += factor;
            }
            y += factor;
        }

        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_histogram_8bit_uniform() {
        // All pixels are 0 (initialized to zero)
        let pix = Pix::new(100, 100, PixelDepth::Bit8);
        let hist = pix.gray_histogram(1).unwrap();

        assert_eq!(hist.len(), 256);
        assert_eq!(hist[0], 10000.0);
        for i in 1..256 {
            assert_eq!(hist[i], 0.0);
        }
    }

    #[test]
    fn test_gray_histogram_sum_equals_pixel_count() {
        let pix = Pix::new(37, 23, PixelDepth::Bit8);
        let mut pm = pix.try_into_mut().unwrap();
        for y in 0..23 {
            for x in 0..37 {
                pm.set_pixel(x, y, (x * 7 + y * 13) % 256).unwrap();
            }
        }
        let pix: Pix = pm.into();

        let hist = pix.gray_histogram(1).unwrap();
        assert_eq!(hist.sum(), Some(37.0 * 23.0));
    }

    #[test]
    fn test_gray_histogram_with_subsampling() {
        let pix = Pix::new(100, 100, PixelDepth::Bit8);

        // Factor 2: sample every other pixel in both dimensions
        let hist = pix.gray_histogram(2).unwrap();
        assert_eq!(hist[0], 2500.0);

        // Factor 10: 10 * 10 = 100 pixels sampled
        let hist = pix.gray_histogram(10).unwrap();
        assert_eq!(hist[0], 100.0);
    }

    #[test]
    fn test_gray_histogram_1bit() {
        let pix = Pix::new(32, 10, PixelDepth::Bit1);
        let mut pm = pix.try_into_mut().unwrap();
        for x in 0..5 {
            pm.set_pixel(x, 0, 1).unwrap();
        }
        let pix: Pix = pm.into();

        let hist = pix.gray_histogram(1).unwrap();
        assert_eq!(hist.len(), 2);
        assert_eq!(hist[0], 315.0);
        assert_eq!(hist[1], 5.0);
    }

    #[test]
    fn test_gray_histogram_empty_image() {
        // Zero-area input: defined, all-zero histogram
        let pix = Pix::new(0, 0, PixelDepth::Bit8);
        let hist = pix.gray_histogram(1).unwrap();
        assert_eq!(hist.len(), 256);
        assert_eq!(hist.sum(), Some(0.0));

        let pix = Pix::new(0, 17, PixelDepth::Bit1);
        let hist = pix.gray_histogram(1).unwrap();
        assert_eq!(hist.len(), 2);
        assert_eq!(hist[0], 0.0);
        assert_eq!(hist[1], 0.0);
    }

    #[test]
    fn test_gray_histogram_invalid_factor() {
        let pix = Pix::new(10, 10, PixelDepth::Bit8);
        assert!(pix.gray_histogram(0).is_err());
    }

    #[test]
    fn test_histogram_parameters() {
        let pix = Pix::new(10, 10, PixelDepth::Bit8);
        let hist = pix.gray_histogram(1).unwrap();

        let (startx, deltax) = hist.parameters();
        assert_eq!(startx, 0.0);
        assert_eq!(deltax, 1.0);
    }

    #[test]
    fn test_histogram_partial_sums_end_at_total() {
        let pix = Pix::new(50, 40, PixelDepth::Bit8);
        let mut pm = pix.try_into_mut().unwrap();
        for y in 0..40 {
            for x in 0..50 {
                pm.set_pixel(x, y, (x + y) % 256).unwrap();
            }
        }
        let pix: Pix = pm.into();

        let hist = pix.gray_histogram(1).unwrap();
        let cdf = hist.partial_sums();
        assert_eq!(cdf.len(), 256);
        assert_eq!(cdf.get(255), Some(2000.0));
    }
}
