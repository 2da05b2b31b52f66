//! Binary thresholding
//!
//! Provides conversion of grayscale images to binary:
//! - Fixed threshold binarization
//! - Otsu's method (automatic threshold selection)
//!
//! The Otsu selector works from the image histogram alone: it picks the
//! threshold `t` maximizing the between-class variance
//! `w0(t) * w1(t) * (mu0(t) - mu1(t))^2`, where `w0`/`w1` are the
//! probability masses of the classes `[0, t]` and `[t+1, B-1]` and
//! `mu0`/`mu1` their means.
//!
//! # References
//!
//! Otsu, N. (1979). "A Threshold Selection Method from Gray-Level
//! Histograms". IEEE Trans. Syst. Man Cybern. 9 (1): 62-66.

use crate::error::{BinarizeError, BinarizeResult};
use otsu_core::pix::{get_data_bit, get_data_byte, set_data_bit};
use otsu_core::{FPix, Numa, Pix, PixelDepth, Pixa};

/// Compute Otsu's threshold from a histogram
///
/// The histogram must have between 2 and 256 bins. The selected
/// threshold `t` lies in `0 ..= nbins - 2` and splits the bins into the
/// classes `[0, t]` and `[t+1, nbins-1]`.
///
/// The class weights and means for every candidate threshold are derived
/// from two prefix-sum arrays over the histogram (cumulative mass and
/// cumulative first moment), built in one pass; the candidates are then
/// scored in a second pass. Equivalent to scanning each candidate with a
/// fresh accumulation, but each bin is touched a constant number of
/// times. All sums are accumulated in `f64`: `f32` accumulation loses
/// integer exactness once cumulative counts pass 2^24 and the moment
/// sums get there quickly.
///
/// When several thresholds attain the maximal between-class variance,
/// the lowest one is returned. A histogram with all mass in a single
/// bin, or with no mass at all, yields threshold 0: a class with zero
/// weight contributes zero variance, never a division by zero.
///
/// # Errors
///
/// Returns an error if the histogram length is outside `2..=256`.
///
/// # Example
///
/// ```
/// use otsu_core::Numa;
/// use otsu_binarize::otsu_threshold_from_histogram;
///
/// // Two well-separated populations: any split between them is optimal,
/// // and the lowest winning threshold is returned.
/// let mut hist = Numa::from_vec(vec![0.0; 256]);
/// hist[40] = 100.0;
/// hist[200] = 100.0;
/// let t = otsu_threshold_from_histogram(&hist).unwrap();
/// assert_eq!(t, 40);
/// ```
pub fn otsu_threshold_from_histogram(hist: &Numa) -> BinarizeResult<u8> {
    let nbins = hist.len();
    if !(2..=256).contains(&nbins) {
        return Err(BinarizeError::InvalidParameters(format!(
            "histogram must have 2..=256 bins, got {nbins}"
        )));
    }

    // One pass: cumulative mass and cumulative first moment per bin.
    let counts = hist.as_slice();
    let mut cum_mass = vec![0.0f64; nbins];
    let mut cum_moment = vec![0.0f64; nbins];
    let mut mass = 0.0f64;
    let mut moment = 0.0f64;
    for (i, &c) in counts.iter().enumerate() {
        mass += c as f64;
        moment += i as f64 * c as f64;
        cum_mass[i] = mass;
        cum_moment[i] = moment;
    }

    let total = mass;
    if total == 0.0 {
        // No samples: every split is equally (un)informative.
        return Ok(0);
    }
    let total_moment = moment;

    // Second pass: score every candidate split from the prefix sums.
    let mut best_t = 0usize;
    let mut best_var = -1.0f64;
    for t in 0..nbins - 1 {
        let w0 = cum_mass[t];
        let w1 = total - w0;
        let var = if w0 == 0.0 || w1 == 0.0 {
            0.0
        } else {
            let p0 = w0 / total;
            let p1 = w1 / total;
            let mu0 = cum_moment[t] / w0;
            let mu1 = (total_moment - cum_moment[t]) / w1;
            p0 * p1 * (mu0 - mu1) * (mu0 - mu1)
        };
        // Strict comparison keeps the lowest threshold on ties.
        if var > best_var {
            best_var = var;
            best_t = t;
        }
    }

    Ok(best_t as u8)
}

/// Compute Otsu's threshold for a grayscale or binary image
///
/// Builds the full-resolution histogram and selects the threshold that
/// maximizes the between-class variance. A constant or empty image
/// yields a defined threshold (see [`otsu_threshold_from_histogram`]).
pub fn compute_otsu_threshold(pix: &Pix) -> BinarizeResult<u8> {
    let hist = pix.gray_histogram(1)?;
    otsu_threshold_from_histogram(&hist)
}

/// Convert a grayscale image to binary using a fixed threshold
///
/// Pixels with value `> threshold` become 1 (foreground), pixels with
/// value `<= threshold` become 0 (background). The output is a 1 bpp
/// image of the same dimensions. Accepts 8 bpp and 1 bpp input.
pub fn threshold_to_binary(pix: &Pix, threshold: u8) -> BinarizeResult<Pix> {
    let width = pix.width();
    let height = pix.height();
    let out = Pix::new(width, height, PixelDepth::Bit1);
    let mut pm = out
        .try_into_mut()
        .expect("freshly created Pix has a single reference");

    let thresh = threshold as u32;
    for y in 0..height {
        let src = pix.row_data(y);
        let dst = pm.row_data_mut(y);
        match pix.depth() {
            PixelDepth::Bit8 => {
                for x in 0..width {
                    if get_data_byte(src, x) > thresh {
                        set_data_bit(dst, x, 1);
                    }
                }
            }
            PixelDepth::Bit1 => {
                for x in 0..width {
                    if get_data_bit(src, x) > thresh {
                        set_data_bit(dst, x, 1);
                    }
                }
            }
        }
    }

    Ok(pm.into())
}

/// Convert a grayscale image to binary using Otsu's method
///
/// Automatically determines the optimal threshold, then classifies each
/// pixel against it.
///
/// # Example
///
/// ```
/// use otsu_core::{Pix, PixelDepth};
/// use otsu_binarize::threshold_otsu;
///
/// let pix = Pix::new(32, 32, PixelDepth::Bit8);
/// let binary = threshold_otsu(&pix).unwrap();
/// assert_eq!(binary.depth(), PixelDepth::Bit1);
/// assert!(binary.sizes_equal(&Pix::new(32, 32, PixelDepth::Bit1)));
/// ```
pub fn threshold_otsu(pix: &Pix) -> BinarizeResult<Pix> {
    let threshold = compute_otsu_threshold(pix)?;
    threshold_to_binary(pix, threshold)
}

/// Binarize a normalized floating-point image using Otsu's method
///
/// The samples are quantized to 8-bit bins first (clamping out-of-domain
/// and non-finite values, see [`FPix::quantize_to_pix`]), then
/// thresholded like an 8 bpp image.
pub fn threshold_otsu_fpix(fpix: &FPix) -> BinarizeResult<Pix> {
    threshold_otsu(&fpix.quantize_to_pix())
}

/// Binarize a batch of images using Otsu's method
///
/// Each image in the batch is thresholded independently with its own
/// histogram and threshold; the images need not share dimensions.
pub fn threshold_otsu_batch(pixa: &Pixa) -> BinarizeResult<Pixa> {
    let mut out = Pixa::with_capacity(pixa.len());
    for pix in pixa.iter() {
        out.push(threshold_otsu(pix)?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn histogram_from_counts(counts: &[(usize, f32)]) -> Numa {
        let mut hist = Numa::from_vec(vec![0.0; 256]);
        for &(bin, count) in counts {
            hist[bin] = count;
        }
        hist
    }

    #[test]
    fn test_otsu_bimodal_histogram() {
        // 100 pixels at 50, 100 at 200: the best split separates them,
        // and the lowest of the tied optimal splits is bin 50.
        let hist = histogram_from_counts(&[(50, 100.0), (200, 100.0)]);
        let t = otsu_threshold_from_histogram(&hist).unwrap();
        assert_eq!(t, 50);
    }

    #[test]
    fn test_otsu_unbalanced_histogram() {
        // Unequal populations still split between the modes.
        let hist = histogram_from_counts(&[(30, 900.0), (31, 80.0), (220, 50.0)]);
        let t = otsu_threshold_from_histogram(&hist).unwrap();
        assert!((31..220).contains(&(t as usize)), "t = {t}");
    }

    #[test]
    fn test_otsu_single_bin_histogram() {
        // All mass in one bin: zero variance everywhere, threshold 0.
        let hist = histogram_from_counts(&[(77, 1234.0)]);
        assert_eq!(otsu_threshold_from_histogram(&hist).unwrap(), 0);
    }

    #[test]
    fn test_otsu_empty_histogram() {
        let hist = Numa::from_vec(vec![0.0; 256]);
        assert_eq!(otsu_threshold_from_histogram(&hist).unwrap(), 0);
    }

    #[test]
    fn test_otsu_two_bin_histogram() {
        // 2-bin histogram: the only candidate split is t = 0.
        let hist = Numa::from_vec(vec![3.0, 5.0]);
        assert_eq!(otsu_threshold_from_histogram(&hist).unwrap(), 0);
    }

    #[test]
    fn test_otsu_invalid_histogram_length() {
        assert!(otsu_threshold_from_histogram(&Numa::from_vec(vec![1.0])).is_err());
        assert!(otsu_threshold_from_histogram(&Numa::from_vec(vec![0.0; 257])).is_err());
        assert!(otsu_threshold_from_histogram(&Numa::new()).is_err());
    }

    #[test]
    fn test_threshold_to_binary_strictly_greater() {
        let pix = Pix::new(4, 1, PixelDepth::Bit8);
        let mut pm = pix.try_into_mut().unwrap();
        for (x, v) in [99u32, 100, 101, 255].into_iter().enumerate() {
            pm.set_pixel(x as u32, 0, v).unwrap();
        }
        let pix: Pix = pm.into();

        // Pixels equal to the threshold stay background.
        let bin = threshold_to_binary(&pix, 100).unwrap();
        assert_eq!(bin.get_pixel(0, 0), Some(0));
        assert_eq!(bin.get_pixel(1, 0), Some(0));
        assert_eq!(bin.get_pixel(2, 0), Some(1));
        assert_eq!(bin.get_pixel(3, 0), Some(1));
    }

    #[test]
    fn test_threshold_to_binary_empty_image() {
        let pix = Pix::new(0, 3, PixelDepth::Bit8);
        let bin = threshold_to_binary(&pix, 128).unwrap();
        assert_eq!(bin.width(), 0);
        assert_eq!(bin.height(), 3);
        assert_eq!(bin.depth(), PixelDepth::Bit1);
    }

    #[test]
    fn test_threshold_otsu_two_by_two() {
        // [0, 0, 255, 255]: counts 2 at bin 0 and bin 255. Every split
        // separates the populations equally well, so the lowest wins,
        // and the output keeps the dark half background.
        let pix = Pix::new(2, 2, PixelDepth::Bit8);
        let mut pm = pix.try_into_mut().unwrap();
        pm.set_pixel(0, 1, 255).unwrap();
        pm.set_pixel(1, 1, 255).unwrap();
        let pix: Pix = pm.into();

        let hist = pix.gray_histogram(1).unwrap();
        assert_eq!(hist[0], 2.0);
        assert_eq!(hist[255], 2.0);
        assert_eq!(hist.sum(), Some(4.0));

        let t = compute_otsu_threshold(&pix).unwrap();
        assert!(t <= 254);
        assert_eq!(t, 0);

        let bin = threshold_otsu(&pix).unwrap();
        assert_eq!(bin.get_pixel(0, 0), Some(0));
        assert_eq!(bin.get_pixel(1, 0), Some(0));
        assert_eq!(bin.get_pixel(0, 1), Some(1));
        assert_eq!(bin.get_pixel(1, 1), Some(1));
    }

    #[test]
    fn test_threshold_otsu_constant_image() {
        // Constant intensity: defined threshold, all-background output.
        let pix = Pix::new(16, 16, PixelDepth::Bit8);
        let mut pm = pix.try_into_mut().unwrap();
        pm.set_all_arbitrary(173).unwrap();
        let pix: Pix = pm.into();

        let bin = threshold_otsu(&pix).unwrap();
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(bin.get_pixel(x, y), Some(0));
            }
        }
    }

    #[test]
    fn test_threshold_otsu_fpix() {
        let mut fpix = FPix::new(8, 8);
        for y in 4..8 {
            for x in 0..8 {
                fpix.set_pixel(x, y, 0.9).unwrap();
            }
        }
        let bin = threshold_otsu_fpix(&fpix).unwrap();
        assert_eq!(bin.depth(), PixelDepth::Bit1);
        assert_eq!(bin.get_pixel(0, 0), Some(0));
        assert_eq!(bin.get_pixel(0, 7), Some(1));
    }

    #[test]
    fn test_threshold_otsu_batch_independent() {
        // Each frame gets its own threshold: a frame that is dark overall
        // must not borrow the threshold of a bright one.
        let mut dark = Pix::new(4, 4, PixelDepth::Bit8).to_mut();
        let mut bright = Pix::new(4, 4, PixelDepth::Bit8).to_mut();
        for y in 0..4 {
            for x in 0..4 {
                dark.set_pixel(x, y, if x < 2 { 10 } else { 60 }).unwrap();
                bright
                    .set_pixel(x, y, if x < 2 { 180 } else { 250 })
                    .unwrap();
            }
        }

        let mut pixa = Pixa::new();
        pixa.push(dark.into());
        pixa.push(bright.into());

        let out = threshold_otsu_batch(&pixa).unwrap();
        assert_eq!(out.len(), 2);
        for bin in out.iter() {
            assert_eq!(bin.get_pixel(0, 0), Some(0));
            assert_eq!(bin.get_pixel(3, 0), Some(1));
        }
    }
}
