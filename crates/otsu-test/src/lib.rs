//! otsu-test - Test harness for otsu-rs
//!
//! This crate provides the regression test machinery shared by the
//! workspace's integration tests and benchmarks:
//!
//! - [`RegParams`] - indexed value/image comparisons with a pass/fail
//!   summary
//! - Seeded pseudo-random image generators for fuzzing the pipeline
//!   with reproducible content at arbitrary shapes
//!
//! # Usage
//!
//! ```
//! use otsu_test::{RegParams, uniform_random_pix};
//!
//! let mut rp = RegParams::new("example");
//! let pix = uniform_random_pix(64, 48, 42);
//! rp.compare_values(64.0, pix.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod params;

pub use params::RegParams;

use otsu_core::{FPix, Pix, PixelDepth};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Generate an 8 bpp image with uniformly distributed random pixel values
///
/// The same seed always yields the same image, so failures reproduce.
pub fn uniform_random_pix(width: u32, height: u32, seed: u64) -> Pix {
    let mut rng = StdRng::seed_from_u64(seed);
    let pix = Pix::new(width, height, PixelDepth::Bit8);
    let mut pm = pix
        .try_into_mut()
        .expect("freshly created Pix has a single reference");

    for y in 0..height {
        for x in 0..width {
            pm.set_pixel_unchecked(x, y, rng.random_range(0..256));
        }
    }

    pm.into()
}

/// Generate an 8 bpp image with two intensity populations
///
/// Each pixel is drawn near `low_mode` or `high_mode` (chosen with equal
/// probability) with a small uniform jitter, clamped to [0, 255]. The
/// result resembles a page: two well-separated intensity clusters with
/// an obvious threshold between them.
pub fn bimodal_pix(width: u32, height: u32, seed: u64, low_mode: u8, high_mode: u8) -> Pix {
    let mut rng = StdRng::seed_from_u64(seed);
    let pix = Pix::new(width, height, PixelDepth::Bit8);
    let mut pm = pix
        .try_into_mut()
        .expect("freshly created Pix has a single reference");

    for y in 0..height {
        for x in 0..width {
            let mode = i32::from(if rng.random_bool(0.5) {
                low_mode
            } else {
                high_mode
            });
            let jitter = rng.random_range(-8..=8);
            let val = (mode + jitter).clamp(0, 255) as u32;
            pm.set_pixel_unchecked(x, y, val);
        }
    }

    pm.into()
}

/// Generate an 8 bpp image with every pixel set to `value`
pub fn constant_pix(width: u32, height: u32, value: u8) -> Pix {
    let pix = Pix::new(width, height, PixelDepth::Bit8);
    let mut pm = pix
        .try_into_mut()
        .expect("freshly created Pix has a single reference");
    pm.set_all_arbitrary(value as u32)
        .expect("8-bit value is always in depth range");
    pm.into()
}

/// Generate a floating-point image with uniform random samples in [0, 1)
pub fn noisy_fpix(width: u32, height: u32, seed: u64) -> FPix {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut fpix = FPix::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let val = rng.random::<f32>();
            fpix.set_pixel(x, y, val)
                .expect("coordinates are within bounds");
        }
    }
    fpix
}
