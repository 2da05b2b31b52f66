//! Pixa - Array of Pix images
//!
//! An ordered collection of [`Pix`] images. This is the batched form of
//! the library's input: a stack of independent frames along a leading
//! axis, each processed on its own.

use crate::pix::Pix;

/// Array of Pix images
#[derive(Debug, Clone, Default)]
pub struct Pixa {
    pix: Vec<Pix>,
}

impl Pixa {
    /// Create a new empty Pixa
    pub fn new() -> Self {
        Pixa { pix: Vec::new() }
    }

    /// Create a Pixa with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Pixa {
            pix: Vec::with_capacity(capacity),
        }
    }

    /// Get the number of Pix images
    #[inline]
    pub fn len(&self) -> usize {
        self.pix.len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pix.is_empty()
    }

    /// Get a reference to a Pix by index
    pub fn get(&self, index: usize) -> Option<&Pix> {
        self.pix.get(index)
    }

    /// Get a cloned Pix by index
    ///
    /// Cloning a `Pix` is cheap: the pixel data is shared.
    pub fn get_cloned(&self, index: usize) -> Option<Pix> {
        self.pix.get(index).cloned()
    }

    /// Add a Pix to the array
    pub fn push(&mut self, pix: Pix) {
        self.pix.push(pix);
    }

    /// Get all Pix as a slice
    pub fn pix_slice(&self) -> &[Pix] {
        &self.pix
    }

    /// Create an iterator over the images
    pub fn iter(&self) -> impl Iterator<Item = &Pix> {
        self.pix.iter()
    }
}

impl FromIterator<Pix> for Pixa {
    fn from_iter<T: IntoIterator<Item = Pix>>(iter: T) -> Self {
        Pixa {
            pix: iter.into_iter().collect(),
        }
    }
}
