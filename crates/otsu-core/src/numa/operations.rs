//! Numa operations: partial sums.

use super::Numa;

impl Numa {
    /// Compute the cumulative (partial) sums of the array.
    ///
    /// Returns a new Numa where `result[i] = sum(self[0..=i])`.
    /// The last element equals the total sum of the input. Applied to a
    /// histogram this is its unnormalized cumulative distribution.
    ///
    /// # Examples
    ///
    /// ```
    /// use otsu_core::Numa;
    ///
    /// let na = Numa::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    /// let psums = na.partial_sums();
    /// assert_eq!(psums.get(0), Some(1.0));
    /// assert_eq!(psums.get(4), Some(15.0));
    /// ```
    pub fn partial_sums(&self) -> Numa {
        let n = self.len();
        let mut result = Numa::with_capacity(n);
        let mut cumsum = 0.0f32;
        for val in self.iter() {
            cumsum += val;
            result.push(cumsum);
        }
        result
    }
}
