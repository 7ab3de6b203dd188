use crate::error::{Error, Result};

/// Extends functionality for slices of float arrays
pub trait SliceExt<T> {
    /// Add `other` into `self` elementwise
    ///
    /// This is the merge operation for partial sums. Both slices must be the
    /// same length, and nothing is modified if they are not.
    ///
    /// ```rust
    /// # use fetools_utils::SliceExt;
    /// let mut a: Vec<f64> = vec![1.0, 2.0, 3.0];
    /// a.add_assign_from(&[0.5, 0.5, 0.5]).unwrap();
    /// assert_eq!(a, vec![1.5, 2.5, 3.5]);
    ///
    /// // Length mismatch is an error
    /// assert!(a.add_assign_from(&[1.0]).is_err());
    /// ```
    fn add_assign_from(&mut self, other: &[T]) -> Result<()>;

    /// Set every value to zero, retaining the allocation
    fn zero(&mut self);
}

impl SliceExt<f64> for [f64] {
    fn add_assign_from(&mut self, other: &[f64]) -> Result<()> {
        if self.len() != other.len() {
            return Err(Error::MismatchedSliceLength {
                left: self.len(),
                right: other.len(),
            });
        }

        for (a, b) in self.iter_mut().zip(other) {
            *a += *b;
        }
        Ok(())
    }

    fn zero(&mut self) {
        self.fill(0.0);
    }
}
